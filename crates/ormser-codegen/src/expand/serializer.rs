use super::Expand;
use crate::schema::SelectedColumn;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Overrides `Model::serializer_config` when the model carries a
    /// `#[serializer(...)]` attribute.
    pub(super) fn expand_serializer_config(&self) -> TokenStream {
        let ormser = &self.ormser;

        let Some(attr) = &self.model.serializer else {
            return quote!();
        };

        let include = attr
            .include
            .as_ref()
            .map(|columns| selector(quote!(include), columns));
        let exclude = attr
            .exclude
            .as_ref()
            .map(|columns| selector(quote!(exclude), columns));

        quote! {
            fn serializer_config() -> #ormser::Serializer {
                #ormser::Serializer::new() #include #exclude
            }
        }
    }
}

fn selector(method: TokenStream, columns: &[SelectedColumn]) -> TokenStream {
    let names = columns.iter().map(|column| &column.name);

    quote! {
        .#method::<_, &str>([ #( #names ),* ])
    }
}
