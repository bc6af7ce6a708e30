mod schema;
mod serializer;
mod util;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for ormser types
    ormser: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let ormser = &self.ormser;
        let model_ident = &self.model.ident;
        let model_schema = self.expand_model_schema();
        let serializer_config = self.expand_serializer_config();

        wrap_in_const(quote! {
            impl #ormser::Model for #model_ident {
                #model_schema
                #serializer_config
            }
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        ormser: quote!(_ormser::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use ormser as _ormser;
            #code
        };
    }
}
