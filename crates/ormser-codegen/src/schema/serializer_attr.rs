use proc_macro2::Span;
use syn::{ext::IdentExt, parenthesized, punctuated::Punctuated, spanned::Spanned, Token};

mod kw {
    syn::custom_keyword!(include);
    syn::custom_keyword!(exclude);
}

/// Parsed `#[serializer(...)]` struct attribute.
#[derive(Debug)]
pub(crate) struct SerializerAttr {
    /// Span of the whole attribute
    pub(crate) span: Span,

    /// Columns named by `include(...)`
    pub(crate) include: Option<Vec<SelectedColumn>>,

    /// Columns named by `exclude(...)`
    pub(crate) exclude: Option<Vec<SelectedColumn>>,
}

#[derive(Debug, Clone)]
pub(crate) struct SelectedColumn {
    pub(crate) name: String,
    pub(crate) span: Span,
}

impl SerializerAttr {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<SerializerAttr> {
        let mut result = attr.parse_args_with(Self::parse_args)?;
        result.span = attr.span();
        Ok(result)
    }

    // Allowed syntax:
    //
    // #[serializer(include(id, name))]
    // #[serializer(exclude(id, "user_name"))]
    fn parse_args(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self {
            span: input.span(),
            include: None,
            exclude: None,
        };

        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(kw::include) {
                let kw: kw::include = input.parse()?;
                if result.include.is_some() {
                    return Err(syn::Error::new_spanned(kw, "duplicate `include`"));
                }
                result.include = Some(parse_columns(input)?);
            } else if lookahead.peek(kw::exclude) {
                let kw: kw::exclude = input.parse()?;
                if result.exclude.is_some() {
                    return Err(syn::Error::new_spanned(kw, "duplicate `exclude`"));
                }
                result.exclude = Some(parse_columns(input)?);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: Token![,] = input.parse()?;
        }

        Ok(result)
    }

    /// Every named column, `include` first, in written order.
    pub(crate) fn columns(&self) -> impl Iterator<Item = &SelectedColumn> + '_ {
        self.include.iter().chain(self.exclude.iter()).flatten()
    }
}

fn parse_columns(input: syn::parse::ParseStream) -> syn::Result<Vec<SelectedColumn>> {
    let content;
    parenthesized!(content in input);

    let columns = Punctuated::<SelectedColumn, Token![,]>::parse_terminated(&content)?;
    Ok(columns.into_iter().collect())
}

impl syn::parse::Parse for SelectedColumn {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();

        if lookahead.peek(syn::LitStr) {
            let lit: syn::LitStr = input.parse()?;
            Ok(Self {
                name: lit.value(),
                span: lit.span(),
            })
        } else if lookahead.peek(syn::Ident) {
            let ident: syn::Ident = input.parse()?;
            Ok(Self {
                name: ident.unraw().to_string(),
                span: ident.span(),
            })
        } else {
            Err(lookahead.error())
        }
    }
}
