use quote::quote;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RelationKind {
    BelongsTo,
    HasMany,
    HasOne,
}

#[derive(Debug)]
pub(crate) struct Relation {
    pub(crate) kind: RelationKind,

    /// Name of the target model
    pub(crate) target: String,
}

impl RelationKind {
    pub(super) fn from_attr(attr: &syn::Attribute) -> Option<RelationKind> {
        let path = attr.path();

        if path.is_ident("belongs_to") {
            Some(Self::BelongsTo)
        } else if path.is_ident("has_many") {
            Some(Self::HasMany)
        } else if path.is_ident("has_one") {
            Some(Self::HasOne)
        } else {
            None
        }
    }
}

impl Relation {
    pub(super) fn from_ast(
        kind: RelationKind,
        attr: &syn::Attribute,
        ty: &syn::Type,
        model: &syn::Ident,
    ) -> syn::Result<Relation> {
        attr.meta.require_path_only()?;

        let target = target_ident(ty)?;
        let target = if *target == "Self" {
            model.to_string()
        } else {
            target.to_string()
        };

        Ok(Relation { kind, target })
    }
}

/// Finds the model a relation field points at, looking through
/// single-argument wrappers such as `Vec<_>`, `Option<_>` or `Box<_>`.
fn target_ident(ty: &syn::Type) -> syn::Result<&syn::Ident> {
    let syn::Type::Path(path) = ty else {
        return Err(syn::Error::new_spanned(ty, "unsupported relation type"));
    };

    let Some(segment) = path.path.segments.last() else {
        return Err(syn::Error::new_spanned(ty, "unsupported relation type"));
    };

    match &segment.arguments {
        syn::PathArguments::None => Ok(&segment.ident),
        syn::PathArguments::AngleBracketed(args) => {
            let mut types = args.args.iter().filter_map(|arg| match arg {
                syn::GenericArgument::Type(ty) => Some(ty),
                _ => None,
            });

            match (types.next(), types.next()) {
                (Some(inner), None) => target_ident(inner),
                _ => Err(syn::Error::new_spanned(
                    ty,
                    "relation type must have a single type argument",
                )),
            }
        }
        syn::PathArguments::Parenthesized(_) => {
            Err(syn::Error::new_spanned(ty, "unsupported relation type"))
        }
    }
}

impl quote::ToTokens for RelationKind {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        match self {
            Self::BelongsTo => quote!(BelongsTo),
            Self::HasMany => quote!(HasMany),
            Self::HasOne => quote!(HasOne),
        }
        .to_tokens(tokens);
    }
}
