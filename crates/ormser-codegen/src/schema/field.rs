use super::{Column, ErrorSet, Relation, RelationKind};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field type
    pub(crate) ty: FieldTy,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Optional database column name
    pub(crate) column: Option<Column>,

    /// Column default: `#[default(<expr>)]`
    pub(crate) default_expr: Option<syn::Expr>,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    Primitive(syn::Type),
    Relation(Relation),
}

impl FieldTy {
    pub(crate) fn is_relation(&self) -> bool {
        matches!(self, Self::Relation(..))
    }
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, model_ident: &syn::Ident) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();
        let mut relation = None;

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("default") {
                if attrs.default_expr.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[default] attribute",
                    ));
                } else {
                    match attr.parse_args() {
                        Ok(expr) => attrs.default_expr = Some(expr),
                        Err(err) => errs.push(err),
                    }
                }
            } else if let Some(kind) = RelationKind::from_attr(attr) {
                if relation.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "field has more than one relation attribute",
                    ));
                } else {
                    match Relation::from_ast(kind, attr, &field.ty, model_ident) {
                        Ok(rel) => relation = Some(rel),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        let ty = match relation {
            Some(rel) => {
                if let Some(key) = &attrs.key {
                    errs.push(syn::Error::new_spanned(
                        key,
                        "#[key] cannot be used on relation fields",
                    ));
                }

                if let Some(column) = &attrs.column {
                    errs.push(syn::Error::new_spanned(
                        &column.name,
                        "#[column] cannot be used on relation fields",
                    ));
                }

                if let Some(expr) = &attrs.default_expr {
                    errs.push(syn::Error::new_spanned(
                        expr,
                        "#[default] cannot be used on relation fields",
                    ));
                }

                FieldTy::Relation(rel)
            }
            None => FieldTy::Primitive(field.ty.clone()),
        };

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ident.clone(),
            attrs,
            ty,
        })
    }

    /// Name the field is known by in the application, without any `r#`.
    pub(crate) fn app_name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Name of the backing column, `None` for relations.
    pub(crate) fn column_name(&self) -> Option<String> {
        if self.ty.is_relation() {
            return None;
        }

        Some(match &self.attrs.column {
            Some(column) => column.name.value(),
            None => self.app_name(),
        })
    }

    /// The `#[column("...")]` name, when it differs from the field name.
    pub(crate) fn storage_name(&self) -> Option<String> {
        self.attrs
            .column
            .as_ref()
            .map(|column| column.name.value())
            .filter(|name| *name != self.app_name())
    }
}
