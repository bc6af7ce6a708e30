use super::{util, Expand};
use crate::schema::{Field, FieldTy};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let ormser = &self.ormser;
        let model_name = self.model.ident.to_string();
        let table_name = self.expand_table_name();
        let columns = self.expand_columns();
        let fields = self.expand_fields();

        quote! {
            fn schema() -> #ormser::schema::Model {
                let name = #ormser::schema::Name::new(#model_name);

                #ormser::schema::Model {
                    table: #ormser::schema::Table {
                        name: #table_name,
                        columns: vec![ #( #columns ),* ],
                    },
                    fields: vec![ #( #fields ),* ],
                    name,
                    serializer: None,
                }
            }
        }
    }

    fn expand_table_name(&self) -> TokenStream {
        if let Some(table_name) = &self.model.table {
            quote! { #table_name.to_string() }
        } else {
            quote! { name.default_table_name() }
        }
    }

    fn expand_columns(&self) -> Vec<TokenStream> {
        self.model
            .fields
            .iter()
            .filter_map(|field| match &field.ty {
                FieldTy::Primitive(ty) => Some(self.expand_column(field, ty)),
                FieldTy::Relation(_) => None,
            })
            .collect()
    }

    fn expand_column(&self, field: &Field, ty: &syn::Type) -> TokenStream {
        let ormser = &self.ormser;
        let name = util::string(&field.column_name().unwrap_or_default());
        let primary_key = field.attrs.key.is_some();

        let default = match &field.attrs.default_expr {
            Some(expr) => quote! {
                Some(<#ty as #ormser::Primitive>::into_value(
                    ::core::convert::Into::<#ty>::into(#expr)
                ))
            },
            None => quote!(None),
        };

        quote! {
            #ormser::schema::Column {
                name: #name,
                ty: <#ty as #ormser::Primitive>::TYPE,
                nullable: <#ty as #ormser::Primitive>::NULLABLE,
                primary_key: #primary_key,
                default: #default,
            }
        }
    }

    fn expand_fields(&self) -> Vec<TokenStream> {
        let ormser = &self.ormser;
        let mut column = 0;

        self.model
            .fields
            .iter()
            .map(|field| {
                let app_name = util::string(&field.app_name());
                let storage_name = match field.storage_name() {
                    Some(name) => {
                        let name = util::string(&name);
                        quote!(Some(#name))
                    }
                    None => quote!(None),
                };

                let ty = match &field.ty {
                    FieldTy::Primitive(_) => {
                        let index = util::int(column);
                        column += 1;
                        quote!(#ormser::schema::FieldTy::Primitive { column: #index })
                    }
                    FieldTy::Relation(rel) => {
                        let kind = rel.kind;
                        let target = util::string(&rel.target);
                        quote! {
                            #ormser::schema::FieldTy::Relation(#ormser::schema::Relation {
                                kind: #ormser::schema::RelationKind::#kind,
                                target: #target,
                            })
                        }
                    }
                };

                quote! {
                    #ormser::schema::Field {
                        name: #ormser::schema::FieldName {
                            app_name: #app_name,
                            storage_name: #storage_name,
                        },
                        ty: #ty,
                    }
                }
            })
            .collect()
    }
}
