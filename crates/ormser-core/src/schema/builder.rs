use super::{Column, Field, FieldName, FieldTy, Model, Name, Relation, RelationKind, Table};
use crate::{Error, Result};

use std::collections::HashSet;

/// Builds a [`Model`] by hand, checking it for consistency.
#[derive(Debug)]
pub struct ModelBuilder {
    name: Name,
    table_name: Option<String>,
    columns: Vec<Column>,
    fields: Vec<Field>,
}

impl ModelBuilder {
    pub(super) fn new(name: &str) -> Self {
        Self {
            name: Name::new(name),
            table_name: None,
            columns: vec![],
            fields: vec![],
        }
    }

    /// Overrides the default (pluralized) table name.
    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.table_name = Some(name.into());
        self
    }

    /// Adds a field backed by a column of the same name.
    pub fn column(self, column: Column) -> Self {
        let app_name = column.name.clone();
        self.field_with_column(app_name, column)
    }

    /// Adds a field stored in a column with a possibly different name.
    pub fn field_with_column(mut self, app_name: impl Into<String>, column: Column) -> Self {
        let app_name = app_name.into();
        let storage_name = (app_name != column.name).then(|| column.name.clone());

        self.fields.push(Field {
            name: FieldName {
                app_name,
                storage_name,
            },
            ty: FieldTy::Primitive {
                column: self.columns.len(),
            },
        });
        self.columns.push(column);
        self
    }

    /// Adds a relation field. Relations have no column.
    pub fn relation(
        mut self,
        app_name: impl Into<String>,
        kind: RelationKind,
        target: impl Into<String>,
    ) -> Self {
        self.fields.push(Field {
            name: FieldName {
                app_name: app_name.into(),
                storage_name: None,
            },
            ty: FieldTy::Relation(Relation {
                kind,
                target: target.into(),
            }),
        });
        self
    }

    pub fn build(self) -> Result<Model> {
        let model_name = self.name.upper_camel_case();

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "model `{model_name}` declares column `{}` more than once",
                    column.name
                )));
            }

            if let Some(default) = &column.default {
                verify_default(&model_name, column, default)?;
            }
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.app_name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "model `{model_name}` declares field `{}` more than once",
                    field.name.app_name
                )));
            }
        }

        let table_name = self
            .table_name
            .unwrap_or_else(|| self.name.default_table_name());

        Ok(Model {
            name: self.name,
            table: Table {
                name: table_name,
                columns: self.columns,
            },
            fields: self.fields,
            serializer: None,
        })
    }
}

fn verify_default(model_name: &str, column: &Column, default: &crate::stmt::Value) -> Result<()> {
    if default.is_null() {
        if column.nullable {
            return Ok(());
        }

        return Err(Error::invalid_schema(format!(
            "column `{model_name}::{}` is not nullable but defaults to null",
            column.name
        )));
    }

    if !column.ty.accepts(default) {
        return Err(Error::invalid_schema(format!(
            "column `{model_name}::{}` has type {} but its default is {:?}",
            column.name, column.ty, default
        )));
    }

    Ok(())
}
