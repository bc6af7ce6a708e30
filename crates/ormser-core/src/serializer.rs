mod field;
pub use field::{FieldDefault, SerializerField};

mod json_schema;

mod model_serializer;
pub use model_serializer::{ModelSerializer, MODEL_SERIALIZER_NAME};

mod selection;
pub use selection::{Exclude, Include};

use crate::{schema::Mapping, Error, Result};

use serde::Deserialize;
use std::sync::Arc;

/// Derives a [`ModelSerializer`] from a model's table.
///
/// By default every column is included. Either name the columns to keep with
/// [`include`](Self::include) or the columns to drop with
/// [`exclude`](Self::exclude); giving both is a configuration error. Relations
/// are never columns and so never appear in a derived serializer.
///
/// ```
/// use ormser_core::{schema::Column, stmt::Type, Model, Serializer};
///
/// let user = Model::builder("User")
///     .column(Column::new("id", Type::I64).primary_key())
///     .column(Column::new("name", Type::String).default("anon"))
///     .build()?;
///
/// let serializer = Serializer::new().exclude(["id"]).from_model(&user)?;
/// assert_eq!(serializer.field_names().collect::<Vec<_>>(), ["name"]);
/// # Ok::<(), ormser_core::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Serializer {
    include: Include,
    exclude: Exclude,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only the named columns.
    pub fn include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = Include::only(names);
        self
    }

    /// Drops the named columns.
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = Exclude::only(names);
        self
    }

    pub fn include_fields(&self) -> &Include {
        &self.include
    }

    pub fn exclude_fields(&self) -> &Exclude {
        &self.exclude
    }

    /// Checks the field selection against `model`.
    ///
    /// Checks run in this order and the first failure is returned:
    ///
    /// 1. a name appears in both `include` and `exclude`;
    /// 2. both `include` and `exclude` are set;
    /// 3. a selected name is not a column of the table. Include names are
    ///    checked before exclude names, each in insertion order.
    ///
    /// So `include(["id"]).exclude(["id"])` reports the overlap on `id`, not
    /// the both-set error.
    pub fn validate_fields(&self, model: &impl Mapping) -> Result<()> {
        if let Some(name) = self.include.names().find(|name| self.exclude.contains(name)) {
            return Err(Error::configuration(format!(
                "field `{name}` set in include_fields and exclude_fields at the same time"
            )));
        }

        if !self.include.is_all() && !self.exclude.is_none() {
            return Err(Error::configuration(
                "both `include_fields` and `exclude_fields` are set; set only one or neither",
            ));
        }

        for name in self.include.names().chain(self.exclude.names()) {
            if model.column(name).is_none() {
                return Err(missing_field(model, name));
            }
        }

        Ok(())
    }

    /// Builds the serializer without validating the selection first.
    ///
    /// Names that do not match a column are silently ignored.
    pub fn build(&self, model: &impl Mapping) -> ModelSerializer {
        let mut fields = vec![];

        for column in model.columns() {
            if !self.selects(&column.name) {
                log::trace!(
                    "skipping column `{}.{}`",
                    model.table_name(),
                    column.name
                );
                continue;
            }

            fields.push(SerializerField::from_column(column));
        }

        ModelSerializer::new(fields)
    }

    /// Validates the selection, then builds the serializer.
    pub fn from_model(&self, model: &impl Mapping) -> Result<ModelSerializer> {
        self.validate_fields(model)?;
        let serializer = self.build(model);

        log::debug!(
            "derived {} for table `{}`; fields={}/{}",
            serializer.name(),
            model.table_name(),
            serializer.len(),
            model.columns().len()
        );

        Ok(serializer)
    }

    /// Derives a serializer and stores it on `model`, returning the model.
    pub fn attach<M: Mapping>(&self, mut model: M) -> Result<M> {
        let serializer = self.from_model(&model)?;
        log::debug!("attaching serializer to table `{}`", model.table_name());
        model.set_serializer(Arc::new(serializer));
        Ok(model)
    }

    fn selects(&self, name: &str) -> bool {
        (self.include.is_all() && !self.exclude.contains(name))
            || (self.exclude.is_none() && self.include.contains(name))
    }
}

fn missing_field(model: &impl Mapping, name: &str) -> Error {
    let mut message = format!(
        "table `{}` doesn't have field `{name}`",
        model.table_name()
    );

    if let Some(field) = model.field(name) {
        if field.is_relation() {
            message.push_str(&format!(" (`{name}` is a relation)"));
        } else if let Some(column) = field.column().and_then(|i| model.columns().get(i)) {
            message.push_str(&format!(
                " (field `{name}` is stored in column `{}`)",
                column.name
            ));
        }
    }

    Error::configuration(message)
}
