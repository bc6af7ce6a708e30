use super::{Column, Field, Mapping, ModelBuilder, Name, Table};
use crate::ModelSerializer;

use std::sync::Arc;

/// A model mapped onto a database table.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Name of the model
    pub name: Name,

    /// The table the model is stored in
    pub table: Table,

    /// Declared fields, including relations
    pub fields: Vec<Field>,

    /// Serializer attached by `Serializer::attach`
    pub serializer: Option<Arc<ModelSerializer>>,
}

impl Model {
    pub fn builder(name: &str) -> ModelBuilder {
        ModelBuilder::new(name)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }

    /// The column backing `field`, or `None` for relations.
    pub fn column_for(&self, field: &Field) -> Option<&Column> {
        field.column().and_then(|index| self.table.columns.get(index))
    }

    pub fn relations(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_relation())
    }

    pub fn serializer(&self) -> Option<&ModelSerializer> {
        self.serializer.as_deref()
    }
}

impl Mapping for Model {
    fn table_name(&self) -> &str {
        &self.table.name
    }

    fn columns(&self) -> &[Column] {
        &self.table.columns
    }

    fn field(&self, name: &str) -> Option<&Field> {
        Model::field(self, name)
    }

    fn set_serializer(&mut self, serializer: Arc<ModelSerializer>) {
        self.serializer = Some(serializer);
    }
}
