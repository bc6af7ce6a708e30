use super::{Column, Field};
use crate::ModelSerializer;

use std::sync::Arc;

/// What a serializer needs to know about a mapped table.
///
/// [`Model`](super::Model) implements this. Adapters for other mapping
/// layers only need to list their columns and declared fields.
pub trait Mapping {
    /// Name of the table the mapping is bound to.
    fn table_name(&self) -> &str;

    /// The table's columns, in table order.
    fn columns(&self) -> &[Column];

    /// Looks up a declared field by its application-level name.
    fn field(&self, name: &str) -> Option<&Field>;

    /// Stores a derived serializer on the mapping.
    fn set_serializer(&mut self, serializer: Arc<ModelSerializer>);

    /// Looks up a column by name.
    fn column(&self, name: &str) -> Option<&Column> {
        self.columns().iter().find(|column| column.name == name)
    }
}
