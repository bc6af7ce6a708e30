use crate::{schema, ModelSerializer, Result, Serializer};

/// A struct mapped onto a database table.
///
/// Implemented by `#[derive(Model)]`.
pub trait Model: Sized {
    /// Describes the model's table and declared fields.
    fn schema() -> schema::Model;

    /// Field selection used by [`Model::serializer`]. Set with
    /// `#[serializer(include(..))]` or `#[serializer(exclude(..))]`.
    fn serializer_config() -> Serializer {
        Serializer::default()
    }

    /// Derives the model's serializer.
    fn serializer() -> Result<ModelSerializer> {
        Self::serializer_config().from_model(&Self::schema())
    }

    /// Returns the schema with its serializer attached.
    fn schema_with_serializer() -> Result<schema::Model> {
        Self::serializer_config().attach(Self::schema())
    }
}
