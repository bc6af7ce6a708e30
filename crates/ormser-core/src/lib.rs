mod error;
pub use error::{Error, FieldFailure, IntoError};

pub mod schema;
pub use schema::{Mapping, Model};

pub mod serializer;
pub use serializer::{ModelSerializer, Serializer};

pub mod stmt;

/// A Result type alias that uses ormser's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
