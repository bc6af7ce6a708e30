mod model;
pub use model::Model;

pub mod schema;

pub mod stmt;

pub use ormser_core::serializer;

pub use ormser_core::{Error, FieldFailure, Mapping, ModelSerializer, Result, Serializer};
pub use ormser_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{stmt::Primitive, Model, Serializer};

    pub mod schema {
        pub use ormser_core::schema::{
            Column, Field, FieldName, FieldTy, Model, Name, Relation, RelationKind, Table,
        };
    }
}
