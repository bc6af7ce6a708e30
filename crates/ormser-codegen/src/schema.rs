mod column;
pub(crate) use column::Column;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Field, FieldTy};

mod model;
pub(crate) use model::Model;

mod model_attr;
pub(crate) use model_attr::ModelAttr;

mod relation;
pub(crate) use relation::{Relation, RelationKind};

mod serializer_attr;
pub(crate) use serializer_attr::{SelectedColumn, SerializerAttr};
