mod builder;
pub use builder::ModelBuilder;

mod column;
pub use column::Column;

mod field;
pub use field::{Field, FieldName, FieldTy, Relation, RelationKind};

mod mapping;
pub use mapping::Mapping;

mod model;
pub use model::Model;

mod name;
pub use name::Name;

mod table;
pub use table::Table;
