mod primitive;
pub use primitive::Primitive;

pub use ormser_core::stmt::{Type, Value, ValueRecord};
