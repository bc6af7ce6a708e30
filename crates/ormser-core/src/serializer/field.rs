use crate::{
    schema::Column,
    stmt::{Type, Value},
};

/// One field of a derived serializer.
#[derive(Debug, Clone, PartialEq)]
pub struct SerializerField {
    /// Field name; the name of the column it was derived from
    pub name: String,

    /// Native type of the field
    pub ty: Type,

    /// Whether `null` is an accepted value
    pub nullable: bool,

    pub default: FieldDefault,
}

/// Default of a serializer field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDefault {
    /// The field has no default and must be supplied
    Required,

    /// Used when the field is missing from the input
    Value(Value),
}

impl SerializerField {
    pub fn new(name: impl Into<String>, ty: Type, default: FieldDefault) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: false,
            default,
        }
    }

    pub(super) fn from_column(column: &Column) -> Self {
        let default = match &column.default {
            Some(value) => FieldDefault::Value(value.clone()),
            None => FieldDefault::Required,
        };

        Self {
            name: column.name.clone(),
            ty: column.ty,
            nullable: column.nullable,
            default,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self.default, FieldDefault::Required)
    }

    pub fn default_value(&self) -> Option<&Value> {
        match &self.default {
            FieldDefault::Required => None,
            FieldDefault::Value(value) => Some(value),
        }
    }
}
