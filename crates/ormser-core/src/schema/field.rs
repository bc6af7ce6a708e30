/// A declared attribute of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name
    pub name: FieldName,

    /// Column-backed or relation
    pub ty: FieldTy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    pub app_name: String,
    pub storage_name: Option<String>,
}

impl FieldName {
    pub fn storage_name(&self) -> &str {
        self.storage_name.as_ref().unwrap_or(&self.app_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldTy {
    /// Backed by the column at this index of the model's table
    Primitive { column: usize },

    /// Points at another model; never a column
    Relation(Relation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub kind: RelationKind,

    /// Name of the target model
    pub target: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    BelongsTo,
    HasMany,
    HasOne,
}

impl Field {
    pub fn is_relation(&self) -> bool {
        matches!(self.ty, FieldTy::Relation(_))
    }

    /// Index of the backing column, if the field has one.
    pub fn column(&self) -> Option<usize> {
        match self.ty {
            FieldTy::Primitive { column } => Some(column),
            FieldTy::Relation(_) => None,
        }
    }
}
