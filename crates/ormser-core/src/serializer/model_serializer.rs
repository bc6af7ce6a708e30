use super::{FieldDefault, SerializerField};
use crate::{
    error::FieldFailure,
    stmt::{self, Value, ValueRecord},
    Error, Result,
};

use indexmap::IndexMap;
use serde_json::Value as Json;

/// Name given to every derived serializer.
pub const MODEL_SERIALIZER_NAME: &str = "ModelSerializer";

/// A validation schema derived from a model's columns.
///
/// Two serializers derived from the same model and selection compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSerializer {
    name: String,
    fields: IndexMap<String, SerializerField>,
}

impl ModelSerializer {
    /// Creates a serializer from its fields, in order. A later field with
    /// the same name replaces an earlier one.
    pub fn new(fields: impl IntoIterator<Item = SerializerField>) -> Self {
        Self {
            name: MODEL_SERIALIZER_NAME.to_string(),
            fields: fields
                .into_iter()
                .map(|field| (field.name.clone(), field))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &SerializerField> + '_ {
        self.fields.values()
    }

    pub fn field(&self, name: &str) -> Option<&SerializerField> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates a JSON object against the serializer.
    ///
    /// Missing fields take their default; unknown keys are ignored. Every
    /// failing field is reported in one [`Error`].
    pub fn validate(&self, input: &Json) -> Result<ValueRecord> {
        let Json::Object(object) = input else {
            return Err(Error::validation(
                &self.name,
                vec![FieldFailure::new(
                    "__root__",
                    format!("expected json object, got {}", stmt::json_kind(input)),
                )],
            ));
        };

        let mut record = ValueRecord::new();
        let mut failures = vec![];

        for field in self.fields.values() {
            match object.get(&field.name) {
                Some(json) if json.is_null() => {
                    if field.nullable {
                        record.insert(&field.name, Value::Null);
                    } else {
                        failures.push(FieldFailure::null(&field.name));
                    }
                }
                Some(json) => match field.ty.cast_json(json) {
                    Ok(value) => record.insert(&field.name, value),
                    Err(err) => failures.push(FieldFailure::new(&field.name, err.to_string())),
                },
                None => match &field.default {
                    FieldDefault::Value(value) => record.insert(&field.name, value.clone()),
                    FieldDefault::Required => failures.push(FieldFailure::missing(&field.name)),
                },
            }
        }

        if failures.is_empty() {
            Ok(record)
        } else {
            Err(Error::validation(&self.name, failures))
        }
    }

    /// Renders a record as a JSON object with the serializer's fields, in
    /// order. Fields missing from the record are left out.
    pub fn dump(&self, record: &ValueRecord) -> Json {
        let object = self
            .fields
            .keys()
            .filter_map(|name| Some((name.clone(), record.get(name)?.to_json())))
            .collect();

        Json::Object(object)
    }
}
