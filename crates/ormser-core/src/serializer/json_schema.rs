use super::{ModelSerializer, SerializerField};
use crate::stmt::Type;

use serde_json::{json, Map, Value as Json};

impl ModelSerializer {
    /// Describes the serializer as a JSON Schema object.
    pub fn json_schema(&self) -> Json {
        let properties: Map<String, Json> = self
            .fields()
            .map(|field| (field.name.clone(), property(field)))
            .collect();

        let required: Vec<&str> = self
            .fields()
            .filter(|field| field.is_required())
            .map(|field| field.name.as_str())
            .collect();

        json!({
            "title": self.name(),
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

fn property(field: &SerializerField) -> Json {
    let mut property = Map::new();

    let ty = field.ty.json_type();
    property.insert(
        "type".into(),
        if field.nullable {
            json!([ty, "null"])
        } else {
            json!(ty)
        },
    );

    if let Some((min, max)) = field.ty.integer_range() {
        property.insert("minimum".into(), integer(min));
        property.insert("maximum".into(), integer(max));
    }

    match field.ty {
        Type::Uuid => {
            property.insert("format".into(), json!("uuid"));
        }
        Type::Bytes => {
            property.insert(
                "items".into(),
                json!({ "type": "integer", "minimum": 0, "maximum": 255 }),
            );
        }
        _ => {}
    }

    if let Some(default) = field.default_value() {
        property.insert("default".into(), default.to_json());
    }

    Json::Object(property)
}

/// Integer bounds all fit in either `i64` or `u64`.
fn integer(v: i128) -> Json {
    match i64::try_from(v) {
        Ok(v) => json!(v),
        Err(_) => json!(v as u64),
    }
}
