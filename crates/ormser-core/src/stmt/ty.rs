use super::Value;
use crate::{Error, Result};

use serde_json::Value as Json;

/// The native value type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// String type
    String,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit floating point
    F32,

    /// 64-bit floating point
    F64,

    /// Raw bytes
    Bytes,

    /// A UUID
    Uuid,
}

impl Type {
    pub fn is_integer(&self) -> bool {
        self.integer_range().is_some()
    }

    /// Inclusive bounds of an integer type, as `i128` so both signed and
    /// unsigned 64-bit bounds fit.
    pub fn integer_range(&self) -> Option<(i128, i128)> {
        Some(match self {
            Self::I8 => (i8::MIN.into(), i8::MAX.into()),
            Self::I16 => (i16::MIN.into(), i16::MAX.into()),
            Self::I32 => (i32::MIN.into(), i32::MAX.into()),
            Self::I64 => (i64::MIN.into(), i64::MAX.into()),
            Self::U8 => (0, u8::MAX.into()),
            Self::U16 => (0, u16::MAX.into()),
            Self::U32 => (0, u32::MAX.into()),
            Self::U64 => (0, u64::MAX.into()),
            _ => return None,
        })
    }

    /// The JSON schema `type` keyword for values of this type.
    pub fn json_type(&self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::String | Self::Uuid => "string",
            Self::Bytes => "array",
            Self::F32 | Self::F64 => "number",
            _ => "integer",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::String => "String",
            Self::I8 => "I8",
            Self::I16 => "I16",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::U8 => "U8",
            Self::U16 => "U16",
            Self::U32 => "U32",
            Self::U64 => "U64",
            Self::F32 => "F32",
            Self::F64 => "F64",
            Self::Bytes => "Bytes",
            Self::Uuid => "Uuid",
        }
    }

    /// Returns `true` if `value` can be stored in a column of this type.
    /// `Null` is never accepted here; nullability is a column property.
    pub fn accepts(&self, value: &Value) -> bool {
        value.infer_ty() == Some(*self)
    }

    /// Converts external JSON input into a value of this type.
    ///
    /// `null` is passed through; callers decide whether it is allowed.
    pub fn cast_json(&self, json: &Json) -> Result<Value> {
        if json.is_null() {
            return Ok(Value::Null);
        }

        Ok(match (self, json) {
            (Self::Bool, Json::Bool(v)) => Value::Bool(*v),
            (Self::String, Json::String(v)) => Value::String(v.clone()),
            (Self::Uuid, Json::String(v)) => Value::Uuid(uuid::Uuid::parse_str(v)?),
            (Self::Bytes, Json::String(v)) => Value::Bytes(v.as_bytes().to_vec()),
            (Self::Bytes, Json::Array(items)) => {
                let mut bytes = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_u64().and_then(|b| u8::try_from(b).ok()) {
                        Some(b) => bytes.push(b),
                        None => return Err(Error::type_conversion(json_kind(item), "U8")),
                    }
                }
                Value::Bytes(bytes)
            }
            (Self::F32, Json::Number(n)) => match n.as_f64() {
                Some(v) if (v as f32).is_infinite() => {
                    return Err(Error::type_conversion(format!("{v:e}"), self.name()))
                }
                Some(v) => Value::F32(v as f32),
                None => return Err(Error::type_conversion("json number", self.name())),
            },
            (Self::F64, Json::Number(n)) => match n.as_f64() {
                Some(v) => Value::F64(v),
                None => return Err(Error::type_conversion("json number", self.name())),
            },
            (ty, Json::Number(n)) if ty.is_integer() => {
                let Some(v) = json_integer(n) else {
                    return Err(Error::type_conversion("fractional json number", self.name()));
                };
                self.cast_integer(v)?
            }
            (_, json) => return Err(Error::type_conversion(json_kind(json), self.name())),
        })
    }

    fn cast_integer(&self, v: i128) -> Result<Value> {
        let out_of_range = || Error::type_conversion(format!("{v}"), self.name());

        Ok(match self {
            Self::I8 => Value::I8(i8::try_from(v).map_err(|_| out_of_range())?),
            Self::I16 => Value::I16(i16::try_from(v).map_err(|_| out_of_range())?),
            Self::I32 => Value::I32(i32::try_from(v).map_err(|_| out_of_range())?),
            Self::I64 => Value::I64(i64::try_from(v).map_err(|_| out_of_range())?),
            Self::U8 => Value::U8(u8::try_from(v).map_err(|_| out_of_range())?),
            Self::U16 => Value::U16(u16::try_from(v).map_err(|_| out_of_range())?),
            Self::U32 => Value::U32(u32::try_from(v).map_err(|_| out_of_range())?),
            Self::U64 => Value::U64(u64::try_from(v).map_err(|_| out_of_range())?),
            _ => return Err(out_of_range()),
        })
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Integral value of a JSON number. Floats with no fractional part count.
fn json_integer(n: &serde_json::Number) -> Option<i128> {
    if let Some(v) = n.as_i64() {
        return Some(v.into());
    }

    if let Some(v) = n.as_u64() {
        return Some(v.into());
    }

    let v = n.as_f64()?;
    if v.fract() == 0.0 && v >= i128::MIN as f64 && v <= i128::MAX as f64 {
        Some(v as i128)
    } else {
        None
    }
}

pub(crate) fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "json null",
        Json::Bool(_) => "json bool",
        Json::Number(_) => "json number",
        Json::String(_) => "json string",
        Json::Array(_) => "json array",
        Json::Object(_) => "json object",
    }
}
