use crate::Result;

use ormser_core::stmt;

/// A Rust type that can be stored in a single column.
pub trait Primitive: Sized {
    const TYPE: stmt::Type;
    const NULLABLE: bool = false;

    fn ty() -> stmt::Type {
        Self::TYPE
    }

    fn load(value: stmt::Value) -> Result<Self>;

    fn into_value(self) -> stmt::Value;
}

macro_rules! impl_primitive {
    ( $( $t:ty => $ty:ident ),+ $(,)? ) => {
        $(
            impl Primitive for $t {
                const TYPE: stmt::Type = stmt::Type::$ty;

                fn load(value: stmt::Value) -> Result<Self> {
                    value.try_into()
                }

                fn into_value(self) -> stmt::Value {
                    self.into()
                }
            }
        )+
    };
}

impl_primitive!(
    bool => Bool,
    String => String,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Vec<u8> => Bytes,
    uuid::Uuid => Uuid,
);

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: stmt::Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: stmt::Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn into_value(self) -> stmt::Value {
        match self {
            Some(value) => value.into_value(),
            None => stmt::Value::Null,
        }
    }
}
