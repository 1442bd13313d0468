use crate::{Error, Result, Value};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use std::any;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Conversion between native Rust types and the dynamically typed [`Value`]
/// representation that backs query parameters.
///
/// Implementations must decide how to represent themselves as a [`Value`],
/// picking the canonical variant for the type. `try_from_value` should accept
/// the canonical variant and may accept alternate numeric widths with range
/// checks; it returns a descriptive error on mismatch (prefer
/// `any::type_name::<Self>()` for uniform messages).
pub trait AsValue {
    /// Return an "empty" (NULL-like) value variant for this type. Used to
    /// type composite containers and absent optional data; never allocates.
    fn as_empty_value() -> Value;
    /// Convert this value into its owned [`Value`] representation.
    fn as_value(self) -> Value;
    /// Attempt to convert a dynamic [`Value`] back into `Self`.
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

macro_rules! impl_as_value {
    ($source:ty, $destination:path $(, $pat_rest:pat => $expr_rest:expr)* $(,)?) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self as _))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $destination(Some(v), ..) => Ok(v as _),
                    $($pat_rest => $expr_rest,)*
                    _ => Err(Error::msg(format!(
                        "Cannot convert {value:?} to {}",
                        any::type_name::<Self>(),
                    ))),
                }
            }
        }
    };
}

impl_as_value!(
    i16,
    Value::Int16,
    Value::Int32(Some(v), ..) => {
        let result = v as i16;
        if result as i32 != v {
            return Err(Error::msg(format!("Value {v}: i32 is out of range for i16")));
        }
        Ok(result)
    },
    Value::Int64(Some(v), ..) => {
        let result = v as i16;
        if result as i64 != v {
            return Err(Error::msg(format!("Value {v}: i64 is out of range for i16")));
        }
        Ok(result)
    },
);
impl_as_value!(
    i32,
    Value::Int32,
    Value::Int16(Some(v), ..) => Ok(v as _),
    Value::Int64(Some(v), ..) => {
        let result = v as i32;
        if result as i64 != v {
            return Err(Error::msg(format!("Value {v}: i64 is out of range for i32")));
        }
        Ok(result)
    },
    Value::Decimal(Some(v), ..) => {
        let error = Error::msg(format!("Value {v}: Decimal does not fit into i32"));
        if !v.is_integer() {
            return Err(error.context("The value is not a integer"));
        }
        v.to_i32().ok_or(error)
    },
);
impl_as_value!(
    i64,
    Value::Int64,
    Value::Int32(Some(v), ..) => Ok(v as _),
    Value::Int16(Some(v), ..) => Ok(v as _),
    Value::Decimal(Some(v), ..) => {
        let error = Error::msg(format!("Value {v}: Decimal does not fit into i64"));
        if !v.is_integer() {
            return Err(error.context("The value is not a integer"));
        }
        v.to_i64().ok_or(error)
    },
);
impl_as_value!(
    f32,
    Value::Float32,
    Value::Int16(Some(v), ..) => Ok(v as _),
);
impl_as_value!(
    f64,
    Value::Float64,
    Value::Float32(Some(v), ..) => Ok(v as _),
    Value::Int32(Some(v), ..) => Ok(v as _),
    Value::Int16(Some(v), ..) => Ok(v as _),
);
impl AsValue for bool {
    fn as_empty_value() -> Value {
        Value::Boolean(None)
    }
    fn as_value(self) -> Value {
        Value::Boolean(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(Some(v)) => Ok(v),
            Value::Int16(Some(v), ..) => Ok(v != 0),
            Value::Int32(Some(v), ..) => Ok(v != 0),
            Value::Int64(Some(v), ..) => Ok(v != 0),
            _ => Err(Error::msg(format!("Cannot convert {value:?} to bool"))),
        }
    }
}

impl AsValue for Decimal {
    fn as_empty_value() -> Value {
        Value::Decimal(None, 0, 0)
    }
    fn as_value(self) -> Value {
        Value::Decimal(Some(self), 0, self.scale() as _)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Decimal(Some(v), ..) => Ok(v),
            Value::Int16(Some(v), ..) => Ok(v.into()),
            Value::Int32(Some(v), ..) => Ok(v.into()),
            Value::Int64(Some(v), ..) => Ok(v.into()),
            _ => Err(Error::msg(format!("Cannot convert {value:?} to Decimal"))),
        }
    }
}

impl AsValue for String {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Varchar(Some(v)) => Ok(v),
            _ => Err(Error::msg(format!("Cannot convert {value:?} to String"))),
        }
    }
}

impl AsValue for &str {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.into()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Err(Error::msg(format!(
            "Cannot convert {value:?} to a borrowed str, use String"
        )))
    }
}

impl AsValue for Vec<u8> {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self.into()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Blob(Some(v)) => Ok(v.into()),
            _ => Err(Error::msg(format!("Cannot convert {value:?} to Vec<u8>"))),
        }
    }
}

macro_rules! impl_as_value_simple {
    ($source:ty, $destination:path) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $destination(Some(v), ..) => Ok(v),
                    _ => Err(Error::msg(format!(
                        "Cannot convert {value:?} to {}",
                        any::type_name::<Self>(),
                    ))),
                }
            }
        }
    };
}
impl_as_value_simple!(Date, Value::Date);
impl_as_value_simple!(Time, Value::Time);
impl_as_value_simple!(PrimitiveDateTime, Value::Timestamp);
impl_as_value_simple!(OffsetDateTime, Value::TimestampWithTimezone);
impl_as_value_simple!(Uuid, Value::Uuid);

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(T::try_from_value(value)?))
    }
}

impl<T: AsValue> AsValue for Vec<T> {
    fn as_empty_value() -> Value {
        Value::List(None, Box::new(T::as_empty_value()))
    }
    fn as_value(self) -> Value {
        Value::List(
            Some(self.into_iter().map(AsValue::as_value).collect()),
            Box::new(T::as_empty_value()),
        )
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::List(Some(v), ..) => v.into_iter().map(T::try_from_value).collect(),
            _ => Err(Error::msg(format!(
                "Cannot convert {value:?} to {}",
                any::type_name::<Self>(),
            ))),
        }
    }
}
