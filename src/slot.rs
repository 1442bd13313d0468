use crate::{AsValue, Param, TemplateBuilder, Value};

/// Index of a declared slot within one template's slot table.
///
/// A `SlotId` is only meaningful for the template that issued it. Passing it
/// back to the builder appends another reference to the same slot, which is
/// the explicit way to make two textual positions share one bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

/// A declared bound value, tagged by how its identity is determined.
///
/// * `Param` slots collapse by object identity: every reference to the same
///   [`Param`] handle is the same parameter.
/// * `Value` slots are identified by their declaration site. Two separately
///   declared slots never collapse, even when their values are equal.
#[derive(Debug, Clone)]
pub enum Slot {
    Param(Param),
    Value(Value),
}

impl Slot {
    pub fn value(&self) -> &Value {
        match self {
            Slot::Param(param) => param.value(),
            Slot::Value(value) => value,
        }
    }
}

/// Conversion of an interpolation argument into a slot reference.
///
/// Every template construction API goes through this trait, which forces the
/// caller to pick an identity kind: a [`Param`] handle, a plain value (fresh
/// slot per call), or an existing [`SlotId`] (explicit reuse).
pub trait IntoSlot {
    fn into_slot(self, builder: &mut TemplateBuilder) -> SlotId;
}

impl IntoSlot for Param {
    fn into_slot(self, builder: &mut TemplateBuilder) -> SlotId {
        builder.declare_param(self)
    }
}

impl IntoSlot for &Param {
    fn into_slot(self, builder: &mut TemplateBuilder) -> SlotId {
        builder.declare_param(self.clone())
    }
}

impl IntoSlot for SlotId {
    fn into_slot(self, _builder: &mut TemplateBuilder) -> SlotId {
        self
    }
}

impl IntoSlot for Value {
    fn into_slot(self, builder: &mut TemplateBuilder) -> SlotId {
        builder.declare_value(self)
    }
}

macro_rules! impl_into_slot {
    ($($source:ty),+ $(,)?) => {
        $(impl IntoSlot for $source {
            fn into_slot(self, builder: &mut TemplateBuilder) -> SlotId {
                builder.declare_value(self.as_value())
            }
        })+
    };
}
impl_into_slot!(
    bool,
    i16,
    i32,
    i64,
    f32,
    f64,
    String,
    &str,
    Vec<u8>,
    rust_decimal::Decimal,
    time::Date,
    time::Time,
    time::PrimitiveDateTime,
    time::OffsetDateTime,
    uuid::Uuid,
);

impl<T> IntoSlot for Vec<T>
where
    T: AsValue,
    Vec<T>: AsValue,
{
    fn into_slot(self, builder: &mut TemplateBuilder) -> SlotId {
        builder.declare_value(self.as_value())
    }
}

impl<T> IntoSlot for Option<T>
where
    T: AsValue,
    Option<T>: AsValue,
{
    fn into_slot(self, builder: &mut TemplateBuilder) -> SlotId {
        builder.declare_value(self.as_value())
    }
}
