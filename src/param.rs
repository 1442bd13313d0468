use crate::{AsValue, Value};
use std::{
    fmt::{self, Debug, Display},
    sync::Arc,
};

/// An explicit named parameter object.
///
/// `Param` is a cheaply clonable handle: clones share one inner allocation
/// and therefore one identity. A template that references the same handle at
/// several textual positions binds the underlying value once, while two
/// independently constructed `Param`s are always distinct parameters even
/// when name and value are equal.
#[derive(Clone)]
pub struct Param {
    inner: Arc<ParamInner>,
}

struct ParamInner {
    name: String,
    value: Value,
}

impl Param {
    pub fn new(name: impl Into<String>, value: impl AsValue) -> Self {
        Self {
            inner: Arc::new(ParamInner {
                name: name.into(),
                value: value.as_value(),
            }),
        }
    }
    pub fn name(&self) -> &str {
        &self.inner.name
    }
    pub fn value(&self) -> &Value {
        &self.inner.value
    }
    /// Stable identity of the shared inner allocation.
    pub fn identity(&self) -> usize {
        Arc::as_ptr(&self.inner) as usize
    }
    /// Whether two handles refer to the same parameter object.
    pub fn same_param(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Param")
            .field("name", &self.inner.name)
            .field("value", &self.inner.value)
            .finish()
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.name)
    }
}
