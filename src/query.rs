use crate::{Value, truncate_long};
use std::fmt::{self, Display};

/// One value sent to the database alongside the query text.
///
/// The `Value` variant carries the declared wire type; `name` is the
/// assigned placeholder name (`p1`, `p2`, … for anonymous slots, the
/// parameter's own name for explicit [`crate::Param`]s). Exactly one
/// `BoundParameter` exists per distinct slot identity.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundParameter {
    pub name: String,
    pub value: Value,
}

impl BoundParameter {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The final parameterized query handed to the execution layer: rendered
/// text plus bound parameters in first-occurrence order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQuery {
    pub text: String,
    pub parameters: Vec<BoundParameter>,
}

impl Display for RenderedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", truncate_long!(self.text))
    }
}
