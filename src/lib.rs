mod as_value;
mod binder;
mod param;
mod query;
mod slot;
mod sql_writer;
mod template;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use binder::*;
pub use param::*;
pub use query::*;
pub use slot::*;
pub use sql_writer::*;
pub use template::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
