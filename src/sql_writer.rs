use crate::{Value, separated_by};
use std::fmt::Write;

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($out:ident, $value:expr) => {{
        let mut buffer = ryu::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

/// Dialect seam for rendering a template into SQL text.
///
/// Default methods implement a generic dialect (`?` placeholders, ISO
/// temporal literals); backends override only what differs, in the same way
/// a driver overrides the generic writer of an ORM core.
pub trait SqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter;

    /// Append the placeholder token for the parameter at `index` (1-based)
    /// named `name`. The binder calls this once per slot reference, always
    /// with the index and name assigned at the identity's first occurrence.
    fn write_placeholder(&self, out: &mut String, index: usize, name: &str) {
        let _ = (index, name);
        out.push('?');
    }

    /// Whether the declared type of `value` can be mapped to a wire-protocol
    /// parameter type in this dialect.
    fn parameter_supported(&self, value: &Value) -> bool {
        let _ = value;
        true
    }

    /// Render `value` as an inline SQL literal. Used for diagnostics
    /// rendering, never for the executed query text.
    fn write_value(&self, out: &mut String, value: &Value) {
        let _ = match value {
            Value::Null
            | Value::Boolean(None, ..)
            | Value::Int16(None, ..)
            | Value::Int32(None, ..)
            | Value::Int64(None, ..)
            | Value::Float32(None, ..)
            | Value::Float64(None, ..)
            | Value::Decimal(None, ..)
            | Value::Varchar(None, ..)
            | Value::Blob(None, ..)
            | Value::Date(None, ..)
            | Value::Time(None, ..)
            | Value::Timestamp(None, ..)
            | Value::TimestampWithTimezone(None, ..)
            | Value::Uuid(None, ..)
            | Value::List(None, ..) => self.write_value_none(out),
            Value::Boolean(Some(v), ..) => self.write_value_bool(out, *v),
            Value::Int16(Some(v), ..) => write_integer!(out, *v),
            Value::Int32(Some(v), ..) => write_integer!(out, *v),
            Value::Int64(Some(v), ..) => write_integer!(out, *v),
            Value::Float32(Some(v), ..) => write_float!(out, *v),
            Value::Float64(Some(v), ..) => write_float!(out, *v),
            Value::Decimal(Some(v), ..) => drop(write!(out, "{}", v)),
            Value::Varchar(Some(v), ..) => self.write_value_string(out, v),
            Value::Blob(Some(v), ..) => self.write_value_blob(out, v.as_ref()),
            Value::Date(Some(v), ..) => {
                out.push('\'');
                self.write_value_date(out, v);
                out.push('\'');
            }
            Value::Time(Some(v), ..) => {
                out.push('\'');
                self.write_value_time(out, v);
                out.push('\'');
            }
            Value::Timestamp(Some(v), ..) => {
                out.push('\'');
                self.write_value_date(out, &v.date());
                out.push('T');
                self.write_value_time(out, &v.time());
                out.push('\'');
            }
            Value::TimestampWithTimezone(Some(v), ..) => {
                out.push('\'');
                self.write_value_date(out, &v.date());
                out.push('T');
                self.write_value_time(out, &v.time());
                let _ = write!(
                    out,
                    "{:+03}:{:02}",
                    v.offset().whole_hours(),
                    v.offset().whole_minutes().unsigned_abs() % 60,
                );
                out.push('\'');
            }
            Value::Uuid(Some(v), ..) => drop(write!(out, "'{}'", v)),
            Value::List(Some(v), ..) => {
                out.push('[');
                separated_by(
                    out,
                    v,
                    |out, v| {
                        self.write_value(out, v);
                    },
                    ",",
                );
                out.push(']');
            }
        };
    }

    fn write_value_none(&self, out: &mut String) {
        out.push_str("NULL")
    }

    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push_str(["false", "true"][value as usize])
    }

    fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('\'');
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == '\'' {
                out.push_str(&value[position..i]);
                out.push_str("''");
                position = i + 1;
            } else if c == '\n' {
                out.push_str(&value[position..i]);
                out.push_str("\\n");
                position = i + 1;
            }
        }
        out.push_str(&value[position..]);
        out.push('\'');
    }

    fn write_value_blob(&self, out: &mut String, value: &[u8]) {
        out.push('\'');
        for b in value {
            let _ = write!(out, "\\x{:02X}", b);
        }
        out.push('\'');
    }

    fn write_value_date(&self, out: &mut String, value: &time::Date) {
        let _ = write!(
            out,
            "{:04}-{:02}-{:02}",
            value.year(),
            value.month() as u8,
            value.day()
        );
    }

    fn write_value_time(&self, out: &mut String, value: &time::Time) {
        let mut subsecond = value.nanosecond();
        let mut width = 9;
        while width > 1 && subsecond % 10 == 0 {
            subsecond /= 10;
            width -= 1;
        }
        let _ = write!(
            out,
            "{:02}:{:02}:{:02}.{:0width$}",
            value.hour(),
            value.minute(),
            value.second(),
            subsecond
        );
    }
}

/// Generic dialect: `?` positional markers.
pub struct GenericSqlWriter {}

impl SqlWriter for GenericSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }
}

/// Postgres dialect: `$1`, `$2`, … positional markers.
pub struct PostgresSqlWriter {}

impl SqlWriter for PostgresSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }
    fn write_placeholder(&self, out: &mut String, index: usize, _name: &str) {
        out.push('$');
        write_integer!(out, index);
    }
}

/// Named dialect: `:name` markers, one per distinct parameter name.
///
/// List parameters have no single wire type in this dialect and are
/// rejected before any round trip.
pub struct NamedSqlWriter {}

impl SqlWriter for NamedSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }
    fn write_placeholder(&self, out: &mut String, _index: usize, name: &str) {
        out.push(':');
        out.push_str(name);
    }
    fn parameter_supported(&self, value: &Value) -> bool {
        !matches!(value, Value::List(..))
    }
}
