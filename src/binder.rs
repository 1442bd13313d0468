use crate::{
    BoundParameter, RenderedQuery, Result, Segment, Slot, SlotId, SqlWriter, Template,
    truncate_long,
};
use std::{
    collections::{HashMap, HashSet},
    fmt::{self, Display},
};

/// Contract violations surfaced by [`Template::bind`].
///
/// Both variants indicate caller bugs caught before any database round
/// trip. The error converts into the crate-wide [`crate::Error`] and stays
/// downcastable.
#[derive(Debug)]
pub enum BindError {
    /// A slot reference does not resolve within this template, or an
    /// explicit parameter name is already bound to a different value.
    MalformedTemplate(String),
    /// A slot's declared type cannot be mapped to a wire-protocol parameter
    /// type by the chosen dialect.
    UnsupportedValueType(String),
}

impl Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::MalformedTemplate(msg) => write!(f, "Malformed template: {}", msg),
            BindError::UnsupportedValueType(msg) => write!(f, "Unsupported value type: {}", msg),
        }
    }
}

impl std::error::Error for BindError {}

impl Template {
    /// Transform this template into a [`RenderedQuery`].
    ///
    /// Walks segments in order: literal text is copied verbatim and every
    /// slot reference renders one placeholder token through `writer`. The
    /// first occurrence of a slot identity assigns the next parameter index
    /// (1-based) and pushes one [`BoundParameter`]; later occurrences of the
    /// same identity reuse the assigned token. Identity follows the dual
    /// rule: object identity for [`crate::Param`] slots, declaration site
    /// for plain value slots.
    ///
    /// Every parameter name is unique within the query: generated names
    /// skip names taken by explicit [`crate::Param`]s, and an explicit name
    /// colliding with an already assigned one is rejected.
    ///
    /// Pure over its input: binding the same template twice yields identical
    /// text and parameter assignment.
    pub fn bind(&self, writer: &dyn SqlWriter) -> Result<RenderedQuery> {
        let mut text = String::new();
        let mut parameters = Vec::<BoundParameter>::new();
        // Slot table index -> position in `parameters`, filled on first use.
        let mut assigned = vec![None::<usize>; self.slots.len()];
        // Param object identity -> position in `parameters`.
        let mut by_identity = HashMap::<usize, usize>::new();
        // Every name already assigned, explicit or generated.
        let mut claimed_names = HashSet::<String>::new();
        for segment in &self.segments {
            let id = match segment {
                Segment::Literal(literal) => {
                    text.push_str(literal);
                    continue;
                }
                Segment::Slot(id) => *id,
            };
            let slot = self.slot(id)?;
            let SlotId(index) = id;
            let position = match (slot, assigned[index]) {
                (_, Some(position)) => position,
                (Slot::Param(param), None) => match by_identity.get(&param.identity()) {
                    Some(&position) => position,
                    None => {
                        // This identity's first occurrence, so any holder of
                        // the name is a different parameter.
                        if claimed_names.contains(param.name()) {
                            return Err(BindError::MalformedTemplate(format!(
                                "The parameter name `{}` is already bound to a different value",
                                param.name(),
                            ))
                            .into());
                        }
                        let position = push_parameter(writer, &mut parameters, param.name(), slot)?;
                        by_identity.insert(param.identity(), position);
                        claimed_names.insert(param.name().into());
                        position
                    }
                },
                (Slot::Value(..), None) => {
                    let name = next_free_name(&claimed_names, parameters.len() + 1);
                    let position = push_parameter(writer, &mut parameters, &name, slot)?;
                    claimed_names.insert(name);
                    position
                }
            };
            assigned[index] = Some(position);
            writer.write_placeholder(&mut text, position + 1, &parameters[position].name);
        }
        log::trace!(
            "Bound query with {} parameter(s): {}",
            parameters.len(),
            truncate_long!(text),
        );
        Ok(RenderedQuery { text, parameters })
    }

    /// Render the query with slot values written inline as SQL literals.
    /// Diagnostics only; the result is never meant for execution.
    pub fn render_inlined(&self, writer: &dyn SqlWriter) -> Result<String> {
        let mut text = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => text.push_str(literal),
                Segment::Slot(id) => writer.write_value(&mut text, self.slot(*id)?.value()),
            }
        }
        Ok(text)
    }

    fn slot(&self, SlotId(id): SlotId) -> Result<&Slot> {
        self.slots.get(id).ok_or_else(|| {
            BindError::MalformedTemplate(format!(
                "Slot reference {} does not belong to this template ({} slots declared)",
                id,
                self.slots.len(),
            ))
            .into()
        })
    }
}

/// Next `p{n}` counting up from `start` that no parameter has claimed yet.
fn next_free_name(claimed_names: &HashSet<String>, start: usize) -> String {
    let mut n = start;
    loop {
        let name = format!("p{}", n);
        if !claimed_names.contains(&name) {
            return name;
        }
        n += 1;
    }
}

fn push_parameter(
    writer: &dyn SqlWriter,
    parameters: &mut Vec<BoundParameter>,
    name: &str,
    slot: &Slot,
) -> Result<usize> {
    let value = slot.value();
    if !writer.parameter_supported(value) {
        return Err(BindError::UnsupportedValueType(format!(
            "The dialect cannot bind a parameter of type {}",
            value.type_name(),
        ))
        .into());
    }
    parameters.push(BoundParameter::new(name, value.clone()));
    Ok(parameters.len() - 1)
}
