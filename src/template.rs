use crate::{IntoSlot, Slot, SlotId};

/// One piece of a template: raw SQL text or a reference to a declared slot.
#[derive(Debug, Clone)]
pub enum Segment {
    /// Raw SQL text copied verbatim to the rendered query.
    Literal(String),
    /// Reference to an entry in the template's slot table.
    Slot(SlotId),
}

/// An immutable query template: ordered segments plus the slot table they
/// reference. Built once per query by [`TemplateBuilder`] or the [`sql!`]
/// macro and consumed by [`Template::bind`].
#[derive(Debug, Clone)]
pub struct Template {
    pub(crate) segments: Vec<Segment>,
    pub(crate) slots: Vec<Slot>,
}

impl Template {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
    /// Number of slot references, counting repeats.
    pub fn slot_ref_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|v| matches!(v, Segment::Slot(..)))
            .count()
    }
}

/// Builder producing a [`Template`] from alternating literal text and slot
/// references.
///
/// Methods return `&mut Self` or the assigned [`SlotId`] for fluent
/// chaining:
/// ```rust
/// use sqlbind::TemplateBuilder;
/// let mut builder = TemplateBuilder::new();
/// builder.literal("SELECT 1 WHERE ");
/// let v = builder.slot(1);
/// builder.literal(" >= 0 OR ").slot(v);
/// builder.literal(" <= 0");
/// let template = builder.finish();
/// assert_eq!(template.slot_ref_count(), 2);
/// assert_eq!(template.slots().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    segments: Vec<Segment>,
    slots: Vec<Slot>,
}

impl TemplateBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    /// Append raw SQL text.
    pub fn literal(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        // Merge adjacent literals so segment order mirrors the written query.
        if let Some(Segment::Literal(last)) = self.segments.last_mut() {
            last.push_str(&text);
        } else {
            self.segments.push(Segment::Literal(text));
        }
        self
    }
    /// Append a slot reference and return its id, which can be passed back
    /// to reference the same slot again.
    pub fn slot(&mut self, slot: impl IntoSlot) -> SlotId {
        let id = slot.into_slot(self);
        self.segments.push(Segment::Slot(id));
        id
    }
    pub fn finish(self) -> Template {
        Template {
            segments: self.segments,
            slots: self.slots,
        }
    }

    pub(crate) fn declare_param(&mut self, param: crate::Param) -> SlotId {
        self.slots.push(Slot::Param(param));
        SlotId(self.slots.len() - 1)
    }
    pub(crate) fn declare_value(&mut self, value: crate::Value) -> SlotId {
        self.slots.push(Slot::Value(value));
        SlotId(self.slots.len() - 1)
    }
}

/// Builds a [`Template`] from alternating string literals and `{expr}`
/// interpolation groups.
///
/// String literals become [`Segment::Literal`] text; each braced expression
/// goes through [`IntoSlot`], so a [`crate::Param`] keeps its object
/// identity, a plain value declares a fresh slot, and a [`SlotId`]
/// references an existing one.
///
/// ```rust
/// use sqlbind::{Param, sql};
/// let v = Param::new("value", 1);
/// let template = sql!("SELECT 1\nWHERE " {&v} " >= 0 OR " {&v} " <= 0");
/// assert_eq!(template.slot_ref_count(), 2);
/// ```
#[macro_export]
macro_rules! sql {
    (@munch $builder:ident) => {};
    (@munch $builder:ident $text:literal $($rest:tt)*) => {
        $builder.literal($text);
        $crate::sql!(@munch $builder $($rest)*);
    };
    (@munch $builder:ident {$slot:expr} $($rest:tt)*) => {
        $builder.slot($slot);
        $crate::sql!(@munch $builder $($rest)*);
    };
    ($($tt:tt)*) => {{
        let mut macro_local_builder = $crate::TemplateBuilder::new();
        $crate::sql!(@munch macro_local_builder $($tt)*);
        macro_local_builder.finish()
    }};
}
