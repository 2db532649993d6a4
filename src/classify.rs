//! Emptiness and blankness predicates.
//!
//! These always classify at full depth: a container is empty when everything
//! in it is recursively empty, and blank when everything in it is recursively
//! blank. They are deliberately independent of the windowed filtering in
//! [`crate::filter`], so a caller-supplied window can never change what a
//! value *is*, only what a filter does with it.

use crate::value::Value;

impl Value {
    /// True only for [`Value::Nil`].
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// True for nil, zero-length text, and containers whose elements are all
    /// recursively empty (which includes zero elements).
    ///
    /// Opaque values are empty only when they report a length of zero; a value
    /// without the length capability is never empty. Booleans and numbers are
    /// never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Nil => true,
            Value::Text(t) => t.is_empty(),
            Value::Seq(items) => items.iter().all(Value::is_empty),
            Value::Map(entries) => entries.values().all(Value::is_empty),
            Value::Opaque(o) => o.length() == Some(0),
            Value::Bool(_) | Value::Int(_) | Value::Float(_) => false,
        }
    }

    /// True when empty, or for whitespace-only text, or for containers whose
    /// elements are all recursively blank. Opaque values are blank when empty
    /// or when their rendering trims to nothing.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Nil => true,
            Value::Text(t) => t.trim().is_empty(),
            Value::Seq(items) => items.iter().all(Value::is_blank),
            Value::Map(entries) => entries.values().all(Value::is_blank),
            Value::Opaque(o) => o.length() == Some(0) || o.to_string().trim().is_empty(),
            Value::Bool(_) | Value::Int(_) | Value::Float(_) => false,
        }
    }

    /// Borrows the value unless it is empty.
    pub fn non_empty(&self) -> Option<&Value> {
        (!self.is_empty()).then_some(self)
    }

    /// Borrows the value unless it is blank.
    pub fn non_blank(&self) -> Option<&Value> {
        (!self.is_blank()).then_some(self)
    }
}
