//! Recursive blank/empty/nil filtering for nested data structures.
//!
//! This crate classifies values in arbitrarily nested sequences and mappings
//! as *nil*, *empty*, or *blank*, and removes or extracts them at
//! configurable recursion depths:
//!
//! - **Classification**: [`Value::is_nil`], [`Value::is_empty`], and
//!   [`Value::is_blank`] on any value, with recursive container semantics —
//!   a container is empty when everything in it is recursively empty.
//! - **Filtering**: [`Filterable`] gives sequences and mappings
//!   `reject_*`/`select_*` operations that walk the structure bottom-up and
//!   drop (or keep only) matching elements.
//! - **Depth windows**: [`FilterWindow`] restricts where the predicate is
//!   applied, so a filter can skip the first N levels or stop at a depth.
//! - **Key extraction**: [`MappingFilterExt`] reports the keys whose values
//!   match (or don't) a condition.
//!
//! # Quick start
//!
//! ```rust
//! use blank_filters::{Filterable, Value};
//!
//! let report: Vec<Value> = vec![
//!     Value::from(1),
//!     Value::from("foo"),
//!     Value::Nil,
//!     Value::from("apple"),
//!     Value::from(" "),
//! ];
//!
//! assert_eq!(
//!     report.reject_blank_values(),
//!     vec![Value::from(1), Value::from("foo"), Value::from("apple")],
//! );
//! ```
//!
//! # Windowed filtering
//!
//! ```rust
//! use blank_filters::{Condition, Filterable, FilterWindow, Sequence, Value};
//!
//! let nested: Sequence = match Value::from(serde_json::json!([
//!     "", ["apple", null, "banana", " ", ""], "bar"
//! ])) {
//!     Value::Seq(items) => items,
//!     _ => unreachable!(),
//! };
//!
//! let filtered = nested.reject_values(Condition::Empty, FilterWindow::starting_at(1));
//!
//! // Level 0 is outside the window: the leading "" survives, but the nested
//! // sequence has been filtered.
//! assert_eq!(filtered[0], Value::from(""));
//! assert_eq!(
//!     filtered[1],
//!     Value::from(serde_json::json!(["apple", "banana", " "])),
//! );
//! ```
//!
//! Inputs are assumed to be acyclic trees; recursion depth is bounded by the
//! input's nesting depth.

mod classify;
mod error;
mod filter;
mod value;

pub use error::FilterError;
pub use filter::{Condition, FilterMode, FilterWindow, Filterable, MappingFilterExt};
pub use value::{Mapping, OpaqueValue, Sequence, Value};

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_is_set() {
        assert!(!super::VERSION.is_empty());
    }
}
