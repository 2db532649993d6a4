//! Windowed reject/select filtering over sequences and mappings.
//!
//! The [`Filterable`] trait carries the whole filtering surface; it is
//! implemented for [`Sequence`] and [`Mapping`] only, which makes "filter a
//! scalar" a compile-time error. [`Value::filter_values`] is the dynamic
//! counterpart for callers holding a [`Value`] of unknown shape.

mod engine;
mod window;

pub use window::FilterWindow;

use crate::error::FilterError;
use crate::value::{Mapping, Sequence, Value};

/// Which classifier predicate a filter evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// [`Value::is_empty`]
    Empty,
    /// [`Value::is_blank`]
    Blank,
    /// [`Value::is_nil`]
    Nil,
}

impl Condition {
    /// Evaluates the named predicate, always at full depth.
    pub fn eval(self, value: &Value) -> bool {
        match self {
            Condition::Empty => value.is_empty(),
            Condition::Blank => value.is_blank(),
            Condition::Nil => value.is_nil(),
        }
    }
}

/// Remove matching elements, or keep only matching elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Reject,
    Select,
}

/// Recursive, window-bounded filtering of container elements.
///
/// Filtering never mutates the input; each operation returns a new container
/// with the retained elements in their original relative order. Nested
/// containers are filtered before the level they sit in, so a parent-level
/// predicate always sees the already-filtered child.
///
/// # Examples
///
/// ```rust
/// use blank_filters::{Filterable, Value};
///
/// let row = vec![
///     Value::from(1),
///     Value::from("foo"),
///     Value::Nil,
///     Value::from("apple"),
///     Value::from(" "),
/// ];
///
/// assert_eq!(row.reject_empty_values().len(), 4); // drops the nil
/// assert_eq!(row.reject_blank_values().len(), 3); // drops the nil and " "
/// assert_eq!(row.len(), 5); // the input is untouched
/// ```
pub trait Filterable: Sized {
    /// Applies `condition` in `mode` across the levels `window` covers.
    fn filter_values(&self, condition: Condition, mode: FilterMode, window: FilterWindow) -> Self;

    /// New container with matching elements removed inside the window.
    fn reject_values(&self, condition: Condition, window: FilterWindow) -> Self {
        self.filter_values(condition, FilterMode::Reject, window)
    }

    /// New container keeping only matching elements inside the window.
    fn select_values(&self, condition: Condition, window: FilterWindow) -> Self {
        self.filter_values(condition, FilterMode::Select, window)
    }

    /// Removes empty elements at every level.
    fn reject_empty_values(&self) -> Self {
        self.reject_values(Condition::Empty, FilterWindow::full())
    }

    /// Removes blank elements at every level.
    fn reject_blank_values(&self) -> Self {
        self.reject_values(Condition::Blank, FilterWindow::full())
    }

    /// Removes nil elements at every level.
    fn reject_nil_values(&self) -> Self {
        self.reject_values(Condition::Nil, FilterWindow::full())
    }

    /// Keeps only empty elements, at every level.
    fn select_empty_values(&self) -> Self {
        self.select_values(Condition::Empty, FilterWindow::full())
    }

    /// Keeps only blank elements, at every level.
    fn select_blank_values(&self) -> Self {
        self.select_values(Condition::Blank, FilterWindow::full())
    }

    /// Keeps only nil elements, at every level.
    fn select_nil_values(&self) -> Self {
        self.select_values(Condition::Nil, FilterWindow::full())
    }
}

impl Filterable for Sequence {
    fn filter_values(&self, condition: Condition, mode: FilterMode, window: FilterWindow) -> Self {
        engine::filter_sequence(self, condition, mode, window, 0)
    }
}

impl Filterable for Mapping {
    fn filter_values(&self, condition: Condition, mode: FilterMode, window: FilterWindow) -> Self {
        engine::filter_mapping(self, condition, mode, window, 0)
    }
}

/// Key accessors derived from the select/reject filters, mappings only.
///
/// A key is reported when its (recursively filtered) value matches — or, for
/// the `non_*` forms, survives rejection. Key order follows the mapping's
/// insertion order.
pub trait MappingFilterExt {
    /// Keys whose values match `condition` within `window`.
    fn matching_keys(&self, condition: Condition, window: FilterWindow) -> Vec<String>;

    /// Keys whose values survive rejection by `condition` within `window`.
    fn non_matching_keys(&self, condition: Condition, window: FilterWindow) -> Vec<String>;

    fn empty_value_keys(&self) -> Vec<String> {
        self.matching_keys(Condition::Empty, FilterWindow::full())
    }

    fn blank_value_keys(&self) -> Vec<String> {
        self.matching_keys(Condition::Blank, FilterWindow::full())
    }

    fn nil_value_keys(&self) -> Vec<String> {
        self.matching_keys(Condition::Nil, FilterWindow::full())
    }

    fn non_empty_value_keys(&self) -> Vec<String> {
        self.non_matching_keys(Condition::Empty, FilterWindow::full())
    }

    fn non_blank_value_keys(&self) -> Vec<String> {
        self.non_matching_keys(Condition::Blank, FilterWindow::full())
    }

    fn non_nil_value_keys(&self) -> Vec<String> {
        self.non_matching_keys(Condition::Nil, FilterWindow::full())
    }
}

impl MappingFilterExt for Mapping {
    fn matching_keys(&self, condition: Condition, window: FilterWindow) -> Vec<String> {
        self.select_values(condition, window)
            .keys()
            .cloned()
            .collect()
    }

    fn non_matching_keys(&self, condition: Condition, window: FilterWindow) -> Vec<String> {
        self.reject_values(condition, window)
            .keys()
            .cloned()
            .collect()
    }
}

impl Value {
    /// Windowed filtering for container values of unknown shape.
    ///
    /// Scalars classify (see [`Value::is_empty`] and friends) but have no
    /// elements to drop, so filtering one is an error rather than a no-op.
    pub fn filter_values(
        &self,
        condition: Condition,
        mode: FilterMode,
        window: FilterWindow,
    ) -> Result<Value, FilterError> {
        match self {
            Value::Seq(items) => Ok(Value::Seq(items.filter_values(condition, mode, window))),
            Value::Map(entries) => Ok(Value::Map(entries.filter_values(condition, mode, window))),
            other => Err(FilterError::NotAContainer { kind: other.kind() }),
        }
    }
}
