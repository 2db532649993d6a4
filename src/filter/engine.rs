//! Depth-aware traversal: recurse into nested containers first, then filter
//! the current level's elements through the window.
//!
//! Both steps use the same window. The recurse step ignores `start` and the
//! mode; the filter step evaluates the predicate only inside the window and
//! otherwise keeps the element in either mode.

use super::window::FilterWindow;
use super::{Condition, FilterMode};
use crate::value::{Mapping, Sequence, Value};

/// Filters one sequence level, recursing into child containers.
pub(crate) fn filter_sequence(
    items: &[Value],
    condition: Condition,
    mode: FilterMode,
    window: FilterWindow,
    level: usize,
) -> Sequence {
    tracing::trace!(level, ?condition, ?mode, len = items.len(), "filtering sequence");
    items
        .iter()
        .map(|val| descend(val, condition, mode, window, level))
        .filter(|val| keep(val, condition, mode, window, level))
        .collect()
}

/// Filters one mapping level. Keys pass through untouched and keep their
/// insertion order; only values are replaced or dropped.
pub(crate) fn filter_mapping(
    entries: &Mapping,
    condition: Condition,
    mode: FilterMode,
    window: FilterWindow,
    level: usize,
) -> Mapping {
    tracing::trace!(level, ?condition, ?mode, len = entries.len(), "filtering mapping");
    entries
        .iter()
        .map(|(key, val)| (key.clone(), descend(val, condition, mode, window, level)))
        .filter(|(_, val)| keep(val, condition, mode, window, level))
        .collect()
}

/// Replaces a child container with its recursively filtered copy, when the
/// depth bound still allows descending from `level`. Scalars and out-of-depth
/// containers are cloned as-is.
fn descend(
    val: &Value,
    condition: Condition,
    mode: FilterMode,
    window: FilterWindow,
    level: usize,
) -> Value {
    if !window.descends_at(level) {
        return val.clone();
    }
    match val {
        Value::Seq(items) => Value::Seq(filter_sequence(items, condition, mode, window, level + 1)),
        Value::Map(entries) => Value::Map(filter_mapping(entries, condition, mode, window, level + 1)),
        other => other.clone(),
    }
}

/// Decides whether the (already recursed) element survives this level.
///
/// Inside the window the predicate decides: reject drops matches, select
/// keeps only matches. Outside it the predicate slot takes a default that
/// rejects nothing and selects everything, so both modes act as identity.
fn keep(
    val: &Value,
    condition: Condition,
    mode: FilterMode,
    window: FilterWindow,
    level: usize,
) -> bool {
    let matched = if window.contains(level) {
        condition.eval(val)
    } else {
        matches!(mode, FilterMode::Select)
    };
    match mode {
        FilterMode::Reject => !matched,
        FilterMode::Select => matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seq(json: serde_json::Value) -> Sequence {
        match Value::from(json) {
            Value::Seq(items) => items,
            other => panic!("expected a sequence, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_window_levels_keep_everything_in_both_modes() {
        let items = seq(json!([1, "foo", null, "apple", " "]));
        let window = FilterWindow::starting_at(1);
        for mode in [FilterMode::Reject, FilterMode::Select] {
            let out = filter_sequence(&items, Condition::Empty, mode, window, 0);
            assert_eq!(out, items, "{mode:?}");
        }
    }

    #[test]
    fn test_depth_zero_never_descends() {
        let items = seq(json!(["", ["", null, "x"]]));
        let out = filter_sequence(
            &items,
            Condition::Empty,
            FilterMode::Reject,
            FilterWindow::up_to(0),
            0,
        );
        // The root-level empty string goes, the nested container survives
        // untouched because it is not recursively empty.
        assert_eq!(out, seq(json!([["", null, "x"]])));
    }

    #[test]
    fn test_unsatisfiable_window_is_identity() {
        let items = seq(json!(["", null, [" ", ""]]));
        let out = filter_sequence(
            &items,
            Condition::Blank,
            FilterMode::Reject,
            FilterWindow::new(1, Some(0)),
            0,
        );
        assert_eq!(out, items);
    }

    #[test]
    fn test_predicate_sees_the_recursed_element() {
        // [null, ""] is only empty after its own children are gone, and the
        // parent-level predicate must observe the recursed copy.
        let items = seq(json!([[null, ""], "keep"]));
        let out = filter_sequence(
            &items,
            Condition::Empty,
            FilterMode::Reject,
            FilterWindow::full(),
            0,
        );
        assert_eq!(out, seq(json!(["keep"])));
    }
}
