//! Level window bounding where filter predicates apply.

/// Inclusive level range in which a filter predicate is evaluated.
///
/// Levels count from 0 at the container a filter is called on and grow by one
/// for each nested sequence or mapping. `depth: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterWindow {
    /// First level at which the predicate applies.
    pub start: usize,
    /// Last level at which the predicate applies, and also the last level
    /// traversal descends from. `None` for no bound.
    pub depth: Option<usize>,
}

impl FilterWindow {
    pub const fn new(start: usize, depth: Option<usize>) -> Self {
        FilterWindow { start, depth }
    }

    /// The default window: every level, unbounded depth.
    pub const fn full() -> Self {
        FilterWindow::new(0, None)
    }

    /// Applies from `start` down, unbounded.
    pub const fn starting_at(start: usize) -> Self {
        FilterWindow::new(start, None)
    }

    /// Applies from the root down to `depth` inclusive.
    pub const fn up_to(depth: usize) -> Self {
        FilterWindow::new(0, Some(depth))
    }

    /// True when the predicate is evaluated at `level`.
    pub fn contains(&self, level: usize) -> bool {
        level >= self.start && self.depth.map_or(true, |d| level <= d)
    }

    /// True when traversal may descend out of a container sitting at `level`.
    ///
    /// The depth bound does double duty: it caps the predicate window *and*
    /// recursion itself, so `depth = Some(0)` leaves everything below the
    /// root untouched.
    pub fn descends_at(&self, level: usize) -> bool {
        self.depth.map_or(true, |d| level <= d)
    }
}

impl Default for FilterWindow {
    fn default() -> Self {
        FilterWindow::full()
    }
}
