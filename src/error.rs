//! Library error type.

use thiserror::Error;

/// Errors from the value-level filtering entry point.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Filtering is defined on sequences and mappings only.
    #[error("filtering is not defined for {kind} values; only sequences and mappings are filterable")]
    NotAContainer { kind: &'static str },
}
