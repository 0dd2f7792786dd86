use thiserror::Error;

/// Failures surfaced while assembling a [`Tree`](crate::Tree).
///
/// A missing key during [`find`](crate::Tree::find) or
/// [`delete`](crate::Tree::delete) is an expected outcome and is reported
/// through `Option`/`bool` returns, never through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A [`TreeBuilder`](crate::TreeBuilder) was finished without a
    /// comparator. There is no meaningful default ordering to fall back on.
    #[error("cannot build a tree without a comparator")]
    MissingComparator,
}
