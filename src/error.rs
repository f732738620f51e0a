//! Failures reported by the containers in this crate.
//!
//! Every fallible operation either succeeds or returns one of these without
//! having touched the container. Lookups that come up empty (e.g.
//! [`List::search`][crate::list::List::search] or
//! [`Tree::search`][crate::tree::Tree::search]) are not failures and never
//! produce an [`Error`].

use thiserror::Error;

/// The ways an operation on a [`List`][crate::list::List] or a
/// [`Tree`][crate::tree::Tree] can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A node handle was missing, or it no longer refers to a live node of
    /// the tree it was passed to.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The operation needs at least one element but the container is empty.
    #[error("{0} called on an empty container")]
    EmptyStructure(&'static str),
    /// An index was past the valid bound for the operation.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index that was asked for.
        index: usize,
        /// How many elements the container held at the time.
        len: usize,
    },
}

/// Shorthand for results whose failure is an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            Error::IndexOutOfRange { index: 3, len: 2 }.to_string(),
            "index 3 out of range for length 2"
        );
        assert_eq!(
            Error::EmptyStructure("pop_front").to_string(),
            "pop_front called on an empty container"
        );
        assert_eq!(
            Error::InvalidArgument("missing node").to_string(),
            "invalid argument: missing node"
        );
    }
}
