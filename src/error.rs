use crate::Value;

/// Errors reported by list, adapter and tree operations.
///
/// None of these are fatal. The structure an operation was called on is left
/// untouched when it returns an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Index outside the range accepted by the operation
    #[error("index {index} out of range for length {len}")]
    InvalidIndex { index: usize, len: usize },

    /// The value is already stored and the structure rejects duplicates
    #[error("value {0} is already present")]
    DuplicateValue(Value),

    /// Pop, peek or dequeue on an empty stack or queue
    #[error("structure is empty")]
    EmptyStructure,

    /// Unmatched or mismatched bracket. `offset` is the byte offset of the
    /// offending closer, or the expression length if openers were left unclosed.
    #[error("unbalanced expression at offset {offset}")]
    MalformedExpression { offset: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
