use thiserror::Error;

/// Errors returned by the queue and the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A required input sequence was not supplied.
    #[error("invalid argument: {0} must not be absent")]
    InvalidArgument(&'static str),

    /// `extract_min` was called on a queue without elements.
    #[error("queue is empty")]
    EmptyQueue,

    /// No element was available for this query position, because it repeats
    /// an earlier position or lies past the end of the permutation.
    #[error(
        "cannot extract from an empty queue, possibly caused by repeated index: {query_position}"
    )]
    IllegalState { query_position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
