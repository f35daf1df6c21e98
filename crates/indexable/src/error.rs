use std::result;

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types raised by the wrapper itself.
///
/// Failures of a target's capability method or of its accessors are never
/// translated into this type: they come back unchanged as the target's own
/// [`Indexer::Error`](crate::Indexer::Error).
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "the only argument of wrap_any() must be a `{expected}` or a constructor of one, got another kind"
    )]
    InvalidArgumentKind { expected: &'static str },
}
