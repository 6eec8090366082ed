use std::result;
use thiserror::Error;

/// Convenience `Error` enum for this crate.
///
/// Looking up a key that is not present is never an error: those operations return `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument that can never be accepted, such as a missing key or a zero capacity.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = result::Result<T, Error>;
