//! Writer errors.
//!
//! Any tree shape the writers don't model is fatal: the error propagates
//! straight to the caller, never retried, never degraded into partial
//! output. Malformed trees are a builder-layer contract violation; the
//! checks here are the last line.

use thiserror::Error;

/// Fatal rendering error.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum WriteError {
    /// Zero-field records have no representation in the generated subset;
    /// the builder contract is to never construct one.
    #[error("can't write a record type annotation with no fields")]
    EmptyRecord,
}
