//! Error types for fragmass.
use thiserror::Error;

/// Errors from the [`Target`](crate::target::Target) record codec.
///
/// The mass engine itself has no failure modes; only the serialization
/// boundary can reject input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("missing required field: {0}")] MissingField(&'static str),
    #[error("record too large: {size} > {max}")] OversizedRecord { size: usize, max: usize },
    #[error("truncated record: need {need} bytes, have {have}")] Truncated { need: usize, have: usize },
    #[error("malformed payload: {0}")] MalformedPayload(String),
}
