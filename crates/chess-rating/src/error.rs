//! Errors raised at the parsing boundary of the engine.
//!
//! The rating operations themselves never fail; these errors only come from
//! turning external text or integers into engine types.

use thiserror::Error;

/// Errors that can occur when converting external input into engine types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("unknown rating algorithm code: {0}")]
    UnknownAlgorithm(i64),

    #[error("unknown rating type: '{0}'")]
    UnknownRatingType(String),

    #[error("invalid game score: '{0}' (expected 1, 0, 1/2, 0.5 or =)")]
    InvalidScore(String),
}
