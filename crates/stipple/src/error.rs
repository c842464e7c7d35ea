//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, domains too small for the padding margin, placement calls
//! without candidates, bitmap parse failures, and IO.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("domain {width}x{height} is too small for a padding margin of {padding}")]
    DomainTooSmall { width: i32, height: i32, padding: i32 },

    #[error("cannot place a point with zero candidate tries once the set is non-empty")]
    NoCandidates,

    #[error("bitmap parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
