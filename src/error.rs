//! Error taxonomy for the codec.
//!
//! Mirrors the error kinds in the original design: an out-of-range
//! compression level, a block that failed to compress, a sidecar write
//! requested without a lookup table, and I/O failure (which also covers
//! `flate2` codec errors, since `flate2` itself surfaces those as
//! [`std::io::Error`]).

use thiserror::Error;

/// Errors produced by the `mgz` codec.
#[derive(Debug, Error)]
pub enum MgzError {
    /// `level` was outside the supported range `-1..=9`.
    #[error("invalid compression level {0}; expected -1..=9")]
    InvalidLevel(i32),

    /// One or more blocks compressed to zero bytes despite non-empty input.
    /// The whole parallel operation is aborted when this happens.
    #[error("one or more blocks failed to compress")]
    BlockCompressionFailed,

    /// A sidecar stream was supplied but the bundle has no lookup table.
    #[error("a lookup sidecar was requested but the bundle has no lookup table")]
    LookupNotRequested,

    /// Short write, seek/read failure, or an underlying codec error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
