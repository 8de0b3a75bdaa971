//! The single-member encoder (component A): compresses one byte range into
//! a self-contained gzip member.

use crate::error::MgzError;
use crate::level::compression_for_level;
use std::io::Write;

/// Size of the staging chunks fed to the codec, and the encoder's initial
/// output capacity doubling unit. Matches the original's `CHUNK_SIZE`.
pub const CHUNK_SIZE: usize = 16384;

/// Compresses `input` into a single RFC 1952 gzip member at compression
/// `level` (`-1..=9`, `-1` meaning the codec's default).
///
/// Empty input produces an empty member (not an error). Input is fed to the
/// underlying encoder in `CHUNK_SIZE`-byte slices rather than in one shot so
/// the staging behavior matches the spec's streaming description; the
/// output buffer starts at `2 * CHUNK_SIZE` and grows by Rust's standard
/// amortized-doubling `Vec` growth, which satisfies the same reallocation
/// bound the spec calls for without a manual capacity dance.
pub fn deflate(input: &[u8], level: i32) -> Result<Vec<u8>, MgzError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    let compression = compression_for_level(level)?;
    let mut encoder =
        flate2::write::GzEncoder::new(Vec::with_capacity(2 * CHUNK_SIZE), compression);
    for chunk in input.chunks(CHUNK_SIZE) {
        encoder.write_all(chunk)?;
    }
    Ok(encoder.finish()?)
}
