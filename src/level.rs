//! Compression level validation.
//!
//! The wire-level API takes a plain `i32` in `-1..=9` (-1 meaning "codec
//! default"), matching the spec's language-neutral signature. This module is
//! the one place that turns that `i32` into a [`flate2::Compression`],
//! rejecting out-of-range values instead of letting `Compression::new` panic.

use crate::error::MgzError;
use flate2::Compression;

pub(crate) fn compression_for_level(level: i32) -> Result<Compression, MgzError> {
    match level {
        -1 => Ok(Compression::default()),
        0..=9 => Ok(Compression::new(level as u32)),
        other => Err(MgzError::InvalidLevel(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_accepted() {
        assert!(compression_for_level(-1).is_ok());
    }

    #[test]
    fn full_range_is_accepted() {
        for level in 0..=9 {
            assert!(compression_for_level(level).is_ok(), "level {level}");
        }
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(matches!(
            compression_for_level(-2),
            Err(MgzError::InvalidLevel(-2))
        ));
        assert!(matches!(
            compression_for_level(10),
            Err(MgzError::InvalidLevel(10))
        ));
    }
}
