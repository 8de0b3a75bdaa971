//! The archive writer (component E): persists a [`Bundle`] to output
//! streams.

use crate::archive::Bundle;
use crate::error::MgzError;
use std::io::Write;

/// Writes `bundle.archive` verbatim to `out`, and, if `sidecar` is given,
/// writes the lookup sidecar: a little-endian `u64` `block_size` header
/// followed by `L[0..n_blocks)` as packed little-endian `u64`s. `L[n_blocks]`
/// (the total archive size) is deliberately omitted — readers only ever
/// need `L[block]` for a specific block.
///
/// Returns the number of bytes written to `out`. Neither stream is closed;
/// the caller owns them.
pub(crate) fn write_archive_and_sidecar<W: Write, S: Write>(
    bundle: &Bundle,
    block_size: u64,
    mut out: W,
    sidecar: Option<S>,
) -> Result<u64, MgzError> {
    out.write_all(&bundle.archive)?;

    if let Some(mut sidecar) = sidecar {
        let lookup = bundle.lookup.as_ref().ok_or(MgzError::LookupNotRequested)?;
        sidecar.write_all(&block_size.to_le_bytes())?;
        for offset in lookup.iter().take(bundle.n_blocks as usize) {
            sidecar.write_all(&offset.to_le_bytes())?;
        }
    }

    Ok(bundle.archive.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::concatenate;

    #[test]
    fn writes_archive_and_sidecar() {
        let bundle = concatenate(vec![vec![1, 2, 3], vec![4, 5]], true);
        let mut out = Vec::new();
        let mut sidecar = Vec::new();
        let written =
            write_archive_and_sidecar(&bundle, 16384, &mut out, Some(&mut sidecar)).unwrap();

        assert_eq!(written, 5);
        assert_eq!(out, vec![1, 2, 3, 4, 5]);

        // header (block size) + L[0], L[1] (L[n_blocks] omitted)
        assert_eq!(sidecar.len(), 8 * 3);
        assert_eq!(&sidecar[0..8], &16384u64.to_le_bytes());
        assert_eq!(&sidecar[8..16], &0u64.to_le_bytes());
        assert_eq!(&sidecar[16..24], &3u64.to_le_bytes());
    }

    #[test]
    fn sidecar_without_lookup_is_an_error() {
        let bundle = concatenate(vec![vec![1, 2, 3]], false);
        let mut out = Vec::new();
        let mut sidecar = Vec::new();
        let result = write_archive_and_sidecar(&bundle, 16384, &mut out, Some(&mut sidecar));
        assert!(matches!(result, Err(MgzError::LookupNotRequested)));
    }

    #[test]
    fn archive_only_when_no_sidecar_requested() {
        let bundle = concatenate(vec![vec![1, 2, 3]], false);
        let mut out = Vec::new();
        let written =
            write_archive_and_sidecar(&bundle, 16384, &mut out, None::<&mut Vec<u8>>).unwrap();
        assert_eq!(written, 3);
        assert_eq!(out, vec![1, 2, 3]);
    }
}
