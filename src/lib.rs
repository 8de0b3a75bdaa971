//! `mgz` — a block-parallel gzip codec with random-access read support.
//!
//! Compresses a large in-memory buffer into a single archive that is, byte
//! for byte, a standards-compliant concatenated gzip stream (RFC 1952) —
//! any compliant gzip decoder can decode the whole thing start to finish,
//! oblivious to the block boundaries inside it. Alongside the archive, the
//! codec builds a lookup table mapping uncompressed byte offsets to the
//! archive offset of the gzip member that contains them, so a reader can
//! jump straight to an arbitrary offset and decode only the block it needs.
//!
//! # Architecture
//!
//! ```text
//! input buffer -> partition into blocks -> compress each block in
//! parallel -> concatenate members in block order + build lookup table
//! -> persist archive + sidecar
//! ```
//!
//! Reading runs the last step backwards: consult the sidecar for the
//! member offset that contains the requested byte, seek the archive there,
//! and decode through a single [`flate2::read::MultiGzDecoder`] — which
//! transparently walks into the next concatenated member if the read spans
//! a block boundary.
//!
//! # Quick start
//!
//! ```
//! use mgz::{parallel_create, read};
//! use std::io::Cursor;
//!
//! let data = b"some data to compress, repeated ".repeat(1000);
//!
//! let mut archive = Vec::new();
//! let mut sidecar = Vec::new();
//! mgz::parallel_create(&data, 6, 16384, &mut archive, Some(&mut sidecar)).unwrap();
//!
//! let mut buf = vec![0u8; 10];
//! let n = read(&mut buf, 5, &mut Cursor::new(archive), &mut Cursor::new(sidecar));
//! assert_eq!(n, 10);
//! assert_eq!(buf, data[5..15]);
//! ```

mod archive;
mod block;
mod driver;
mod encoder;
mod error;
mod level;
mod reader;
mod writer;

pub use archive::Bundle;
pub use block::{effective_block_size, DEFAULT_BLOCK_SIZE, MIN_BLOCK_SIZE};
pub use encoder::{deflate, CHUNK_SIZE};
pub use error::MgzError;
pub use reader::{read, MgzArchive};

use block::BlockLayout;
use std::io::Write;

/// Splits `input` into blocks, compresses each block in parallel, and
/// concatenates the results into a single archive, optionally building a
/// lookup table alongside it.
///
/// `level` is the DEFLATE compression level, `-1..=9` (`-1` = codec
/// default). `block_size` is normalized by [`effective_block_size`]: `0`
/// becomes [`DEFAULT_BLOCK_SIZE`], anything below [`MIN_BLOCK_SIZE`] is
/// floored up to it.
///
/// Empty input produces [`Bundle::empty`]. Any block that fails to compress
/// aborts the whole operation with [`MgzError::BlockCompressionFailed`] only
/// after every other block has finished, so no partial state is left
/// dangling across the parallel region.
pub fn parallel_deflate(
    input: &[u8],
    level: i32,
    block_size: u64,
    want_lookup: bool,
) -> Result<Bundle, MgzError> {
    if input.is_empty() {
        return Ok(Bundle::empty());
    }

    let layout = BlockLayout::new(input.len() as u64, block_size);
    log::debug!(
        "parallel_deflate: {} bytes in {} block(s) of {} bytes",
        input.len(),
        layout.n_blocks,
        layout.block_size
    );

    let members = driver::compress_blocks(input, &layout, level)?;
    Ok(archive::concatenate(members, want_lookup))
}

/// Runs [`parallel_deflate`] and persists the result: the archive to `out`,
/// and, if `sidecar` is supplied, the lookup sidecar to it.
///
/// Returns the number of bytes written to `out` (`0` for empty input).
pub fn parallel_create<W: Write, S: Write>(
    input: &[u8],
    level: i32,
    block_size: u64,
    out: W,
    sidecar: Option<S>,
) -> Result<u64, MgzError> {
    if input.is_empty() {
        return Ok(0);
    }

    let effective_block_size = block::effective_block_size(block_size);
    let bundle = parallel_deflate(input, level, block_size, sidecar.is_some())?;
    writer::write_archive_and_sidecar(&bundle, effective_block_size, out, sidecar)
}
