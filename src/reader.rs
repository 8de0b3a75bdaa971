//! The random-access reader (component F): given a lookup sidecar and the
//! concatenated archive, decode the minimal set of blocks to satisfy an
//! arbitrary `(offset, size)` read.

use flate2::read::MultiGzDecoder;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Reads the `u64` block-size header from the start of `sidecar`.
fn read_block_size<S: Read + Seek>(sidecar: &mut S) -> io::Result<u64> {
    sidecar.seek(SeekFrom::Start(0))?;
    let mut buf = [0u8; 8];
    sidecar.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Reads `L[block]` from `sidecar`, given the sidecar already starts with
/// the block-size header (so entry `i` sits at byte offset `8 * (1 + i)`).
fn read_member_offset<S: Read + Seek>(sidecar: &mut S, block: u64) -> io::Result<u64> {
    sidecar.seek(SeekFrom::Start(8 * (1 + block)))?;
    let mut buf = [0u8; 8];
    sidecar.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

fn read_inner<A: Read + Seek, S: Read + Seek>(
    buf: &mut [u8],
    offset: u64,
    archive: &mut A,
    sidecar: &mut S,
) -> io::Result<()> {
    let block_size = read_block_size(sidecar)?;
    let block = offset / block_size;
    let into = offset % block_size;

    let member_start = read_member_offset(sidecar, block)?;
    archive.seek(SeekFrom::Start(member_start))?;

    // A single `MultiGzDecoder` instance is enough even when the read spans
    // multiple blocks: when one member's uncompressed stream ends, gzip
    // concatenation semantics mean the decoder transparently continues into
    // the next member that follows it in the archive.
    let mut decoder = MultiGzDecoder::new(archive);
    io::copy(&mut decoder.by_ref().take(into), &mut io::sink())?;
    decoder.read_exact(buf)?;
    Ok(())
}

/// Reads `buf.len()` bytes of uncompressed data starting at uncompressed
/// byte `offset`, using `sidecar` to locate the right gzip member in
/// `archive`.
///
/// Returns the number of bytes read: `buf.len()` on success, `0` on any
/// failure (including `buf` being empty, or the request extending past the
/// end of the original data — an over-range read is a failure, never a
/// short/truncated read).
pub fn read<A: Read + Seek, S: Read + Seek>(
    buf: &mut [u8],
    offset: u64,
    archive: &mut A,
    sidecar: &mut S,
) -> usize {
    if buf.is_empty() {
        return 0;
    }
    match read_inner(buf, offset, archive, sidecar) {
        Ok(()) => buf.len(),
        Err(_) => 0,
    }
}

/// A convenience random-access reader over an archive/sidecar pair stored on
/// disk.
///
/// Unlike the original design (which `dup()`s the caller's file descriptor
/// so a `gzFile` can be attached at an arbitrary position without
/// perturbing the caller's own seek position), this type owns its own
/// memory mapping of the archive from the start: there is no shared
/// position to perturb, and random reads are just slices into the mapping.
/// The lookup sidecar is parsed once at open time rather than re-read on
/// every call.
pub struct MgzArchive {
    mmap: Mmap,
    block_size: u64,
    /// `L[0..n_blocks)`, the member start offsets. The terminal offset
    /// (`archive.len()`) is `mmap.len()` and need not be stored.
    offsets: Vec<u64>,
}

impl MgzArchive {
    /// Memory-maps `archive_path` and loads the sidecar at `sidecar_path`
    /// fully into memory.
    pub fn open(archive_path: impl AsRef<Path>, sidecar_path: impl AsRef<Path>) -> io::Result<Self> {
        let archive_file = File::open(archive_path)?;
        // Safety: the file is opened read-only and the mapping is kept
        // alive for the lifetime of `MgzArchive`; concurrent modification of
        // the backing file by another process is outside this crate's
        // contract, same as for any memory-mapped reader.
        let mmap = unsafe { Mmap::map(&archive_file)? };

        let mut sidecar_file = File::open(sidecar_path)?;
        let block_size = read_block_size(&mut sidecar_file)?;
        let mut offsets = Vec::new();
        let mut buf = [0u8; 8];
        loop {
            match sidecar_file.read(&mut buf)? {
                0 => break,
                8 => offsets.push(u64::from_le_bytes(buf)),
                n => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        format!("sidecar entry truncated to {n} bytes"),
                    ))
                }
            }
        }

        Ok(Self {
            mmap,
            block_size,
            offsets,
        })
    }

    /// Total size of the archive in bytes.
    pub fn archive_len(&self) -> u64 {
        self.mmap.len() as u64
    }

    /// Number of blocks recorded in the sidecar.
    pub fn n_blocks(&self) -> u64 {
        self.offsets.len() as u64
    }

    /// Reads `buf.len()` bytes of uncompressed data starting at uncompressed
    /// byte `offset`. Same success/failure contract as [`read`].
    pub fn read_at(&self, buf: &mut [u8], offset: u64) -> usize {
        if buf.is_empty() {
            return 0;
        }
        match self.read_at_inner(buf, offset) {
            Ok(()) => buf.len(),
            Err(_) => 0,
        }
    }

    fn read_at_inner(&self, buf: &mut [u8], offset: u64) -> io::Result<()> {
        let block = (offset / self.block_size) as usize;
        let into = offset % self.block_size;
        let member_start = *self.offsets.get(block).ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "block past end of archive")
        })? as usize;

        let mut decoder = MultiGzDecoder::new(&self.mmap[member_start..]);
        io::copy(&mut decoder.by_ref().take(into), &mut io::sink())?;
        decoder.read_exact(buf)?;
        Ok(())
    }
}
