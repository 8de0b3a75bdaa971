//! The concatenator / lookup builder (component D): lays out compressed
//! members into one contiguous archive buffer and computes the lookup
//! table as a prefix sum over member sizes.

/// What [`crate::parallel_deflate`] hands back to its caller.
///
/// An empty bundle (no archive, no lookup, zero blocks) denotes empty input;
/// any error case is instead surfaced as `Err` by the caller rather than
/// folded into this type, since Rust has `Result` for that.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    /// The concatenated gzip members, in block order. Empty iff the input
    /// was empty.
    pub archive: Vec<u8>,
    /// `L[0..=n_blocks]`: byte offset of each block's member within
    /// `archive`, plus the terminal `archive.len()`. `None` unless a lookup
    /// table was requested.
    pub lookup: Option<Vec<u64>>,
    /// Number of blocks the input was split into.
    pub n_blocks: u64,
}

impl Bundle {
    /// The bundle produced for empty input.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Splits `buf` into consecutive, disjoint mutable slices of the given
/// `sizes`, in order. `sizes` must sum to `buf.len()`.
fn split_by_sizes(mut buf: &mut [u8], sizes: &[usize]) -> Vec<&mut [u8]> {
    let mut pieces = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let (head, tail) = buf.split_at_mut(size);
        pieces.push(head);
        buf = tail;
    }
    pieces
}

/// Concatenates `members` (already compressed, in block order) into a single
/// archive buffer and computes the lookup table when `want_lookup` is set.
///
/// The destination region for each member is disjoint from every other, so
/// the copy is parallelized with `rayon` the same way the compression step
/// is: each worker owns one index, no synchronization needed.
pub(crate) fn concatenate(members: Vec<Vec<u8>>, want_lookup: bool) -> Bundle {
    let n_blocks = members.len() as u64;

    let mut offsets = Vec::with_capacity(members.len() + 1);
    let mut total: u64 = 0;
    offsets.push(0);
    for member in &members {
        total += member.len() as u64;
        offsets.push(total);
    }

    let sizes: Vec<usize> = members.iter().map(Vec::len).collect();
    let mut archive = vec![0u8; total as usize];
    {
        use rayon::prelude::*;
        let slices = split_by_sizes(&mut archive, &sizes);
        slices
            .into_par_iter()
            .zip(members.into_par_iter())
            .for_each(|(dst, src)| dst.copy_from_slice(&src));
    }

    Bundle {
        archive,
        lookup: want_lookup.then_some(offsets),
        n_blocks,
    }
}
