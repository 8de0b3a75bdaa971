//! The parallel driver (component C): compresses all blocks of a partitioned
//! input concurrently and collects their compressed members in order.

use crate::block::BlockLayout;
use crate::encoder;
use crate::error::MgzError;
use crate::level::compression_for_level;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Compresses every block described by `layout` in parallel, returning the
/// compressed members in block order.
///
/// `level` is validated once up front rather than inside the parallel loop:
/// it is a single caller-supplied value, the same for every block, so there
/// is no reason to pay for (or race on reporting) the same validation
/// n_blocks times, and the caller gets back the precise reason
/// ([`MgzError::InvalidLevel`]) rather than a generic failure.
///
/// Workers share only the read-only `input` slice; each writes a disjoint
/// index of the result vector, so no locking is required. A block that
/// compresses to zero bytes for non-empty input is treated as a failure: the
/// failure flag is set but every worker still runs to completion before it's
/// checked, so no partially-built buffers leak across threads.
pub(crate) fn compress_blocks(
    input: &[u8],
    layout: &BlockLayout,
    level: i32,
) -> Result<Vec<Vec<u8>>, MgzError> {
    compression_for_level(level)?;

    let failed = AtomicBool::new(false);

    let members: Vec<Vec<u8>> = (0..layout.n_blocks)
        .into_par_iter()
        .map(|i| {
            let range = layout.range(i, input.len() as u64);
            match encoder::deflate(&input[range], level) {
                Ok(member) if !member.is_empty() => member,
                Ok(_) | Err(_) => {
                    failed.store(true, Ordering::Relaxed);
                    Vec::new()
                }
            }
        })
        .collect();

    if failed.load(Ordering::Relaxed) {
        return Err(MgzError::BlockCompressionFailed);
    }
    Ok(members)
}
