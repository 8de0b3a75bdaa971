//! The partitioner (component B): splits input into fixed-size blocks.

use std::ops::Range;

/// Smallest block size the caller may request; anything below this is
/// floored up to it.
pub const MIN_BLOCK_SIZE: u64 = 16384;

/// Block size used when the caller passes `0`.
pub const DEFAULT_BLOCK_SIZE: u64 = 1 << 20;

/// Normalizes a requested block size: `0` becomes [`DEFAULT_BLOCK_SIZE`],
/// anything below [`MIN_BLOCK_SIZE`] is floored up to it (with a warning),
/// anything else passes through unchanged.
pub fn effective_block_size(block_size: u64) -> u64 {
    if block_size == 0 {
        DEFAULT_BLOCK_SIZE
    } else if block_size < MIN_BLOCK_SIZE {
        log::warn!(
            "requested block size {block_size} is below the minimum {MIN_BLOCK_SIZE}; \
             using {MIN_BLOCK_SIZE} instead"
        );
        MIN_BLOCK_SIZE
    } else {
        block_size
    }
}

/// The block layout for a given input length: the normalized block size and
/// the number of blocks that length splits into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    pub block_size: u64,
    pub n_blocks: u64,
}

impl BlockLayout {
    /// Computes the layout for `input_len` bytes of input and a requested
    /// (possibly zero or sub-minimum) `block_size`.
    pub fn new(input_len: u64, block_size: u64) -> Self {
        let block_size = effective_block_size(block_size);
        let n_blocks = if input_len == 0 {
            0
        } else {
            // Round-up division.
            (input_len + block_size - 1) / block_size
        };
        Self {
            block_size,
            n_blocks,
        }
    }

    /// The byte range of block `index` within an input of length
    /// `input_len`. Only the final block may be shorter than `block_size`.
    pub fn range(&self, index: u64, input_len: u64) -> Range<usize> {
        debug_assert!(index < self.n_blocks);
        let start = index * self.block_size;
        let end = std::cmp::min(start + self.block_size, input_len);
        start as usize..end as usize
    }
}
