//! Portable implementation which does not rely on architecture-specific
//! intrinsics.

use crate::{BLOCK_SIZE, Block, DOUBLE_ROUNDS, STATE_WORDS, quarter_round};

#[inline(always)]
pub(crate) fn block(state: &[u32; STATE_WORDS]) -> Block {
    let res = run_rounds(state);

    let mut block = [0u8; BLOCK_SIZE];
    for (chunk, val) in block.chunks_exact_mut(4).zip(res.iter()) {
        chunk.copy_from_slice(&val.to_le_bytes());
    }
    block
}

#[inline(always)]
fn run_rounds(state: &[u32; STATE_WORDS]) -> [u32; STATE_WORDS] {
    let mut res = *state;

    for _ in 0..DOUBLE_ROUNDS {
        // column rounds
        mix(0, 4, 8, 12, &mut res);
        mix(1, 5, 9, 13, &mut res);
        mix(2, 6, 10, 14, &mut res);
        mix(3, 7, 11, 15, &mut res);

        // diagonal rounds
        mix(0, 5, 10, 15, &mut res);
        mix(1, 6, 11, 12, &mut res);
        mix(2, 7, 8, 13, &mut res);
        mix(3, 4, 9, 14, &mut res);
    }

    for (s1, s0) in res.iter_mut().zip(state.iter()) {
        *s1 = s1.wrapping_add(*s0);
    }
    res
}

/// Apply [`quarter_round`] to the words at indices `a`, `b`, `c`, `d`.
#[inline(always)]
fn mix(a: usize, b: usize, c: usize, d: usize, state: &mut [u32; STATE_WORDS]) {
    (state[a], state[b], state[c], state[d]) = quarter_round(state[a], state[b], state[c], state[d]);
}
