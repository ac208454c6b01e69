//! SSE2 implementation holding one row of the state per 128-bit register.
#![allow(unsafe_op_in_unsafe_fn)]

use crate::{BLOCK_SIZE, Block, DOUBLE_ROUNDS, STATE_WORDS};

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

#[inline]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn block(state: &[u32; STATE_WORDS]) -> Block {
    let state_ptr = state.as_ptr().cast::<__m128i>();
    let v = [
        _mm_loadu_si128(state_ptr.add(0)),
        _mm_loadu_si128(state_ptr.add(1)),
        _mm_loadu_si128(state_ptr.add(2)),
        _mm_loadu_si128(state_ptr.add(3)),
    ];

    let mut res = v;
    for _ in 0..DOUBLE_ROUNDS {
        double_quarter_round(&mut res);
    }
    for i in 0..4 {
        res[i] = _mm_add_epi32(res[i], v[i]);
    }

    // lanes are stored little-endian, matching the serialized word order
    let mut block = [0u8; BLOCK_SIZE];
    let block_ptr = block.as_mut_ptr().cast::<__m128i>();
    for i in 0..4 {
        _mm_storeu_si128(block_ptr.add(i), res[i]);
    }
    block
}

#[inline]
#[target_feature(enable = "sse2")]
unsafe fn double_quarter_round(v: &mut [__m128i; 4]) {
    add_xor_rot(v);
    rows_to_cols(v);
    add_xor_rot(v);
    cols_to_rows(v);
}

/// Rotate rows `a`, `c` and `d` so that each register lane holds one
/// diagonal of the matrix:
/// ```text
/// [ 0,  1,  2,  3]    [ 3,  0,  1,  2]
/// [ 4,  5,  6,  7] => [ 4,  5,  6,  7]
/// [ 8,  9, 10, 11]    [ 9, 10, 11,  8]
/// [12, 13, 14, 15]    [14, 15, 12, 13]
/// ```
///
/// Row `b` stays in place since it is the last row written by
/// [`add_xor_rot`].
#[inline]
#[target_feature(enable = "sse2")]
unsafe fn rows_to_cols([a, _, c, d]: &mut [__m128i; 4]) {
    // c >>>= 32; d >>>= 64; a >>>= 96;
    *c = _mm_shuffle_epi32(*c, 0b_00_11_10_01); // _MM_SHUFFLE(0, 3, 2, 1)
    *d = _mm_shuffle_epi32(*d, 0b_01_00_11_10); // _MM_SHUFFLE(1, 0, 3, 2)
    *a = _mm_shuffle_epi32(*a, 0b_10_01_00_11); // _MM_SHUFFLE(2, 1, 0, 3)
}

/// Inverse of [`rows_to_cols`].
#[inline]
#[target_feature(enable = "sse2")]
unsafe fn cols_to_rows([a, _, c, d]: &mut [__m128i; 4]) {
    // c <<<= 32; d <<<= 64; a <<<= 96;
    *c = _mm_shuffle_epi32(*c, 0b_10_01_00_11); // _MM_SHUFFLE(2, 1, 0, 3)
    *d = _mm_shuffle_epi32(*d, 0b_01_00_11_10); // _MM_SHUFFLE(1, 0, 3, 2)
    *a = _mm_shuffle_epi32(*a, 0b_00_11_10_01); // _MM_SHUFFLE(0, 3, 2, 1)
}

/// Four quarter rounds at once, one per lane.
#[inline]
#[target_feature(enable = "sse2")]
unsafe fn add_xor_rot([a, b, c, d]: &mut [__m128i; 4]) {
    // a += b; d ^= a; d <<<= 16;
    *a = _mm_add_epi32(*a, *b);
    *d = _mm_xor_si128(*d, *a);
    *d = _mm_xor_si128(_mm_slli_epi32(*d, 16), _mm_srli_epi32(*d, 16));

    // c += d; b ^= c; b <<<= 12;
    *c = _mm_add_epi32(*c, *d);
    *b = _mm_xor_si128(*b, *c);
    *b = _mm_xor_si128(_mm_slli_epi32(*b, 12), _mm_srli_epi32(*b, 20));

    // a += b; d ^= a; d <<<= 8;
    *a = _mm_add_epi32(*a, *b);
    *d = _mm_xor_si128(*d, *a);
    *d = _mm_xor_si128(_mm_slli_epi32(*d, 8), _mm_srli_epi32(*d, 24));

    // c += d; b ^= c; b <<<= 7;
    *c = _mm_add_epi32(*c, *d);
    *b = _mm_xor_si128(*b, *c);
    *b = _mm_xor_si128(_mm_slli_epi32(*b, 7), _mm_srli_epi32(*b, 25));
}
