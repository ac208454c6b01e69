//! Keystream core of the original [ChaCha20] stream cipher: 256-bit key,
//! 64-bit nonce and 64-bit block counter.
//!
//! The crate produces raw 64-byte keystream blocks. Combining the keystream
//! with data is left to the caller, or to the [`cipher`] crate through the
//! [`ChaCha20`] adapter (enabled by the default `cipher` feature).
//!
//! # ⚠️ Security Warning: Hazmat!
//!
//! This crate does not ensure ciphertexts are authentic, and it does not
//! prevent nonce reuse. Reusing a (key, nonce) pair reveals the XOR of the
//! two plaintexts.
//!
//! USE AT YOUR OWN RISK!
//!
//! # State layout
//!
//! ```text
//! cccccccc  cccccccc  cccccccc  cccccccc
//! kkkkkkkk  kkkkkkkk  kkkkkkkk  kkkkkkkk
//! kkkkkkkk  kkkkkkkk  kkkkkkkk  kkkkkkkk
//! bbbbbbbb  bbbbbbbb  nnnnnnnn  nnnnnnnn
//!
//! c=constant k=key b=block counter (low, high) n=nonce
//! ```
//!
//! # Example
//! ```
//! use chacha20_djb::ChaChaState;
//! use hex_literal::hex;
//!
//! let mut state = ChaChaState::new(&[0u8; 32], &[0u8; 8]);
//!
//! let block = state.next_block();
//! assert_eq!(block[..8], hex!("76b8e0ada0f13d90"));
//! assert_eq!(state.block_pos(), 1);
//!
//! // lengths are checked when the key and nonce come from slices
//! assert!(ChaChaState::initialize(&[0u8; 16], &[0u8; 8]).is_err());
//! ```
//!
//! [ChaCha20]: https://cr.yp.to/chacha/chacha-20080128.pdf

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]
#![warn(rust_2018_idioms)]

#[cfg(feature = "cipher")]
pub use cipher;

mod backends;
mod errors;
#[cfg(feature = "cipher")]
mod stream;

pub use errors::Error;
#[cfg(feature = "cipher")]
pub use stream::{ChaCha20, ChaCha20Core, Key, Nonce};

use core::fmt;

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of a ChaCha20 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of a ChaCha20 nonce in bytes.
pub const NONCE_SIZE: usize = 8;

/// Size of a keystream block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in the ChaCha state.
pub const STATE_WORDS: usize = 16;

/// State initialization constant ("expand 32-byte k")
const CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// 20 rounds, run as column/diagonal pairs.
const DOUBLE_ROUNDS: usize = 10;

/// One 64-byte block of keystream.
pub type Block = [u8; BLOCK_SIZE];

/// The ChaCha quarter round: four add-rotate-xor steps over `(a, b, c, d)`.
///
/// Additions wrap modulo 2^32. The function is branch-free.
#[inline(always)]
#[must_use]
pub const fn quarter_round(mut a: u32, mut b: u32, mut c: u32, mut d: u32) -> (u32, u32, u32, u32) {
    a = a.wrapping_add(b);
    d ^= a;
    d = d.rotate_left(16);

    c = c.wrapping_add(d);
    b ^= c;
    b = b.rotate_left(12);

    a = a.wrapping_add(b);
    d ^= a;
    d = d.rotate_left(8);

    c = c.wrapping_add(d);
    b ^= c;
    b = b.rotate_left(7);

    (a, b, c, d)
}

/// The 16-word ChaCha20 state matrix for one (key, nonce) pair.
///
/// Only the block counter (words 12 and 13) changes over the lifetime of a
/// state. Clone the state to hand an independent copy to another worker.
#[derive(Clone)]
pub struct ChaChaState {
    state: [u32; STATE_WORDS],
}

impl ChaChaState {
    /// Build the initial state from a key and a nonce, with the block
    /// counter set to zero.
    #[must_use]
    pub fn new(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE]) -> Self {
        let mut state = [0u32; STATE_WORDS];
        state[..4].copy_from_slice(&CONSTANTS);
        read_le_words(&mut state[4..12], key);
        read_le_words(&mut state[14..16], nonce);
        Self { state }
    }

    /// Build the initial state from byte slices, checking their lengths.
    ///
    /// # Errors
    /// Returns [`Error::InvalidKeyLength`] if `key` is not [`KEY_SIZE`] bytes
    /// long, or [`Error::InvalidNonceLength`] if `nonce` is not
    /// [`NONCE_SIZE`] bytes long.
    pub fn initialize(key: &[u8], nonce: &[u8]) -> Result<Self, Error> {
        let key: &[u8; KEY_SIZE] = key
            .try_into()
            .map_err(|_| Error::InvalidKeyLength { len: key.len() })?;
        let nonce: &[u8; NONCE_SIZE] = nonce
            .try_into()
            .map_err(|_| Error::InvalidNonceLength { len: nonce.len() })?;
        Ok(Self::new(key, nonce))
    }

    /// Produce the keystream block at the current position and advance the
    /// block counter by one.
    ///
    /// The counter wraps from `u64::MAX` back to zero; check
    /// [`remaining_blocks`](Self::remaining_blocks) to avoid it.
    #[inline]
    pub fn next_block(&mut self) -> Block {
        let block = backends::block(&self.state);
        self.increment_counter();
        block
    }

    /// Index of the block the next call to [`next_block`](Self::next_block)
    /// will produce.
    #[inline]
    #[must_use]
    pub fn block_pos(&self) -> u64 {
        (u64::from(self.state[13]) << 32) | u64::from(self.state[12])
    }

    /// Move the block counter to `pos`, giving random access into the
    /// keystream.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_block_pos(&mut self, pos: u64) {
        self.state[12] = pos as u32;
        self.state[13] = (pos >> 32) as u32;
    }

    /// Number of blocks that can still be produced after the current one
    /// before the counter wraps around.
    #[inline]
    #[must_use]
    pub fn remaining_blocks(&self) -> u64 {
        u64::MAX - self.block_pos()
    }

    /// The raw state matrix.
    #[must_use]
    pub fn as_words(&self) -> &[u32; STATE_WORDS] {
        &self.state
    }

    #[inline(always)]
    fn increment_counter(&mut self) {
        self.state[12] = self.state[12].wrapping_add(1);
        if self.state[12] == 0 {
            self.state[13] = self.state[13].wrapping_add(1);
        }
    }
}

/// Read little-endian words from `bytes` into `words`, four bytes per word.
#[inline(always)]
fn read_le_words(words: &mut [u32], bytes: &[u8]) {
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

impl fmt::Debug for ChaChaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaChaState")
            .field("block_pos", &self.block_pos())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl Drop for ChaChaState {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for ChaChaState {}
