//! [`cipher`] trait implementations on top of [`ChaChaState`].

use crate::ChaChaState;
use cipher::{
    Block, BlockSizeUser, IvSizeUser, KeyIvInit, KeySizeUser, ParBlocksSizeUser,
    StreamCipherBackend, StreamCipherClosure, StreamCipherCore, StreamCipherCoreWrapper,
    StreamCipherSeekCore,
    array::Array,
    consts::{U1, U8, U32, U64},
};

#[cfg(feature = "zeroize")]
use zeroize::ZeroizeOnDrop;

/// Key type used by [`ChaCha20`].
pub type Key = Array<u8, U32>;

/// Nonce type used by [`ChaCha20`].
pub type Nonce = Array<u8, U8>;

/// The ChaCha20 stream cipher with a 64-bit nonce and 64-bit block counter.
///
/// Applying the keystream past the end of the counter range is refused by
/// the wrapper instead of wrapping around.
pub type ChaCha20 = StreamCipherCoreWrapper<ChaCha20Core>;

/// The ChaCha20 core function, driving a [`ChaChaState`] one block at a time.
#[derive(Clone, Debug)]
pub struct ChaCha20Core(ChaChaState);

impl ChaCha20Core {
    /// Wrap an existing state, keeping its block position.
    #[must_use]
    pub fn from_state(state: ChaChaState) -> Self {
        Self(state)
    }

    /// The underlying state.
    #[must_use]
    pub fn state(&self) -> &ChaChaState {
        &self.0
    }
}

impl KeySizeUser for ChaCha20Core {
    type KeySize = U32;
}

impl IvSizeUser for ChaCha20Core {
    type IvSize = U8;
}

impl BlockSizeUser for ChaCha20Core {
    type BlockSize = U64;
}

impl KeyIvInit for ChaCha20Core {
    #[inline]
    fn new(key: &Key, iv: &Nonce) -> Self {
        Self(ChaChaState::new(key.as_ref(), iv.as_ref()))
    }
}

impl StreamCipherCore for ChaCha20Core {
    #[inline(always)]
    fn remaining_blocks(&self) -> Option<usize> {
        self.0.remaining_blocks().try_into().ok()
    }

    #[inline(always)]
    fn process_with_backend(&mut self, f: impl StreamCipherClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut Backend(&mut self.0));
    }
}

impl StreamCipherSeekCore for ChaCha20Core {
    type Counter = u64;

    #[inline(always)]
    fn get_block_pos(&self) -> u64 {
        self.0.block_pos()
    }

    #[inline(always)]
    fn set_block_pos(&mut self, pos: u64) {
        self.0.set_block_pos(pos);
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for ChaCha20Core {}

struct Backend<'a>(&'a mut ChaChaState);

impl BlockSizeUser for Backend<'_> {
    type BlockSize = U64;
}

impl ParBlocksSizeUser for Backend<'_> {
    type ParBlocksSize = U1;
}

impl StreamCipherBackend for Backend<'_> {
    #[inline(always)]
    fn gen_ks_block(&mut self, block: &mut Block<Self>) {
        block.copy_from_slice(&self.0.next_block());
    }
}
