use crate::{Block, STATE_WORDS};
use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(chacha20_backend = "soft")] {
        pub(crate) mod soft;

        #[inline(always)]
        pub(crate) fn block(state: &[u32; STATE_WORDS]) -> Block {
            soft::block(state)
        }
    } else if #[cfg(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2"
    ))] {
        pub(crate) mod sse2;
        #[cfg(test)]
        pub(crate) mod soft;

        #[inline(always)]
        pub(crate) fn block(state: &[u32; STATE_WORDS]) -> Block {
            // SAFETY: `sse2` is enabled for the whole compilation target
            unsafe { sse2::block(state) }
        }
    } else {
        pub(crate) mod soft;

        #[inline(always)]
        pub(crate) fn block(state: &[u32; STATE_WORDS]) -> Block {
            soft::block(state)
        }
    }
}
