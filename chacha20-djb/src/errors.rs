//! Error types.
use core::fmt;

/// Error returned when a [`ChaChaState`](crate::ChaChaState) is built from
/// byte slices of the wrong length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The key was not [`KEY_SIZE`](crate::KEY_SIZE) bytes long.
    InvalidKeyLength {
        /// Length of the rejected key.
        len: usize,
    },
    /// The nonce was not [`NONCE_SIZE`](crate::NONCE_SIZE) bytes long.
    InvalidNonceLength {
        /// Length of the rejected nonce.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyLength { len } => write!(
                f,
                "invalid key length: expected {} bytes, got {len}",
                crate::KEY_SIZE
            ),
            Self::InvalidNonceLength { len } => write!(
                f,
                "invalid nonce length: expected {} bytes, got {len}",
                crate::NONCE_SIZE
            ),
        }
    }
}

impl core::error::Error for Error {}
