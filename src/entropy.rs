//! Secure random source for salt and IV generation.
//!
//! The source is injectable so tests can drive the codec with deterministic
//! fills; production code uses [`OsEntropy`].

use crate::error::CryptoError;

/// A cryptographically secure random source.
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes, or fail without partial output.
    fn fill(&self, dest: &mut [u8]) -> Result<(), CryptoError>;
}

/// The operating system's secure random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        getrandom::getrandom(dest).map_err(|e| CryptoError::RngFailed(e.to_string()))
    }
}
