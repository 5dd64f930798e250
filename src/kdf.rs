//! PBKDF2-HMAC-SHA256 key derivation.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::CryptoError;
use crate::types::AES_KEY_LENGTH;

/// A 256-bit key derived from a password.
///
/// Zeroized from memory on drop. `Debug` output redacts the key bytes.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey([u8; AES_KEY_LENGTH]);

impl DerivedKey {
    /// The raw key bytes. Use only for immediate cipher construction.
    pub fn as_bytes(&self) -> &[u8; AES_KEY_LENGTH] {
        &self.0
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DerivedKey").field(&"[REDACTED]").finish()
    }
}

/// Derive a 256-bit key from a password using PBKDF2-HMAC-SHA256.
///
/// Deterministic: the same (password, salt, iterations) always yields the
/// same key. `iterations` is an explicit parameter because decryption must
/// replay the count recorded in the envelope, not the current default.
///
/// # Errors
/// Rejects an empty salt and a zero iteration count; defaults are never
/// substituted.
pub fn derive_key(
    password: &str,
    salt: &[u8],
    iterations: u32,
) -> Result<DerivedKey, CryptoError> {
    if salt.is_empty() {
        return Err(CryptoError::EmptySalt);
    }
    if iterations == 0 {
        return Err(CryptoError::InvalidIterations(iterations));
    }

    let mut key = [0u8; AES_KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    Ok(DerivedKey(key))
}
