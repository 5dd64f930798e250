//! Password-based seal/open of the versioned envelope.
//!
//! seal: fresh 16-byte salt + 12-byte IV, PBKDF2 key, AES-256-GCM, no AAD.
//! open: version gate, then the envelope's own salt and iteration count.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::entropy::{EntropySource, OsEntropy};
use crate::error::CryptoError;
use crate::kdf::derive_key;
use crate::types::{
    Envelope, AES_GCM_IV_LENGTH, CURRENT_VERSION, DEFAULT_ITERATIONS, SALT_LENGTH,
    SUPPORTED_VERSIONS,
};

/// Seals and opens envelopes with a caller-supplied password.
///
/// Stateless beyond its entropy source; both operations own all of their key
/// material per call, so a codec may be shared across threads freely.
pub struct EnvelopeCodec<R: EntropySource = OsEntropy> {
    entropy: R,
}

impl EnvelopeCodec<OsEntropy> {
    /// Codec backed by the operating system's secure random source.
    pub fn new() -> Self {
        Self { entropy: OsEntropy }
    }
}

impl Default for EnvelopeCodec<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: EntropySource> EnvelopeCodec<R> {
    /// Codec backed by a custom entropy source (deterministic in tests).
    pub fn with_entropy(entropy: R) -> Self {
        Self { entropy }
    }

    /// Encrypt `plaintext` under `password` into a fresh envelope.
    ///
    /// Every call generates a new random salt and IV; the envelope records
    /// the iteration count actually used so it stays decryptable after the
    /// default changes.
    pub fn seal(&self, password: &str, plaintext: &str) -> Result<Envelope, CryptoError> {
        let mut salt = [0u8; SALT_LENGTH];
        self.entropy.fill(&mut salt)?;
        let mut iv = [0u8; AES_GCM_IV_LENGTH];
        self.entropy.fill(&mut iv)?;

        let key = derive_key(password, &salt, DEFAULT_ITERATIONS)?;
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&iv), plaintext.as_bytes())
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

        Ok(Envelope {
            version: CURRENT_VERSION,
            salt: salt.to_vec(),
            iv: iv.to_vec(),
            ciphertext,
            iterations: DEFAULT_ITERATIONS,
        })
    }

    /// Decrypt an envelope sealed with `password`.
    ///
    /// Derives the key from the envelope's own salt and iteration count,
    /// never the current defaults. Wrong password, tampered or structurally
    /// corrupted data, and a malformed plaintext encoding all surface as the
    /// single [`CryptoError::DecryptionFailed`].
    pub fn open(&self, password: &str, envelope: &Envelope) -> Result<String, CryptoError> {
        if !SUPPORTED_VERSIONS.contains(&envelope.version) {
            return Err(CryptoError::UnsupportedVersion(envelope.version));
        }

        let key = derive_key(password, &envelope.salt, envelope.iterations)?;

        // Nonce::from_slice panics on length mismatch; a wrong-length IV is
        // corruption and takes the same undifferentiated error path.
        if envelope.iv.len() != AES_GCM_IV_LENGTH {
            return Err(CryptoError::DecryptionFailed);
        }
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|_| CryptoError::DecryptionFailed)?;
        let plaintext = cipher
            .decrypt(Nonce::from_slice(&envelope.iv), envelope.ciphertext.as_slice())
            .map_err(|_| CryptoError::DecryptionFailed)?;

        String::from_utf8(plaintext).map_err(|_| CryptoError::DecryptionFailed)
    }
}

/// Seal with the OS entropy source.
pub fn seal(password: &str, plaintext: &str) -> Result<Envelope, CryptoError> {
    EnvelopeCodec::new().seal(password, plaintext)
}

/// Open with the OS entropy source.
pub fn open(password: &str, envelope: &Envelope) -> Result<String, CryptoError> {
    EnvelopeCodec::new().open(password, envelope)
}
