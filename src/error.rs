use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Invalid salt: must not be empty")]
    EmptySalt,

    #[error("Invalid iteration count: must be positive, got {0}")]
    InvalidIterations(u32),

    #[error("Unsupported envelope version: {0}")]
    UnsupportedVersion(u32),

    // Wrong password and corrupted data are deliberately indistinguishable.
    #[error("Decryption failed: wrong password or corrupted data")]
    DecryptionFailed,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Envelope encode error: {0}")]
    Encode(String),

    #[error("Envelope decode error: {0}")]
    Decode(String),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}
