pub mod base64;
pub mod codec;
pub mod entropy;
pub mod envelope;
pub mod error;
pub mod kdf;
pub mod types;

pub use base64::{base64_decode, base64_encode};
pub use codec::{open, seal, EnvelopeCodec};
pub use entropy::{EntropySource, OsEntropy};
pub use envelope::{decode_envelope, encode_envelope};
pub use error::CryptoError;
pub use kdf::{derive_key, DerivedKey};
pub use types::{
    Envelope, AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH, AES_KEY_LENGTH, CURRENT_VERSION,
    DEFAULT_ITERATIONS, SALT_LENGTH, SUPPORTED_VERSIONS,
};
