//! Cryptographic operations engine for a KMIP server.
//!
//! The payload layer decodes protocol fields and calls one engine operation:
//! - Key generation (symmetric keys, RSA key pairs)
//! - MAC (HMAC over MD5/SHA-1/SHA-2, CMAC over every block cipher)
//! - Symmetric encryption and decryption (CBC, ECB, CFB, OFB, CTR, plus RC4)
//! - Key derivation (HKDF, hash, PBKDF2, SP 800-108 counter mode, encryption)
//! - Key wrapping (AES Key Wrap, RFC 3394)
//!
//! Every operation validates its arguments against an immutable
//! [`CapabilityRegistry`] and fails with one of two error kinds:
//! - [`Error::InvalidField`] when the request is wrong
//! - [`Error::CryptographicFailure`] when a primitive rejects the input; the
//!   detail goes to the `tracing` log, never to the caller
//!
//! Security notes:
//! - Secret outputs are wrapped in `Zeroizing`
//! - All randomness comes from `OsRng`
//! - Key material, IVs and plaintext are never logged

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod config;
pub mod engine;
pub mod error;
pub mod kdf;
mod keygen;
mod mac;
mod pipeline;
pub mod registry;
mod rng;
mod wrap;

pub use config::EngineConfig;
pub use engine::{CryptographicEngine, CryptographyEngine};
pub use error::{Error, ErrorKind, Result};
pub use kdf::DerivationRequest;
pub use keygen::KeyMaterial;
pub use pipeline::EncryptResult;
pub use registry::{CapabilityRegistry, STANDARD_REGISTRY};
