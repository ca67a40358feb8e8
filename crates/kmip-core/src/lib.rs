//! KMIP protocol enumerations consumed by the cryptographic engine.
//!
//! The payload layer decodes these from TTLV fields and hands them to
//! `kmip-crypto`; results flow back through [`ResultReason`] and [`ResultStatus`].
//! Every enumeration keeps its KMIP 32-bit wire value:
//! - Cryptographic algorithms, block cipher modes and padding methods
//! - Hashing algorithms and derivation methods
//! - Key wrapping methods and key format types
//! - Operation result status and reason codes

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod enums;
pub mod result;

pub use enums::{
    BlockCipherMode, CryptographicAlgorithm, DerivationMethod, HashingAlgorithm, KeyFormatType,
    PaddingMethod, WrappingMethod,
};
pub use result::{ResultReason, ResultStatus};
