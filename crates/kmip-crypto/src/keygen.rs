//! Key generation.
//!
//! - Symmetric keys: raw random bytes at a length the algorithm accepts
//! - Asymmetric key pairs: RSA, DER-encoded (PKCS#1 public, PKCS#8 private)

mod asymmetric;
mod symmetric;

pub(crate) use symmetric::create_symmetric_key;

use crate::config::EngineConfig;
use crate::registry::{AsymmetricAlgorithm, CapabilityRegistry};
use crate::Result;
use kmip_core::{CryptographicAlgorithm, KeyFormatType};
use zeroize::Zeroizing;

/// Key bytes plus the format they are encoded in.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    /// Encoded key bytes.
    pub value: Zeroizing<Vec<u8>>,
    /// Encoding of `value`.
    pub format: KeyFormatType,
    /// Public exponent, for RSA key material.
    pub public_exponent: Option<u32>,
}

impl KeyMaterial {
    /// Raw symmetric key bytes.
    pub fn raw(value: Zeroizing<Vec<u8>>) -> Self {
        Self {
            value,
            format: KeyFormatType::Raw,
            public_exponent: None,
        }
    }
}

impl core::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("value", &format_args!("[{} bytes]", self.value.len()))
            .field("format", &self.format)
            .field("public_exponent", &self.public_exponent)
            .finish()
    }
}

/// Generate an asymmetric key pair, returned as `(public, private)`.
///
/// # Errors
///
/// * `Error::InvalidField` - the algorithm is not an enabled asymmetric algorithm,
///   or the modulus size is outside the configured bounds
/// * `Error::CryptographicFailure` - generation or encoding failed
pub(crate) fn create_asymmetric_key_pair(
    registry: &CapabilityRegistry,
    config: &EngineConfig,
    algorithm: CryptographicAlgorithm,
    length_bits: u32,
) -> Result<(KeyMaterial, KeyMaterial)> {
    match registry.asymmetric(algorithm)? {
        AsymmetricAlgorithm::Rsa => asymmetric::create_rsa_key_pair(config, length_bits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Debug output never contains the key bytes.
    #[test]
    fn test_debug_redacts_value() {
        let key = KeyMaterial::raw(Zeroizing::new(vec![0xAB; 4]));
        let rendered = format!("{key:?}");
        assert!(rendered.contains("[4 bytes]"));
        assert!(!rendered.contains("171"));
        assert!(!rendered.to_lowercase().contains("ab, "));
    }
}
