//! Engine configuration.

use serde::Deserialize;

/// Default RSA public exponent (F4).
pub const DEFAULT_RSA_PUBLIC_EXPONENT: u32 = 65537;

/// Tunable limits for the cryptographic engine.
///
/// Deserializes with every field optional so it can be embedded in the
/// server's own configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Public exponent for generated RSA key pairs; must be odd and at least 3.
    pub rsa_public_exponent: u32,
    /// Smallest RSA modulus accepted for key pair generation, in bits.
    pub rsa_min_modulus_bits: usize,
    /// Largest RSA modulus accepted for key pair generation, in bits.
    pub rsa_max_modulus_bits: usize,
    /// Upper bound on PBKDF2 iteration counts.
    pub max_pbkdf2_iterations: u32,
    /// Upper bound on requested derivation lengths, in bytes.
    pub max_derivation_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rsa_public_exponent: DEFAULT_RSA_PUBLIC_EXPONENT,
            rsa_min_modulus_bits: 512,
            rsa_max_modulus_bits: 8192,
            max_pbkdf2_iterations: 10_000_000,
            max_derivation_length: 65_536,
        }
    }
}
