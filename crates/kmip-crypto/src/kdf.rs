//! Key derivation.
//!
//! Dispatches on the protocol derivation method:
//! - `HMAC`: HKDF extract-and-expand (RFC 5869)
//! - `HASH`: plain digest of a single input
//! - `PBKDF2`: HMAC-based PBKDF2 (RFC 8018)
//! - `NIST800_108_C`: SP 800-108 counter mode with HMAC as the PRF
//! - `ENCRYPT`: encryption of the derivation data through the cipher pipeline
//!
//! Hash-based methods resolve the hash before looking at any other input.

use crate::config::EngineConfig;
use crate::pipeline::{self, CipherParameters};
use crate::registry::{CapabilityRegistry, HashFunction};
use crate::{Error, Result};
use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use kmip_core::{
    BlockCipherMode, CryptographicAlgorithm, DerivationMethod, HashingAlgorithm, PaddingMethod,
};
use sha2::Digest;
use zeroize::Zeroizing;

/// Optional inputs to a key derivation.
///
/// Which fields are consulted depends on the derivation method.
///
/// # Example
///
/// ```
/// use kmip_crypto::kdf::DerivationRequest;
/// use kmip_core::HashingAlgorithm;
///
/// let request = DerivationRequest::new()
///     .key_material(b"password")
///     .salt(b"salt")
///     .iterations(4096)
///     .hash(HashingAlgorithm::Sha256);
/// assert_eq!(request.iterations, Some(4096));
/// ```
#[derive(Clone, Copy, Default)]
pub struct DerivationRequest<'a> {
    /// Derivation data: HKDF info, hash input, SP 800-108 fixed input, or plaintext.
    pub data: Option<&'a [u8]>,
    /// Secret input: HKDF/PBKDF2/SP 800-108 key, hash input, or encryption key.
    pub key_material: Option<&'a [u8]>,
    /// Hash function for the hash-based methods.
    pub hash: Option<HashingAlgorithm>,
    /// Salt for HKDF (optional) and PBKDF2 (required).
    pub salt: Option<&'a [u8]>,
    /// PBKDF2 iteration count.
    pub iterations: Option<u32>,
    /// Cipher for the `ENCRYPT` method.
    pub encryption_algorithm: Option<CryptographicAlgorithm>,
    /// Block cipher mode for the `ENCRYPT` method.
    pub mode: Option<BlockCipherMode>,
    /// Padding method for the `ENCRYPT` method.
    pub padding: Option<PaddingMethod>,
    /// IV/nonce for the `ENCRYPT` method.
    pub iv: Option<&'a [u8]>,
}

impl<'a> DerivationRequest<'a> {
    /// Empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the derivation data.
    pub fn data(mut self, data: &'a [u8]) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the secret input.
    pub fn key_material(mut self, key_material: &'a [u8]) -> Self {
        self.key_material = Some(key_material);
        self
    }

    /// Set the hash function.
    pub fn hash(mut self, hash: HashingAlgorithm) -> Self {
        self.hash = Some(hash);
        self
    }

    /// Set the salt.
    pub fn salt(mut self, salt: &'a [u8]) -> Self {
        self.salt = Some(salt);
        self
    }

    /// Set the PBKDF2 iteration count.
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Set the cipher for the `ENCRYPT` method.
    pub fn encryption_algorithm(mut self, algorithm: CryptographicAlgorithm) -> Self {
        self.encryption_algorithm = Some(algorithm);
        self
    }

    /// Set the block cipher mode for the `ENCRYPT` method.
    pub fn mode(mut self, mode: BlockCipherMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the padding method for the `ENCRYPT` method.
    pub fn padding(mut self, padding: PaddingMethod) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set the IV/nonce for the `ENCRYPT` method.
    pub fn iv(mut self, iv: &'a [u8]) -> Self {
        self.iv = Some(iv);
        self
    }
}

/// Derive key material with `method`.
///
/// # Arguments
/// * `length` - Output length in bytes; ignored by `HASH` and `ENCRYPT`, whose
///   output size is fixed by the primitive
///
/// # Errors
///
/// * `Error::InvalidField` - unsupported method or hash, a required input is
///   missing, or `length`/`iterations` is out of range
/// * `Error::CryptographicFailure` - the primitive rejected the inputs
pub(crate) fn derive_key(
    registry: &CapabilityRegistry,
    config: &EngineConfig,
    method: DerivationMethod,
    length: usize,
    request: &DerivationRequest<'_>,
) -> Result<Zeroizing<Vec<u8>>> {
    tracing::debug!(?method, length, "Dispatching key derivation");

    match method {
        DerivationMethod::Encrypt => derive_by_encryption(registry, request),
        DerivationMethod::Hash => {
            let hash = registry.hash(request.hash)?;
            let input = match (request.data, request.key_material) {
                (Some(data), None) => data,
                (None, Some(key_material)) => key_material,
                _ => {
                    return Err(Error::invalid_field(
                        "For hash-based derivation, specify only derivation data or key material, not both.",
                    ))
                }
            };
            Ok(digest(hash, input))
        }
        DerivationMethod::Hmac => {
            let hash = registry.hash(request.hash)?;
            check_length(config, length)?;
            let secret = required(request.key_material, "Key material is required.")?;
            hkdf(hash, request.salt, secret, request.data.unwrap_or_default(), length)
        }
        DerivationMethod::Pbkdf2 => {
            let hash = registry.hash(request.hash)?;
            let salt = required(request.salt, "For PBKDF2 derivation, a salt must be specified.")?;
            let iterations = request.iterations.ok_or_else(|| {
                Error::invalid_field(
                    "For PBKDF2 derivation, an iteration count must be specified.",
                )
            })?;
            if iterations == 0 || iterations > config.max_pbkdf2_iterations {
                return Err(Error::invalid_field(format!(
                    "PBKDF2 iteration count must be between 1 and {}.",
                    config.max_pbkdf2_iterations
                )));
            }
            check_length(config, length)?;
            let password = required(request.key_material, "Key material is required.")?;
            Ok(pbkdf2(hash, password, salt, iterations, length))
        }
        DerivationMethod::Nist800_108C => {
            let hash = registry.hash(request.hash)?;
            check_length(config, length)?;
            let key = required(request.key_material, "Key material is required.")?;
            let fixed_input = required(request.data, "Derivation data is required.")?;
            kbkdf_counter(hash, key, fixed_input, length)
        }
        DerivationMethod::Nist800_108F
        | DerivationMethod::Nist800_108Dpi
        | DerivationMethod::AsymmetricKey => Err(Error::invalid_field(format!(
            "Derivation method {method:?} is not supported."
        ))),
    }
}

fn derive_by_encryption(
    registry: &CapabilityRegistry,
    request: &DerivationRequest<'_>,
) -> Result<Zeroizing<Vec<u8>>> {
    let algorithm = request.encryption_algorithm.ok_or_else(|| {
        Error::invalid_field("For encryption-based derivation, an encryption algorithm is required.")
    })?;
    let parameters = CipherParameters {
        algorithm,
        key: required(request.key_material, "Key material is required.")?,
        mode: request.mode,
        padding: request.padding,
        iv: request.iv,
    };
    let data = required(request.data, "Derivation data is required.")?;

    // A generated IV is dropped with the rest of the result
    let result = pipeline::encrypt(registry, &parameters, data)?;
    Ok(Zeroizing::new(result.ciphertext))
}

fn required<'a>(value: Option<&'a [u8]>, message: &str) -> Result<&'a [u8]> {
    value.ok_or_else(|| Error::invalid_field(message))
}

fn check_length(config: &EngineConfig, length: usize) -> Result<()> {
    if length == 0 || length > config.max_derivation_length {
        return Err(Error::invalid_field(format!(
            "Derivation length must be between 1 and {} bytes.",
            config.max_derivation_length
        )));
    }
    Ok(())
}

fn digest(hash: HashFunction, input: &[u8]) -> Zeroizing<Vec<u8>> {
    with_hash!(hash, H => Zeroizing::new(H::digest(input).to_vec()))
}

fn hkdf(
    hash: HashFunction,
    salt: Option<&[u8]>,
    secret: &[u8],
    info: &[u8],
    length: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    with_hash!(hash, H => {
        let hk = Hkdf::<H>::new(salt, secret);
        let mut okm = Zeroizing::new(vec![0u8; length]);
        hk.expand(info, &mut okm)
            .map_err(|e| Error::crypto_failure("HKDF expansion failed.", e))?;
        Ok(okm)
    })
}

fn pbkdf2(
    hash: HashFunction,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    length: usize,
) -> Zeroizing<Vec<u8>> {
    let mut output = Zeroizing::new(vec![0u8; length]);
    with_hash!(hash, H => pbkdf2::pbkdf2_hmac::<H>(password, salt, iterations, &mut output));
    output
}

/// SP 800-108 counter mode: `K(i) = HMAC(key, [i]_32 || fixed_input)` for
/// `i = 1..`, concatenated and truncated to `length`.
fn kbkdf_counter(
    hash: HashFunction,
    key: &[u8],
    fixed_input: &[u8],
    length: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let blocks = length.div_ceil(hash.digest_size());
    let mut output = Zeroizing::new(Vec::with_capacity(blocks * hash.digest_size()));

    for counter in 1..=blocks {
        let counter = u32::try_from(counter).map_err(|_| {
            Error::invalid_field("Derivation length exceeds the counter range.")
        })?;
        with_hash!(hash, H => {
            let mut prf = <Hmac<H> as Mac>::new_from_slice(key)
                .map_err(|e| Error::crypto_failure("SP 800-108 key derivation failed.", e))?;
            prf.update(&counter.to_be_bytes());
            prf.update(fixed_input);
            output.extend_from_slice(&prf.finalize().into_bytes());
        });
    }

    output.truncate(length);
    Ok(output)
}
