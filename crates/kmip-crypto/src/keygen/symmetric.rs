//! Symmetric key generation.

use super::KeyMaterial;
use crate::pipeline::CipherInstance;
use crate::registry::CapabilityRegistry;
use crate::rng::random_bytes;
use crate::{Error, Result};
use kmip_core::CryptographicAlgorithm;

/// Generate a random symmetric key of `length_bits` for `algorithm`.
///
/// The key is instantiated once to confirm the primitive accepts it.
///
/// # Errors
///
/// * `Error::InvalidField` - unsupported algorithm, or a length the algorithm
///   does not accept
/// * `Error::CryptographicFailure` - the primitive rejected the generated key
pub(crate) fn create_symmetric_key(
    registry: &CapabilityRegistry,
    algorithm: CryptographicAlgorithm,
    length_bits: u32,
) -> Result<KeyMaterial> {
    let resolved = registry.symmetric(algorithm).map_err(|_| {
        Error::invalid_field(format!(
            "The cryptographic algorithm {algorithm:?} is not a supported symmetric key algorithm."
        ))
    })?;

    if !resolved.key_sizes().contains(length_bits) {
        return Err(Error::invalid_field(format!(
            "The cryptographic length ({length_bits}) is not valid for the cryptographic algorithm ({algorithm:?})."
        )));
    }

    tracing::info!(?algorithm, length_bits, "Generating symmetric key");

    let value = random_bytes(length_bits as usize / 8)?;
    CipherInstance::new(resolved, &value)?;

    Ok(KeyMaterial::raw(value))
}
