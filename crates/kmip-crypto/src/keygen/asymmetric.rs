//! RSA key pair generation.

use super::KeyMaterial;
use crate::config::EngineConfig;
use crate::{Error, Result};
use kmip_core::KeyFormatType;
use rsa::pkcs1::EncodeRsaPublicKey;
use rsa::pkcs8::EncodePrivateKey;
use rsa::{BigUint, RsaPrivateKey};
use zeroize::Zeroizing;

const GENERATION_FAILURE: &str = "RSA key pair generation failed.";

/// Generate an RSA key pair with the configured public exponent.
///
/// Returns `(public, private)`: the public key as PKCS#1 `RSAPublicKey` DER and
/// the private key as unencrypted PKCS#8 DER, both tagged with the exponent.
pub(super) fn create_rsa_key_pair(
    config: &EngineConfig,
    length_bits: u32,
) -> Result<(KeyMaterial, KeyMaterial)> {
    let bits = length_bits as usize;
    if bits < config.rsa_min_modulus_bits || bits > config.rsa_max_modulus_bits {
        return Err(Error::invalid_field(format!(
            "RSA modulus length {length_bits} must be between {} and {} bits.",
            config.rsa_min_modulus_bits, config.rsa_max_modulus_bits
        )));
    }

    let exponent = config.rsa_public_exponent;
    // Even exponents have no inverse modulo the totient
    if exponent < 3 || exponent % 2 == 0 {
        return Err(Error::invalid_field(format!(
            "RSA public exponent {exponent} must be odd and at least 3."
        )));
    }

    tracing::info!(length_bits, public_exponent = exponent, "Generating RSA key pair");

    let private_key =
        RsaPrivateKey::new_with_exp(&mut rand::rngs::OsRng, bits, &BigUint::from(exponent))
            .map_err(|e| Error::crypto_failure(GENERATION_FAILURE, e))?;

    let private_der = private_key
        .to_pkcs8_der()
        .map_err(|e| Error::crypto_failure(GENERATION_FAILURE, e))?;
    let public_der = private_key
        .to_public_key()
        .to_pkcs1_der()
        .map_err(|e| Error::crypto_failure(GENERATION_FAILURE, e))?;

    let public = KeyMaterial {
        value: Zeroizing::new(public_der.as_bytes().to_vec()),
        format: KeyFormatType::Pkcs1,
        public_exponent: Some(exponent),
    };
    let private = KeyMaterial {
        value: Zeroizing::new(private_der.as_bytes().to_vec()),
        format: KeyFormatType::Pkcs8,
        public_exponent: Some(exponent),
    };

    Ok((public, private))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use rsa::pkcs1::DecodeRsaPublicKey;
    use rsa::pkcs8::DecodePrivateKey;
    use rsa::traits::PublicKeyParts;
    use rsa::RsaPublicKey;

    /// Both halves parse back and agree on modulus and exponent.
    #[test]
    fn test_rsa_1024_pair() {
        let (public, private) = create_rsa_key_pair(&EngineConfig::default(), 1024).unwrap();
        assert_eq!(public.format, KeyFormatType::Pkcs1);
        assert_eq!(private.format, KeyFormatType::Pkcs8);
        assert_eq!(public.public_exponent, Some(65537));
        assert_eq!(private.public_exponent, Some(65537));

        let public_key = RsaPublicKey::from_pkcs1_der(&public.value).unwrap();
        let private_key = RsaPrivateKey::from_pkcs8_der(&private.value).unwrap();
        assert_eq!(public_key.n(), private_key.n());
        assert_eq!(public_key.e(), &BigUint::from(65537u32));
        assert_eq!(public_key.n().bits(), 1024);
    }

    /// Even or degenerate exponents are refused before generation starts.
    #[test]
    fn test_invalid_public_exponent() {
        for exponent in [0, 1, 2, 4, 65536] {
            let config = EngineConfig {
                rsa_public_exponent: exponent,
                ..EngineConfig::default()
            };
            let err = create_rsa_key_pair(&config, 512).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidField, "{exponent}");
        }
    }

    /// Any odd exponent of at least 3 is usable.
    #[test]
    fn test_small_odd_exponent() {
        let config = EngineConfig {
            rsa_public_exponent: 3,
            ..EngineConfig::default()
        };
        let (public, _) = create_rsa_key_pair(&config, 512).unwrap();
        let public_key = RsaPublicKey::from_pkcs1_der(&public.value).unwrap();
        assert_eq!(public_key.e(), &BigUint::from(3u32));
    }

    #[test]
    fn test_modulus_out_of_range() {
        for bits in [256, 16384] {
            let err = create_rsa_key_pair(&EngineConfig::default(), bits).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidField);
        }
    }
}
