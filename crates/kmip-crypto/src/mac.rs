//! Message authentication codes.
//!
//! - HMAC for the `HMAC_*` algorithms
//! - CMAC for every block cipher in the registry
//!
//! Which construction runs is decided by the family the algorithm classifies into.

use crate::pipeline::{BlockCipherInstance, CipherInstance};
use crate::registry::{AlgorithmFamily, CapabilityRegistry, HashFunction, SymmetricAlgorithm};
use crate::{Error, Result};
use cmac::Cmac;
use hmac::{Hmac, Mac};
use kmip_core::CryptographicAlgorithm;

const HMAC_FAILURE: &str = "An error occurred while computing an HMAC.";
const CMAC_FAILURE: &str = "An error occurred while computing a CMAC.";

/// Compute a MAC over `data` with `key`.
///
/// # Errors
///
/// * `Error::InvalidField` - the algorithm is neither an HMAC algorithm nor a
///   symmetric cipher in the registry
/// * `Error::CryptographicFailure` - the key is unusable for the cipher, or the
///   cipher is a stream cipher
pub(crate) fn mac(
    registry: &CapabilityRegistry,
    algorithm: CryptographicAlgorithm,
    key: &[u8],
    data: &[u8],
) -> Result<Vec<u8>> {
    match registry.family(algorithm) {
        Some(AlgorithmFamily::Hash(hash)) => {
            tracing::info!(?algorithm, "Computing HMAC");
            hmac(hash, key, data)
        }
        Some(AlgorithmFamily::Symmetric(cipher)) => {
            tracing::info!(?algorithm, "Computing CMAC");
            cmac(cipher, key, data)
        }
        Some(AlgorithmFamily::Asymmetric(_)) | None => Err(Error::invalid_field(format!(
            "The cryptographic algorithm ({algorithm:?}) is not supported for a MAC operation."
        ))),
    }
}

/// HMAC over `data`.
fn hmac(hash: HashFunction, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    with_hash!(hash, H => {
        let mut mac = <Hmac<H> as Mac>::new_from_slice(key)
            .map_err(|e| Error::crypto_failure(HMAC_FAILURE, e))?;
        mac.update(data);
        Ok(mac.finalize().into_bytes().to_vec())
    })
}

macro_rules! compute_cmac {
    ($cipher:ty, $key:expr, $data:expr) => {{
        let mut mac = <Cmac<$cipher> as Mac>::new_from_slice($key)
            .map_err(|e| Error::crypto_failure(CMAC_FAILURE, e))?;
        mac.update($data);
        mac.finalize().into_bytes().to_vec()
    }};
}

fn cmac(algorithm: SymmetricAlgorithm, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    // Keying the cipher first picks the variant and rejects bad key lengths
    let block = match CipherInstance::new(algorithm, key)? {
        CipherInstance::Block(block) => block,
        CipherInstance::Stream(_) => {
            return Err(Error::crypto_failure(
                CMAC_FAILURE,
                format_args!("{algorithm:?} is not a block cipher"),
            ))
        }
    };

    let tag = match block {
        BlockCipherInstance::Aes128(_) => compute_cmac!(aes::Aes128, key, data),
        BlockCipherInstance::Aes192(_) => compute_cmac!(aes::Aes192, key, data),
        BlockCipherInstance::Aes256(_) => compute_cmac!(aes::Aes256, key, data),
        BlockCipherInstance::Des(_) => compute_cmac!(des::Des, key, data),
        BlockCipherInstance::TdesEde2(_) => compute_cmac!(des::TdesEde2, key, data),
        BlockCipherInstance::TdesEde3(_) => compute_cmac!(des::TdesEde3, key, data),
        BlockCipherInstance::Blowfish(_) => compute_cmac!(blowfish::Blowfish, key, data),
        BlockCipherInstance::Camellia128(_) => compute_cmac!(camellia::Camellia128, key, data),
        BlockCipherInstance::Camellia192(_) => compute_cmac!(camellia::Camellia192, key, data),
        BlockCipherInstance::Camellia256(_) => compute_cmac!(camellia::Camellia256, key, data),
        BlockCipherInstance::Cast5(_) => compute_cmac!(cast5::Cast5, key, data),
        BlockCipherInstance::Idea(_) => compute_cmac!(idea::Idea, key, data),
    };

    Ok(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::STANDARD_REGISTRY;
    use crate::ErrorKind;

    /// RFC 4231 test case 2.
    #[test]
    fn test_hmac_sha256_short_key() {
        let tag = mac(
            &STANDARD_REGISTRY,
            CryptographicAlgorithm::HmacSha256,
            b"Jefe",
            b"what do ya want for nothing?",
        )
        .unwrap();
        assert_eq!(
            hex::encode(tag),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    /// Tag length follows the hash.
    #[test]
    fn test_hmac_lengths() {
        for (algorithm, length) in [
            (CryptographicAlgorithm::HmacMd5, 16),
            (CryptographicAlgorithm::HmacSha1, 20),
            (CryptographicAlgorithm::HmacSha224, 28),
            (CryptographicAlgorithm::HmacSha384, 48),
            (CryptographicAlgorithm::HmacSha512, 64),
        ] {
            let tag = mac(&STANDARD_REGISTRY, algorithm, b"key", b"data").unwrap();
            assert_eq!(tag.len(), length);
        }
    }

    /// CMAC tags are one cipher block long.
    #[test]
    fn test_cmac_block_ciphers() {
        for (algorithm, key_len, tag_len) in [
            (CryptographicAlgorithm::Aes, 32, 16),
            (CryptographicAlgorithm::TripleDes, 24, 8),
            (CryptographicAlgorithm::Blowfish, 16, 8),
            (CryptographicAlgorithm::Camellia, 16, 16),
            (CryptographicAlgorithm::Cast5, 16, 8),
            (CryptographicAlgorithm::Idea, 16, 8),
        ] {
            let tag = mac(&STANDARD_REGISTRY, algorithm, &vec![0x42; key_len], b"data").unwrap();
            assert_eq!(tag.len(), tag_len, "{algorithm:?}");
        }
    }

    #[test]
    fn test_cmac_bad_key_length() {
        let err = mac(&STANDARD_REGISTRY, CryptographicAlgorithm::Aes, &[0; 7], b"data").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CryptographicFailure);
    }

    #[test]
    fn test_cmac_stream_cipher() {
        let err = mac(&STANDARD_REGISTRY, CryptographicAlgorithm::Rc4, &[0; 16], b"data").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CryptographicFailure);
    }

    #[test]
    fn test_unsupported_mac_algorithm() {
        for algorithm in [CryptographicAlgorithm::Rsa, CryptographicAlgorithm::HmacSha3_256] {
            let err = mac(&STANDARD_REGISTRY, algorithm, b"key", b"data").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidField);
        }
    }
}
