//! Symmetric encryption and decryption pipeline.
//!
//! Each call runs the same stages:
//! 1. Resolve the algorithm through the capability registry
//! 2. Key a cipher instance (a key the primitive rejects is a cryptographic failure)
//! 3. For block ciphers, resolve the mode, then the IV, then the padding
//! 4. Run the mode over the data
//!
//! RC4 skips stage 3 entirely: any mode, padding or IV on the request is ignored.
//!
//! Padding is always applied in CBC and ECB, including when the plaintext is
//! already block aligned, so decryption can always remove it unambiguously.

mod instance;
mod modes;

pub(crate) use instance::{BlockCipherInstance, CipherInstance};

use crate::registry::{CapabilityRegistry, SymmetricAlgorithm};
use crate::rng::random_bytes;
use crate::{Error, Result};
use kmip_core::{BlockCipherMode, CryptographicAlgorithm, PaddingMethod};
use modes::CipherContext;
use zeroize::Zeroizing;

/// Output of an encryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptResult {
    /// Ciphertext.
    pub ciphertext: Vec<u8>,
    /// IV/nonce the engine generated, if the caller did not supply one.
    pub iv: Option<Vec<u8>>,
}

/// Parameters shared by encryption and decryption.
#[derive(Clone, Copy)]
pub(crate) struct CipherParameters<'a> {
    pub(crate) algorithm: CryptographicAlgorithm,
    pub(crate) key: &'a [u8],
    pub(crate) mode: Option<BlockCipherMode>,
    pub(crate) padding: Option<PaddingMethod>,
    pub(crate) iv: Option<&'a [u8]>,
}

/// Encrypt `plaintext`, generating an IV when the mode needs one and none was supplied.
///
/// # Errors
///
/// * `Error::InvalidField` - unsupported algorithm, missing or unsupported mode
///   or padding, or a supplied IV of the wrong length
/// * `Error::CryptographicFailure` - the primitive rejected the key
pub(crate) fn encrypt(
    registry: &CapabilityRegistry,
    parameters: &CipherParameters<'_>,
    plaintext: &[u8],
) -> Result<EncryptResult> {
    let algorithm = resolve_algorithm(registry, parameters.algorithm)?;

    let block = match CipherInstance::new(algorithm, parameters.key)? {
        CipherInstance::Stream(mut rc4) => {
            let mut ciphertext = plaintext.to_vec();
            rc4.apply_keystream(&mut ciphertext);
            return Ok(EncryptResult {
                ciphertext,
                iv: None,
            });
        }
        CipherInstance::Block(block) => block,
    };

    let mode = registry.mode(parameters.mode)?;
    let block_size = block_size_of(algorithm)?;

    // Generate an IV only when the mode needs one and the caller gave none
    let generated = match (mode.requires_iv(), parameters.iv) {
        (true, None) => {
            tracing::debug!(?mode, block_size, "Generating random IV");
            Some(random_bytes(block_size)?.to_vec())
        }
        _ => None,
    };

    let iv = if mode.requires_iv() {
        let iv = parameters.iv.or(generated.as_deref());
        check_iv_length(iv, block_size)?;
        iv
    } else {
        None
    };

    let padding = if mode.requires_padding() {
        Some(registry.padding(parameters.padding)?)
    } else {
        None
    };

    let context = CipherContext { mode, padding, iv };
    let ciphertext = with_block_cipher!(block, cipher => modes::encrypt(cipher, &context, plaintext))?;

    Ok(EncryptResult {
        ciphertext,
        iv: generated,
    })
}

/// Decrypt `ciphertext`, removing padding in CBC and ECB.
///
/// # Errors
///
/// * `Error::InvalidField` - unsupported algorithm, missing or unsupported mode
///   or padding, or a missing or wrongly sized IV
/// * `Error::CryptographicFailure` - the primitive rejected the key, or the
///   padding did not verify
pub(crate) fn decrypt(
    registry: &CapabilityRegistry,
    parameters: &CipherParameters<'_>,
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let algorithm = resolve_algorithm(registry, parameters.algorithm)?;

    let block = match CipherInstance::new(algorithm, parameters.key)? {
        CipherInstance::Stream(mut rc4) => {
            let mut plaintext = Zeroizing::new(ciphertext.to_vec());
            rc4.apply_keystream(&mut plaintext);
            return Ok(plaintext);
        }
        CipherInstance::Block(block) => block,
    };

    let mode = registry.mode(parameters.mode)?;
    let block_size = block_size_of(algorithm)?;

    let iv = if mode.requires_iv() {
        let iv = parameters
            .iv
            .ok_or_else(|| Error::invalid_field("IV/nonce is required."))?;
        check_iv_length(Some(iv), block_size)?;
        Some(iv)
    } else {
        None
    };

    let padding = if mode.requires_padding() {
        Some(registry.padding(parameters.padding)?)
    } else {
        None
    };

    let context = CipherContext { mode, padding, iv };
    let plaintext =
        with_block_cipher!(block, cipher => modes::decrypt(cipher, &context, ciphertext))?;

    Ok(Zeroizing::new(plaintext))
}

fn resolve_algorithm(
    registry: &CapabilityRegistry,
    algorithm: CryptographicAlgorithm,
) -> Result<SymmetricAlgorithm> {
    registry.symmetric(algorithm).map_err(|_| {
        Error::invalid_field(format!(
            "Encryption algorithm {algorithm:?} is not a supported symmetric encryption algorithm."
        ))
    })
}

fn block_size_of(algorithm: SymmetricAlgorithm) -> Result<usize> {
    algorithm.block_size().ok_or_else(|| {
        Error::invalid_field(format!("{algorithm:?} is not a block cipher."))
    })
}

fn check_iv_length(iv: Option<&[u8]>, block_size: usize) -> Result<()> {
    match iv {
        Some(iv) if iv.len() == block_size => Ok(()),
        Some(iv) => Err(Error::invalid_field(format!(
            "IV/nonce must be {block_size} bytes, got {}.",
            iv.len()
        ))),
        None => Err(Error::invalid_field("IV/nonce is required.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::STANDARD_REGISTRY;
    use crate::ErrorKind;

    fn parameters<'a>(
        algorithm: CryptographicAlgorithm,
        key: &'a [u8],
        mode: Option<BlockCipherMode>,
        iv: Option<&'a [u8]>,
    ) -> CipherParameters<'a> {
        CipherParameters {
            algorithm,
            key,
            mode,
            padding: Some(PaddingMethod::Pkcs5),
            iv,
        }
    }

    /// A generated IV is returned and decrypts the ciphertext.
    #[test]
    fn test_generated_iv_roundtrip() {
        let key = [0x11; 16];
        let encrypt_params = parameters(
            CryptographicAlgorithm::Aes,
            &key,
            Some(BlockCipherMode::Cbc),
            None,
        );
        let result = encrypt(&STANDARD_REGISTRY, &encrypt_params, b"secret").unwrap();
        let iv = result.iv.clone().unwrap();
        assert_eq!(iv.len(), 16);

        let decrypt_params = CipherParameters {
            iv: Some(&iv),
            ..encrypt_params
        };
        let plaintext = decrypt(&STANDARD_REGISTRY, &decrypt_params, &result.ciphertext).unwrap();
        assert_eq!(plaintext.as_slice(), b"secret");
    }

    /// A caller-supplied IV is used as-is and not echoed back.
    #[test]
    fn test_supplied_iv_not_returned() {
        let key = [0x11; 16];
        let iv = [0x22; 16];
        let params = parameters(
            CryptographicAlgorithm::Aes,
            &key,
            Some(BlockCipherMode::Ctr),
            Some(&iv),
        );
        let result = encrypt(&STANDARD_REGISTRY, &params, b"data").unwrap();
        assert_eq!(result.iv, None);
    }

    #[test]
    fn test_ecb_generates_no_iv() {
        let key = [0x11; 24];
        let params = parameters(
            CryptographicAlgorithm::TripleDes,
            &key,
            Some(BlockCipherMode::Ecb),
            None,
        );
        let result = encrypt(&STANDARD_REGISTRY, &params, b"data").unwrap();
        assert_eq!(result.iv, None);
        assert_eq!(result.ciphertext.len(), 8);
    }

    /// RC4 ignores mode, padding and IV.
    #[test]
    fn test_rc4_ignores_block_parameters() {
        let key = [0x33; 16];
        let params = CipherParameters {
            algorithm: CryptographicAlgorithm::Rc4,
            key: &key,
            mode: Some(BlockCipherMode::Gcm),
            padding: Some(PaddingMethod::Oaep),
            iv: Some(&[0; 3]),
        };
        let result = encrypt(&STANDARD_REGISTRY, &params, b"stream").unwrap();
        assert_eq!(result.ciphertext.len(), 6);
        assert_eq!(result.iv, None);
        let plaintext = decrypt(&STANDARD_REGISTRY, &params, &result.ciphertext).unwrap();
        assert_eq!(plaintext.as_slice(), b"stream");
    }

    #[test]
    fn test_missing_mode() {
        let key = [0x11; 16];
        let params = parameters(CryptographicAlgorithm::Aes, &key, None, None);
        let err = encrypt(&STANDARD_REGISTRY, &params, b"data").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidField);
    }

    #[test]
    fn test_missing_padding() {
        let key = [0x11; 16];
        let params = CipherParameters {
            padding: None,
            ..parameters(CryptographicAlgorithm::Aes, &key, Some(BlockCipherMode::Ecb), None)
        };
        let err = encrypt(&STANDARD_REGISTRY, &params, b"data").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidField);
    }

    /// Padding is not consulted for the stream-like modes.
    #[test]
    fn test_padding_ignored_for_stream_modes() {
        let key = [0x11; 16];
        let params = CipherParameters {
            padding: None,
            ..parameters(CryptographicAlgorithm::Aes, &key, Some(BlockCipherMode::Ofb), None)
        };
        assert!(encrypt(&STANDARD_REGISTRY, &params, b"data").is_ok());
    }

    #[test]
    fn test_decrypt_requires_iv() {
        let key = [0x11; 16];
        let params = parameters(CryptographicAlgorithm::Aes, &key, Some(BlockCipherMode::Cbc), None);
        let err = decrypt(&STANDARD_REGISTRY, &params, &[0; 16]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidField);
    }

    #[test]
    fn test_wrong_iv_length() {
        let key = [0x11; 16];
        let iv = [0; 8];
        let params = parameters(
            CryptographicAlgorithm::Aes,
            &key,
            Some(BlockCipherMode::Cbc),
            Some(&iv),
        );
        let err = encrypt(&STANDARD_REGISTRY, &params, b"data").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidField);
    }

    #[test]
    fn test_unsupported_algorithm() {
        let key = [0x11; 16];
        let params = parameters(CryptographicAlgorithm::Rsa, &key, Some(BlockCipherMode::Cbc), None);
        let err = encrypt(&STANDARD_REGISTRY, &params, b"data").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidField);
    }

    /// Key problems surface before mode problems.
    #[test]
    fn test_bad_key_before_mode() {
        let key = [0x11; 5];
        let params = parameters(CryptographicAlgorithm::Aes, &key, None, None);
        let err = encrypt(&STANDARD_REGISTRY, &params, b"data").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CryptographicFailure);
    }
}
