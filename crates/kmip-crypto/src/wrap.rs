//! Key wrapping with AES Key Wrap (RFC 3394).

use crate::{Error, Result};
use aes_kw::{KekAes128, KekAes192, KekAes256};
use cipher::generic_array::GenericArray;
use kmip_core::{BlockCipherMode, WrappingMethod};

const WRAP_FAILURE: &str = "Key wrapping failed.";

/// Wrap `key_material` under `encryption_key`.
///
/// # Arguments
/// * `key_material` - Key bytes to wrap; a multiple of 8 bytes, at least 16
/// * `wrapping_method` - Must be `Encrypt`
/// * `key_wrap_algorithm` - Must be `NistKeyWrap`
/// * `encryption_key` - 16, 24 or 32 byte AES key encryption key
///
/// # Errors
///
/// * `Error::InvalidField` - unsupported wrapping method or wrap algorithm
/// * `Error::CryptographicFailure` - the key encryption key or key material was
///   rejected by AES Key Wrap
pub(crate) fn wrap_key(
    key_material: &[u8],
    wrapping_method: WrappingMethod,
    key_wrap_algorithm: BlockCipherMode,
    encryption_key: &[u8],
) -> Result<Vec<u8>> {
    if wrapping_method != WrappingMethod::Encrypt {
        return Err(Error::invalid_field(format!(
            "Wrapping method {wrapping_method:?} is not supported."
        )));
    }
    if key_wrap_algorithm != BlockCipherMode::NistKeyWrap {
        return Err(Error::invalid_field(format!(
            "Encryption algorithm {key_wrap_algorithm:?} is not a supported key wrapping algorithm."
        )));
    }

    // RFC 3394 needs at least two semiblocks of key data
    if key_material.len() < 16 {
        return Err(Error::crypto_failure(
            WRAP_FAILURE,
            format_args!(
                "{}-byte key material is shorter than two semiblocks",
                key_material.len()
            ),
        ));
    }

    // Key encryption key size picks the AES variant
    let wrapped = match encryption_key.len() {
        16 => KekAes128::new(GenericArray::from_slice(encryption_key)).wrap_vec(key_material),
        24 => KekAes192::new(GenericArray::from_slice(encryption_key)).wrap_vec(key_material),
        32 => KekAes256::new(GenericArray::from_slice(encryption_key)).wrap_vec(key_material),
        length => {
            return Err(Error::crypto_failure(
                WRAP_FAILURE,
                format_args!("no AES variant takes a {length}-byte key encryption key"),
            ))
        }
    };

    wrapped.map_err(|e| Error::crypto_failure(WRAP_FAILURE, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    /// RFC 3394 §4.6: 256-bit key data under a 256-bit KEK.
    #[test]
    fn test_rfc3394_256_under_256() {
        let kek = hex::decode("000102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F")
            .unwrap();
        let key = hex::decode("00112233445566778899AABBCCDDEEFF000102030405060708090A0B0C0D0E0F")
            .unwrap();
        let wrapped = wrap_key(
            &key,
            WrappingMethod::Encrypt,
            BlockCipherMode::NistKeyWrap,
            &kek,
        )
        .unwrap();
        assert_eq!(
            hex::encode_upper(wrapped),
            "28C9F404C4B810F4CBCCB35CFB87F8263F5786E2D80ED326CBC7F0E71A99F43BFB988B9B7A02DD21"
        );
    }

    #[test]
    fn test_unsupported_method() {
        let err = wrap_key(
            &[0; 16],
            WrappingMethod::MacSign,
            BlockCipherMode::NistKeyWrap,
            &[0; 16],
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidField);
    }

    #[test]
    fn test_unsupported_wrap_algorithm() {
        let err = wrap_key(
            &[0; 16],
            WrappingMethod::Encrypt,
            BlockCipherMode::AesKeyWrapPadding,
            &[0; 16],
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidField);
    }

    /// Key material that is not whole semiblocks cannot be wrapped.
    #[test]
    fn test_unaligned_key_material() {
        let err = wrap_key(
            &[0; 20],
            WrappingMethod::Encrypt,
            BlockCipherMode::NistKeyWrap,
            &[0; 16],
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CryptographicFailure);
    }

    /// Fewer than two semiblocks is rejected rather than wrapped.
    #[test]
    fn test_short_key_material() {
        for length in [0, 8] {
            let err = wrap_key(
                &vec![0x11; length],
                WrappingMethod::Encrypt,
                BlockCipherMode::NistKeyWrap,
                &[0; 16],
            )
            .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::CryptographicFailure, "{length}");
        }
    }

    #[test]
    fn test_bad_kek_length() {
        let err = wrap_key(
            &[0; 16],
            WrappingMethod::Encrypt,
            BlockCipherMode::NistKeyWrap,
            &[0; 10],
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CryptographicFailure);
    }
}
