//! Block cipher modes of operation, generic over the underlying cipher.

use crate::registry::{CipherMode, Padding};
use crate::{Error, Result};
use cipher::block_padding::{AnsiX923, Pkcs7};
use cipher::crypto_common::InnerInit;
use cipher::typenum::{IsLess, Le, NonZero, U256};
use cipher::{
    AsyncStreamCipher, BlockCipher, BlockDecrypt, BlockDecryptMut, BlockEncrypt, BlockEncryptMut,
    InnerIvInit, StreamCipher, StreamCipherCoreWrapper,
};
use ctr::flavors::{Ctr128BE, Ctr64BE, CtrFlavor};
use ctr::CtrCore;
use ofb::OfbCore;

const INVALID_IV: &str = "Invalid IV/nonce for the specified cipher mode.";
const BAD_PADDING: &str = "Decryption failed: invalid padding.";

/// Block cipher usable in every supported mode.
pub(crate) trait ModeCipher: BlockCipher + BlockEncrypt + BlockDecrypt {
    /// Counter layout for CTR mode: the full block as one big-endian integer.
    type Counter: CtrFlavor<Self::BlockSize>;
}

macro_rules! mode_cipher {
    ($counter:ty => $($cipher:ty),+ $(,)?) => {
        $(impl ModeCipher for $cipher {
            type Counter = $counter;
        })+
    };
}

mode_cipher!(Ctr128BE =>
    aes::Aes128,
    aes::Aes192,
    aes::Aes256,
    camellia::Camellia128,
    camellia::Camellia192,
    camellia::Camellia256,
);
mode_cipher!(Ctr64BE =>
    des::Des,
    des::TdesEde2,
    des::TdesEde3,
    blowfish::Blowfish,
    cast5::Cast5,
    idea::Idea,
);

/// Mode parameters resolved by the pipeline.
pub(crate) struct CipherContext<'a> {
    pub(crate) mode: CipherMode,
    pub(crate) padding: Option<Padding>,
    pub(crate) iv: Option<&'a [u8]>,
}

impl CipherContext<'_> {
    fn iv(&self) -> Result<&[u8]> {
        self.iv
            .ok_or_else(|| Error::invalid_field("IV/nonce is required."))
    }

    fn padding(&self) -> Result<Padding> {
        self.padding
            .ok_or_else(|| Error::invalid_field("Padding method is required."))
    }
}

/// Encrypt `plaintext` with `cipher` in the context's mode.
pub(crate) fn encrypt<C>(cipher: C, context: &CipherContext<'_>, plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: ModeCipher,
    C::BlockSize: IsLess<U256>,
    Le<C::BlockSize, U256>: NonZero,
{
    match context.mode {
        CipherMode::Cbc => {
            let encryptor = cbc::Encryptor::<C>::inner_iv_slice_init(cipher, context.iv()?)
                .map_err(|e| Error::crypto_failure(INVALID_IV, e))?;
            Ok(match context.padding()? {
                Padding::Pkcs5 => encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext),
                Padding::AnsiX923 => encryptor.encrypt_padded_vec_mut::<AnsiX923>(plaintext),
            })
        }
        CipherMode::Ecb => {
            let encryptor = ecb::Encryptor::<C>::inner_init(cipher);
            Ok(match context.padding()? {
                Padding::Pkcs5 => encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext),
                Padding::AnsiX923 => encryptor.encrypt_padded_vec_mut::<AnsiX923>(plaintext),
            })
        }
        CipherMode::Cfb => {
            let mut buffer = plaintext.to_vec();
            cfb_mode::Encryptor::<C>::inner_iv_slice_init(cipher, context.iv()?)
                .map_err(|e| Error::crypto_failure(INVALID_IV, e))?
                .encrypt(&mut buffer);
            Ok(buffer)
        }
        CipherMode::Ofb => {
            let mut buffer = plaintext.to_vec();
            ofb_keystream(cipher, context.iv()?, &mut buffer)?;
            Ok(buffer)
        }
        CipherMode::Ctr => {
            let mut buffer = plaintext.to_vec();
            ctr_keystream(cipher, context.iv()?, &mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Decrypt `ciphertext` with `cipher` in the context's mode, removing padding.
pub(crate) fn decrypt<C>(cipher: C, context: &CipherContext<'_>, ciphertext: &[u8]) -> Result<Vec<u8>>
where
    C: ModeCipher,
    C::BlockSize: IsLess<U256>,
    Le<C::BlockSize, U256>: NonZero,
{
    match context.mode {
        CipherMode::Cbc => {
            let decryptor = cbc::Decryptor::<C>::inner_iv_slice_init(cipher, context.iv()?)
                .map_err(|e| Error::crypto_failure(INVALID_IV, e))?;
            match context.padding()? {
                Padding::Pkcs5 => decryptor.decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
                Padding::AnsiX923 => decryptor.decrypt_padded_vec_mut::<AnsiX923>(ciphertext),
            }
            .map_err(|e| Error::crypto_failure(BAD_PADDING, e))
        }
        CipherMode::Ecb => {
            let decryptor = ecb::Decryptor::<C>::inner_init(cipher);
            match context.padding()? {
                Padding::Pkcs5 => decryptor.decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
                Padding::AnsiX923 => decryptor.decrypt_padded_vec_mut::<AnsiX923>(ciphertext),
            }
            .map_err(|e| Error::crypto_failure(BAD_PADDING, e))
        }
        CipherMode::Cfb => {
            let mut buffer = ciphertext.to_vec();
            cfb_mode::Decryptor::<C>::inner_iv_slice_init(cipher, context.iv()?)
                .map_err(|e| Error::crypto_failure(INVALID_IV, e))?
                .decrypt(&mut buffer);
            Ok(buffer)
        }
        CipherMode::Ofb => {
            let mut buffer = ciphertext.to_vec();
            ofb_keystream(cipher, context.iv()?, &mut buffer)?;
            Ok(buffer)
        }
        CipherMode::Ctr => {
            let mut buffer = ciphertext.to_vec();
            ctr_keystream(cipher, context.iv()?, &mut buffer)?;
            Ok(buffer)
        }
    }
}

fn ofb_keystream<C>(cipher: C, iv: &[u8], buffer: &mut [u8]) -> Result<()>
where
    C: ModeCipher,
    C::BlockSize: IsLess<U256>,
    Le<C::BlockSize, U256>: NonZero,
{
    let core = OfbCore::<C>::inner_iv_slice_init(cipher, iv)
        .map_err(|e| Error::crypto_failure(INVALID_IV, e))?;
    StreamCipherCoreWrapper::from_core(core).apply_keystream(buffer);
    Ok(())
}

fn ctr_keystream<C>(cipher: C, iv: &[u8], buffer: &mut [u8]) -> Result<()>
where
    C: ModeCipher,
    C::BlockSize: IsLess<U256>,
    Le<C::BlockSize, U256>: NonZero,
{
    let core = CtrCore::<C, C::Counter>::inner_iv_slice_init(cipher, iv)
        .map_err(|e| Error::crypto_failure(INVALID_IV, e))?;
    StreamCipherCoreWrapper::from_core(core).apply_keystream(buffer);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipher::KeyInit;

    const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
    const IV: &str = "000102030405060708090a0b0c0d0e0f";
    const PLAINTEXT: &str = "6bc1bee22e409f96e93d7e117393172a";

    fn aes() -> aes::Aes128 {
        aes::Aes128::new_from_slice(&hex::decode(KEY).unwrap()).unwrap()
    }

    fn context(mode: CipherMode, iv: Option<&[u8]>) -> CipherContext<'_> {
        CipherContext {
            mode,
            padding: mode.requires_padding().then_some(Padding::Pkcs5),
            iv,
        }
    }

    /// NIST SP 800-38A F.5.1 first block.
    #[test]
    fn test_ctr_full_block_counter() {
        let counter = hex::decode("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff").unwrap();
        let plaintext = hex::decode(PLAINTEXT).unwrap();
        let ciphertext = encrypt(aes(), &context(CipherMode::Ctr, Some(&counter)), &plaintext).unwrap();
        assert_eq!(hex::encode(ciphertext), "874d6191b620e3261bef6864990db6ce");
    }

    /// CFB and OFB share their first block in SP 800-38A.
    #[test]
    fn test_feedback_modes_first_block() {
        let iv = hex::decode(IV).unwrap();
        let plaintext = hex::decode(PLAINTEXT).unwrap();
        for mode in [CipherMode::Cfb, CipherMode::Ofb] {
            let ciphertext = encrypt(aes(), &context(mode, Some(&iv)), &plaintext).unwrap();
            assert_eq!(hex::encode(ciphertext), "3b3fd92eb72dad20333449f8e83cfb4a");
        }
    }

    /// OFB and CTR keystreams run over 64-bit block ciphers too.
    #[test]
    fn test_keystream_modes_small_block() {
        let cipher = || blowfish::Blowfish::new_from_slice(b"keystream key").unwrap();
        let iv = hex::decode("0001020304050607").unwrap();
        let plaintext = b"nineteen byte input";
        for mode in [CipherMode::Ofb, CipherMode::Ctr] {
            let ctx = context(mode, Some(&iv));
            let ciphertext = encrypt(cipher(), &ctx, plaintext).unwrap();
            assert_eq!(ciphertext.len(), plaintext.len());
            assert_ne!(ciphertext.as_slice(), plaintext.as_slice());
            assert_eq!(decrypt(cipher(), &ctx, &ciphertext).unwrap(), plaintext);
        }
    }

    /// Stream-like modes keep partial trailing blocks.
    #[test]
    fn test_partial_block() {
        let iv = hex::decode(IV).unwrap();
        let plaintext = b"thirteen byte";
        for mode in [CipherMode::Cfb, CipherMode::Ofb, CipherMode::Ctr] {
            let ctx = context(mode, Some(&iv));
            let ciphertext = encrypt(aes(), &ctx, plaintext).unwrap();
            assert_eq!(ciphertext.len(), plaintext.len());
            assert_eq!(decrypt(aes(), &ctx, &ciphertext).unwrap(), plaintext);
        }
    }

    /// Block-aligned plaintext still gains a full padding block.
    #[test]
    fn test_always_pad() {
        let plaintext = hex::decode(PLAINTEXT).unwrap();
        let ciphertext = encrypt(aes(), &context(CipherMode::Ecb, None), &plaintext).unwrap();
        assert_eq!(ciphertext.len(), 32);
        assert_eq!(&hex::encode(&ciphertext)[..32], "3ad77bb40d7a3660a89ecaf32466ef97");
    }

    #[test]
    fn test_ansi_x923_roundtrip() {
        let iv = hex::decode(IV).unwrap();
        let ctx = CipherContext {
            mode: CipherMode::Cbc,
            padding: Some(Padding::AnsiX923),
            iv: Some(&iv),
        };
        let ciphertext = encrypt(aes(), &ctx, b"x923").unwrap();
        assert_eq!(ciphertext.len(), 16);
        assert_eq!(decrypt(aes(), &ctx, &ciphertext).unwrap(), b"x923");
    }

    /// The pipeline rejects a mis-sized IV first; this is the mode's own check.
    #[test]
    fn test_inner_iv_length_check() {
        let err = encrypt(aes(), &context(CipherMode::Cbc, Some(&[0; 8])), b"data").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::CryptographicFailure);
    }

    #[test]
    fn test_missing_iv() {
        let err = encrypt(aes(), &context(CipherMode::Ofb, None), b"data").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidField);
    }

    /// Ciphertext that is not block aligned fails to unpad.
    #[test]
    fn test_truncated_ciphertext() {
        let iv = hex::decode(IV).unwrap();
        let err = decrypt(aes(), &context(CipherMode::Cbc, Some(&iv)), &[0; 15]).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::CryptographicFailure);
    }
}
