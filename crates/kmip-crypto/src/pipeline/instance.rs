//! Keyed cipher instances.
//!
//! Translates an engine algorithm plus raw key bytes into a concrete RustCrypto
//! cipher. The key length picks the variant where an algorithm has several
//! (AES-128/192/256, the three Triple DES keying options, Camellia sizes, the
//! RC4 key sizes).

use crate::registry::SymmetricAlgorithm;
use crate::{Error, Result};
use aes::{Aes128, Aes192, Aes256};
use blowfish::Blowfish;
use camellia::{Camellia128, Camellia192, Camellia256};
use cast5::Cast5;
use cipher::consts::{U10, U16, U20, U24, U32, U5, U7, U8};
use cipher::{KeyInit, StreamCipher};
use des::{Des, TdesEde2, TdesEde3};
use idea::Idea;
use rc4::Rc4;

const INVALID_KEY: &str = "Invalid key bytes for the specified encryption algorithm.";

/// A block cipher keyed and ready to be wrapped in a mode.
pub(crate) enum BlockCipherInstance {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
    /// Triple DES keying option 3 (K1 = K2 = K3), which is single DES.
    Des(Des),
    TdesEde2(TdesEde2),
    TdesEde3(TdesEde3),
    Blowfish(Blowfish),
    Camellia128(Camellia128),
    Camellia192(Camellia192),
    Camellia256(Camellia256),
    Cast5(Cast5),
    Idea(Idea),
}

/// A keyed symmetric cipher of either shape.
pub(crate) enum CipherInstance {
    Block(BlockCipherInstance),
    Stream(Rc4Instance),
}

impl CipherInstance {
    /// Key `algorithm` with `key`.
    ///
    /// # Errors
    ///
    /// Returns `Error::CryptographicFailure` if the primitive rejects the key.
    pub(crate) fn new(algorithm: SymmetricAlgorithm, key: &[u8]) -> Result<Self> {
        let block = match (algorithm, key.len()) {
            (SymmetricAlgorithm::Aes, 16) => BlockCipherInstance::Aes128(keyed(key)?),
            (SymmetricAlgorithm::Aes, 24) => BlockCipherInstance::Aes192(keyed(key)?),
            (SymmetricAlgorithm::Aes, 32) => BlockCipherInstance::Aes256(keyed(key)?),
            (SymmetricAlgorithm::TripleDes, 8) => BlockCipherInstance::Des(keyed(key)?),
            (SymmetricAlgorithm::TripleDes, 16) => BlockCipherInstance::TdesEde2(keyed(key)?),
            (SymmetricAlgorithm::TripleDes, 24) => BlockCipherInstance::TdesEde3(keyed(key)?),
            (SymmetricAlgorithm::Blowfish, _) => {
                BlockCipherInstance::Blowfish(<Blowfish as KeyInit>::new_from_slice(key).map_err(
                    |e| Error::crypto_failure(INVALID_KEY, e),
                )?)
            }
            (SymmetricAlgorithm::Camellia, 16) => BlockCipherInstance::Camellia128(keyed(key)?),
            (SymmetricAlgorithm::Camellia, 24) => BlockCipherInstance::Camellia192(keyed(key)?),
            (SymmetricAlgorithm::Camellia, 32) => BlockCipherInstance::Camellia256(keyed(key)?),
            (SymmetricAlgorithm::Cast5, _) => BlockCipherInstance::Cast5(keyed(key)?),
            (SymmetricAlgorithm::Idea, _) => BlockCipherInstance::Idea(keyed(key)?),
            (SymmetricAlgorithm::Rc4, _) => return Ok(CipherInstance::Stream(Rc4Instance::new(key)?)),
            (algorithm, length) => {
                return Err(Error::crypto_failure(
                    INVALID_KEY,
                    format_args!("{algorithm:?} does not accept a {length}-byte key"),
                ))
            }
        };

        Ok(CipherInstance::Block(block))
    }
}

fn keyed<C: KeyInit>(key: &[u8]) -> Result<C> {
    C::new_from_slice(key).map_err(|e| Error::crypto_failure(INVALID_KEY, e))
}

macro_rules! rc4_instance {
    ($($variant:ident => $size:ty = $len:literal),+ $(,)?) => {
        /// RC4 keyed at one of the supported key lengths.
        pub(crate) enum Rc4Instance {
            $($variant(Rc4<$size>)),+
        }

        impl Rc4Instance {
            fn new(key: &[u8]) -> Result<Self> {
                match key.len() {
                    $($len => Ok(Self::$variant(keyed(key)?)),)+
                    length => Err(Error::crypto_failure(
                        INVALID_KEY,
                        format_args!("RC4 does not accept a {length}-byte key"),
                    )),
                }
            }

            /// XOR the keystream into `buffer`.
            pub(crate) fn apply_keystream(&mut self, buffer: &mut [u8]) {
                match self {
                    $(Self::$variant(cipher) => cipher.apply_keystream(buffer)),+
                }
            }
        }
    };
}

rc4_instance! {
    Bits40 => U5 = 5,
    Bits56 => U7 = 7,
    Bits64 => U8 = 8,
    Bits80 => U10 = 10,
    Bits128 => U16 = 16,
    Bits160 => U20 = 20,
    Bits192 => U24 = 24,
    Bits256 => U32 = 32,
}
