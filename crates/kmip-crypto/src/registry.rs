//! Capability registry: which protocol enumerations the engine can execute.
//!
//! Every protocol enumeration is classified by an exhaustive `match` into a
//! closed set of engine variants ([`SymmetricAlgorithm`], [`HashFunction`],
//! [`CipherMode`], [`Padding`], [`AsymmetricAlgorithm`]). The variants carry
//! their own constraints (legal key sizes, block size, IV and padding needs).
//!
//! A [`CapabilityRegistry`] then lists the variants a given engine accepts. It
//! is built in a `const` context and never mutated, so one instance is shared by
//! reference across every thread. [`STANDARD_REGISTRY`] enables everything.

use crate::{Error, Result};
use kmip_core::{BlockCipherMode, CryptographicAlgorithm, HashingAlgorithm, PaddingMethod};

/// Registry with every supported variant enabled.
pub static STANDARD_REGISTRY: CapabilityRegistry = CapabilityRegistry::standard();

/// Symmetric algorithms the engine can instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymmetricAlgorithm {
    /// Triple DES (keying options 1, 2 and 3).
    TripleDes,
    /// AES.
    Aes,
    /// Blowfish.
    Blowfish,
    /// Camellia.
    Camellia,
    /// CAST5 (CAST-128).
    Cast5,
    /// IDEA.
    Idea,
    /// RC4 stream cipher.
    Rc4,
}

/// Legal key sizes for a symmetric algorithm, in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySizes {
    /// An explicit set of sizes.
    Fixed(&'static [u32]),
    /// Every size from `min` to `max` inclusive in steps of `step`.
    Range {
        /// Smallest legal size.
        min: u32,
        /// Largest legal size.
        max: u32,
        /// Distance between consecutive legal sizes.
        step: u32,
    },
}

impl KeySizes {
    /// Check whether `bits` is a legal key size.
    pub fn contains(&self, bits: u32) -> bool {
        match *self {
            KeySizes::Fixed(sizes) => sizes.contains(&bits),
            KeySizes::Range { min, max, step } => {
                (min..=max).contains(&bits) && (bits - min) % step == 0
            }
        }
    }

    /// Every legal key size, ascending.
    pub fn to_vec(&self) -> Vec<u32> {
        match *self {
            KeySizes::Fixed(sizes) => sizes.to_vec(),
            KeySizes::Range { min, max, step } => (min..=max).step_by(step as usize).collect(),
        }
    }
}

impl SymmetricAlgorithm {
    /// Every symmetric algorithm variant.
    pub const ALL: &'static [Self] = &[
        Self::TripleDes,
        Self::Aes,
        Self::Blowfish,
        Self::Camellia,
        Self::Cast5,
        Self::Idea,
        Self::Rc4,
    ];

    /// Legal key sizes for this algorithm.
    pub fn key_sizes(self) -> KeySizes {
        match self {
            Self::TripleDes => KeySizes::Fixed(&[64, 128, 192]),
            // No XTS, so no 512-bit AES keys
            Self::Aes | Self::Camellia => KeySizes::Fixed(&[128, 192, 256]),
            Self::Blowfish => KeySizes::Range {
                min: 32,
                max: 448,
                step: 8,
            },
            Self::Cast5 => KeySizes::Range {
                min: 40,
                max: 128,
                step: 8,
            },
            Self::Idea => KeySizes::Fixed(&[128]),
            Self::Rc4 => KeySizes::Fixed(&[40, 56, 64, 80, 128, 160, 192, 256]),
        }
    }

    /// Block size in bytes, or `None` for a stream cipher.
    pub fn block_size(self) -> Option<usize> {
        match self {
            Self::Aes | Self::Camellia => Some(16),
            Self::TripleDes | Self::Blowfish | Self::Cast5 | Self::Idea => Some(8),
            Self::Rc4 => None,
        }
    }

    /// Whether encryption with this algorithm needs a block cipher mode.
    pub fn requires_mode(self) -> bool {
        self.block_size().is_some()
    }

    /// Protocol enumeration for this algorithm.
    pub fn to_kmip(self) -> CryptographicAlgorithm {
        match self {
            Self::TripleDes => CryptographicAlgorithm::TripleDes,
            Self::Aes => CryptographicAlgorithm::Aes,
            Self::Blowfish => CryptographicAlgorithm::Blowfish,
            Self::Camellia => CryptographicAlgorithm::Camellia,
            Self::Cast5 => CryptographicAlgorithm::Cast5,
            Self::Idea => CryptographicAlgorithm::Idea,
            Self::Rc4 => CryptographicAlgorithm::Rc4,
        }
    }
}

/// Asymmetric algorithms the engine can generate key pairs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsymmetricAlgorithm {
    /// RSA.
    Rsa,
}

/// Hash functions usable for HMAC, hashing and hash-based derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunction {
    /// MD5.
    Md5,
    /// SHA-1.
    Sha1,
    /// SHA-224.
    Sha224,
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
}

impl HashFunction {
    /// Every hash function variant.
    pub const ALL: &'static [Self] = &[
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    /// Digest size in bytes.
    pub fn digest_size(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Map a protocol hashing algorithm onto an engine hash function.
    pub fn from_hashing_algorithm(algorithm: HashingAlgorithm) -> Option<Self> {
        use HashingAlgorithm as H;

        match algorithm {
            H::Md5 => Some(Self::Md5),
            H::Sha1 => Some(Self::Sha1),
            H::Sha224 => Some(Self::Sha224),
            H::Sha256 => Some(Self::Sha256),
            H::Sha384 => Some(Self::Sha384),
            H::Sha512 => Some(Self::Sha512),
            H::Md2
            | H::Md4
            | H::Ripemd160
            | H::Tiger
            | H::Whirlpool
            | H::Sha512_224
            | H::Sha512_256
            | H::Sha3_224
            | H::Sha3_256
            | H::Sha3_384
            | H::Sha3_512 => None,
        }
    }
}

/// Block cipher modes the cipher pipeline implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMode {
    /// Cipher block chaining.
    Cbc,
    /// Electronic codebook.
    Ecb,
    /// Full-block cipher feedback.
    Cfb,
    /// Output feedback.
    Ofb,
    /// Counter mode; the whole block is a big-endian counter.
    Ctr,
}

impl CipherMode {
    /// Every cipher mode variant.
    pub const ALL: &'static [Self] = &[Self::Cbc, Self::Ecb, Self::Cfb, Self::Ofb, Self::Ctr];

    /// Map a protocol block cipher mode onto an engine mode.
    pub fn from_kmip(mode: BlockCipherMode) -> Option<Self> {
        use BlockCipherMode as M;

        match mode {
            M::Cbc => Some(Self::Cbc),
            M::Ecb => Some(Self::Ecb),
            M::Cfb => Some(Self::Cfb),
            M::Ofb => Some(Self::Ofb),
            M::Ctr => Some(Self::Ctr),
            // GCM needs tag and AAD inputs the protocol fields do not carry.
            M::Pcbc
            | M::Cmac
            | M::Ccm
            | M::Gcm
            | M::CbcMac
            | M::Xts
            | M::AesKeyWrapPadding
            | M::NistKeyWrap
            | M::X9_102Aeskw
            | M::X9_102Tdkw
            | M::X9_102Akw1
            | M::X9_102Akw2
            | M::Aead => None,
        }
    }

    /// Whether the mode is initialised with an IV/nonce of one block.
    pub fn requires_iv(self) -> bool {
        !matches!(self, Self::Ecb)
    }

    /// Whether plaintext must be padded to a whole number of blocks.
    pub fn requires_padding(self) -> bool {
        matches!(self, Self::Cbc | Self::Ecb)
    }
}

/// Symmetric padding schemes for the block-aligned modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Padding {
    /// PKCS#5, applied as PKCS#7 at the cipher's block size.
    Pkcs5,
    /// ANSI X9.23.
    AnsiX923,
}

impl Padding {
    /// Every padding variant.
    pub const ALL: &'static [Self] = &[Self::Pkcs5, Self::AnsiX923];

    /// Map a protocol padding method onto an engine padding.
    pub fn from_kmip(method: PaddingMethod) -> Option<Self> {
        use PaddingMethod as P;

        match method {
            P::Pkcs5 => Some(Self::Pkcs5),
            P::AnsiX923 => Some(Self::AnsiX923),
            P::None
            | P::Oaep
            | P::Ssl3
            | P::Zeros
            | P::Iso10126
            | P::Pkcs1v15
            | P::X9_31
            | P::Pss => None,
        }
    }
}

/// Engine family a protocol algorithm belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmFamily {
    /// Symmetric cipher (usable for keys, encryption and CMAC).
    Symmetric(SymmetricAlgorithm),
    /// HMAC algorithm over the given hash.
    Hash(HashFunction),
    /// Asymmetric key pair algorithm.
    Asymmetric(AsymmetricAlgorithm),
}

impl AlgorithmFamily {
    /// Classify a protocol algorithm, or `None` if the engine has no variant for it.
    pub fn classify(algorithm: CryptographicAlgorithm) -> Option<Self> {
        use CryptographicAlgorithm as A;

        let family = match algorithm {
            A::TripleDes => Self::Symmetric(SymmetricAlgorithm::TripleDes),
            A::Aes => Self::Symmetric(SymmetricAlgorithm::Aes),
            A::Blowfish => Self::Symmetric(SymmetricAlgorithm::Blowfish),
            A::Camellia => Self::Symmetric(SymmetricAlgorithm::Camellia),
            A::Cast5 => Self::Symmetric(SymmetricAlgorithm::Cast5),
            A::Idea => Self::Symmetric(SymmetricAlgorithm::Idea),
            A::Rc4 => Self::Symmetric(SymmetricAlgorithm::Rc4),
            A::HmacMd5 => Self::Hash(HashFunction::Md5),
            A::HmacSha1 => Self::Hash(HashFunction::Sha1),
            A::HmacSha224 => Self::Hash(HashFunction::Sha224),
            A::HmacSha256 => Self::Hash(HashFunction::Sha256),
            A::HmacSha384 => Self::Hash(HashFunction::Sha384),
            A::HmacSha512 => Self::Hash(HashFunction::Sha512),
            A::Rsa => Self::Asymmetric(AsymmetricAlgorithm::Rsa),
            A::Des
            | A::Dsa
            | A::Ecdsa
            | A::Dh
            | A::Ecdh
            | A::Ecmqv
            | A::Mars
            | A::Rc2
            | A::Rc5
            | A::Skipjack
            | A::Twofish
            | A::Ec
            | A::OneTimePad
            | A::ChaCha20
            | A::Poly1305
            | A::ChaCha20Poly1305
            | A::Sha3_224
            | A::Sha3_256
            | A::Sha3_384
            | A::Sha3_512
            | A::HmacSha3_224
            | A::HmacSha3_256
            | A::HmacSha3_384
            | A::HmacSha3_512
            | A::Shake128
            | A::Shake256 => return None,
        };

        Some(family)
    }
}

/// Immutable set of variants an engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityRegistry {
    symmetric: &'static [SymmetricAlgorithm],
    asymmetric: &'static [AsymmetricAlgorithm],
    hashes: &'static [HashFunction],
    modes: &'static [CipherMode],
    paddings: &'static [Padding],
}

impl CapabilityRegistry {
    /// Build a registry from explicit variant lists.
    ///
    /// # Example
    ///
    /// ```
    /// use kmip_crypto::registry::{CapabilityRegistry, CipherMode, HashFunction, Padding, SymmetricAlgorithm};
    ///
    /// static AES_ONLY: CapabilityRegistry = CapabilityRegistry::new(
    ///     &[SymmetricAlgorithm::Aes],
    ///     &[],
    ///     &[HashFunction::Sha256],
    ///     &[CipherMode::Cbc],
    ///     &[Padding::Pkcs5],
    /// );
    /// assert!(AES_ONLY.symmetric(kmip_core::CryptographicAlgorithm::Rc4).is_err());
    /// ```
    pub const fn new(
        symmetric: &'static [SymmetricAlgorithm],
        asymmetric: &'static [AsymmetricAlgorithm],
        hashes: &'static [HashFunction],
        modes: &'static [CipherMode],
        paddings: &'static [Padding],
    ) -> Self {
        Self {
            symmetric,
            asymmetric,
            hashes,
            modes,
            paddings,
        }
    }

    /// Registry with every supported variant enabled.
    pub const fn standard() -> Self {
        Self::new(
            SymmetricAlgorithm::ALL,
            &[AsymmetricAlgorithm::Rsa],
            HashFunction::ALL,
            CipherMode::ALL,
            Padding::ALL,
        )
    }

    /// Classify `algorithm`, filtered by what this registry enables.
    pub fn family(&self, algorithm: CryptographicAlgorithm) -> Option<AlgorithmFamily> {
        AlgorithmFamily::classify(algorithm).filter(|family| match family {
            AlgorithmFamily::Symmetric(symmetric) => self.symmetric.contains(symmetric),
            AlgorithmFamily::Hash(hash) => self.hashes.contains(hash),
            AlgorithmFamily::Asymmetric(asymmetric) => self.asymmetric.contains(asymmetric),
        })
    }

    /// Resolve a symmetric algorithm.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidField` if the algorithm is not an enabled symmetric algorithm.
    pub fn symmetric(&self, algorithm: CryptographicAlgorithm) -> Result<SymmetricAlgorithm> {
        match self.family(algorithm) {
            Some(AlgorithmFamily::Symmetric(symmetric)) => Ok(symmetric),
            _ => Err(Error::invalid_field(format!(
                "The cryptographic algorithm {algorithm:?} is not a supported symmetric algorithm."
            ))),
        }
    }

    /// Resolve an asymmetric algorithm.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidField` if the algorithm is not an enabled asymmetric algorithm.
    pub fn asymmetric(&self, algorithm: CryptographicAlgorithm) -> Result<AsymmetricAlgorithm> {
        match self.family(algorithm) {
            Some(AlgorithmFamily::Asymmetric(asymmetric)) => Ok(asymmetric),
            _ => Err(Error::invalid_field(format!(
                "The cryptographic algorithm {algorithm:?} is not a supported asymmetric key algorithm."
            ))),
        }
    }

    /// Resolve a hashing algorithm supplied with a request.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidField` if `hash` is absent or not enabled.
    pub fn hash(&self, hash: Option<HashingAlgorithm>) -> Result<HashFunction> {
        let hash = hash.ok_or_else(|| Error::invalid_field("Hash algorithm is required."))?;
        HashFunction::from_hashing_algorithm(hash)
            .filter(|resolved| self.hashes.contains(resolved))
            .ok_or_else(|| {
                Error::invalid_field(format!(
                    "Hash algorithm {hash:?} is not a supported hashing algorithm."
                ))
            })
    }

    /// Resolve a block cipher mode supplied with a request.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidField` if `mode` is absent or not enabled.
    pub fn mode(&self, mode: Option<BlockCipherMode>) -> Result<CipherMode> {
        let mode = mode.ok_or_else(|| Error::invalid_field("Cipher mode is required."))?;
        CipherMode::from_kmip(mode)
            .filter(|resolved| self.modes.contains(resolved))
            .ok_or_else(|| {
                Error::invalid_field(format!("Cipher mode {mode:?} is not a supported mode."))
            })
    }

    /// Resolve a padding method supplied with a request.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidField` if `padding` is absent or not enabled.
    pub fn padding(&self, padding: Option<PaddingMethod>) -> Result<Padding> {
        let padding = padding.ok_or_else(|| Error::invalid_field("Padding method is required."))?;
        Padding::from_kmip(padding)
            .filter(|resolved| self.paddings.contains(resolved))
            .ok_or_else(|| {
                Error::invalid_field(format!("Padding method {padding:?} is not supported."))
            })
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
