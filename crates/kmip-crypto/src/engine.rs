//! The engine seam used by the protocol payload layer.

use crate::config::EngineConfig;
use crate::kdf::{self, DerivationRequest};
use crate::keygen::{self, KeyMaterial};
use crate::pipeline::{self, CipherParameters, EncryptResult};
use crate::registry::{CapabilityRegistry, STANDARD_REGISTRY};
use crate::{mac, wrap, Result};
use kmip_core::{
    BlockCipherMode, CryptographicAlgorithm, DerivationMethod, PaddingMethod, WrappingMethod,
};
use zeroize::Zeroizing;

/// Cryptographic operations a KMIP server performs on behalf of clients.
///
/// Implementations must be safe to call concurrently from many threads.
pub trait CryptographicEngine: Send + Sync {
    /// Generate a symmetric key of `length_bits` bits.
    ///
    /// # Errors
    ///
    /// `InvalidField` if the algorithm or length is unsupported.
    fn create_symmetric_key(
        &self,
        algorithm: CryptographicAlgorithm,
        length_bits: u32,
    ) -> Result<KeyMaterial>;

    /// Generate an asymmetric key pair, returned as `(public, private)`.
    ///
    /// # Errors
    ///
    /// `InvalidField` if the algorithm or length is unsupported,
    /// `CryptographicFailure` if generation fails.
    fn create_asymmetric_key_pair(
        &self,
        algorithm: CryptographicAlgorithm,
        length_bits: u32,
    ) -> Result<(KeyMaterial, KeyMaterial)>;

    /// Compute an HMAC or CMAC over `data`.
    ///
    /// # Errors
    ///
    /// `InvalidField` if the algorithm has no MAC construction,
    /// `CryptographicFailure` if the primitive rejects the key.
    fn mac(&self, algorithm: CryptographicAlgorithm, key: &[u8], data: &[u8]) -> Result<Vec<u8>>;

    /// Encrypt `plaintext`; the result carries the IV only if one was generated.
    ///
    /// # Errors
    ///
    /// `InvalidField` for unsupported or missing parameters,
    /// `CryptographicFailure` if the primitive rejects the key.
    fn encrypt(
        &self,
        algorithm: CryptographicAlgorithm,
        key: &[u8],
        plaintext: &[u8],
        mode: Option<BlockCipherMode>,
        padding: Option<PaddingMethod>,
        iv: Option<&[u8]>,
    ) -> Result<EncryptResult>;

    /// Decrypt `ciphertext`.
    ///
    /// # Errors
    ///
    /// `InvalidField` for unsupported or missing parameters (including a
    /// missing IV), `CryptographicFailure` for a bad key or bad padding.
    fn decrypt(
        &self,
        algorithm: CryptographicAlgorithm,
        key: &[u8],
        ciphertext: &[u8],
        mode: Option<BlockCipherMode>,
        padding: Option<PaddingMethod>,
        iv: Option<&[u8]>,
    ) -> Result<Zeroizing<Vec<u8>>>;

    /// Derive `length` bytes of key material with `method`.
    ///
    /// # Errors
    ///
    /// `InvalidField` for unsupported methods or missing inputs,
    /// `CryptographicFailure` if the primitive rejects the inputs.
    fn derive_key(
        &self,
        method: DerivationMethod,
        length: usize,
        request: &DerivationRequest<'_>,
    ) -> Result<Zeroizing<Vec<u8>>>;

    /// Wrap `key_material` under `encryption_key`.
    ///
    /// # Errors
    ///
    /// `InvalidField` for an unsupported wrapping method or algorithm,
    /// `CryptographicFailure` if key wrap rejects the inputs.
    fn wrap_key(
        &self,
        key_material: &[u8],
        wrapping_method: WrappingMethod,
        key_wrap_algorithm: BlockCipherMode,
        encryption_key: &[u8],
    ) -> Result<Vec<u8>>;
}

/// RustCrypto-backed [`CryptographicEngine`].
///
/// Holds only a shared registry and a copy of the configuration, so one
/// instance can serve every request.
///
/// # Example
///
/// ```
/// use kmip_core::{BlockCipherMode, CryptographicAlgorithm, PaddingMethod};
/// use kmip_crypto::{CryptographicEngine, CryptographyEngine};
///
/// let engine = CryptographyEngine::new();
/// let key = engine.create_symmetric_key(CryptographicAlgorithm::Aes, 128).unwrap();
///
/// let encrypted = engine
///     .encrypt(
///         CryptographicAlgorithm::Aes,
///         &key.value,
///         b"attack at dawn",
///         Some(BlockCipherMode::Cbc),
///         Some(PaddingMethod::Pkcs5),
///         None,
///     )
///     .unwrap();
/// let iv = encrypted.iv.unwrap();
///
/// let decrypted = engine
///     .decrypt(
///         CryptographicAlgorithm::Aes,
///         &key.value,
///         &encrypted.ciphertext,
///         Some(BlockCipherMode::Cbc),
///         Some(PaddingMethod::Pkcs5),
///         Some(&iv),
///     )
///     .unwrap();
/// assert_eq!(decrypted.as_slice(), b"attack at dawn");
/// ```
#[derive(Debug, Clone)]
pub struct CryptographyEngine {
    registry: &'static CapabilityRegistry,
    config: EngineConfig,
}

impl CryptographyEngine {
    /// Engine with the standard registry and default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Engine with the standard registry and `config`.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            registry: &STANDARD_REGISTRY,
            config,
        }
    }

    /// Engine restricted to `registry`.
    pub fn with_registry(registry: &'static CapabilityRegistry, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    /// Registry this engine resolves against.
    pub fn registry(&self) -> &'static CapabilityRegistry {
        self.registry
    }

    /// Configuration in effect.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for CryptographyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CryptographicEngine for CryptographyEngine {
    fn create_symmetric_key(
        &self,
        algorithm: CryptographicAlgorithm,
        length_bits: u32,
    ) -> Result<KeyMaterial> {
        keygen::create_symmetric_key(self.registry, algorithm, length_bits)
    }

    fn create_asymmetric_key_pair(
        &self,
        algorithm: CryptographicAlgorithm,
        length_bits: u32,
    ) -> Result<(KeyMaterial, KeyMaterial)> {
        keygen::create_asymmetric_key_pair(self.registry, &self.config, algorithm, length_bits)
    }

    fn mac(&self, algorithm: CryptographicAlgorithm, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        mac::mac(self.registry, algorithm, key, data)
    }

    fn encrypt(
        &self,
        algorithm: CryptographicAlgorithm,
        key: &[u8],
        plaintext: &[u8],
        mode: Option<BlockCipherMode>,
        padding: Option<PaddingMethod>,
        iv: Option<&[u8]>,
    ) -> Result<EncryptResult> {
        let parameters = CipherParameters {
            algorithm,
            key,
            mode,
            padding,
            iv,
        };
        pipeline::encrypt(self.registry, &parameters, plaintext)
    }

    fn decrypt(
        &self,
        algorithm: CryptographicAlgorithm,
        key: &[u8],
        ciphertext: &[u8],
        mode: Option<BlockCipherMode>,
        padding: Option<PaddingMethod>,
        iv: Option<&[u8]>,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let parameters = CipherParameters {
            algorithm,
            key,
            mode,
            padding,
            iv,
        };
        pipeline::decrypt(self.registry, &parameters, ciphertext)
    }

    fn derive_key(
        &self,
        method: DerivationMethod,
        length: usize,
        request: &DerivationRequest<'_>,
    ) -> Result<Zeroizing<Vec<u8>>> {
        kdf::derive_key(self.registry, &self.config, method, length, request)
    }

    fn wrap_key(
        &self,
        key_material: &[u8],
        wrapping_method: WrappingMethod,
        key_wrap_algorithm: BlockCipherMode,
        encryption_key: &[u8],
    ) -> Result<Vec<u8>> {
        wrap::wrap_key(key_material, wrapping_method, key_wrap_algorithm, encryption_key)
    }
}
