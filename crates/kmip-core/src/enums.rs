//! Cryptographic enumerations defined by KMIP 1.x.
//!
//! Only the wire values live here. Which of them an engine actually supports
//! is decided by the capability registry in `kmip-crypto`.

kmip_enumeration! {
    /// Cryptographic Algorithm (KMIP §9.1.3.2.13).
    pub enum CryptographicAlgorithm {
        /// DES.
        Des = 0x01,
        /// Triple DES (3DES).
        TripleDes = 0x02,
        /// AES.
        Aes = 0x03,
        /// RSA.
        Rsa = 0x04,
        /// DSA.
        Dsa = 0x05,
        /// ECDSA.
        Ecdsa = 0x06,
        /// HMAC with SHA-1.
        HmacSha1 = 0x07,
        /// HMAC with SHA-224.
        HmacSha224 = 0x08,
        /// HMAC with SHA-256.
        HmacSha256 = 0x09,
        /// HMAC with SHA-384.
        HmacSha384 = 0x0A,
        /// HMAC with SHA-512.
        HmacSha512 = 0x0B,
        /// HMAC with MD5.
        HmacMd5 = 0x0C,
        /// Diffie-Hellman.
        Dh = 0x0D,
        /// Elliptic curve Diffie-Hellman.
        Ecdh = 0x0E,
        /// Elliptic curve MQV.
        Ecmqv = 0x0F,
        /// Blowfish.
        Blowfish = 0x10,
        /// Camellia.
        Camellia = 0x11,
        /// CAST5.
        Cast5 = 0x12,
        /// IDEA.
        Idea = 0x13,
        /// MARS.
        Mars = 0x14,
        /// RC2.
        Rc2 = 0x15,
        /// RC4 (ARC4).
        Rc4 = 0x16,
        /// RC5.
        Rc5 = 0x17,
        /// SKIPJACK.
        Skipjack = 0x18,
        /// Twofish.
        Twofish = 0x19,
        /// Generic elliptic curve.
        Ec = 0x1A,
        /// One-time pad.
        OneTimePad = 0x1B,
        /// ChaCha20.
        ChaCha20 = 0x1C,
        /// Poly1305.
        Poly1305 = 0x1D,
        /// ChaCha20-Poly1305.
        ChaCha20Poly1305 = 0x1E,
        /// SHA3-224.
        Sha3_224 = 0x1F,
        /// SHA3-256.
        Sha3_256 = 0x20,
        /// SHA3-384.
        Sha3_384 = 0x21,
        /// SHA3-512.
        Sha3_512 = 0x22,
        /// HMAC with SHA3-224.
        HmacSha3_224 = 0x23,
        /// HMAC with SHA3-256.
        HmacSha3_256 = 0x24,
        /// HMAC with SHA3-384.
        HmacSha3_384 = 0x25,
        /// HMAC with SHA3-512.
        HmacSha3_512 = 0x26,
        /// SHAKE-128.
        Shake128 = 0x27,
        /// SHAKE-256.
        Shake256 = 0x28,
    }
}

kmip_enumeration! {
    /// Block Cipher Mode (KMIP §9.1.3.2.14).
    pub enum BlockCipherMode {
        /// Cipher block chaining.
        Cbc = 0x01,
        /// Electronic codebook.
        Ecb = 0x02,
        /// Propagating cipher block chaining.
        Pcbc = 0x03,
        /// Cipher feedback.
        Cfb = 0x04,
        /// Output feedback.
        Ofb = 0x05,
        /// Counter.
        Ctr = 0x06,
        /// Cipher-based MAC.
        Cmac = 0x07,
        /// Counter with CBC-MAC.
        Ccm = 0x08,
        /// Galois/counter mode.
        Gcm = 0x09,
        /// CBC-MAC.
        CbcMac = 0x0A,
        /// XEX tweaked-codebook with ciphertext stealing.
        Xts = 0x0B,
        /// AES key wrap with padding (RFC 5649).
        AesKeyWrapPadding = 0x0C,
        /// NIST key wrap (RFC 3394).
        NistKeyWrap = 0x0D,
        /// X9.102 AESKW.
        X9_102Aeskw = 0x0E,
        /// X9.102 TDKW.
        X9_102Tdkw = 0x0F,
        /// X9.102 AKW1.
        X9_102Akw1 = 0x10,
        /// X9.102 AKW2.
        X9_102Akw2 = 0x11,
        /// Generic AEAD.
        Aead = 0x12,
    }
}

kmip_enumeration! {
    /// Padding Method (KMIP §9.1.3.2.15).
    pub enum PaddingMethod {
        /// No padding.
        None = 0x01,
        /// RSA OAEP.
        Oaep = 0x02,
        /// PKCS#5 (applied as PKCS#7 at the cipher's block size).
        Pkcs5 = 0x03,
        /// SSL 3.
        Ssl3 = 0x04,
        /// Zero bytes.
        Zeros = 0x05,
        /// ANSI X9.23.
        AnsiX923 = 0x06,
        /// ISO 10126.
        Iso10126 = 0x07,
        /// RSA PKCS#1 v1.5.
        Pkcs1v15 = 0x08,
        /// X9.31.
        X9_31 = 0x09,
        /// RSA PSS.
        Pss = 0x0A,
    }
}

kmip_enumeration! {
    /// Hashing Algorithm (KMIP §9.1.3.2.16).
    pub enum HashingAlgorithm {
        /// MD2.
        Md2 = 0x01,
        /// MD4.
        Md4 = 0x02,
        /// MD5.
        Md5 = 0x03,
        /// SHA-1.
        Sha1 = 0x04,
        /// SHA-224.
        Sha224 = 0x05,
        /// SHA-256.
        Sha256 = 0x06,
        /// SHA-384.
        Sha384 = 0x07,
        /// SHA-512.
        Sha512 = 0x08,
        /// RIPEMD-160.
        Ripemd160 = 0x09,
        /// Tiger.
        Tiger = 0x0A,
        /// Whirlpool.
        Whirlpool = 0x0B,
        /// SHA-512/224.
        Sha512_224 = 0x0C,
        /// SHA-512/256.
        Sha512_256 = 0x0D,
        /// SHA3-224.
        Sha3_224 = 0x0E,
        /// SHA3-256.
        Sha3_256 = 0x0F,
        /// SHA3-384.
        Sha3_384 = 0x10,
        /// SHA3-512.
        Sha3_512 = 0x11,
    }
}

kmip_enumeration! {
    /// Derivation Method (KMIP §9.1.3.2.21).
    pub enum DerivationMethod {
        /// PBKDF2 (RFC 8018).
        Pbkdf2 = 0x01,
        /// Plain hash of the input.
        Hash = 0x02,
        /// HMAC-based extract-and-expand (HKDF).
        Hmac = 0x03,
        /// Symmetric encryption of the derivation data.
        Encrypt = 0x04,
        /// NIST SP 800-108 counter mode.
        Nist800_108C = 0x05,
        /// NIST SP 800-108 feedback mode.
        Nist800_108F = 0x06,
        /// NIST SP 800-108 double-pipeline iteration mode.
        Nist800_108Dpi = 0x07,
        /// Asymmetric key agreement.
        AsymmetricKey = 0x08,
    }
}

kmip_enumeration! {
    /// Wrapping Method (KMIP §9.1.3.2.4).
    pub enum WrappingMethod {
        /// Encrypt only.
        Encrypt = 0x01,
        /// MAC/sign only.
        MacSign = 0x02,
        /// Encrypt, then MAC/sign.
        EncryptThenMacSign = 0x03,
        /// MAC/sign, then encrypt.
        MacSignThenEncrypt = 0x04,
        /// TR-31.
        Tr31 = 0x05,
    }
}

kmip_enumeration! {
    /// Key Format Type (KMIP §9.1.3.2.3).
    pub enum KeyFormatType {
        /// Raw key bytes.
        Raw = 0x01,
        /// Opaque vendor format.
        Opaque = 0x02,
        /// PKCS#1 DER.
        Pkcs1 = 0x03,
        /// PKCS#8 DER.
        Pkcs8 = 0x04,
        /// X.509 SubjectPublicKeyInfo DER.
        X509 = 0x05,
        /// SEC1 EC private key.
        EcPrivateKey = 0x06,
        /// Transparent symmetric key.
        TransparentSymmetricKey = 0x07,
        /// Transparent DSA private key.
        TransparentDsaPrivateKey = 0x08,
        /// Transparent DSA public key.
        TransparentDsaPublicKey = 0x09,
        /// Transparent RSA private key.
        TransparentRsaPrivateKey = 0x0A,
        /// Transparent RSA public key.
        TransparentRsaPublicKey = 0x0B,
        /// Transparent DH private key.
        TransparentDhPrivateKey = 0x0C,
        /// Transparent DH public key.
        TransparentDhPublicKey = 0x0D,
        /// Transparent ECDSA private key.
        TransparentEcdsaPrivateKey = 0x0E,
        /// Transparent ECDSA public key.
        TransparentEcdsaPublicKey = 0x0F,
        /// Transparent ECDH private key.
        TransparentEcdhPrivateKey = 0x10,
        /// Transparent ECDH public key.
        TransparentEcdhPublicKey = 0x11,
        /// Transparent ECMQV private key.
        TransparentEcmqvPrivateKey = 0x12,
        /// Transparent ECMQV public key.
        TransparentEcmqvPublicKey = 0x13,
    }
}
