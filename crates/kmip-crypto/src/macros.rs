//! Dispatch helpers from runtime variants to concrete primitive types.

/// Run `$body` with `$ty` bound to the concrete hash type for `$hash`.
macro_rules! with_hash {
    ($hash:expr, $ty:ident => $body:expr) => {
        match $hash {
            $crate::registry::HashFunction::Md5 => {
                type $ty = ::md5::Md5;
                $body
            }
            $crate::registry::HashFunction::Sha1 => {
                type $ty = ::sha1::Sha1;
                $body
            }
            $crate::registry::HashFunction::Sha224 => {
                type $ty = ::sha2::Sha224;
                $body
            }
            $crate::registry::HashFunction::Sha256 => {
                type $ty = ::sha2::Sha256;
                $body
            }
            $crate::registry::HashFunction::Sha384 => {
                type $ty = ::sha2::Sha384;
                $body
            }
            $crate::registry::HashFunction::Sha512 => {
                type $ty = ::sha2::Sha512;
                $body
            }
        }
    };
}

/// Run `$body` with `$cipher` bound to the keyed block cipher inside `$instance`.
macro_rules! with_block_cipher {
    ($instance:expr, $cipher:ident => $body:expr) => {{
        use $crate::pipeline::BlockCipherInstance as Instance;
        match $instance {
            Instance::Aes128($cipher) => $body,
            Instance::Aes192($cipher) => $body,
            Instance::Aes256($cipher) => $body,
            Instance::Des($cipher) => $body,
            Instance::TdesEde2($cipher) => $body,
            Instance::TdesEde3($cipher) => $body,
            Instance::Blowfish($cipher) => $body,
            Instance::Camellia128($cipher) => $body,
            Instance::Camellia192($cipher) => $body,
            Instance::Camellia256($cipher) => $body,
            Instance::Cast5($cipher) => $body,
            Instance::Idea($cipher) => $body,
        }
    }};
}
