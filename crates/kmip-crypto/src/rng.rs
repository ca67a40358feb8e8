//! Operating system randomness.

use crate::{Error, Result};
use rand::RngCore;
use zeroize::Zeroizing;

/// Fill a fresh buffer of `length` bytes from the OS CSPRNG.
pub(crate) fn random_bytes(length: usize) -> Result<Zeroizing<Vec<u8>>> {
    let mut bytes = Zeroizing::new(vec![0u8; length]);
    rand::rngs::OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| Error::crypto_failure("Random number generation failed.", e))?;
    Ok(bytes)
}
