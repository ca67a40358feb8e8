#![no_main]

use kmip_core::{
    BlockCipherMode, CryptographicAlgorithm, DerivationMethod, HashingAlgorithm, PaddingMethod,
};
use kmip_crypto::{CryptographicEngine, CryptographyEngine, DerivationRequest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decrypt and derive must reject any input with an error, never a panic
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let engine = CryptographyEngine::new();

    let algorithms = CryptographicAlgorithm::ALL;
    let modes = BlockCipherMode::ALL;
    let paddings = PaddingMethod::ALL;
    let algorithm = algorithms[selector as usize % algorithms.len()];
    let mode = modes[(selector as usize / 7) % modes.len()];
    let padding = paddings[(selector as usize / 3) % paddings.len()];

    let split = rest.len() / 3;
    let (key, rest) = rest.split_at(split);
    let (iv, ciphertext) = rest.split_at(split.min(rest.len()));

    let _ = engine.decrypt(algorithm, key, ciphertext, Some(mode), Some(padding), Some(iv));
    let _ = engine.decrypt(algorithm, key, ciphertext, Some(mode), Some(padding), None);

    let hashes = HashingAlgorithm::ALL;
    let methods = DerivationMethod::ALL;
    let request = DerivationRequest::new()
        .key_material(key)
        .data(ciphertext)
        .salt(iv)
        .iterations(u32::from(selector) + 1)
        .hash(hashes[selector as usize % hashes.len()])
        .encryption_algorithm(algorithm)
        .mode(mode)
        .padding(padding);
    let method = methods[(selector as usize / 5) % methods.len()];
    let _ = engine.derive_key(method, usize::from(selector) + 1, &request);
});
