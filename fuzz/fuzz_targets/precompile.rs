#![no_main]
// Differential fuzzing of the precompile against the k256 Schnorr verifier.
use bip340::{precompile::encode_bool, Precompile, SchnorrVerify};
use k256::schnorr::{signature::hazmat::PrehashVerifier, Signature, VerifyingKey};
use libfuzzer_sys::fuzz_target;

fn reference(input: &[u8]) -> bool {
    if input.len() != 128 {
        return false;
    }
    let (message, rest) = input.split_at(32);
    let (signature, public_key) = rest.split_at(64);
    match (
        VerifyingKey::from_bytes(public_key),
        Signature::try_from(signature),
    ) {
        (Ok(key), Ok(sig)) => key.verify_prehash(message, &sig).is_ok(),
        _ => false,
    }
}

fuzz_target!(|data: &[u8]| {
    let precompile = SchnorrVerify::default();

    // Gas is charged regardless of the input.
    assert!(precompile.run(precompile.gas_cost() - 1, data).is_err());

    let output = precompile.run(precompile.gas_cost(), data).unwrap();
    assert_eq!(output.gas_used, precompile.gas_cost());
    assert_eq!(output.bytes, encode_bool(reference(data)));
});
