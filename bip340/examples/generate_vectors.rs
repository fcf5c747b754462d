//! Regenerates the precompile fixture in `tests/data/schnorr_verify.json`
//! shape with freshly generated keys.
//!
//! Usage: `cargo run --example generate_vectors --features test-vectors [OUT]`
//! Writes to stdout when no output path is given.

use bip340::{
    precompile::{encode_bool, VerificationInput, SCHNORR_VERIFY_GAS},
    sha2::{Digest, Sha256},
    test_vectors::precompile::TestVector,
    SchnorrVerify,
};
use k256::schnorr::{signature::hazmat::PrehashSigner, SigningKey};
use rand_core::{OsRng, RngCore};

fn hash(message: &str) -> [u8; 32] {
    Sha256::digest(message.as_bytes()).into()
}

fn x_only(key: &SigningKey) -> [u8; 32] {
    key.verifying_key().to_bytes().as_slice().try_into().unwrap()
}

fn sign(key: &SigningKey, message: &[u8; 32]) -> [u8; 64] {
    let signature = key.sign_prehash(message).unwrap();
    signature.to_bytes().as_slice().try_into().unwrap()
}

fn input(message: [u8; 32], signature: [u8; 64], public_key: [u8; 32]) -> String {
    hex::encode(
        VerificationInput {
            message,
            signature,
            public_key,
        }
        .to_bytes(),
    )
}

fn vector(input: String, valid: bool, name: String) -> TestVector {
    TestVector {
        input,
        expected: if valid {
            hex::encode(encode_bool(true))
        } else {
            String::new()
        },
        gas: SCHNORR_VERIFY_GAS,
        name,
        no_benchmark: false,
    }
}

fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

fn main() {
    let mut vectors = Vec::new();

    for i in 0..3 {
        let key = SigningKey::random(&mut OsRng);
        let message = hash(&format!("test message {i}"));
        vectors.push(vector(
            input(message, sign(&key, &message), x_only(&key)),
            true,
            format!("Valid signature test {i}"),
        ));
    }

    let message = hash("test message");

    let key = SigningKey::random(&mut OsRng);
    let mut signature = sign(&key, &message);
    signature[0] ^= 0xff;
    vectors.push(vector(
        input(message, signature, x_only(&key)),
        false,
        "Invalid signature - modified signature".into(),
    ));

    let key = SigningKey::random(&mut OsRng);
    let wrong_key = SigningKey::random(&mut OsRng);
    vectors.push(vector(
        input(message, sign(&key, &message), x_only(&wrong_key)),
        false,
        "Invalid signature - wrong public key".into(),
    ));

    let key = SigningKey::random(&mut OsRng);
    vectors.push(vector(
        input(hash("wrong message"), sign(&key, &message), x_only(&key)),
        false,
        "Invalid signature - wrong message".into(),
    ));

    vectors.push(vector(String::new(), false, "Empty input".into()));
    vectors.push(vector("00".into(), false, "Too short input (1 byte)".into()));
    vectors.push(vector(
        hex::encode(random_bytes(127)),
        false,
        "Too short input (127 bytes)".into(),
    ));
    vectors.push(vector(
        hex::encode(random_bytes(129)),
        false,
        "Too long input (129 bytes)".into(),
    ));

    let precompile = SchnorrVerify::default();
    for v in &vectors {
        if let Err(err) = v.check(&precompile) {
            panic!("generated vector {:?} does not hold: {err}", v.name);
        }
    }

    let json = serde_json::to_string_pretty(&vectors).unwrap();
    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, json + "\n").unwrap();
            eprintln!("wrote {} vectors to {path}", vectors.len());
        }
        None => println!("{json}"),
    }
}
