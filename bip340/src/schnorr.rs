//! Taproot Schnorr signature verification as defined in [BIP340].
//!
//! # About
//!
//! BIP340 Schnorr signatures operate over the secp256k1 elliptic curve with
//! x-only public keys: a key is the 32-byte x-coordinate of a curve point
//! whose y-coordinate is implicitly even. Signatures are 64 bytes, the
//! x-coordinate of the nonce point `R` followed by the scalar `s`.
//!
//! Because Taproot Schnorr is intended for use in consensus-critical
//! applications, it is fully specified such that no two implementations
//! should disagree on the validity of a signature. Only verification is
//! implemented here.
//!
//! # Usage
//!
//! ```
//! use bip340::schnorr::{Signature, VerifyingKey};
//! use bip340::signature::hazmat::PrehashVerifier;
//! use hex_literal::hex;
//!
//! // BIP340 test vector 1
//! let verifying_key = VerifyingKey::from_bytes(&hex!(
//!     "DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659"
//! ))?;
//! let message = hex!("243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89");
//! let signature = Signature::try_from(&hex!(
//!     "6896BD60EEAE296DB48A229FF71DFE071BDE413E6D43F917DC8DCF8C78DE3341
//!      8906D11AC976ABCCB20B091292BFF4EA897EFCB639EA871CFA95F6DE339E4B0A"
//! )[..])?;
//!
//! assert!(verifying_key.verify_prehash(&message, &signature).is_ok());
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```
//!
//! [BIP340]: https://github.com/bitcoin/bips/blob/master/bip-0340.mediawiki

#![allow(non_snake_case, clippy::many_single_char_names)]

mod verifying;

pub use self::verifying::VerifyingKey;
pub use signature::{self, Error};

use crate::{FieldBytes, FieldElement, Scalar};
use core::fmt;
use sha2::{Digest, Sha256};
use signature::Result;

/// Tag used to derive the challenge scalar `e`.
pub const CHALLENGE_TAG: &[u8] = b"BIP0340/challenge";

/// Taproot Schnorr signature serialized as bytes.
pub type SignatureBytes = [u8; Signature::BYTE_SIZE];

/// Taproot Schnorr signature as defined in [BIP340].
///
/// Parsing only enforces the range conditions `r < p` and `s < n`; whether
/// `r` is the x-coordinate of a curve point is decided by verification.
///
/// [BIP340]: https://github.com/bitcoin/bips/blob/master/bip-0340.mediawiki
#[derive(Copy, Clone)]
pub struct Signature {
    r: FieldElement,
    s: Scalar,
}

impl Signature {
    /// Size of a Taproot Schnorr signature in bytes.
    pub const BYTE_SIZE: usize = 64;

    /// Serialize this signature as bytes.
    pub fn to_bytes(&self) -> SignatureBytes {
        let mut ret = [0; Self::BYTE_SIZE];
        let (r_bytes, s_bytes) = ret.split_at_mut(Self::BYTE_SIZE / 2);
        r_bytes.copy_from_slice(&self.r.to_bytes());
        s_bytes.copy_from_slice(&self.s.to_bytes());
        ret
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> &FieldElement {
        &self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> &Scalar {
        &self.s
    }

    /// Split this signature into its `r` and `s` components.
    fn split(&self) -> (&FieldElement, &Scalar) {
        (self.r(), self.s())
    }
}

impl Eq for Signature {}

impl From<Signature> for SignatureBytes {
    fn from(signature: Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl From<&Signature> for SignatureBytes {
    fn from(signature: &Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        (self.r == other.r) && (self.s == other.s)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Signature> {
        if bytes.len() != Self::BYTE_SIZE {
            return Err(Error::new());
        }

        let (r_bytes, s_bytes) = bytes.split_at(Self::BYTE_SIZE / 2);
        let r = FieldElement::try_from(r_bytes).map_err(|_| Error::new())?;
        let s = Scalar::try_from(s_bytes).map_err(|_| Error::new())?;

        Ok(Self { r, s })
    }
}

impl TryFrom<SignatureBytes> for Signature {
    type Error = Error;

    fn try_from(bytes: SignatureBytes) -> Result<Signature> {
        Self::try_from(&bytes[..])
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_bytes())
    }
}

impl signature::SignatureEncoding for Signature {
    type Repr = SignatureBytes;

    fn to_bytes(&self) -> Self::Repr {
        self.into()
    }
}

/// Computes the BIP340 tagged hash `SHA256(SHA256(tag) || SHA256(tag) || data)`.
pub fn tagged_hash(tag: &[u8], data: &[u8]) -> [u8; 32] {
    tagged_hasher(tag).chain_update(data).finalize().into()
}

/// A [`Sha256`] instance already fed with the doubled tag prefix.
pub(crate) fn tagged_hasher(tag: &[u8]) -> Sha256 {
    let tag_hash = Sha256::digest(tag);
    let mut digest = Sha256::new();
    digest.update(tag_hash);
    digest.update(tag_hash);
    digest
}

/// Computes the challenge `e = int(hash_BIP0340/challenge(r || P || m)) mod n`.
pub(crate) fn challenge(r: &FieldBytes, public_key: &FieldBytes, message: &[u8]) -> Scalar {
    let hash: [u8; 32] = tagged_hasher(CHALLENGE_TAG)
        .chain_update(r)
        .chain_update(public_key)
        .chain_update(message)
        .finalize()
        .into();
    Scalar::reduce_bytes(&hash)
}

/// Verifies a BIP340 signature over a 32-byte message.
///
/// Returns `true` only if every parsing step succeeds and the verification
/// equation holds. Malformed keys or signatures yield `false`; this function
/// never panics and has no side effects.
pub fn verify(message: &[u8; 32], signature: &[u8; 64], public_key: &[u8; 32]) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(public_key) else {
        return false;
    };
    let Ok(signature) = Signature::try_from(&signature[..]) else {
        return false;
    };
    verifying_key.verify_raw(message, &signature).is_ok()
}

// Test vectors from:
// https://github.com/bitcoin/bips/blob/master/bip-0340/test-vectors.csv
#[cfg(test)]
mod tests {
    use super::{tagged_hash, verify, Signature, CHALLENGE_TAG};
    use hex_literal::hex;
    use sha2::{Digest, Sha256};
    use signature::SignatureEncoding;

    const PUBLIC_KEY: [u8; 32] =
        hex!("DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659");
    const MESSAGE: [u8; 32] =
        hex!("243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89");
    const SIGNATURE: [u8; 64] = hex!(
        "6896BD60EEAE296DB48A229FF71DFE071BDE413E6D43F917DC8DCF8C78DE3341
         8906D11AC976ABCCB20B091292BFF4EA897EFCB639EA871CFA95F6DE339E4B0A"
    );

    #[test]
    fn tagged_hash_definition() {
        let data = b"some data";
        let tag_hash = Sha256::digest(CHALLENGE_TAG);
        let expected: [u8; 32] = Sha256::new()
            .chain_update(tag_hash)
            .chain_update(tag_hash)
            .chain_update(data)
            .finalize()
            .into();
        assert_eq!(tagged_hash(CHALLENGE_TAG, data), expected);
        assert_ne!(tagged_hash(b"BIP0340/aux", data), expected);
    }

    #[test]
    fn valid_signature() {
        assert!(verify(&MESSAGE, &SIGNATURE, &PUBLIC_KEY));
    }

    #[test]
    fn signature_round_trip() {
        let sig = Signature::try_from(&SIGNATURE[..]).unwrap();
        assert_eq!(sig.to_bytes(), SIGNATURE);
        assert_eq!(SignatureEncoding::to_bytes(&sig), SIGNATURE);
        assert_eq!(Signature::try_from(SIGNATURE).unwrap(), sig);
    }

    #[test]
    fn signature_wrong_length() {
        assert!(Signature::try_from(&SIGNATURE[..63]).is_err());
        assert!(Signature::try_from(&[0u8; 65][..]).is_err());
    }

    #[test]
    fn signature_range_checks() {
        // r = p
        let mut sig = SIGNATURE;
        sig[..32].copy_from_slice(&hex!(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"
        ));
        assert!(Signature::try_from(&sig[..]).is_err());
        assert!(!verify(&MESSAGE, &sig, &PUBLIC_KEY));

        // s = n
        let mut sig = SIGNATURE;
        sig[32..].copy_from_slice(&hex!(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"
        ));
        assert!(Signature::try_from(&sig[..]).is_err());
        assert!(!verify(&MESSAGE, &sig, &PUBLIC_KEY));
    }

    #[test]
    fn tampered_inputs() {
        let mut sig = SIGNATURE;
        sig[0] ^= 0xff;
        assert!(!verify(&MESSAGE, &sig, &PUBLIC_KEY));

        let mut sig = SIGNATURE;
        sig[63] ^= 0x01;
        assert!(!verify(&MESSAGE, &sig, &PUBLIC_KEY));

        let mut message = MESSAGE;
        message[31] ^= 0x01;
        assert!(!verify(&message, &SIGNATURE, &PUBLIC_KEY));

        // BIP340 vector 0 public key: valid point, unrelated to the signature.
        let other_key = hex!("F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9");
        assert!(!verify(&MESSAGE, &SIGNATURE, &other_key));
    }

    #[test]
    fn invalid_public_keys() {
        // exceeds the field size
        let key = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC30");
        assert!(!verify(&MESSAGE, &SIGNATURE, &key));

        // not on the curve
        let key = hex!("EEFDEA4CDB677750A420FEE807EACF21EB9898AE79B9768766E4FAA04A2D4A34");
        assert!(!verify(&MESSAGE, &SIGNATURE, &key));
    }
}
