//! Taproot Schnorr verifying key.

use super::{challenge, Signature};
use crate::{AffinePoint, Error as ParseError, FieldBytes, FieldElement, ProjectivePoint};
use sha2::{Digest, Sha256};
use signature::{hazmat::PrehashVerifier, Error, Result, Verifier};

/// Taproot Schnorr verifying key: an x-only public key.
///
/// The wrapped point always has an even y-coordinate.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey {
    /// Lifted public key point
    point: AffinePoint,
}

impl VerifyingKey {
    /// Borrow the inner [`AffinePoint`] this type wraps.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Serialize as bytes.
    pub fn to_bytes(&self) -> FieldBytes {
        self.point.x().to_bytes()
    }

    /// Verify a Schnorr signature over an arbitrary message.
    ///
    /// # ⚠️ Warning
    ///
    /// This is a low-level interface: `message` is used as-is in the
    /// challenge hash. BIP340 callers usually pass a 32-byte digest, which is
    /// what the [`PrehashVerifier`] impl does.
    pub fn verify_raw(&self, message: &[u8], signature: &Signature) -> Result<()> {
        let (r, s) = signature.split();
        let e = challenge(&r.to_bytes(), &self.to_bytes(), message);

        let R = ProjectivePoint::lincomb(
            &ProjectivePoint::GENERATOR,
            s,
            &ProjectivePoint::from(self.point),
            &-e,
        )
        .to_affine();

        if R.is_identity().into() || R.y_is_odd().into() || R.x() != *r {
            return Err(Error::new());
        }

        Ok(())
    }

    /// Parse verifying key from big endian-encoded x-coordinate.
    pub fn from_bytes(bytes: &[u8]) -> core::result::Result<Self, ParseError> {
        let x = FieldElement::try_from(bytes)?;
        let point = AffinePoint::lift_x(&x)?;
        Ok(Self { point })
    }
}

//
// `*Verifier` trait impls
//

impl PrehashVerifier<Signature> for VerifyingKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> Result<()> {
        self.verify_raw(prehash, signature)
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> Result<()> {
        self.verify_prehash(&Sha256::digest(msg), signature)
    }
}

//
// Other trait impls
//

impl From<VerifyingKey> for AffinePoint {
    fn from(vk: VerifyingKey) -> AffinePoint {
        *vk.as_affine()
    }
}

impl From<&VerifyingKey> for AffinePoint {
    fn from(vk: &VerifyingKey) -> AffinePoint {
        *vk.as_affine()
    }
}

impl TryFrom<AffinePoint> for VerifyingKey {
    type Error = ParseError;

    /// Accepts only on-curve points with an even y-coordinate.
    fn try_from(point: AffinePoint) -> core::result::Result<VerifyingKey, ParseError> {
        let on_curve = AffinePoint::from_coordinates(point.x(), point.y());
        let valid = on_curve.is_some() & !point.is_identity() & !point.y_is_odd();
        if valid.into() {
            Ok(Self { point })
        } else {
            Err(ParseError::InvalidXCoordinate)
        }
    }
}

impl TryFrom<&[u8]> for VerifyingKey {
    type Error = ParseError;

    fn try_from(bytes: &[u8]) -> core::result::Result<VerifyingKey, ParseError> {
        Self::from_bytes(bytes)
    }
}
