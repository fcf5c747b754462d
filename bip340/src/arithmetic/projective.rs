//! Projective points

#![allow(clippy::op_ref)]

use super::{AffinePoint, FieldElement, CURVE_EQUATION_B3};
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use elliptic_curve::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// A point on the secp256k1 curve in projective coordinates `(X : Y : Z)`,
/// representing the affine point `(X/Z, Y/Z)`.
///
/// Addition and doubling use the complete formulas from Renes, Costello and
/// Batina (2015) for `a = 0`, so no input, including the identity
/// `(0 : 1 : 0)`, needs special casing.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    pub(super) z: FieldElement,
}

impl ProjectivePoint {
    /// Additive identity of the group: the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    /// Base point of secp256k1.
    pub const GENERATOR: Self = Self {
        x: AffinePoint::GENERATOR.x,
        y: AffinePoint::GENERATOR.y,
        z: FieldElement::ONE,
    };

    /// Is this point the identity point?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Returns the affine representation of this point.
    pub fn to_affine(&self) -> AffinePoint {
        let zinv = self.z.invert();
        let identity = zinv.is_none();
        let zinv = zinv.unwrap_or(FieldElement::ZERO);
        let affine = AffinePoint::new(self.x * zinv, self.y * zinv);
        AffinePoint::conditional_select(&affine, &AffinePoint::IDENTITY, identity)
    }

    /// Returns `-self`.
    fn neg(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x,
            y: self.y.negate(),
            z: self.z,
        }
    }

    /// Returns `self + other`.
    fn add(&self, other: &ProjectivePoint) -> ProjectivePoint {
        // Algorithm 7, https://eprint.iacr.org/2015/1060.pdf
        let xx = self.x * other.x;
        let yy = self.y * other.y;
        let zz = self.z * other.z;

        let xy_pairs = ((self.x + self.y) * (other.x + other.y)) - (xx + yy);
        let yz_pairs = ((self.y + self.z) * (other.y + other.z)) - (yy + zz);
        let xz_pairs = ((self.x + self.z) * (other.x + other.z)) - (xx + zz);

        let bzz3 = CURVE_EQUATION_B3 * zz;
        let yy_m_bzz3 = yy - bzz3;
        let yy_p_bzz3 = yy + bzz3;

        let xx3 = xx.double() + xx;
        let bxz3 = CURVE_EQUATION_B3 * xz_pairs;

        ProjectivePoint {
            x: (xy_pairs * yy_m_bzz3) - (yz_pairs * bxz3),
            y: (yy_p_bzz3 * yy_m_bzz3) + (xx3 * bxz3),
            z: (yz_pairs * yy_p_bzz3) + (xx3 * xy_pairs),
        }
    }

    /// Returns `self + other` for an affine `other`.
    fn add_mixed(&self, other: &AffinePoint) -> ProjectivePoint {
        // Algorithm 8, https://eprint.iacr.org/2015/1060.pdf
        let xx = self.x * other.x;
        let yy = self.y * other.y;
        let xy_pairs = ((self.x + self.y) * (other.x + other.y)) - (xx + yy);
        let yz_pairs = (other.y * self.z) + self.y;
        let xz_pairs = (other.x * self.z) + self.x;

        let bzz3 = CURVE_EQUATION_B3 * self.z;
        let yy_m_bzz3 = yy - bzz3;
        let yy_p_bzz3 = yy + bzz3;

        let xx3 = xx.double() + xx;
        let bxz3 = CURVE_EQUATION_B3 * xz_pairs;

        let sum = ProjectivePoint {
            x: (xy_pairs * yy_m_bzz3) - (yz_pairs * bxz3),
            y: (yy_p_bzz3 * yy_m_bzz3) + (xx3 * bxz3),
            z: (yz_pairs * yy_p_bzz3) + (xx3 * xy_pairs),
        };

        // The mixed formula assumes `other` is not the identity.
        ProjectivePoint::conditional_select(&sum, self, other.is_identity())
    }

    /// Doubles this point.
    pub fn double(&self) -> ProjectivePoint {
        // Algorithm 9, https://eprint.iacr.org/2015/1060.pdf
        let yy = self.y.square();
        let yy8 = yy.double().double().double();
        let yz = self.y * self.z;
        let bzz3 = CURVE_EQUATION_B3 * self.z.square();
        let bzz9 = bzz3.double() + bzz3;

        let yy_m_bzz9 = yy - bzz9;
        let yy_p_bzz3 = yy + bzz3;
        let xy2 = (self.x * self.y).double();

        ProjectivePoint {
            x: xy2 * yy_m_bzz9,
            y: (yy_m_bzz9 * yy_p_bzz3) + (bzz3 * yy8),
            z: yz * yy8,
        }
    }

    /// Returns `self - other`.
    fn sub(&self, other: &ProjectivePoint) -> ProjectivePoint {
        self.add(&other.neg())
    }
}

impl Default for ProjectivePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<AffinePoint> for ProjectivePoint {
    fn from(p: AffinePoint) -> Self {
        let projective = ProjectivePoint {
            x: p.x,
            y: p.y,
            z: FieldElement::ONE,
        };
        Self::conditional_select(&projective, &Self::IDENTITY, p.is_identity())
    }
}

impl From<&AffinePoint> for ProjectivePoint {
    fn from(p: &AffinePoint) -> Self {
        Self::from(*p)
    }
}

impl From<ProjectivePoint> for AffinePoint {
    fn from(p: ProjectivePoint) -> AffinePoint {
        p.to_affine()
    }
}

impl From<&ProjectivePoint> for AffinePoint {
    fn from(p: &ProjectivePoint) -> AffinePoint {
        p.to_affine()
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ConstantTimeEq for ProjectivePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.x * other.z).ct_eq(&(other.x * self.z))
            & (self.y * other.z).ct_eq(&(other.y * self.z))
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ProjectivePoint {}

impl Add<ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(&self, &other)
    }
}

impl Add<&ProjectivePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(self, other)
    }
}

impl Add<&ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(&self, other)
    }
}

impl AddAssign<ProjectivePoint> for ProjectivePoint {
    fn add_assign(&mut self, rhs: ProjectivePoint) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl AddAssign<&ProjectivePoint> for ProjectivePoint {
    fn add_assign(&mut self, rhs: &ProjectivePoint) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl Add<AffinePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: AffinePoint) -> ProjectivePoint {
        ProjectivePoint::add_mixed(&self, &other)
    }
}

impl Add<&AffinePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &AffinePoint) -> ProjectivePoint {
        ProjectivePoint::add_mixed(self, other)
    }
}

impl AddAssign<AffinePoint> for ProjectivePoint {
    fn add_assign(&mut self, rhs: AffinePoint) {
        *self = ProjectivePoint::add_mixed(self, &rhs);
    }
}

impl Sub<ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(&self, &other)
    }
}

impl Sub<&ProjectivePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(self, other)
    }
}

impl SubAssign<ProjectivePoint> for ProjectivePoint {
    fn sub_assign(&mut self, rhs: ProjectivePoint) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl Neg for ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint::neg(&self)
    }
}

impl Neg for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{AffinePoint, ProjectivePoint};
    use hex_literal::hex;

    const DOUBLE_G: ([u8; 32], [u8; 32]) = (
        hex!("C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5"),
        hex!("1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A"),
    );

    const TRIPLE_G: ([u8; 32], [u8; 32]) = (
        hex!("F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9"),
        hex!("388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672"),
    );

    fn coordinates(p: &ProjectivePoint) -> ([u8; 32], [u8; 32]) {
        let affine = p.to_affine();
        (affine.x().to_bytes(), affine.y().to_bytes())
    }

    #[test]
    fn affine_to_projective() {
        let basepoint_affine = AffinePoint::GENERATOR;
        let basepoint_projective = ProjectivePoint::GENERATOR;

        assert_eq!(
            ProjectivePoint::from(basepoint_affine),
            basepoint_projective,
        );
        assert_eq!(basepoint_projective.to_affine(), basepoint_affine);
        assert!(!bool::from(basepoint_projective.to_affine().is_identity()));

        assert!(bool::from(
            ProjectivePoint::IDENTITY.to_affine().is_identity()
        ));
        assert!(bool::from(
            ProjectivePoint::from(AffinePoint::IDENTITY).is_identity()
        ));
    }

    #[test]
    fn projective_identity_addition() {
        let identity = ProjectivePoint::IDENTITY;
        let generator = ProjectivePoint::GENERATOR;

        assert_eq!(identity + &generator, generator);
        assert_eq!(generator + &identity, generator);
        assert_eq!(identity + &identity, identity);
        assert_eq!(identity.double(), identity);
    }

    #[test]
    fn doubling_matches_known_point() {
        let g = ProjectivePoint::GENERATOR;
        assert_eq!(coordinates(&g.double()), DOUBLE_G);
        assert_eq!(coordinates(&(g + &g)), DOUBLE_G);
    }

    #[test]
    fn addition_matches_known_point() {
        let g = ProjectivePoint::GENERATOR;
        assert_eq!(coordinates(&(g.double() + &g)), TRIPLE_G);
        assert_eq!(coordinates(&(g + &g.double())), TRIPLE_G);
        assert_eq!(coordinates(&(g.double() + AffinePoint::GENERATOR)), TRIPLE_G);
    }

    #[test]
    fn mixed_addition_of_identity() {
        let g = ProjectivePoint::GENERATOR;
        assert_eq!(g + AffinePoint::IDENTITY, g);
        assert_eq!(
            ProjectivePoint::IDENTITY + AffinePoint::GENERATOR,
            ProjectivePoint::GENERATOR
        );
    }

    #[test]
    fn projective_add_vs_double() {
        let mut p = ProjectivePoint::GENERATOR;
        for _ in 0..20 {
            let q = p.double();
            assert_eq!(p + &p, q);
            p = q + &ProjectivePoint::GENERATOR;
        }
    }

    #[test]
    fn add_inverse_is_identity() {
        let g = ProjectivePoint::GENERATOR;
        assert!(bool::from((g + &-g).is_identity()));
        assert!(bool::from((g - g).is_identity()));
        assert_eq!(g.double() - g, g);
    }

    #[test]
    fn negation_flips_y_parity() {
        let g = AffinePoint::GENERATOR;
        let neg = (-ProjectivePoint::GENERATOR).to_affine();
        assert_eq!(neg.x(), g.x());
        assert_ne!(
            bool::from(neg.y_is_odd()),
            bool::from(g.y_is_odd())
        );
    }
}
