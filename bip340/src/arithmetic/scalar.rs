//! Scalar field arithmetic modulo the secp256k1 group order.

use super::util::{
    adc, add4, limbs_from_be_bytes, limbs_to_be_bytes, mac, mul_wide, select4, sub4, sub_if_above,
};
use crate::{Error, FieldBytes, Result};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use elliptic_curve::subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Constant representing the modulus
/// n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
const MODULUS: [u64; 4] = [
    0xBFD2_5E8C_D036_4141,
    0xBAAE_DCE6_AF48_A03B,
    0xFFFF_FFFF_FFFF_FFFE,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// `2^256 - n`, a 129-bit value.
const NEG_MODULUS: [u64; 4] = [!MODULUS[0] + 1, !MODULUS[1], !MODULUS[2], !MODULUS[3]];

/// An integer modulo the secp256k1 group order `n`.
///
/// Four little-endian 64-bit limbs, always fully reduced.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scalar([u64; 4]);

impl Scalar {
    /// Zero scalar.
    pub const ZERO: Self = Self([0, 0, 0, 0]);

    /// Multiplicative identity.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// Create a scalar from a small integer.
    pub const fn from_u64(w: u64) -> Self {
        Self([w, 0, 0, 0])
    }

    /// Attempts to parse the given byte array as a big-endian scalar.
    ///
    /// Returns `None` if the bytes do not encode an integer in the range `[0, n)`.
    pub fn from_bytes(bytes: &FieldBytes) -> CtOption<Self> {
        let limbs = limbs_from_be_bytes(bytes);
        let (_, borrow) = sub4(&limbs, &MODULUS);
        CtOption::new(Self(limbs), Choice::from(borrow as u8))
    }

    /// Interprets the given byte array as a big-endian integer and reduces
    /// it modulo `n`.
    ///
    /// Since `2^256 < 2n` a single conditional subtraction is enough.
    pub fn reduce_bytes(bytes: &FieldBytes) -> Self {
        Self(sub_if_above(&limbs_from_be_bytes(bytes), &MODULUS))
    }

    /// Returns the big-endian encoding of this scalar.
    pub fn to_bytes(self) -> FieldBytes {
        limbs_to_be_bytes(&self.0)
    }

    /// Is this scalar equal to 0?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Returns the `i`-th 4-bit digit, counting from the least significant.
    ///
    /// `i` must be below 64.
    pub(crate) fn nibble(&self, i: usize) -> u8 {
        ((self.0[i / 16] >> ((i % 16) * 4)) & 0xf) as u8
    }

    /// Returns `self + rhs mod n`.
    pub fn add(&self, rhs: &Self) -> Self {
        let (sum, carry) = add4(&self.0, &rhs.0);
        let (reduced, borrow) = sub4(&sum, &MODULUS);
        let keep_sum = Choice::from((borrow & !carry) as u8);
        Self(select4(&reduced, &sum, keep_sum))
    }

    /// Returns `self - rhs mod n`.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.negate())
    }

    /// Returns `-self mod n`.
    pub fn negate(&self) -> Self {
        let (res, _) = sub4(&MODULUS, &self.0);
        Self::conditional_select(&Self(res), &Self::ZERO, self.is_zero())
    }

    /// Returns `self * rhs mod n`.
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut w = mul_wide(&self.0, &rhs.0);

        // Each pass rewrites lo + hi·2^256 as lo + hi·(2^256 - n). Bit lengths
        // shrink 512 → 386 → 260 → 257 → 256, so four passes always suffice.
        for _ in 0..4 {
            w = fold(&w);
        }

        Self(sub_if_above(&[w[0], w[1], w[2], w[3]], &MODULUS))
    }

    /// Returns `self * self mod n`.
    pub fn square(&self) -> Self {
        self.mul(self)
    }
}

/// Returns `lo + hi * (2^256 - n)` for the 512-bit input `lo + hi * 2^256`.
fn fold(w: &[u64; 8]) -> [u64; 8] {
    let mut r = [w[0], w[1], w[2], w[3], 0, 0, 0, 0];
    for i in 0..4 {
        let mut carry = 0;
        for j in 0..4 {
            let (v, c) = mac(r[i + j], w[i + 4], NEG_MODULUS[j], carry);
            r[i + j] = v;
            carry = c;
        }
        for limb in r.iter_mut().skip(i + 4) {
            let (v, c) = adc(*limb, carry, 0);
            *limb = v;
            carry = c;
        }
    }
    r
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(select4(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl TryFrom<&[u8]> for Scalar {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: &FieldBytes = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        })?;
        Option::from(Self::from_bytes(bytes)).ok_or(Error::OutOfRange)
    }
}

impl From<u64> for Scalar {
    fn from(k: u64) -> Self {
        Self::from_u64(k)
    }
}

impl From<Scalar> for FieldBytes {
    fn from(scalar: Scalar) -> FieldBytes {
        scalar.to_bytes()
    }
}

impl Add<Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        Scalar::add(&self, &rhs)
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        Scalar::add(self, rhs)
    }
}

impl AddAssign<Scalar> for Scalar {
    fn add_assign(&mut self, rhs: Scalar) {
        *self = Scalar::add(self, &rhs);
    }
}

impl Sub<Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar::sub(&self, &rhs)
    }
}

impl Sub<&Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &Scalar) -> Scalar {
        Scalar::sub(self, rhs)
    }
}

impl SubAssign<Scalar> for Scalar {
    fn sub_assign(&mut self, rhs: Scalar) {
        *self = Scalar::sub(self, &rhs);
    }
}

impl Mul<Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar::mul(&self, &rhs)
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        Scalar::mul(self, rhs)
    }
}

impl MulAssign<Scalar> for Scalar {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = Scalar::mul(self, &rhs);
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        self.negate()
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        self.negate()
    }
}
