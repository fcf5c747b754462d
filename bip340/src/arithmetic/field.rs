//! Field arithmetic modulo p = 2^256 - 2^32 - 2^9 - 2^8 - 2^7 - 2^6 - 2^4 - 1

use super::util::{
    adc, add4, limbs_from_be_bytes, limbs_to_be_bytes, mac, mul_wide, select4, sub4, sub_if_above,
};
use crate::{Error, FieldBytes, Result};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use elliptic_curve::subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Field modulus p.
const MODULUS: [u64; 4] = [
    0xFFFF_FFFE_FFFF_FC2F,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// `2^256 mod p`, i.e. `2^32 + 977`.
const R: u64 = 0x1_0000_03D1;

/// `p - 2`, the Fermat inversion exponent.
const P_MINUS_2: [u64; 4] = [
    0xFFFF_FFFE_FFFF_FC2D,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// `(p + 1) / 4`, the square root exponent (valid because p ≡ 3 mod 4).
const P_PLUS_1_DIV_4: [u64; 4] = [
    0xFFFF_FFFF_BFFF_FF0C,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0x3FFF_FFFF_FFFF_FFFF,
];

/// An element in the finite field used for curve coordinates.
///
/// Stored as four little-endian 64-bit limbs. Every value is fully reduced,
/// so the limbs are a canonical encoding and equality is limb equality.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldElement([u64; 4]);

impl FieldElement {
    /// Zero element.
    pub const ZERO: Self = Self([0, 0, 0, 0]);

    /// Multiplicative identity.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// Create a field element from a small integer.
    pub const fn from_u64(w: u64) -> Self {
        Self([w, 0, 0, 0])
    }

    /// Parses the given byte array without checking it lies in `[0, p)`.
    ///
    /// Only for constants known to be in range.
    pub(crate) const fn from_bytes_unchecked(bytes: &FieldBytes) -> Self {
        Self(limbs_from_be_bytes(bytes))
    }

    /// Attempts to parse the given byte array as a big-endian field element.
    ///
    /// Returns `None` if the bytes do not encode an integer in the range `[0, p)`.
    pub fn from_bytes(bytes: &FieldBytes) -> CtOption<Self> {
        let limbs = limbs_from_be_bytes(bytes);
        let (_, borrow) = sub4(&limbs, &MODULUS);
        CtOption::new(Self(limbs), Choice::from(borrow as u8))
    }

    /// Returns the big-endian encoding of this field element.
    pub fn to_bytes(self) -> FieldBytes {
        limbs_to_be_bytes(&self.0)
    }

    /// Determine if this field element is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Determine if this field element is odd: `self mod 2 == 1`.
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.0[0] & 1) as u8)
    }

    /// Determine if this field element is even: `self mod 2 == 0`.
    pub fn is_even(&self) -> Choice {
        !self.is_odd()
    }

    /// Returns `self + rhs mod p`.
    pub fn add(&self, rhs: &Self) -> Self {
        let (sum, carry) = add4(&self.0, &rhs.0);
        // a, b < p so the sum is below 2p: one subtraction suffices, and is
        // mandatory when the addition overflowed 2^256.
        let (reduced, borrow) = sub4(&sum, &MODULUS);
        let keep_sum = Choice::from((borrow & !carry) as u8);
        Self(select4(&reduced, &sum, keep_sum))
    }

    /// Returns `self - rhs mod p`.
    pub fn sub(&self, rhs: &Self) -> Self {
        let (diff, borrow) = sub4(&self.0, &rhs.0);
        let mask = 0u64.wrapping_sub(borrow);
        let correction = [
            MODULUS[0] & mask,
            MODULUS[1] & mask,
            MODULUS[2] & mask,
            MODULUS[3] & mask,
        ];
        Self(add4(&diff, &correction).0)
    }

    /// Returns `-self mod p`.
    pub fn negate(&self) -> Self {
        Self::ZERO.sub(self)
    }

    /// Returns `2 * self`.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Returns `self * rhs mod p`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::reduce_wide(&mul_wide(&self.0, &rhs.0))
    }

    /// Returns `self * self mod p`.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Reduces a 512-bit product using `2^256 ≡ R (mod p)`.
    fn reduce_wide(w: &[u64; 8]) -> Self {
        // lo + hi * R; the top carry is below 2^34.
        let (r0, carry) = mac(w[0], w[4], R, 0);
        let (r1, carry) = mac(w[1], w[5], R, carry);
        let (r2, carry) = mac(w[2], w[6], R, carry);
        let (r3, carry) = mac(w[3], w[7], R, carry);

        // Fold the carry once more: carry * R < 2^67.
        let t = (carry as u128) * (R as u128);
        let (r0, c) = adc(r0, t as u64, 0);
        let (r1, c) = adc(r1, (t >> 64) as u64, c);
        let (r2, c) = adc(r2, 0, c);
        let (r3, c) = adc(r3, 0, c);

        // An overflow here leaves a value below 2^67, so adding R cannot
        // overflow again.
        let (r0, c) = adc(r0, R & 0u64.wrapping_sub(c), 0);
        let (r1, c) = adc(r1, 0, c);
        let (r2, c) = adc(r2, 0, c);
        let (r3, _) = adc(r3, 0, c);

        Self(sub_if_above(&[r0, r1, r2, r3], &MODULUS))
    }

    /// Raises `self` to a public exponent given as little-endian limbs.
    ///
    /// Runs in time that depends on the exponent only.
    fn pow_vartime(&self, exp: &[u64; 4]) -> Self {
        let mut res = Self::ONE;
        for limb in exp.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if (limb >> i) & 1 == 1 {
                    res = res.mul(self);
                }
            }
        }
        res
    }

    /// Returns the multiplicative inverse of self, if self is non-zero.
    ///
    /// Computed as `self^(p-2)`, which maps zero to zero; the returned
    /// option is none in that case.
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.pow_vartime(&P_MINUS_2), !self.is_zero())
    }

    /// Returns the square root of self mod p, or `None` if no square root exists.
    ///
    /// Which of the two roots is returned is unspecified; callers that need
    /// a particular parity must select it themselves.
    pub fn sqrt(&self) -> CtOption<Self> {
        let root = self.pow_vartime(&P_PLUS_1_DIV_4);
        CtOption::new(root, root.square().ct_eq(self))
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(select4(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl TryFrom<&[u8]> for FieldElement {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: &FieldBytes = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        })?;
        Option::from(Self::from_bytes(bytes)).ok_or(Error::OutOfRange)
    }
}

impl From<FieldElement> for FieldBytes {
    fn from(fe: FieldElement) -> FieldBytes {
        fe.to_bytes()
    }
}

macro_rules! impl_field_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $inner:ident) => {
        impl $op<FieldElement> for FieldElement {
            type Output = FieldElement;

            fn $op_fn(self, rhs: FieldElement) -> FieldElement {
                FieldElement::$inner(&self, &rhs)
            }
        }

        impl $op<&FieldElement> for FieldElement {
            type Output = FieldElement;

            fn $op_fn(self, rhs: &FieldElement) -> FieldElement {
                FieldElement::$inner(&self, rhs)
            }
        }

        impl $op<&FieldElement> for &FieldElement {
            type Output = FieldElement;

            fn $op_fn(self, rhs: &FieldElement) -> FieldElement {
                FieldElement::$inner(self, rhs)
            }
        }

        impl $assign<FieldElement> for FieldElement {
            fn $assign_fn(&mut self, rhs: FieldElement) {
                *self = FieldElement::$inner(self, &rhs);
            }
        }

        impl $assign<&FieldElement> for FieldElement {
            fn $assign_fn(&mut self, rhs: &FieldElement) {
                *self = FieldElement::$inner(self, rhs);
            }
        }
    };
}

impl_field_op!(Add, add, AddAssign, add_assign, add);
impl_field_op!(Sub, sub, SubAssign, sub_assign, sub);
impl_field_op!(Mul, mul, MulAssign, mul_assign, mul);

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}
