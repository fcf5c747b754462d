//! A pure-Rust implementation of group operations on secp256k1.
//!
//! The curve is `y² = x³ + 7` over the prime field of order
//! `p = 2²⁵⁶ - 2³² - 977`, with a prime-order group of order `n`.

pub(crate) mod affine;
pub(crate) mod field;
mod mul;
pub(crate) mod projective;
pub(crate) mod scalar;
mod util;

#[cfg(test)]
pub(crate) mod dev;

pub use self::{
    affine::AffinePoint, field::FieldElement, projective::ProjectivePoint, scalar::Scalar,
};

/// `b` coefficient of the curve equation.
const CURVE_EQUATION_B: FieldElement = FieldElement::from_u64(7);

/// `3·b`, which appears throughout the complete addition formulas.
const CURVE_EQUATION_B3: FieldElement = FieldElement::from_u64(21);
