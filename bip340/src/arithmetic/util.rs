//! Multi-limb helpers shared by the field and scalar implementations.
//!
//! Numbers are `[u64; 4]` in little-endian limb order.

use elliptic_curve::subtle::{Choice, ConditionallySelectable};

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow.
///
/// The borrow is either `0` or `1`.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (ret as u64, ((ret >> 64) as u64) & 1)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// `lhs + rhs` with the outgoing carry.
#[inline(always)]
pub(crate) const fn add4(lhs: &[u64; 4], rhs: &[u64; 4]) -> ([u64; 4], u64) {
    let (r0, carry) = adc(lhs[0], rhs[0], 0);
    let (r1, carry) = adc(lhs[1], rhs[1], carry);
    let (r2, carry) = adc(lhs[2], rhs[2], carry);
    let (r3, carry) = adc(lhs[3], rhs[3], carry);
    ([r0, r1, r2, r3], carry)
}

/// `lhs - rhs` with the outgoing borrow.
#[inline(always)]
pub(crate) const fn sub4(lhs: &[u64; 4], rhs: &[u64; 4]) -> ([u64; 4], u64) {
    let (r0, borrow) = sbb(lhs[0], rhs[0], 0);
    let (r1, borrow) = sbb(lhs[1], rhs[1], borrow);
    let (r2, borrow) = sbb(lhs[2], rhs[2], borrow);
    let (r3, borrow) = sbb(lhs[3], rhs[3], borrow);
    ([r0, r1, r2, r3], borrow)
}

/// Full 512-bit product of two 256-bit numbers.
#[inline(always)]
pub(crate) const fn mul_wide(lhs: &[u64; 4], rhs: &[u64; 4]) -> [u64; 8] {
    let mut w = [0u64; 8];
    let mut i = 0;
    while i < 4 {
        let mut carry = 0;
        let mut j = 0;
        while j < 4 {
            let (v, c) = mac(w[i + j], lhs[i], rhs[j], carry);
            w[i + j] = v;
            carry = c;
            j += 1;
        }
        w[i + 4] = carry;
        i += 1;
    }
    w
}

/// Returns `value - modulus` unless that underflows, in which case `value`.
///
/// Callers guarantee `value < 2·modulus`.
#[inline(always)]
pub(crate) fn sub_if_above(value: &[u64; 4], modulus: &[u64; 4]) -> [u64; 4] {
    let (reduced, borrow) = sub4(value, modulus);
    select4(&reduced, value, Choice::from(borrow as u8))
}

/// `a` when `choice` is 0, `b` when it is 1.
#[inline(always)]
pub(crate) fn select4(a: &[u64; 4], b: &[u64; 4], choice: Choice) -> [u64; 4] {
    [
        u64::conditional_select(&a[0], &b[0], choice),
        u64::conditional_select(&a[1], &b[1], choice),
        u64::conditional_select(&a[2], &b[2], choice),
        u64::conditional_select(&a[3], &b[3], choice),
    ]
}

/// Interprets 32 big-endian bytes as little-endian limbs.
#[inline(always)]
pub(crate) const fn limbs_from_be_bytes(bytes: &[u8; 32]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    let mut i = 0;
    while i < 4 {
        let mut limb = 0u64;
        let mut j = 0;
        while j < 8 {
            limb = (limb << 8) | (bytes[(3 - i) * 8 + j] as u64);
            j += 1;
        }
        limbs[i] = limb;
        i += 1;
    }
    limbs
}

/// Serializes little-endian limbs as 32 big-endian bytes.
#[inline(always)]
pub(crate) fn limbs_to_be_bytes(limbs: &[u64; 4]) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    for (chunk, limb) in bytes.chunks_exact_mut(8).zip(limbs.iter().rev()) {
        chunk.copy_from_slice(&limb.to_be_bytes());
    }
    bytes
}
