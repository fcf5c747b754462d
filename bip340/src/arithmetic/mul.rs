//! Scalar multiplication with fixed 4-bit windows.
//!
//! Every multiplication performs the same sequence of doublings, additions
//! and table scans regardless of the scalar, so timing does not depend on
//! secret scalars.

use crate::arithmetic::{scalar::Scalar, ProjectivePoint};
use core::ops::{Mul, MulAssign};
use elliptic_curve::subtle::{ConditionallySelectable, ConstantTimeEq};

/// Number of 4-bit windows in a 256-bit scalar.
const WINDOWS: usize = 64;

/// Lookup table containing precomputed values `[0, p, 2p, ..., 15p]`
struct LookupTable([ProjectivePoint; 16]);

impl From<&ProjectivePoint> for LookupTable {
    fn from(p: &ProjectivePoint) -> Self {
        let mut points = [ProjectivePoint::IDENTITY; 16];
        for j in 1..16 {
            points[j] = p + &points[j - 1];
        }
        LookupTable(points)
    }
}

impl LookupTable {
    /// Given `0 <= x < 16`, returns `x * p` in constant time.
    ///
    /// Every entry is read, so the memory access pattern is independent of `x`.
    fn select(&self, x: u8) -> ProjectivePoint {
        debug_assert!(x < 16);

        let mut t = ProjectivePoint::IDENTITY;
        for (j, point) in self.0.iter().enumerate() {
            let c = x.ct_eq(&(j as u8));
            t.conditional_assign(point, c);
        }
        t
    }
}

fn mul_windowed(x: &ProjectivePoint, k: &Scalar) -> ProjectivePoint {
    let lookup_table = LookupTable::from(x);
    let mut acc = ProjectivePoint::IDENTITY;
    for i in (0..WINDOWS).rev() {
        for _j in 0..4 {
            acc = acc.double();
        }
        acc += &lookup_table.select(k.nibble(i));
    }
    acc
}

impl ProjectivePoint {
    /// Calculates `x * k + y * l`.
    ///
    /// Both tables are scanned in lockstep so the doublings are shared.
    pub fn lincomb(
        x: &ProjectivePoint,
        k: &Scalar,
        y: &ProjectivePoint,
        l: &Scalar,
    ) -> ProjectivePoint {
        let table1 = LookupTable::from(x);
        let table2 = LookupTable::from(y);

        let mut acc = ProjectivePoint::IDENTITY;
        for i in (0..WINDOWS).rev() {
            for _j in 0..4 {
                acc = acc.double();
            }
            acc += &table1.select(k.nibble(i));
            acc += &table2.select(l.nibble(i));
        }
        acc
    }
}

impl Mul<Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: Scalar) -> ProjectivePoint {
        mul_windowed(&self, &other)
    }
}

impl Mul<&Scalar> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: &Scalar) -> ProjectivePoint {
        mul_windowed(self, other)
    }
}

impl Mul<&Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: &Scalar) -> ProjectivePoint {
        mul_windowed(&self, other)
    }
}

impl MulAssign<Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = mul_windowed(self, &rhs);
    }
}

impl MulAssign<&Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, rhs: &Scalar) {
        *self = mul_windowed(self, rhs);
    }
}
