#![no_main]
use bip340::{AffinePoint, FieldElement, ProjectivePoint, Scalar};
use libfuzzer_sys::fuzz_target;

fn check_group(p1: ProjectivePoint, p2: ProjectivePoint, s: Scalar, t: Scalar) {
    let identity = ProjectivePoint::IDENTITY;

    // Test that addition and doubling are consistent
    assert!(p1.double() == p1 + p1 - identity);

    // Test that negation works correctly
    let sum = p1 + p2;
    assert!(bool::from((sum + (-sum)).is_identity()));

    // Test scalar multiplication distributive property
    let scalar_mul = p1 * s;
    assert!(scalar_mul + scalar_mul == p1 * (s + s));

    // Test the linear combination against separate multiplications
    assert!(ProjectivePoint::lincomb(&p1, &s, &p2, &t) == p1 * s + p2 * t);
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 128 {
        return;
    }

    let bytes = |i: usize| -> [u8; 32] { data[i * 32..(i + 1) * 32].try_into().unwrap() };

    // Lifting must agree with the affine constructor and pick the even root.
    let x = FieldElement::from_bytes(&bytes(0));
    if let Some(x) = Option::<FieldElement>::from(x) {
        if let Ok(point) = AffinePoint::lift_x(&x) {
            assert!(!bool::from(point.y_is_odd()));
            assert!(bool::from(
                AffinePoint::from_coordinates(point.x(), point.y()).is_some()
            ));
        }
    }

    let s = Scalar::reduce_bytes(&bytes(1));
    let t = Scalar::reduce_bytes(&bytes(2));
    let p1 = ProjectivePoint::GENERATOR * Scalar::reduce_bytes(&bytes(3));
    let p2 = AffinePoint::lift_x_bytes(&bytes(0))
        .map(ProjectivePoint::from)
        .unwrap_or(ProjectivePoint::GENERATOR);

    check_group(p1, p2, s, t);
});
