use zerothree_maths::{Quaternion, Vector2, Vector3};

use super::init_tracing;

#[test]
fn test_zero_vector_normalizes_to_nan() {
    init_tracing();

    let mut v = Vector3::<f32>::zero();
    v.normalize();
    assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());
    assert!(Vector3::<f64>::zero().normalized().x.is_nan());
}

#[test]
fn test_zero_quaternion_inverts_to_non_finite() {
    init_tracing();

    let zero = Quaternion::<f32>::default();
    let components: [f32; 4] = zero.inverse().into();
    assert!(components.iter().all(|c| !c.is_finite()));

    let mut out = Quaternion::identity();
    zero.inverse_into(&mut out);
    assert!(out.s.is_nan());

    // division by a zero quaternion poisons the result
    let q = Quaternion::new(1.0_f32, Vector3::new(1.0, 0.0, 0.0));
    assert!((q / zero).s.is_nan());
}

#[test]
fn test_scalar_division_by_zero_propagates() {
    let v = Vector3::new(1.0_f32, -1.0, 0.0) / 0.0;
    assert_eq!(v.x, f32::INFINITY);
    assert_eq!(v.y, f32::NEG_INFINITY);
    assert!(v.z.is_nan());

    let mut w = Vector2::new(2.0_f64, 0.0);
    w /= 0.0;
    assert!(w.x.is_infinite() && w.y.is_nan());

    let q = Quaternion::new(1.0_f32, Vector3::zero()) / 0.0;
    assert!(q.s.is_infinite());
}

#[test]
fn test_nan_input_is_accepted_and_propagates() {
    let v = Vector3::new(f32::NAN, 1.0, 2.0);
    assert!(v.magnitude().is_nan());
    assert!(v.dot(&Vector3::one()).is_nan());
    assert!(v.angle(&Vector3::one()).is_nan());
}

#[test]
fn test_angle_with_zero_vector_is_nan() {
    init_tracing();
    let x = Vector3::new(1.0_f32, 0.0, 0.0);
    assert!(x.angle(&Vector3::zero()).is_nan());
}
