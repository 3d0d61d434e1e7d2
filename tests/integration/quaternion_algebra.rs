use approx::assert_abs_diff_eq;
use zerothree_maths::{Quaternion, Vector3};

const EPSILON: f32 = 1e-5;

fn samples() -> Vec<Quaternion<f32>> {
    vec![
        Quaternion::new(1.0, Vector3::new(0.0, 0.0, 0.0)),
        Quaternion::new(0.5, Vector3::new(-1.0, 2.0, 0.25)),
        Quaternion::new(-3.0, Vector3::new(0.0, 4.0, 1.0)),
        Quaternion::new(0.0, Vector3::new(0.6, 0.0, -0.8)),
    ]
}

#[test]
fn test_identity_leaves_every_quaternion_unchanged() {
    let identity = Quaternion::new(1.0_f32, Vector3::new(0.0, 0.0, 0.0));
    for q in samples() {
        assert_eq!(identity * q, q);
        assert_eq!(identity.multiply(&q), q);
    }
}

#[test]
fn test_unit_quaternion_times_inverse_is_identity() {
    for mut q in samples() {
        q.convert_to_unit_norm_quaternion();
        assert_abs_diff_eq!(q.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(q * q.inverse(), Quaternion::identity(), epsilon = EPSILON);
    }
}

#[test]
fn test_double_conjugate_round_trips() {
    for q in samples() {
        let twice = q.conjugate().conjugate();
        assert_eq!(twice.s, q.s);
        assert_eq!(twice.v, q.v);
    }
}

#[test]
fn test_conjugate_of_product_reverses_order() {
    let a = samples()[1];
    let b = samples()[2];
    assert_abs_diff_eq!(
        (a * b).conjugate(),
        b.conjugate() * a.conjugate(),
        epsilon = EPSILON
    );
}

#[test]
fn test_norm_is_multiplicative() {
    let a = samples()[1];
    let b = samples()[2];
    assert_abs_diff_eq!((a * b).norm(), a.norm() * b.norm(), epsilon = 1e-4);
}

#[test]
fn test_composed_rotations() {
    let z = Vector3::new(0.0_f32, 0.0, 1.0);
    let quarter = Quaternion::from_axis_angle(z, 90.0);
    let half = quarter * quarter;

    let rotated = half.rotate(&Vector3::new(1.0, 0.0, 0.0));
    assert_abs_diff_eq!(rotated, Vector3::new(-1.0, 0.0, 0.0), epsilon = EPSILON);

    let undone = (half / quarter).rotate(&Vector3::new(1.0, 0.0, 0.0));
    assert_abs_diff_eq!(undone, Vector3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
}

#[test]
fn test_rotation_preserves_angle_between_vectors() {
    let axis = Vector3::new(1.0_f32, 1.0, 1.0).normalized();
    let q = Quaternion::from_axis_angle(axis, 37.0);

    let a = Vector3::new(1.0_f32, 0.0, 0.0);
    let b = Vector3::new(0.0_f32, 2.0, 1.0);
    let before = a.angle(&b);
    let after = q.rotate(&a).angle(&q.rotate(&b));
    assert_abs_diff_eq!(before, after, epsilon = 1e-3);
}

#[cfg(feature = "serde")]
#[test]
fn test_codec_round_trip() {
    use zerothree_maths::numerics::codec::{from_bytes, to_bytes};

    for q in samples() {
        let bytes = to_bytes(&q).unwrap();
        assert_eq!(bytes.len(), 16);
        let decoded: Quaternion<f32> = from_bytes(&bytes).unwrap();
        assert_eq!(decoded, q);
    }
}
