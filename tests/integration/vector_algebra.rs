use approx::assert_abs_diff_eq;
use zerothree_maths::{Vector2, Vector3};

const EPSILON: f32 = 1e-5;

fn samples() -> Vec<Vector3<f32>> {
    vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, -2.0, 0.5),
        Vector3::new(3.0, 4.0, 0.0),
        Vector3::new(-1.25, 7.5, 2.0),
        Vector3::new(0.1, 0.2, 0.3),
    ]
}

#[test]
fn test_dot_is_commutative() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a.dot(&b), b.dot(&a), "a = {}, b = {}", a, b);
            assert_eq!(a * b, b * a);
        }
    }
}

#[test]
fn test_cross_is_anti_commutative() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a % b, -(b % a), "a = {}, b = {}", a, b);
        }
        assert_eq!(a.cross(&a), Vector3::zero());
    }
}

#[test]
fn test_cross_is_orthogonal_to_operands() {
    for a in samples() {
        for b in samples() {
            let c = a.cross(&b);
            assert_abs_diff_eq!(c.dot(&a), 0.0, epsilon = 1e-3);
            assert_abs_diff_eq!(c.dot(&b), 0.0, epsilon = 1e-3);
        }
    }
}

#[test]
fn test_three_four_five() {
    let mut v = Vector3::new(3.0_f32, 4.0, 0.0);
    assert_eq!(v.magnitude(), 5.0);
    assert_eq!(v.magnitude_square(), 25.0);

    v.normalize();
    assert_abs_diff_eq!(v, Vector3::new(0.6, 0.8, 0.0), epsilon = EPSILON);
    assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = EPSILON);

    assert_eq!(Vector2::new(3.0_f32, 4.0).length(), 5.0);
}

#[test]
fn test_right_angle() {
    let x = Vector3::new(1.0_f32, 0.0, 0.0);
    let y = Vector3::new(0.0_f32, 1.0, 0.0);
    assert_abs_diff_eq!(x.angle(&y), 90.0, epsilon = 1e-4);
}

#[test]
fn test_scale_round_trip() {
    for v in samples() {
        for k in [0.5_f32, 3.0, -7.25, 1e-3] {
            let mut w = v * k;
            w /= k;
            assert_abs_diff_eq!(w, v, epsilon = EPSILON);

            let mut u = v;
            u *= k;
            assert_abs_diff_eq!(u * (1.0 / k), v, epsilon = 1e-4);
        }
    }
}

#[test]
fn test_binary_operators_leave_operands_unmodified() {
    let a = Vector3::new(1.0_f32, 2.0, 3.0);
    let b = Vector3::new(-1.0_f32, 0.5, 2.0);
    let _ = a + b;
    let _ = a - b;
    let _ = a % b;
    let _ = a * 2.0;
    assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(b, Vector3::new(-1.0, 0.5, 2.0));
}

#[test]
fn test_conjugate_and_negate_agree() {
    for v in samples() {
        let mut a = v;
        let mut b = v;
        a.conjugate();
        b.negate();
        assert_eq!(a, b);
        assert_eq!(a, -v);
    }
}

#[test]
fn test_show_lines() {
    let mut out = Vec::new();
    Vector2::new(1.5_f32, -2.0).show_to(&mut out).unwrap();
    Vector3::new(1.0_f64, 2.0, 3.0).show_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "(1.5, -2)\n(1, 2, 3)\n");

    // stdout variant must not panic
    Vector3::new(0.0_f32, 0.0, 0.0).show();
}
