use std::f32::consts::PI;

use vantage::{Matrix, Quaternion, Vector2, Vector3, Vector4};

const TOL: f32 = 1e-5;

fn close(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

fn matrix_close(a: Matrix, b: Matrix, tol: f32) -> bool {
    a.to_float_array()
        .iter()
        .zip(b.to_float_array().iter())
        .all(|(x, y)| close(*x, *y, tol))
}

fn quaternion_close(a: Quaternion, b: Quaternion, tol: f32) -> bool {
    close(a.x, b.x, tol) && close(a.y, b.y, tol) && close(a.z, b.z, tol) && close(a.w, b.w, tol)
}

fn sample_vectors() -> Vec<Vector3> {
    let mut out = Vec::new();
    for i in -2..=2 {
        for j in -2..=2 {
            for k in -2..=2 {
                if i == 0 && j == 0 && k == 0 {
                    continue;
                }
                out.push(Vector3::new(i as f32 * 1.7, j as f32 * 0.3, k as f32 * 25.0));
            }
        }
    }
    out.push(Vector3::new(1e-3, 0.0, 0.0));
    out.push(Vector3::new(1e4, -2e4, 3e3));
    out
}

fn sample_unit_quaternions() -> Vec<Quaternion> {
    let axes = [
        Vector3::X,
        Vector3::Y,
        Vector3::Z,
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(-0.3, 0.8, 0.1),
    ];
    let angles = [0.0, 0.25, 1.0, PI / 2.0, 2.5, PI, 3.5, 2.0 * PI - 0.1];

    axes.iter()
        .flat_map(|axis| angles.iter().map(move |angle| Quaternion::from_axis_angle(*axis, *angle)))
        .collect()
}

fn sample_invertible_matrices() -> Vec<Matrix> {
    vec![
        Matrix::IDENTITY,
        Matrix::translate(3.0, -1.0, 2.0),
        Matrix::scale(2.0, 0.5, 4.0),
        Matrix::rotate(Vector3::new(1.0, 2.0, 3.0), 0.7),
        Matrix::rotate_xyz(Vector3::new(0.3, -1.2, 2.0)) * Matrix::translate(0.0, 5.0, -5.0),
        Matrix::look_at(Vector3::new(4.0, 3.0, 8.0), Vector3::ZERO, Vector3::Y),
        Matrix::perspective(60.0, 1.5, 0.1, 100.0),
        Matrix::ortho(-4.0, 4.0, -3.0, 3.0, 0.1, 50.0),
    ]
}

#[test]
fn normalize_is_idempotent_and_unit_length() {
    for v in sample_vectors() {
        let n = v.normalize();
        assert!(close(n.length(), 1.0, TOL), "{v:?} -> {n:?}");
        assert!((n.normalize() - n).length() <= TOL, "{v:?}");
    }
}

#[test]
fn normalizing_zero_stays_zero() {
    assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
    assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
    assert_eq!(Vector4::ZERO.normalize(), Vector4::ZERO);

    let q = Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize();
    assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 0.0));
    assert!(!q.w.is_nan());
}

#[test]
fn matrix_times_inverse_is_identity() {
    for m in sample_invertible_matrices() {
        let product = m.multiply(m.invert());
        assert!(matrix_close(product, Matrix::IDENTITY, 1e-4), "{m:?} -> {product:?}");

        let checked = m.try_invert().unwrap();
        assert!(matrix_close(checked, m.invert(), 0.0));
    }
}

#[test]
fn singular_matrix_is_reported_by_checked_inverse() {
    let flat = Matrix::scale(1.0, 0.0, 1.0);
    assert!(flat.try_invert().is_err());
    assert!(flat.invert().to_float_array().iter().any(|v| !v.is_finite()));
}

#[test]
fn quaternion_matrix_round_trip_up_to_sign() {
    for q in sample_unit_quaternions() {
        let back = Quaternion::from_matrix(q.to_matrix());
        assert!(
            quaternion_close(back, q, 1e-4) || quaternion_close(back, -q, 1e-4),
            "{q:?} -> {back:?}"
        );
    }
}

#[test]
fn slerp_hits_endpoints() {
    let quaternions = sample_unit_quaternions();
    for q1 in &quaternions {
        for q2 in &quaternions {
            let start = q1.slerp(*q2, 0.0);
            assert!(quaternion_close(start, *q1, 1e-5), "{q1:?} {q2:?} -> {start:?}");

            let end = q1.slerp(*q2, 1.0);
            assert!(quaternion_close(end, *q2, 1e-5), "{q1:?} {q2:?} -> {end:?}");
        }
    }
}

#[test]
fn slerp_reaches_other_endpoint_across_negative_dot() {
    let q1 = Quaternion::from_axis_angle(Vector3::Z, 0.2);
    let q2 = Quaternion::from_axis_angle(Vector3::Z, 5.0);
    assert!(q1.dot(q2) < 0.0);

    let end = q1.slerp(q2, 1.0);
    assert!(quaternion_close(end, q2, 1e-5), "{end:?}");
    assert!(!quaternion_close(end, -q2, 1e-3));
}

#[test]
fn slerp_averages_nearly_identical_rotations() {
    let q1 = Quaternion::IDENTITY;
    let q2 = Quaternion::from_axis_angle(Vector3::Z, 0.0015);
    let expected = Quaternion::new(0.0, 0.0, 0.000375, 0.9999999);

    let r = q1.slerp(q2, 0.0);
    assert!(quaternion_close(r, expected, 1e-6), "{r:?}");
    assert!(!quaternion_close(r, q1, 1e-4));
}

#[test]
fn slerp_of_identical_rotations_is_constant() {
    for q in sample_unit_quaternions() {
        for t in [0.0, 0.1, 0.5, 0.77, 1.0] {
            let r = q.slerp(q, t);
            assert!(quaternion_close(r, q, 1e-5), "{q:?} at {t} -> {r:?}");
        }
    }
}

#[test]
fn perspective_diagonal_for_ninety_degrees() {
    let m = Matrix::perspective(90.0, 1.0, 0.1, 100.0);
    let expected = 1.0 / (PI / 4.0).tan();
    assert!(close(m.m0, expected, TOL));
    assert!(close(m.m5, expected, TOL));
}

#[test]
fn multiply_matches_sequential_transforms() {
    let a = Matrix::rotate_y(0.9);
    let b = Matrix::translate(2.0, 0.0, -1.0);
    let c = Matrix::scale(1.0, 3.0, 1.0);
    let p = Vector3::new(0.5, 1.0, -2.0);

    let sequential = p.transform(a).transform(b).transform(c);
    let combined = p.transform(a * b * c);
    assert!((sequential - combined).length() < 1e-4);
}

#[test]
fn rotation_by_quaternion_matches_matrix() {
    let p = Vector3::new(1.0, -2.0, 0.5);
    for q in sample_unit_quaternions() {
        let by_quaternion = p.rotate_by_quaternion(q);
        let by_matrix = p.transform(q.to_matrix());
        assert!((by_quaternion - by_matrix).length() < 1e-4, "{q:?}");
    }
}

#[test]
fn axis_angle_round_trip() {
    let q = Quaternion::from_axis_angle(Vector3::new(0.0, 3.0, 4.0), 1.2);
    let (axis, angle) = q.to_axis_angle();
    assert!((axis - Vector3::new(0.0, 0.6, 0.8)).length() < 1e-4);
    assert!(close(angle, 1.2, 1e-4));

    let (axis, angle) = Quaternion::IDENTITY.to_axis_angle();
    assert_eq!(axis, Vector3::X);
    assert!(close(angle, 0.0, TOL));
}
