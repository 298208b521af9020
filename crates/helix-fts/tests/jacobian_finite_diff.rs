use helix_core::{Matrix66, Point3, Vector3};
use helix_fts::{GlobalTrajectoryParameters, JacobianCartesianToCurvilinear};
use proptest::prelude::*;

fn curvilinear_angles(charge: i32, p: &Vector3) -> [f64; 3] {
    let q = if charge == 0 { 1.0 } else { f64::from(charge) };
    let pt = p.xy().norm();
    [q / p.norm(), p.z.atan2(pt), p.y.atan2(p.x)]
}

fn params(momentum: Vector3, charge: i32) -> GlobalTrajectoryParameters {
    GlobalTrajectoryParameters::new(Point3::new(1.0, -2.0, 3.0), momentum, charge, 3.8)
}

fn check_momentum_rows(momentum: Vector3, charge: i32) {
    let jac = JacobianCartesianToCurvilinear::new(&params(momentum, charge)).unwrap();
    let h = 1e-6;
    for axis in 0..3 {
        let mut up = momentum;
        let mut down = momentum;
        up[axis] += h;
        down[axis] -= h;
        let a = curvilinear_angles(charge, &up);
        let b = curvilinear_angles(charge, &down);
        for row in 0..3 {
            let numeric = (a[row] - b[row]) / (2.0 * h);
            let analytic = jac.jacobian()[(row, 3 + axis)];
            assert!(
                (numeric - analytic).abs() < 1e-5 * (1.0 + analytic.abs()),
                "row {row} axis {axis}: numeric {numeric} analytic {analytic}"
            );
        }
    }
}

#[test]
fn momentum_rows_match_finite_differences() {
    check_momentum_rows(Vector3::new(1.0, 2.0, 3.0), -1);
    check_momentum_rows(Vector3::new(-4.0, 0.5, -1.0), 1);
    check_momentum_rows(Vector3::new(0.3, -0.7, 0.0), 2);
}

#[test]
fn neutral_tracks_use_inverse_momentum() {
    check_momentum_rows(Vector3::new(2.0, 1.0, -2.0), 0);
}

#[test]
fn position_rows_span_the_transverse_plane() {
    let momentum = Vector3::new(1.0, 2.0, 3.0);
    let jac = JacobianCartesianToCurvilinear::new(&params(momentum, 1)).unwrap();
    let m = jac.jacobian();
    let u = Vector3::new(m[(3, 0)], m[(3, 1)], m[(3, 2)]);
    let v = Vector3::new(m[(4, 0)], m[(4, 1)], m[(4, 2)]);
    let t = momentum.normalize();
    assert!((u.norm() - 1.0).abs() < 1e-12);
    assert!((v.norm() - 1.0).abs() < 1e-12);
    assert!(u.dot(&v).abs() < 1e-12);
    assert!(u.dot(&t).abs() < 1e-12);
    assert!(v.dot(&t).abs() < 1e-12);
    assert_eq!(u.z, 0.0);
    for col in 3..6 {
        assert_eq!(m[(3, col)], 0.0);
        assert_eq!(m[(4, col)], 0.0);
    }
    for col in 0..3 {
        for row in 0..3 {
            assert_eq!(m[(row, col)], 0.0);
        }
    }
}

#[test]
fn identity_similarity_is_j_jt() {
    let at = params(Vector3::new(1.0, 2.0, 3.0), -1);
    let jac = JacobianCartesianToCurvilinear::new(&at).unwrap();
    let transported = jac.similarity(&Matrix66::identity());
    let expected = jac.jacobian() * jac.jacobian().transpose();
    assert!((transported - expected).norm() < 1e-15);
    assert!((transported - transported.transpose()).norm() < 1e-15);
}

#[test]
fn degenerate_momenta_are_rejected() {
    let zero = JacobianCartesianToCurvilinear::new(&params(Vector3::zeros(), 1)).unwrap_err();
    assert_eq!(zero.info().code, "zero-momentum");

    let along_z =
        JacobianCartesianToCurvilinear::new(&params(Vector3::new(0.0, 0.0, 4.0), 1)).unwrap_err();
    assert_eq!(along_z.info().code, "zero-transverse-momentum");
    assert!(along_z.info().hint.is_some());
}

proptest! {
    #[test]
    fn similarity_preserves_symmetry(
        px in -10.0f64..10.0,
        py in 0.1f64..10.0,
        pz in -10.0f64..10.0,
        diag in proptest::collection::vec(0.01f64..5.0, 6),
    ) {
        let at = params(Vector3::new(px, py, pz), 1);
        let jac = JacobianCartesianToCurvilinear::new(&at).unwrap();
        let mut cov = Matrix66::zeros();
        for (i, d) in diag.iter().enumerate() {
            cov[(i, i)] = *d;
        }
        let out = jac.similarity(&cov);
        prop_assert!((out - out.transpose()).norm() < 1e-9 * (1.0 + out.norm()));
        for i in 0..5 {
            prop_assert!(out[(i, i)] >= 0.0);
        }
    }
}

#[test]
fn longitudinal_momentum_reports_a_kinematics_error() {
    let err =
        JacobianCartesianToCurvilinear::new(&params(Vector3::new(0.0, 0.0, -3.0), -1)).unwrap_err();
    assert!(matches!(err, helix_core::HelixError::Kinematics(_)));
    assert_eq!(err.info().context["pz"], "-3");
    let rendered = err.to_string();
    assert!(rendered.starts_with("kinematics error: curvilinear angles are singular"));
    assert!(rendered.contains("(code: zero-transverse-momentum)"));
    assert!(rendered.contains("context: [pz=-3]"));
    assert!(rendered.contains("hint: convert in a frame"));
}
