use helix_core::{ErrorInfo, HelixError, Matrix55, Matrix56, Matrix66, Vector3};

use crate::params::GlobalTrajectoryParameters;

/// Jacobian of (q/p, λ, φ, x⊥, y⊥) with respect to (x, y, z, px, py, pz).
///
/// The curvilinear frame at the track point is `T = p/|p|`,
/// `U = ẑ×T / |ẑ×T|` and `V = T×U`; the transverse coordinates are the
/// projections of a displacement on `U` and `V`. For neutral tracks the
/// first parameter is 1/p.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JacobianCartesianToCurvilinear {
    matrix: Matrix56,
}

impl JacobianCartesianToCurvilinear {
    /// Evaluates the Jacobian at the supplied kinematics.
    ///
    /// Fails when the momentum vanishes or is parallel to the global z
    /// axis, where λ and φ are not differentiable.
    pub fn new(params: &GlobalTrajectoryParameters) -> Result<Self, HelixError> {
        let p = params.momentum();
        let p2 = p.norm_squared();
        let p_mag = p2.sqrt();
        if !(p_mag > 0.0) || !p_mag.is_finite() {
            let info = ErrorInfo::new(
                "zero-momentum",
                "curvilinear frame needs a non-zero momentum",
            )
            .with_context("p", p_mag.to_string());
            return Err(HelixError::Kinematics(info));
        }
        let pt2 = p.x * p.x + p.y * p.y;
        let pt = pt2.sqrt();
        if !(pt > 0.0) {
            let info = ErrorInfo::new(
                "zero-transverse-momentum",
                "curvilinear angles are singular for a momentum along z",
            )
            .with_context("pz", p.z.to_string())
            .with_hint("convert in a frame where the track has transverse momentum");
            return Err(HelixError::Kinematics(info));
        }

        let q = if params.charge() == 0 {
            1.0
        } else {
            f64::from(params.charge())
        };
        let t = p / p_mag;
        let u = Vector3::new(-t.y, t.x, 0.0).normalize();
        let v = t.cross(&u);

        let mut matrix = Matrix56::zeros();
        let p3 = p2 * p_mag;
        matrix[(0, 3)] = -q * p.x / p3;
        matrix[(0, 4)] = -q * p.y / p3;
        matrix[(0, 5)] = -q * p.z / p3;

        matrix[(1, 3)] = -p.x * p.z / (p2 * pt);
        matrix[(1, 4)] = -p.y * p.z / (p2 * pt);
        matrix[(1, 5)] = pt / p2;

        matrix[(2, 3)] = -p.y / pt2;
        matrix[(2, 4)] = p.x / pt2;

        for axis in 0..3 {
            matrix[(3, axis)] = u[axis];
            matrix[(4, axis)] = v[axis];
        }

        Ok(Self { matrix })
    }

    /// Returns the 5×6 matrix.
    pub fn jacobian(&self) -> &Matrix56 {
        &self.matrix
    }

    /// Transports a Cartesian covariance: `J · C · Jᵗ`.
    pub fn similarity(&self, covariance: &Matrix66) -> Matrix55 {
        self.matrix * covariance * self.matrix.transpose()
    }
}
