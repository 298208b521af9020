use helix_core::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Speed of light in units converting tesla·GeV⁻¹ into a curvature in cm⁻¹.
pub const CURVATURE_PER_TESLA_GEV: f64 = 2.99792458e-3;

/// Global kinematic parameters of a track: position, momentum, charge and field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalTrajectoryParameters {
    position: Point3,
    momentum: Vector3,
    charge: i32,
    field: f64,
}

impl GlobalTrajectoryParameters {
    /// Creates a parameter set. `field` is the magnetic field magnitude in tesla.
    pub fn new(position: Point3, momentum: Vector3, charge: i32, field: f64) -> Self {
        Self {
            position,
            momentum,
            charge,
            field,
        }
    }

    /// Global position.
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Global momentum.
    pub fn momentum(&self) -> Vector3 {
        self.momentum
    }

    /// Signed charge in units of the elementary charge.
    pub fn charge(&self) -> i32 {
        self.charge
    }

    /// Field magnitude cached alongside the parameters.
    pub fn field(&self) -> f64 {
        self.field
    }

    /// Magnitude of the momentum projection on the global xy plane.
    pub fn transverse_momentum(&self) -> f64 {
        self.momentum.xy().norm()
    }

    /// Returns q/p, or 1/p for neutral tracks.
    pub fn signed_inverse_momentum(&self) -> f64 {
        let p = self.momentum.norm();
        if self.charge == 0 {
            1.0 / p
        } else {
            f64::from(self.charge) / p
        }
    }

    /// Curvature in the transverse plane in cm⁻¹, treating the cached field as axial.
    ///
    /// Returns `None` when the transverse momentum vanishes.
    pub fn transverse_curvature(&self) -> Option<f64> {
        let pt = self.transverse_momentum();
        if pt > 0.0 {
            Some(-CURVATURE_PER_TESLA_GEV * self.field * f64::from(self.charge) / pt)
        } else {
            None
        }
    }
}

impl Default for GlobalTrajectoryParameters {
    fn default() -> Self {
        Self::new(Point3::origin(), Vector3::zeros(), 0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curvature_sign_follows_charge() {
        let pos = Point3::origin();
        let mom = Vector3::new(1.0, 0.0, 0.0);
        let plus = GlobalTrajectoryParameters::new(pos, mom, 1, 3.8);
        let minus = GlobalTrajectoryParameters::new(pos, mom, -1, 3.8);
        let kp = plus.transverse_curvature().unwrap();
        let km = minus.transverse_curvature().unwrap();
        assert!(kp < 0.0);
        assert!((kp + km).abs() < 1e-15);
        assert!((kp + CURVATURE_PER_TESLA_GEV * 3.8).abs() < 1e-15);
    }

    #[test]
    fn longitudinal_track_has_no_transverse_curvature() {
        let params =
            GlobalTrajectoryParameters::new(Point3::origin(), Vector3::new(0.0, 0.0, 5.0), 1, 2.0);
        assert_eq!(params.transverse_curvature(), None);
        assert!((params.signed_inverse_momentum() - 0.2).abs() < 1e-15);
    }
}
