#![deny(missing_docs)]
#![doc = "Core error types, math aliases and handles shared by the stepping-helix crates."]

use std::fmt;

use nalgebra::SMatrix;
use serde::{Deserialize, Serialize};

pub mod errors;
pub mod schema;

pub use errors::{ErrorInfo, HelixError};
pub use schema::SchemaVersion;

/// Global Cartesian point (cm).
pub type Point3 = nalgebra::Point3<f64>;

/// Global Cartesian vector, used for momenta (GeV) and directions.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Symmetric 6×6 covariance over (x, y, z, px, py, pz).
pub type Matrix66 = SMatrix<f64, 6, 6>;

/// Symmetric 5×5 covariance over (q/p, λ, φ, x⊥, y⊥).
pub type Matrix55 = SMatrix<f64, 5, 5>;

/// Linear map from Cartesian to curvilinear parameters.
pub type Matrix56 = SMatrix<f64, 5, 6>;

/// Non-owning handle to a volume held in an external registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VolumeId(u32);

impl VolumeId {
    /// Creates a new handle from its raw index.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw index of the handle.
    pub fn as_raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vol#{}", self.0)
    }
}
