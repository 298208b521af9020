use helix_core::{Matrix55, Matrix66};
use serde::{Deserialize, Serialize};

/// Covariance over the Cartesian parameters (x, y, z, px, py, pz).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianError(Matrix66);

impl CartesianError {
    /// Wraps a 6×6 covariance matrix.
    pub fn new(matrix: Matrix66) -> Self {
        Self(matrix)
    }

    /// Returns the underlying matrix.
    pub fn matrix(&self) -> &Matrix66 {
        &self.0
    }
}

/// Covariance over the curvilinear parameters (q/p, λ, φ, x⊥, y⊥).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvilinearError(Matrix55);

impl CurvilinearError {
    /// Wraps a 5×5 covariance matrix.
    pub fn new(matrix: Matrix55) -> Self {
        Self(matrix)
    }

    /// Returns the underlying matrix.
    pub fn matrix(&self) -> &Matrix55 {
        &self.0
    }
}
