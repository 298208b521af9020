use serde::{Deserialize, Serialize};

/// Which surface a converted state is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SurfaceAnchor {
    /// The surface supplied by the caller.
    #[default]
    Surface,
    /// The tangent plane of the supplied surface at the state's position.
    TangentPlane,
}

impl From<bool> for SurfaceAnchor {
    fn from(tangent_plane: bool) -> Self {
        if tangent_plane {
            SurfaceAnchor::TangentPlane
        } else {
            SurfaceAnchor::Surface
        }
    }
}

/// Options controlling conversions into free trajectory states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Compute and cache the curvilinear covariance while converting.
    pub precompute_curvilinear: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            precompute_curvilinear: true,
        }
    }
}
