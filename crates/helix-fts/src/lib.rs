#![deny(missing_docs)]
#![doc = "Free trajectory states, Cartesian to curvilinear Jacobians and anchoring surfaces."]

/// Cartesian and curvilinear covariance wrappers.
pub mod covariance;
/// Free trajectory state and the read-only capability trait.
pub mod free_state;
/// Cartesian to curvilinear Jacobian.
pub mod jacobian;
/// Global kinematic parameters.
pub mod params;
/// Surfaces and tangent planes.
pub mod surface;
/// Surface-anchored trajectory states.
pub mod tsos;

pub use covariance::{CartesianError, CurvilinearError};
pub use free_state::{FreeStateView, FreeTrajectoryState};
pub use jacobian::JacobianCartesianToCurvilinear;
pub use params::GlobalTrajectoryParameters;
pub use surface::{Cylinder, Plane, Surface, SurfaceKind};
pub use tsos::TrajectoryStateOnSurface;
