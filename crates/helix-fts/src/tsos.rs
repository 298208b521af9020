use std::sync::Arc;

use helix_core::{Point3, Vector3};

use crate::free_state::{FreeStateView, FreeTrajectoryState};
use crate::surface::Surface;

/// A free trajectory state anchored to a surface, or an explicit invalid state.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryStateOnSurface {
    anchored: Option<Anchored>,
}

#[derive(Debug, Clone)]
struct Anchored {
    state: FreeTrajectoryState,
    surface: Arc<dyn Surface>,
}

impl TrajectoryStateOnSurface {
    /// Anchors `state` to `surface`.
    pub fn new(state: FreeTrajectoryState, surface: Arc<dyn Surface>) -> Self {
        Self {
            anchored: Some(Anchored { state, surface }),
        }
    }

    /// The empty state returned by failed or skipped conversions.
    pub fn invalid() -> Self {
        Self { anchored: None }
    }

    /// Whether the state carries kinematics.
    pub fn is_valid(&self) -> bool {
        self.anchored.is_some()
    }

    /// Underlying free state.
    pub fn free_state(&self) -> Option<&FreeTrajectoryState> {
        self.anchored.as_ref().map(|a| &a.state)
    }

    /// Surface the state is anchored to.
    pub fn surface(&self) -> Option<&Arc<dyn Surface>> {
        self.anchored.as_ref().map(|a| &a.surface)
    }

    /// Global position, if valid.
    pub fn position(&self) -> Option<Point3> {
        self.free_state().map(FreeStateView::position)
    }

    /// Global momentum, if valid.
    pub fn momentum(&self) -> Option<Vector3> {
        self.free_state().map(FreeStateView::momentum)
    }

    /// Whether the state is valid and carries an uncertainty.
    pub fn has_error(&self) -> bool {
        self.free_state().is_some_and(FreeStateView::has_error)
    }
}
