use std::sync::Arc;

use helix_core::{Matrix66, Point3, Vector3, VolumeId};
use helix_fts::{
    CartesianError, CurvilinearError, FreeStateView, FreeTrajectoryState,
    GlobalTrajectoryParameters, JacobianCartesianToCurvilinear, Surface,
    TrajectoryStateOnSurface,
};
use tracing::{debug, trace, warn};

use crate::direction::PropagationDirection;
use crate::options::{ConversionOptions, SurfaceAnchor};
use crate::status::StepStatus;
use crate::volume::VolumeLookup;

/// Radiation length meaning "not in dense material".
pub const RADIATION_LENGTH_INFINITE: f64 = 1e12;

/// Kinematics and bookkeeping of a track at one point of a propagation.
///
/// The record is owned by the stepping loop that advances it. The
/// covariance is only reachable through accessors so that a state without
/// uncertainty always stores the zero matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct StepState {
    /// Global position.
    pub position: Point3,
    /// Global momentum.
    pub momentum: Vector3,
    /// Signed charge; integral-valued.
    pub charge: f64,
    covariance: Matrix66,
    has_covariance: bool,
    /// Path length accumulated since the start of propagation.
    pub path_length: f64,
    /// Path accumulated in units of radiation length.
    pub radiation_path_length: f64,
    /// Direction of the current step.
    pub direction: PropagationDirection,
    /// Volume the state currently sits in.
    pub current_volume: Option<VolumeId>,
    /// Magnetic field magnitude at the state's position.
    pub field: f64,
    /// Ionisation energy loss per unit length.
    pub energy_loss_rate: f64,
    /// Derivative of the energy loss rate with respect to momentum.
    pub energy_loss_rate_derivative: f64,
    /// Radiation length of the local material.
    pub radiation_length: f64,
    /// Set once the whole propagation, not only this step, has finished.
    pub is_complete: bool,
    is_valid: bool,
    status: StepStatus,
}

impl Default for StepState {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            momentum: Vector3::zeros(),
            charge: 0.0,
            covariance: Matrix66::zeros(),
            has_covariance: false,
            path_length: 0.0,
            radiation_path_length: 0.0,
            direction: PropagationDirection::Undefined,
            current_volume: None,
            field: 0.0,
            energy_loss_rate: 0.0,
            energy_loss_rate_derivative: 0.0,
            radiation_length: RADIATION_LENGTH_INFINITE,
            is_complete: false,
            is_valid: false,
            status: StepStatus::Undefined,
        }
    }
}

impl StepState {
    /// An empty, invalid record with every bookkeeping field at its sentinel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a valid record from a full trajectory state.
    pub fn from_free_state<S>(source: &S) -> Self
    where
        S: FreeStateView + ?Sized,
    {
        let error = source.cartesian_error();
        trace!(
            charge = source.charge(),
            has_covariance = error.is_some(),
            "seeding step state from free state"
        );
        let mut state = Self {
            position: source.position(),
            momentum: source.momentum(),
            charge: f64::from(source.charge()),
            is_valid: true,
            ..Self::default()
        };
        state.set_covariance(error.map(|e| *e.matrix()));
        state
    }

    /// Covariance over (x, y, z, px, py, pz), if tracked.
    pub fn covariance(&self) -> Option<&Matrix66> {
        self.has_covariance.then_some(&self.covariance)
    }

    /// Mutable covariance, if tracked.
    pub fn covariance_mut(&mut self) -> Option<&mut Matrix66> {
        if self.has_covariance {
            Some(&mut self.covariance)
        } else {
            None
        }
    }

    /// Stored matrix; identically zero when no covariance is tracked.
    pub fn raw_covariance(&self) -> &Matrix66 {
        &self.covariance
    }

    /// Whether a covariance is tracked.
    pub fn has_covariance(&self) -> bool {
        self.has_covariance
    }

    /// Replaces the covariance; `None` stops tracking and zeroes the matrix.
    pub fn set_covariance(&mut self, covariance: Option<Matrix66>) {
        match covariance {
            Some(matrix) => {
                self.covariance = matrix;
                self.has_covariance = true;
            }
            None => self.clear_covariance(),
        }
    }

    /// Stops tracking the covariance.
    pub fn clear_covariance(&mut self) {
        self.covariance = Matrix66::zeros();
        self.has_covariance = false;
    }

    /// Whether the record may be converted or consumed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Marks the record valid or invalid.
    pub fn set_valid(&mut self, valid: bool) {
        self.is_valid = valid;
    }

    /// Marks the record invalid.
    pub fn invalidate(&mut self) {
        self.is_valid = false;
    }

    /// Result of the last step.
    pub fn status(&self) -> StepStatus {
        self.status
    }

    /// Records the result of a step.
    pub fn set_status(&mut self, status: StepStatus) {
        self.status = status;
    }

    /// Accumulated path length; zero for an invalid record.
    pub fn path(&self) -> f64 {
        if self.is_valid {
            self.path_length
        } else {
            0.0
        }
    }

    /// Accumulated path in radiation lengths; zero for an invalid record.
    pub fn radiation_path(&self) -> f64 {
        if self.is_valid {
            self.radiation_path_length
        } else {
            0.0
        }
    }

    /// Charge rounded to the nearest integer.
    pub fn integral_charge(&self) -> i32 {
        self.charge.round() as i32
    }

    /// Magnitude of the momentum projection on the global xy plane.
    pub fn transverse_momentum(&self) -> f64 {
        self.momentum.xy().norm()
    }

    /// Resolves the current volume through an external registry.
    pub fn current_volume_in<'r, R>(&self, registry: &'r R) -> Option<&'r R::Volume>
    where
        R: VolumeLookup + ?Sized,
    {
        self.current_volume.and_then(|id| registry.volume(id))
    }

    fn parameters(&self) -> GlobalTrajectoryParameters {
        GlobalTrajectoryParameters::new(
            self.position,
            self.momentum,
            self.integral_charge(),
            self.field,
        )
    }

    /// Builds a surface-anchored state from this record.
    ///
    /// An invalid record yields [`TrajectoryStateOnSurface::invalid`]. A
    /// covariance that cannot be transported to the curvilinear frame is
    /// kept in Cartesian form only.
    pub fn to_state_on_surface(
        &self,
        surface: &Arc<dyn Surface>,
        anchor: SurfaceAnchor,
    ) -> TrajectoryStateOnSurface {
        if !self.is_valid {
            debug!(status = %self.status, "invalid step state, no surface state built");
            return TrajectoryStateOnSurface::invalid();
        }
        let params = self.parameters();
        let state = if self.has_covariance {
            match JacobianCartesianToCurvilinear::new(&params) {
                Ok(jacobian) => FreeTrajectoryState::with_errors(
                    params,
                    CartesianError::new(self.covariance),
                    CurvilinearError::new(jacobian.similarity(&self.covariance)),
                ),
                Err(err) => {
                    warn!(error = %err, "step covariance cannot be made curvilinear");
                    FreeTrajectoryState::with_cartesian_error(
                        params,
                        CartesianError::new(self.covariance),
                    )
                }
            }
        } else {
            FreeTrajectoryState::new(params)
        };
        let anchored: Arc<dyn Surface> = match anchor {
            SurfaceAnchor::Surface => Arc::clone(surface),
            SurfaceAnchor::TangentPlane => Arc::new(surface.tangent_plane(&self.position)),
        };
        TrajectoryStateOnSurface::new(state, anchored)
    }

    /// Writes this record into `out`; leaves `out` untouched if invalid.
    pub fn to_free_state(&self, out: &mut FreeTrajectoryState) {
        self.to_free_state_with(out, &ConversionOptions::default());
    }

    /// [`StepState::to_free_state`] with explicit options.
    pub fn to_free_state_with(&self, out: &mut FreeTrajectoryState, opts: &ConversionOptions) {
        if !self.is_valid {
            debug!(status = %self.status, "invalid step state, free state left untouched");
            return;
        }
        let params = self.parameters();
        *out = if self.has_covariance {
            FreeTrajectoryState::with_cartesian_error(params, CartesianError::new(self.covariance))
        } else {
            FreeTrajectoryState::new(params)
        };
        if opts.precompute_curvilinear && out.has_error() {
            if let Err(err) = out.curvilinear_error() {
                warn!(error = %err, "curvilinear covariance not cached");
            }
        }
    }

    /// Converts into a new free state, or `None` for an invalid record.
    pub fn free_state(&self) -> Option<FreeTrajectoryState> {
        if !self.is_valid {
            return None;
        }
        let mut out = FreeTrajectoryState::default();
        self.to_free_state(&mut out);
        Some(out)
    }
}

impl From<&FreeTrajectoryState> for StepState {
    fn from(source: &FreeTrajectoryState) -> Self {
        Self::from_free_state(source)
    }
}
