use std::cell::OnceCell;

use helix_core::{HelixError, Point3, Vector3};

use crate::covariance::{CartesianError, CurvilinearError};
use crate::jacobian::JacobianCartesianToCurvilinear;
use crate::params::GlobalTrajectoryParameters;

/// Read access to a full trajectory state, with or without uncertainty.
///
/// Anything implementing this can seed a step state; the error-free and
/// with-error variants differ only in [`FreeStateView::cartesian_error`].
pub trait FreeStateView {
    /// Global position.
    fn position(&self) -> Point3;

    /// Global momentum.
    fn momentum(&self) -> Vector3;

    /// Signed charge.
    fn charge(&self) -> i32;

    /// Cartesian covariance, when the state tracks uncertainty.
    fn cartesian_error(&self) -> Option<&CartesianError>;

    /// Whether the state carries an uncertainty.
    fn has_error(&self) -> bool {
        self.cartesian_error().is_some()
    }
}

/// Full kinematic state not anchored to a surface.
///
/// The curvilinear covariance is derived from the Cartesian one on first
/// request and cached.
#[derive(Debug, Clone, Default)]
pub struct FreeTrajectoryState {
    params: GlobalTrajectoryParameters,
    cartesian: Option<CartesianError>,
    curvilinear: OnceCell<Result<CurvilinearError, HelixError>>,
}

impl FreeTrajectoryState {
    /// Creates a state without uncertainty.
    pub fn new(params: GlobalTrajectoryParameters) -> Self {
        Self {
            params,
            cartesian: None,
            curvilinear: OnceCell::new(),
        }
    }

    /// Creates a state carrying a Cartesian covariance.
    pub fn with_cartesian_error(params: GlobalTrajectoryParameters, error: CartesianError) -> Self {
        Self {
            params,
            cartesian: Some(error),
            curvilinear: OnceCell::new(),
        }
    }

    /// Creates a state carrying both covariance representations.
    pub fn with_errors(
        params: GlobalTrajectoryParameters,
        cartesian: CartesianError,
        curvilinear: CurvilinearError,
    ) -> Self {
        Self {
            params,
            cartesian: Some(cartesian),
            curvilinear: OnceCell::from(Ok(curvilinear)),
        }
    }

    /// Kinematic parameters of the state.
    pub fn parameters(&self) -> &GlobalTrajectoryParameters {
        &self.params
    }

    /// Cached field magnitude.
    pub fn field(&self) -> f64 {
        self.params.field()
    }

    /// Curvilinear covariance, computing and caching it if needed.
    ///
    /// `Ok(None)` for states without uncertainty.
    pub fn curvilinear_error(&self) -> Result<Option<&CurvilinearError>, HelixError> {
        let Some(cartesian) = &self.cartesian else {
            return Ok(None);
        };
        let cached = self.curvilinear.get_or_init(|| {
            let jacobian = JacobianCartesianToCurvilinear::new(&self.params)?;
            Ok(CurvilinearError::new(jacobian.similarity(cartesian.matrix())))
        });
        match cached {
            Ok(error) => Ok(Some(error)),
            Err(err) => Err(err.clone()),
        }
    }

    /// Whether a curvilinear covariance has been computed and cached.
    pub fn has_cached_curvilinear(&self) -> bool {
        matches!(self.curvilinear.get(), Some(Ok(_)))
    }
}

impl FreeStateView for FreeTrajectoryState {
    fn position(&self) -> Point3 {
        self.params.position()
    }

    fn momentum(&self) -> Vector3 {
        self.params.momentum()
    }

    fn charge(&self) -> i32 {
        self.params.charge()
    }

    fn cartesian_error(&self) -> Option<&CartesianError> {
        self.cartesian.as_ref()
    }
}

impl PartialEq for FreeTrajectoryState {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params && self.cartesian == other.cartesian
    }
}
