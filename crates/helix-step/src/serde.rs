use helix_core::{ErrorInfo, HelixError, Matrix66, Point3, SchemaVersion, Vector3, VolumeId};
use serde::{Deserialize, Serialize};

use crate::direction::PropagationDirection;
use crate::state::StepState;
use crate::status::StepStatus;

/// Schema version written into step state snapshots.
pub const SNAPSHOT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

#[derive(Debug, Serialize, Deserialize)]
struct SerializableStepState {
    schema_version: SchemaVersion,
    position: Point3,
    momentum: Vector3,
    charge: f64,
    has_covariance: bool,
    covariance: Matrix66,
    path_length: f64,
    radiation_path_length: f64,
    direction: PropagationDirection,
    current_volume: Option<VolumeId>,
    field: f64,
    energy_loss_rate: f64,
    energy_loss_rate_derivative: f64,
    radiation_length: f64,
    is_complete: bool,
    is_valid: bool,
    status: StepStatus,
}

/// Serializes a step state to a JSON string.
///
/// Non-finite values have no JSON representation and are rejected.
pub fn to_json(state: &StepState) -> Result<String, HelixError> {
    ensure_finite(state)?;
    let payload = SerializableStepState {
        schema_version: SNAPSHOT_SCHEMA,
        position: state.position,
        momentum: state.momentum,
        charge: state.charge,
        has_covariance: state.has_covariance(),
        covariance: *state.raw_covariance(),
        path_length: state.path_length,
        radiation_path_length: state.radiation_path_length,
        direction: state.direction,
        current_volume: state.current_volume,
        field: state.field,
        energy_loss_rate: state.energy_loss_rate,
        energy_loss_rate_derivative: state.energy_loss_rate_derivative,
        radiation_length: state.radiation_length,
        is_complete: state.is_complete,
        is_valid: state.is_valid(),
        status: state.status(),
    };
    serde_json::to_string_pretty(&payload)
        .map_err(|err| HelixError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

fn ensure_finite(state: &StepState) -> Result<(), HelixError> {
    let scalars = [
        ("charge", state.charge),
        ("path_length", state.path_length),
        ("radiation_path_length", state.radiation_path_length),
        ("field", state.field),
        ("energy_loss_rate", state.energy_loss_rate),
        ("energy_loss_rate_derivative", state.energy_loss_rate_derivative),
        ("radiation_length", state.radiation_length),
    ];
    let vectors = [
        ("position", state.position.coords.as_slice()),
        ("momentum", state.momentum.as_slice()),
        ("covariance", state.raw_covariance().as_slice()),
    ];
    let offending = scalars
        .iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| *name)
        .or_else(|| {
            vectors
                .iter()
                .find(|(_, values)| values.iter().any(|v| !v.is_finite()))
                .map(|(name, _)| *name)
        });
    match offending {
        Some(field) => {
            let info = ErrorInfo::new("non-finite", "step state holds a NaN or infinite value")
                .with_context("field", field)
                .with_hint("reset the offending field before taking a snapshot");
            Err(HelixError::Serde(info))
        }
        None => Ok(()),
    }
}

/// Restores a step state from a JSON string.
pub fn from_json(data: &str) -> Result<StepState, HelixError> {
    let payload: SerializableStepState = serde_json::from_str(data)
        .map_err(|err| HelixError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    if !SNAPSHOT_SCHEMA.is_compatible_with(&payload.schema_version) {
        let info = ErrorInfo::new("schema-version", "unsupported step state schema")
            .with_context("found", payload.schema_version.major.to_string())
            .with_context("expected", SNAPSHOT_SCHEMA.major.to_string());
        return Err(HelixError::Serde(info));
    }
    if !payload.has_covariance && payload.covariance != Matrix66::zeros() {
        let info = ErrorInfo::new(
            "covariance-invariant",
            "snapshot without covariance carries a non-zero matrix",
        )
        .with_hint("set has_covariance or zero the matrix");
        return Err(HelixError::Serde(info));
    }

    let mut state = StepState::new();
    state.position = payload.position;
    state.momentum = payload.momentum;
    state.charge = payload.charge;
    state.path_length = payload.path_length;
    state.radiation_path_length = payload.radiation_path_length;
    state.direction = payload.direction;
    state.current_volume = payload.current_volume;
    state.field = payload.field;
    state.energy_loss_rate = payload.energy_loss_rate;
    state.energy_loss_rate_derivative = payload.energy_loss_rate_derivative;
    state.radiation_length = payload.radiation_length;
    state.is_complete = payload.is_complete;
    state.set_covariance(payload.has_covariance.then_some(payload.covariance));
    state.set_valid(payload.is_valid);
    state.set_status(payload.status);
    Ok(state)
}
