use std::fmt;
use std::str::FromStr;

use helix_core::{ErrorInfo, HelixError};
use serde::{Deserialize, Serialize};

/// Result code of a propagation step, set by the stepper that owns the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StepStatus {
    /// Step completed.
    #[serde(rename = "RESULT_OK")]
    Ok,
    /// Step failed.
    #[serde(rename = "RESULT_FAULT")]
    Fault,
    /// Propagation left its allowed domain.
    #[serde(rename = "RESULT_RANGEOUT")]
    RangeOut,
    /// Step completed with reduced accuracy.
    #[serde(rename = "RESULT_INACC")]
    Inaccurate,
    /// The requested kind of step is not supported.
    #[serde(rename = "RESULT_NOT_IMPLEMENTED")]
    NotImplemented,
    /// No step has set a result yet.
    #[default]
    #[serde(rename = "RESULT_UNDEFINED")]
    Undefined,
}

const NAMES: [&str; 6] = [
    "RESULT_OK",
    "RESULT_FAULT",
    "RESULT_RANGEOUT",
    "RESULT_INACC",
    "RESULT_NOT_IMPLEMENTED",
    "RESULT_UNDEFINED",
];

impl StepStatus {
    /// Every status, in name-table order.
    pub const ALL: [StepStatus; 6] = [
        StepStatus::Ok,
        StepStatus::Fault,
        StepStatus::RangeOut,
        StepStatus::Inaccurate,
        StepStatus::NotImplemented,
        StepStatus::Undefined,
    ];

    /// Canonical diagnostic name.
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Whether the step succeeded.
    pub fn is_ok(self) -> bool {
        self == StepStatus::Ok
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StepStatus {
    type Err = HelixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepStatus::ALL
            .into_iter()
            .find(|status| status.name() == s)
            .ok_or_else(|| {
                HelixError::Parse(
                    ErrorInfo::new("unknown-status", "not a step status name")
                        .with_context("input", s),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_table_order() {
        for (status, name) in StepStatus::ALL.iter().zip(NAMES) {
            assert_eq!(status.name(), name);
            assert_eq!(name.parse::<StepStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn unknown_name_is_a_parse_error() {
        let err = "RESULT_APPROX".parse::<StepStatus>().unwrap_err();
        assert_eq!(err.info().code, "unknown-status");
        assert_eq!(err.info().context["input"], "RESULT_APPROX");
    }

    #[test]
    fn default_is_undefined() {
        assert_eq!(StepStatus::default(), StepStatus::Undefined);
        assert!(!StepStatus::default().is_ok());
    }
}
