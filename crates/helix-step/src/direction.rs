use serde::{Deserialize, Serialize};

/// Direction of a step along the trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PropagationDirection {
    /// Against the momentum.
    Backward,
    /// Not chosen yet.
    #[default]
    Undefined,
    /// Along the momentum.
    Forward,
}

impl PropagationDirection {
    /// Signed indicator: -1, 0 or +1.
    pub fn sign(self) -> i8 {
        match self {
            PropagationDirection::Backward => -1,
            PropagationDirection::Undefined => 0,
            PropagationDirection::Forward => 1,
        }
    }

    /// Direction for a signed step length; zero and NaN map to `Undefined`.
    pub fn from_step(step: f64) -> Self {
        if step > 0.0 {
            PropagationDirection::Forward
        } else if step < 0.0 {
            PropagationDirection::Backward
        } else {
            PropagationDirection::Undefined
        }
    }

    /// The opposite direction; `Undefined` stays undefined.
    pub fn reversed(self) -> Self {
        match self {
            PropagationDirection::Backward => PropagationDirection::Forward,
            PropagationDirection::Undefined => PropagationDirection::Undefined,
            PropagationDirection::Forward => PropagationDirection::Backward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs_and_reversal() {
        assert_eq!(PropagationDirection::from_step(2.5).sign(), 1);
        assert_eq!(PropagationDirection::from_step(-0.1).sign(), -1);
        assert_eq!(PropagationDirection::from_step(f64::NAN), PropagationDirection::Undefined);
        assert_eq!(
            PropagationDirection::Forward.reversed(),
            PropagationDirection::Backward
        );
        assert_eq!(
            PropagationDirection::Undefined.reversed(),
            PropagationDirection::Undefined
        );
    }
}
