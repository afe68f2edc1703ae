use serde::{Deserialize, Serialize};

use crate::math::round_to;
use crate::ops::DefuzzificationOp;

pub const DEFAULT_NUM_POINTS: usize = 100;

/// Knobs for a single [`ControlSystem::infer_with`](crate::ControlSystem::infer_with) call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceOptions {
    /// Samples taken over the output variable's domain
    pub num_points: usize,
    pub defuzzification: DefuzzificationOp,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
            defuzzification: DefuzzificationOp::Centroid,
        }
    }
}

impl InferenceOptions {
    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    pub fn with_defuzzification(mut self, defuzzification: DefuzzificationOp) -> Self {
        self.defuzzification = defuzzification;
        self
    }
}

/// Rounding applied to derived degrees that are meant for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    Exact,
    Decimals(u32),
}

impl Default for Precision {
    fn default() -> Self {
        Self::Decimals(2)
    }
}

impl Precision {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Exact => value,
            Self::Decimals(decimals) => round_to(value, decimals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = InferenceOptions::default();

        assert_eq!(options.num_points, 100);
        assert_eq!(options.defuzzification, DefuzzificationOp::Centroid);
        assert_eq!(Precision::default().apply(0.456), 0.46);
        assert_eq!(Precision::Exact.apply(0.456), 0.456);
    }

    #[test]
    fn test_deserialize_partial_options() {
        let options: InferenceOptions = serde_json::from_str(r#"{"num_points": 1000}"#).unwrap();

        assert_eq!(options, InferenceOptions::default().with_num_points(1000));

        let options: InferenceOptions =
            serde_json::from_str(r#"{"defuzzification": "mean_of_maximum"}"#).unwrap();

        assert_eq!(options.defuzzification, DefuzzificationOp::MeanOfMaximum);
        assert_eq!(options.num_points, DEFAULT_NUM_POINTS);

        let precision: Precision = serde_json::from_str(r#"{"decimals": 3}"#).unwrap();

        assert_eq!(precision, Precision::Decimals(3));
        assert_eq!(serde_json::to_string(&Precision::Exact).unwrap(), r#""exact""#);
    }
}
