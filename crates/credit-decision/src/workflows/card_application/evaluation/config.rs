use serde::{Deserialize, Serialize};

const DEFAULT_MINIMUM_AGE: i64 = 21;
const DEFAULT_MIN_SCORE: i32 = -27;
const DEFAULT_MAX_SCORE: i32 = 22;
const DEFAULT_APPROVAL_THRESHOLD: f64 = 50.0;
const DEFAULT_PROBABILITY_FLOOR: f64 = 1.0;
const DEFAULT_PROBABILITY_CEILING: f64 = 99.0;

/// Calibration constants mapping the rule accumulator onto a decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Applicants younger than this are rejected before any scoring.
    pub minimum_age: i64,
    /// Accumulator value mapped to an approval probability of 0.
    pub min_score: i32,
    /// Accumulator value mapped to an approval probability of 100.
    pub max_score: i32,
    pub approval_threshold: f64,
    pub probability_floor: f64,
    pub probability_ceiling: f64,
}

impl EvaluationConfig {
    /// Replace degenerate calibration with the defaults so scoring stays total.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();

        let (min_score, max_score) = if self.max_score > self.min_score {
            (self.min_score, self.max_score)
        } else {
            (defaults.min_score, defaults.max_score)
        };

        let bounds_valid = self.probability_floor.is_finite()
            && self.probability_ceiling.is_finite()
            && (0.0..=100.0).contains(&self.probability_floor)
            && (0.0..=100.0).contains(&self.probability_ceiling)
            && self.probability_floor <= self.probability_ceiling;
        let (probability_floor, probability_ceiling) = if bounds_valid {
            (self.probability_floor, self.probability_ceiling)
        } else {
            (defaults.probability_floor, defaults.probability_ceiling)
        };

        let approval_threshold = if self.approval_threshold.is_finite() {
            self.approval_threshold
        } else {
            defaults.approval_threshold
        };

        Self {
            minimum_age: self.minimum_age,
            min_score,
            max_score,
            approval_threshold,
            probability_floor,
            probability_ceiling,
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            minimum_age: DEFAULT_MINIMUM_AGE,
            min_score: DEFAULT_MIN_SCORE,
            max_score: DEFAULT_MAX_SCORE,
            approval_threshold: DEFAULT_APPROVAL_THRESHOLD,
            probability_floor: DEFAULT_PROBABILITY_FLOOR,
            probability_ceiling: DEFAULT_PROBABILITY_CEILING,
        }
    }
}
