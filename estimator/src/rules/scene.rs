//! Scene placement - where the figure stands relative to the coffin

use serde::{Deserialize, Serialize};

use crate::components::Prediction;
use crate::random::RandomSource;

/// Walkway fraction by remaining years: (from_years, base, span_years, spread).
/// Within a band the distance grows linearly from `base` to `base + spread`.
const DISTANCE_BANDS: &[(f64, f64, f64, f64)] = &[
    (0.0, 0.02, 1.0, 0.06),   // Almost at the coffin
    (1.0, 0.08, 2.0, 0.07),   // Very close
    (3.0, 0.15, 5.0, 0.10),   // Close
    (8.0, 0.25, 7.0, 0.15),   // Getting closer
    (15.0, 0.40, 15.0, 0.25), // Moderate
    (30.0, 0.65, 20.0, 0.20), // Far
    (50.0, 0.85, 40.0, 0.10), // Maximum distance
];

const JITTER: f64 = 0.04;
const MIN_DISTANCE: f64 = 0.02;
const MAX_DISTANCE: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pose {
    Standing,
    LyingDown,
    InPit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePlacement {
    pub pose: Pose,
    /// Fraction of the walkway left between figure and coffin, 0 when in the pit
    pub distance_from_coffin: f64,
}

fn band_distance(remaining_years: f64) -> f64 {
    let years = remaining_years.max(0.0);
    DISTANCE_BANDS
        .iter()
        .rev()
        .find(|(from, ..)| years >= *from)
        .map(|(from, base, span, spread)| base + ((years - from).min(*span) / span) * spread)
        .unwrap_or(MIN_DISTANCE)
}

/// Band distance plus up to ±2% jitter, clamped to the visible walkway
pub fn coffin_distance(remaining_years: f64, rng: &mut dyn RandomSource) -> f64 {
    let jitter = (rng.next_unit() - 0.5) * JITTER;
    (band_distance(remaining_years) + jitter).clamp(MIN_DISTANCE, MAX_DISTANCE)
}

pub fn placement(prediction: &Prediction, rng: &mut dyn RandomSource) -> ScenePlacement {
    if prediction.is_in_pit {
        return ScenePlacement {
            pose: Pose::InPit,
            distance_from_coffin: 0.0,
        };
    }

    let pose = if prediction.is_lying_down {
        Pose::LyingDown
    } else {
        Pose::Standing
    };

    ScenePlacement {
        pose,
        distance_from_coffin: coffin_distance(prediction.remaining_years, rng),
    }
}
