use std::sync::Mutex;

use anyhow::Context;
use estimator::config::{AgeBands, GenderModifiers};
use estimator::rules::Pose;
use estimator::{Estimator, EstimatorConfig, Report, RngSource};
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

pub const CONFIG_ENV: &str = "DEATHCLOCK_CONFIG";
pub const SEED_ENV: &str = "DEATHCLOCK_SEED";

/// Application state shared by all commands
pub struct AppState {
    pub estimator: Estimator,
    pub rng: Mutex<RngSource<StdRng>>,
    pub seed: Option<u64>,
}

impl AppState {
    pub fn new(estimator: Estimator, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        Self {
            estimator,
            rng: Mutex::new(rng),
            seed,
        }
    }

    /// Build from `DEATHCLOCK_CONFIG` and `DEATHCLOCK_SEED`, both optional
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from settings resolved by `lookup`, keyed by the env variable names
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let config = match lookup(CONFIG_ENV) {
            Some(path) => {
                info!("Loading estimator tables from {}", path);
                EstimatorConfig::from_file(&path)?
            }
            None => EstimatorConfig::default(),
        };

        let seed = match lookup(SEED_ENV) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{} must be an unsigned integer, got {:?}", SEED_ENV, raw))?,
            ),
            None => None,
        };

        Ok(Self::new(Estimator::new(config)?, seed))
    }
}

// -- Serializable types returned by commands --

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    pub figure_width: f64,
    pub coffin_width: f64,
    pub margin: f64,
    pub left_offset: f64,
    pub disappear_delay_ms: u64,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgeBandsView {
    pub young_max: u32,
    pub mid_max: u32,
}

impl From<AgeBands> for AgeBandsView {
    fn from(bands: AgeBands) -> Self {
        Self {
            young_max: bands.young_max,
            mid_max: bands.mid_max,
        }
    }
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub max_accepted_age: u32,
    pub age_bands: AgeBandsView,
    pub gender_modifiers: GenderModifiers,
    pub scene: SceneConfig,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FoodOption {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SceneLayout {
    pub pose: Pose,
    pub distance_from_coffin: f64,
    pub left_px: f64,
    pub bottom_px: f64,
    /// Delay before the figure fades into the coffin
    pub disappear_after_ms: Option<u64>,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PredictionView {
    pub report: Report,
    pub scene: SceneLayout,
    pub time_lines: Vec<String>,
    /// Uploaded picture, returned untouched
    pub image: Option<String>,
}
