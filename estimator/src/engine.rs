//! Estimator - validates input and runs the lifespan rules

use once_cell::sync::Lazy;
use tracing::warn;

use crate::components::{Prediction, UserProfile};
use crate::config::EstimatorConfig;
use crate::error::{ConfigError, InvalidProfile};
use crate::random::RandomSource;
use crate::rules;

static DEFAULT_ESTIMATOR: Lazy<Estimator> = Lazy::new(Estimator::default);

/// Owns one immutable set of tables. Every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    pub fn new(config: EstimatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn estimate(
        &self,
        profile: &UserProfile,
        rng: &mut dyn RandomSource,
    ) -> Result<Prediction, InvalidProfile> {
        if profile.age > self.config.max_accepted_age {
            warn!(
                age = profile.age,
                max = self.config.max_accepted_age,
                "Rejecting implausible age"
            );
            return Err(InvalidProfile::Age(profile.age.to_string()));
        }

        Ok(rules::predict(&self.config, profile, rng))
    }
}

/// Estimate with the default tables
pub fn estimate(
    profile: &UserProfile,
    rng: &mut dyn RandomSource,
) -> Result<Prediction, InvalidProfile> {
    DEFAULT_ESTIMATOR.estimate(profile, rng)
}
