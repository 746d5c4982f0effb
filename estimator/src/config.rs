//! Estimator configuration
//!
//! All lookup tables live here as immutable data owned by an
//! [`Estimator`](crate::Estimator). `Default` reproduces the published
//! tables; a JSON file can override them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::{AgeCategory, ExtremeCase, Gender, HealthTier};
use crate::error::ConfigError;

/// Ages above this are rejected as implausible form input
pub const DEFAULT_MAX_ACCEPTED_AGE: u32 = 150;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub max_accepted_age: u32,
    pub age_bands: AgeBands,
    pub gender_modifiers: GenderModifiers,
    pub life_table: LifeTable,
    pub extreme: ExtremeRules,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            max_accepted_age: DEFAULT_MAX_ACCEPTED_AGE,
            age_bands: AgeBands::default(),
            gender_modifiers: GenderModifiers::default(),
            life_table: LifeTable::default(),
            extreme: ExtremeRules::default(),
        }
    }
}

impl EstimatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EstimatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check the invariants the rules rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.age_bands.young_max >= self.age_bands.mid_max {
            return Err(ConfigError::Invalid(format!(
                "young_max ({}) must be below mid_max ({})",
                self.age_bands.young_max, self.age_bands.mid_max
            )));
        }

        for (gender, modifier) in Gender::ALL
            .iter()
            .map(|g| (g, self.gender_modifiers.for_gender(*g)))
        {
            if !modifier.is_finite() || modifier <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "gender modifier for {} must be positive, got {}",
                    gender.key(),
                    modifier
                )));
            }
        }

        for rule in self.life_table.rules() {
            if let Rule::Projected { floor_years, .. } = rule {
                if !floor_years.is_finite() || *floor_years < 0.0 {
                    return Err(ConfigError::Invalid(format!(
                        "floor_years must be non-negative, got {}",
                        floor_years
                    )));
                }
            }
        }

        // Extreme cases are always reported as OLD
        if self.extreme.older_than < self.age_bands.mid_max {
            return Err(ConfigError::Invalid(format!(
                "extreme older_than ({}) must not be below mid_max ({})",
                self.extreme.older_than, self.age_bands.mid_max
            )));
        }

        if self.extreme.pizza_hours < 2 || self.extreme.fried_chicken_hours < 2 {
            return Err(ConfigError::Invalid(
                "extreme-case hour ceilings must be at least 2".into(),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Age bands
// ============================================================================

/// Upper bounds (inclusive) of the YOUNG and MID bands; everything above is OLD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBands {
    pub young_max: u32,
    pub mid_max: u32,
}

impl Default for AgeBands {
    fn default() -> Self {
        Self {
            young_max: 35,
            mid_max: 75,
        }
    }
}

impl AgeBands {
    pub fn classify(&self, age: u32) -> AgeCategory {
        if age <= self.young_max {
            AgeCategory::Young
        } else if age <= self.mid_max {
            AgeCategory::Mid
        } else {
            AgeCategory::Old
        }
    }
}

// ============================================================================
// Gender modifiers
// ============================================================================

/// Flat multipliers applied to remaining years
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenderModifiers {
    pub male: f64,
    pub female: f64,
}

impl Default for GenderModifiers {
    fn default() -> Self {
        Self {
            male: 0.95,
            female: 1.05,
        }
    }
}

impl GenderModifiers {
    pub fn for_gender(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

// ============================================================================
// Life table
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// `remaining = max(floor_years, base_life_expectancy - age)`
    Projected {
        base_life_expectancy: u32,
        floor_years: f64,
    },
    /// `base = age + years`, `remaining = years` regardless of age
    Offset { years: u32, lying_down: bool },
}

impl Rule {
    const fn projected(base_life_expectancy: u32, floor_years: f64) -> Self {
        Rule::Projected {
            base_life_expectancy,
            floor_years,
        }
    }

    const fn offset(years: u32, lying_down: bool) -> Self {
        Rule::Offset { years, lying_down }
    }
}

/// One row of the life table, one rule per health tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierRules {
    pub super_healthy: Rule,
    pub healthy: Rule,
    pub neutral: Rule,
    pub unhealthy: Rule,
    pub junk: Rule,
}

impl TierRules {
    pub fn get(&self, tier: HealthTier) -> &Rule {
        match tier {
            HealthTier::SuperHealthy => &self.super_healthy,
            HealthTier::Healthy => &self.healthy,
            HealthTier::Neutral => &self.neutral,
            HealthTier::Unhealthy => &self.unhealthy,
            HealthTier::Junk => &self.junk,
        }
    }

    fn iter(&self) -> impl Iterator<Item = &Rule> {
        [
            &self.super_healthy,
            &self.healthy,
            &self.neutral,
            &self.unhealthy,
            &self.junk,
        ]
        .into_iter()
    }
}

/// Age category x health tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeTable {
    pub young: TierRules,
    pub mid: TierRules,
    pub old: TierRules,
}

impl Default for LifeTable {
    fn default() -> Self {
        Self {
            young: TierRules {
                super_healthy: Rule::projected(90, 50.0),
                healthy: Rule::projected(85, 40.0),
                neutral: Rule::projected(78, 30.0),
                unhealthy: Rule::projected(65, 20.0),
                junk: Rule::projected(55, 10.0),
            },
            mid: TierRules {
                super_healthy: Rule::projected(85, 25.0),
                healthy: Rule::projected(80, 20.0),
                neutral: Rule::projected(75, 15.0),
                unhealthy: Rule::projected(65, 8.0),
                junk: Rule::projected(60, 5.0),
            },
            old: TierRules {
                super_healthy: Rule::offset(12, false),
                healthy: Rule::offset(8, false),
                neutral: Rule::offset(4, false),
                unhealthy: Rule::offset(2, true),
                junk: Rule::offset(1, true),
            },
        }
    }
}

impl LifeTable {
    pub fn rule(&self, age: AgeCategory, tier: HealthTier) -> &Rule {
        let row = match age {
            AgeCategory::Young => &self.young,
            AgeCategory::Mid => &self.mid,
            AgeCategory::Old => &self.old,
        };
        row.get(tier)
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.young
            .iter()
            .chain(self.mid.iter())
            .chain(self.old.iter())
    }
}

// ============================================================================
// Extreme cases
// ============================================================================

/// Hours-scale estimates for the very old eating junk.
/// Hours are drawn from `1..ceiling` so the result stays under the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtremeRules {
    /// Strictly older than this
    pub older_than: u32,
    pub pizza_hours: u32,
    pub fried_chicken_hours: u32,
}

impl Default for ExtremeRules {
    fn default() -> Self {
        Self {
            older_than: 80,
            pizza_hours: 48,
            fried_chicken_hours: 24,
        }
    }
}

impl ExtremeRules {
    pub fn hours_ceiling(&self, case: ExtremeCase) -> u32 {
        match case {
            ExtremeCase::Pizza => self.pizza_hours,
            ExtremeCase::FriedChicken => self.fried_chicken_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_age_bands_partition() {
        let bands = AgeBands::default();
        assert_eq!(bands.classify(0), AgeCategory::Young);
        assert_eq!(bands.classify(35), AgeCategory::Young);
        assert_eq!(bands.classify(36), AgeCategory::Mid);
        assert_eq!(bands.classify(75), AgeCategory::Mid);
        assert_eq!(bands.classify(76), AgeCategory::Old);
        assert_eq!(bands.classify(u32::MAX), AgeCategory::Old);
    }

    #[test]
    fn test_default_table_lookup() {
        let table = LifeTable::default();
        assert_eq!(
            *table.rule(AgeCategory::Mid, HealthTier::Unhealthy),
            Rule::Projected {
                base_life_expectancy: 65,
                floor_years: 8.0
            }
        );
        assert_eq!(
            *table.rule(AgeCategory::Old, HealthTier::Junk),
            Rule::Offset {
                years: 1,
                lying_down: true
            }
        );
        assert_eq!(table.rules().count(), 15);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(EstimatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EstimatorConfig::from_json_str(
            r#"{ "gender_modifiers": { "male": 1.0, "female": 1.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.gender_modifiers.male, 1.0);
        assert_eq!(config.age_bands, AgeBands::default());
        assert_eq!(config.life_table, LifeTable::default());
    }

    #[test]
    fn test_rejects_inverted_bands() {
        let err = EstimatorConfig::from_json_str(
            r#"{ "age_bands": { "young_max": 80, "mid_max": 40 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_non_positive_modifier() {
        let mut config = EstimatorConfig::default();
        config.gender_modifiers.female = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_garbage_json() {
        assert!(matches!(
            EstimatorConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_extreme_age_inside_younger_bands() {
        let err = EstimatorConfig::from_json_str(
            r#"{"extreme":{"older_than":20,"pizza_hours":48,"fried_chicken_hours":24}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let mut config = EstimatorConfig::default();
        config.extreme.older_than = config.age_bands.mid_max;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_loads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "max_accepted_age": 120, "gender_modifiers": {{ "male": 1.0, "female": 1.1 }} }}"#
        )
        .unwrap();

        let config = EstimatorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_accepted_age, 120);
        assert_eq!(config.gender_modifiers.female, 1.1);
        assert_eq!(config.life_table, LifeTable::default());
    }

    #[test]
    fn test_invalid_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "age_bands": {{ "young_max": 50, "mid_max": 50 }} }}"#).unwrap();
        assert!(matches!(
            EstimatorConfig::from_file(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = EstimatorConfig::from_file("/nonexistent/deathclock.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
