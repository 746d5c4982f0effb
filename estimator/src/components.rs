//! Data model shared by the rules and the presentation layer
//!
//! Everything here is plain data: profiles come in, predictions go out.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidProfile;

// ============================================================================
// Profile Components
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn key(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = InvalidProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(InvalidProfile::Gender(s.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The five items on the food menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Food {
    Salad,
    Rice,
    Sandwich,
    Pizza,
    FriedChicken,
}

impl Food {
    pub const ALL: [Food; 5] = [
        Food::Salad,
        Food::Rice,
        Food::Sandwich,
        Food::Pizza,
        Food::FriedChicken,
    ];

    /// Form value, as submitted by the select box
    pub fn key(&self) -> &'static str {
        match self {
            Food::Salad => "salad",
            Food::Rice => "rice",
            Food::Sandwich => "sandwich",
            Food::Pizza => "pizza",
            Food::FriedChicken => "friedchicken",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Food::Salad => "Fresh Salad",
            Food::Rice => "Brown Rice",
            Food::Sandwich => "Sandwich",
            Food::Pizza => "Pizza",
            Food::FriedChicken => "Fried Chicken",
        }
    }

    pub fn tier(&self) -> HealthTier {
        match self {
            Food::Salad => HealthTier::SuperHealthy,
            Food::Rice => HealthTier::Healthy,
            Food::Sandwich => HealthTier::Neutral,
            Food::Pizza => HealthTier::Unhealthy,
            Food::FriedChicken => HealthTier::Junk,
        }
    }

    /// Foods that trigger the hours-scale estimate for the very old
    pub fn extreme_case(&self) -> Option<ExtremeCase> {
        match self {
            Food::Pizza => Some(ExtremeCase::Pizza),
            Food::FriedChicken => Some(ExtremeCase::FriedChicken),
            _ => None,
        }
    }
}

impl FromStr for Food {
    type Err = InvalidProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Food::ALL
            .into_iter()
            .find(|food| food.key() == wanted)
            .ok_or_else(|| InvalidProfile::Food(s.to_string()))
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Healthiness tier of a regular food choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthTier {
    SuperHealthy,
    Healthy,
    Neutral,
    Unhealthy,
    Junk,
}

/// Food category reported in a prediction. `ExtremeJunk` only appears
/// alongside an [`ExtremeCase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodCategory {
    SuperHealthy,
    Healthy,
    Neutral,
    Unhealthy,
    Junk,
    ExtremeJunk,
}

impl From<HealthTier> for FoodCategory {
    fn from(tier: HealthTier) -> Self {
        match tier {
            HealthTier::SuperHealthy => FoodCategory::SuperHealthy,
            HealthTier::Healthy => FoodCategory::Healthy,
            HealthTier::Neutral => FoodCategory::Neutral,
            HealthTier::Unhealthy => FoodCategory::Unhealthy,
            HealthTier::Junk => FoodCategory::Junk,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeCategory {
    Young,
    Mid,
    Old,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtremeCase {
    Pizza,
    FriedChicken,
}

// ============================================================================
// Input
// ============================================================================

/// A validated form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Carried through for display, never used in computation
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub food: Food,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, age: u32, gender: Gender, food: Food) -> Self {
        Self {
            name: name.into(),
            age,
            gender,
            food,
        }
    }
}

/// Raw form fields exactly as the page submits them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: String,
    pub age: String,
    pub gender: String,
    pub food: String,
    /// Uploaded picture, opaque to the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl TryFrom<&ProfileForm> for UserProfile {
    type Error = InvalidProfile;

    fn try_from(form: &ProfileForm) -> Result<Self, Self::Error> {
        let age = form
            .age
            .trim()
            .parse::<u32>()
            .map_err(|_| InvalidProfile::Age(form.age.clone()))?;

        Ok(UserProfile {
            name: form.name.trim().to_string(),
            age,
            gender: form.gender.parse()?,
            food: form.food.parse()?,
        })
    }
}

// ============================================================================
// Output
// ============================================================================

/// Result of one estimate. Built once, consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub max_age: u32,
    pub remaining_years: f64,
    pub remaining_minutes: f64,
    pub food_category: FoodCategory,
    pub age_category: AgeCategory,
    pub base_life_expectancy: u32,
    pub is_in_pit: bool,
    pub is_lying_down: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extreme_case: Option<ExtremeCase>,
}
