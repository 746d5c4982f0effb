//! Report - everything the results panel shows for one submission

use serde::{Deserialize, Serialize};

use crate::components::{Prediction, UserProfile};
use crate::rules::{breakdown, status_for, TimeBreakdown};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub name: String,
    pub age_line: String,
    pub gender_line: String,
    pub food_line: String,
    pub prediction: Prediction,
    pub breakdown: TimeBreakdown,
    pub status: String,
}

impl Report {
    pub fn build(profile: &UserProfile, prediction: Prediction) -> Self {
        Self {
            name: profile.name.clone(),
            age_line: format!("Age: {} years", profile.age),
            gender_line: format!("Gender: {}", profile.gender),
            food_line: format!("Preferred Food: {}", profile.food),
            breakdown: breakdown(prediction.remaining_minutes),
            status: status_for(&prediction).to_string(),
            prediction,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
