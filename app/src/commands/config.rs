use estimator::Food;

use crate::commands::scene::scene_config;
use crate::state::{AppConfig, AppState, FoodOption};

pub fn get_config(state: &AppState) -> AppConfig {
    let config = state.estimator.config();
    AppConfig {
        seed: state.seed,
        max_accepted_age: config.max_accepted_age,
        age_bands: config.age_bands.into(),
        gender_modifiers: config.gender_modifiers,
        scene: scene_config(),
    }
}

/// Entries for the food select box, in menu order
pub fn get_food_options() -> Vec<FoodOption> {
    Food::ALL
        .iter()
        .map(|food| FoodOption {
            key: food.key().into(),
            name: food.display_name().into(),
        })
        .collect()
}
