//! Lifespan Rule
//!
//! Maps (age, gender, food) to a remaining-time estimate using the
//! configured life table. The only randomness is in the extreme case.

use tracing::debug;

use crate::components::{AgeCategory, FoodCategory, Prediction, UserProfile};
use crate::config::{EstimatorConfig, Rule};
use crate::random::RandomSource;
use crate::rules::breakdown::{MINUTES_PER_HOUR, MINUTES_PER_YEAR};

/// Estimate remaining lifetime for an already validated profile
pub fn predict(
    config: &EstimatorConfig,
    profile: &UserProfile,
    rng: &mut dyn RandomSource,
) -> Prediction {
    let prediction = match extreme_case(config, profile, rng) {
        Some(prediction) => prediction,
        None => from_table(config, profile),
    };

    debug!(
        age = profile.age,
        gender = profile.gender.key(),
        food = profile.food.key(),
        age_category = ?prediction.age_category,
        food_category = ?prediction.food_category,
        remaining_years = prediction.remaining_years,
        extreme_case = ?prediction.extreme_case,
        "Lifespan estimated"
    );

    prediction
}

/// Very old and eating pizza or fried chicken: hours, not years
fn extreme_case(
    config: &EstimatorConfig,
    profile: &UserProfile,
    rng: &mut dyn RandomSource,
) -> Option<Prediction> {
    if profile.age <= config.extreme.older_than {
        return None;
    }
    let case = profile.food.extreme_case()?;

    let ceiling_hours = config.extreme.hours_ceiling(case);
    let hours = rng.next_below(ceiling_hours.saturating_sub(1)) + 1;
    let minutes = rng.next_below(60);
    let seconds = rng.next_below(60);

    let ceiling = f64::from(ceiling_hours) * MINUTES_PER_HOUR;
    let remaining_minutes = (f64::from(hours) * MINUTES_PER_HOUR
        + f64::from(minutes)
        + f64::from(seconds) / 60.0)
        .min(ceiling - 1.0 / 60.0);

    Some(Prediction {
        max_age: profile.age,
        remaining_years: remaining_minutes / MINUTES_PER_YEAR,
        remaining_minutes,
        food_category: FoodCategory::ExtremeJunk,
        age_category: AgeCategory::Old,
        base_life_expectancy: profile.age,
        is_in_pit: true,
        is_lying_down: true,
        extreme_case: Some(case),
    })
}

fn from_table(config: &EstimatorConfig, profile: &UserProfile) -> Prediction {
    let age_category = config.age_bands.classify(profile.age);
    let tier = profile.food.tier();
    let age = f64::from(profile.age);

    let (base_life_expectancy, years, is_lying_down) =
        match *config.life_table.rule(age_category, tier) {
            Rule::Projected {
                base_life_expectancy,
                floor_years,
            } => (
                base_life_expectancy,
                floor_years.max(f64::from(base_life_expectancy) - age),
                false,
            ),
            // Near-term estimate: the offset itself, not base minus age
            Rule::Offset { years, lying_down } => {
                (profile.age.saturating_add(years), f64::from(years), lying_down)
            }
        };

    let remaining_years = years * config.gender_modifiers.for_gender(profile.gender);

    Prediction {
        max_age: (age + remaining_years).round() as u32,
        remaining_years,
        remaining_minutes: remaining_years * MINUTES_PER_YEAR,
        food_category: tier.into(),
        age_category,
        base_life_expectancy,
        is_in_pit: false,
        is_lying_down,
        extreme_case: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ExtremeCase, Food, Gender};
    use crate::random::{RngSource, ScriptedSource};

    fn run(age: u32, gender: Gender, food: Food) -> Prediction {
        let mut rng = ScriptedSource::new();
        predict(
            &EstimatorConfig::default(),
            &UserProfile::new("Test", age, gender, food),
            &mut rng,
        )
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_young_male_salad() {
        let p = run(30, Gender::Male, Food::Salad);
        assert_eq!(p.age_category, AgeCategory::Young);
        assert_eq!(p.food_category, FoodCategory::SuperHealthy);
        assert_eq!(p.base_life_expectancy, 90);
        assert!(approx(p.remaining_years, 57.0));
        assert_eq!(p.max_age, 87);
        assert!(!p.is_in_pit);
        assert!(!p.is_lying_down);
        assert_eq!(p.extreme_case, None);
    }

    #[test]
    fn test_floor_applies_when_base_is_close() {
        // 85 - 70 = 15, floor for MID/SUPER_HEALTHY is 25
        let p = run(70, Gender::Female, Food::Salad);
        assert_eq!(p.age_category, AgeCategory::Mid);
        assert!(approx(p.remaining_years, 25.0 * 1.05));
    }

    #[test]
    fn test_old_male_sandwich_uses_offset() {
        let p = run(78, Gender::Male, Food::Sandwich);
        assert_eq!(p.age_category, AgeCategory::Old);
        assert_eq!(p.food_category, FoodCategory::Neutral);
        assert_eq!(p.base_life_expectancy, 82);
        assert!(approx(p.remaining_years, 3.8));
        assert!(!p.is_lying_down);
        assert!(!p.is_in_pit);
    }

    #[test]
    fn test_old_junk_lies_down_without_pit() {
        let p = run(77, Gender::Female, Food::FriedChicken);
        assert_eq!(p.food_category, FoodCategory::Junk);
        assert!(p.is_lying_down);
        assert!(!p.is_in_pit);
        assert_eq!(p.base_life_expectancy, 78);
    }

    #[test]
    fn test_age_eighty_is_not_extreme() {
        let p = run(80, Gender::Male, Food::Pizza);
        assert_eq!(p.extreme_case, None);
        assert_eq!(p.food_category, FoodCategory::Unhealthy);
        assert!(approx(p.remaining_years, 2.0 * 0.95));
    }

    #[test]
    fn test_extreme_pizza_scripted_draws() {
        // hours = 46 + 1, minutes = 59, seconds = 30
        let mut rng = ScriptedSource::new().with_integers([46, 59, 30]);
        let p = predict(
            &EstimatorConfig::default(),
            &UserProfile::new("Test", 85, Gender::Female, Food::Pizza),
            &mut rng,
        );
        assert_eq!(p.extreme_case, Some(ExtremeCase::Pizza));
        assert_eq!(p.food_category, FoodCategory::ExtremeJunk);
        assert_eq!(p.age_category, AgeCategory::Old);
        assert!(p.is_in_pit && p.is_lying_down);
        assert!(approx(p.remaining_minutes, 47.0 * 60.0 + 59.0 + 0.5));
        assert!(p.remaining_minutes < 2880.0);
        assert_eq!(p.max_age, 85);
        assert_eq!(p.base_life_expectancy, 85);
    }

    #[test]
    fn test_extreme_fried_chicken_minimum_draw() {
        let p = run(95, Gender::Male, Food::FriedChicken);
        assert_eq!(p.extreme_case, Some(ExtremeCase::FriedChicken));
        // all-zero draws give exactly one hour, no gender modifier
        assert!(approx(p.remaining_minutes, 60.0));
    }

    #[test]
    fn test_extreme_stays_under_ceiling() {
        let config = EstimatorConfig::default();
        let mut rng = RngSource::seeded(2024);
        for _ in 0..500 {
            let pizza = predict(
                &config,
                &UserProfile::new("Test", 90, Gender::Male, Food::Pizza),
                &mut rng,
            );
            assert!(pizza.remaining_minutes >= 60.0 && pizza.remaining_minutes < 2880.0);

            let chicken = predict(
                &config,
                &UserProfile::new("Test", 90, Gender::Female, Food::FriedChicken),
                &mut rng,
            );
            assert!(chicken.remaining_minutes >= 60.0 && chicken.remaining_minutes < 1440.0);
        }
    }

    #[test]
    fn test_old_salad_no_draws_consumed() {
        let mut rng = ScriptedSource::new().with_integers([5, 5, 5]);
        predict(
            &EstimatorConfig::default(),
            &UserProfile::new("Test", 99, Gender::Male, Food::Salad),
            &mut rng,
        );
        assert_eq!(rng.remaining(), (3, 0));
    }
}
