//! Status messages shown under the countdown

use crate::components::{AgeCategory, ExtremeCase, FoodCategory, Prediction};

pub const EXTREME_PIZZA: &str =
    "💀 EXTREME DANGER: Pizza at your age?! You're literally digging your own grave!";
pub const EXTREME_FRIED_CHICKEN: &str =
    "💀 CRITICAL EMERGENCY: Fried chicken at 80+?! The grim reaper is knocking!";
pub const IN_PIT: &str =
    "💀 GAME OVER: You're already in the coffin! Your poor choices have caught up with you!";

pub const YOUNG_SUPER_HEALTHY: &str =
    "🌟 EXCELLENT: Young and eating salad! You have a long, bright future ahead!";
pub const YOUNG_HEALTHY: &str = "👍 GOOD: Young and eating rice. Keep it up!";
pub const YOUNG_NEUTRAL: &str = "😊 MODERATE: Young with sandwich. Room for improvement!";
pub const YOUNG_UNHEALTHY: &str = "⚠️ WARNING: Young but eating pizza. Change now!";
pub const YOUNG_JUNK: &str =
    "💀 BAD: Young and eating fried chicken. Your choices are aging you fast!";

pub const MID_SUPER_HEALTHY: &str = "👍 DECENT: Middle-aged but eating salad. Keep it up!";
pub const MID_HEALTHY: &str =
    "🌟 GOOD: Middle-aged and eating rice. You're on the right track!";
pub const MID_NEUTRAL: &str = "😐 MODERATE: Middle-aged with sandwich. Could be better.";
pub const MID_UNHEALTHY: &str =
    "😰 CONCERNING: Middle age + pizza = trouble ahead. Time to change!";
pub const MID_JUNK: &str =
    "💀 BAD: Middle-aged and eating fried chicken. Your choices are aging you fast!";

pub const OLD_SUPER_HEALTHY: &str =
    "🙏 HANGING ON: Old age but eating salad is keeping you going!";
pub const OLD_HEALTHY: &str = "👍 GOOD: Old age but eating rice. You're doing well!";
pub const OLD_NEUTRAL: &str = "😐 MODERATE: Old-aged with sandwich. Could be better.";
pub const OLD_UNHEALTHY: &str = "💀 CRITICAL: Old age + pizza = very little time left!";
pub const OLD_JUNK: &str =
    "💀 BAD: Old age and eating fried chicken. Your choices are aging you fast!";

/// Pick the message for a prediction. Total over every combination of
/// the four inputs; `ExtremeJunk` without an extreme case reads as in-pit.
pub fn status_for(prediction: &Prediction) -> &'static str {
    use AgeCategory::*;
    use FoodCategory::*;

    match (
        prediction.extreme_case,
        prediction.is_in_pit,
        prediction.age_category,
        prediction.food_category,
    ) {
        (Some(ExtremeCase::Pizza), ..) => EXTREME_PIZZA,
        (Some(ExtremeCase::FriedChicken), ..) => EXTREME_FRIED_CHICKEN,
        (None, true, _, _) | (None, false, _, ExtremeJunk) => IN_PIT,

        (None, false, Young, SuperHealthy) => YOUNG_SUPER_HEALTHY,
        (None, false, Young, Healthy) => YOUNG_HEALTHY,
        (None, false, Young, Neutral) => YOUNG_NEUTRAL,
        (None, false, Young, Unhealthy) => YOUNG_UNHEALTHY,
        (None, false, Young, Junk) => YOUNG_JUNK,

        (None, false, Mid, SuperHealthy) => MID_SUPER_HEALTHY,
        (None, false, Mid, Healthy) => MID_HEALTHY,
        (None, false, Mid, Neutral) => MID_NEUTRAL,
        (None, false, Mid, Unhealthy) => MID_UNHEALTHY,
        (None, false, Mid, Junk) => MID_JUNK,

        (None, false, Old, SuperHealthy) => OLD_SUPER_HEALTHY,
        (None, false, Old, Healthy) => OLD_HEALTHY,
        (None, false, Old, Neutral) => OLD_NEUTRAL,
        (None, false, Old, Unhealthy) => OLD_UNHEALTHY,
        (None, false, Old, Junk) => OLD_JUNK,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::components::{Food, Gender, UserProfile};
    use crate::config::EstimatorConfig;
    use crate::random::ScriptedSource;
    use crate::rules::lifespan::predict;

    fn status(age: u32, food: Food) -> &'static str {
        let prediction = predict(
            &EstimatorConfig::default(),
            &UserProfile::new("Test", age, Gender::Female, food),
            &mut ScriptedSource::new(),
        );
        status_for(&prediction)
    }

    #[test]
    fn test_examples() {
        assert_eq!(status(30, Food::Salad), YOUNG_SUPER_HEALTHY);
        assert_eq!(status(50, Food::Pizza), MID_UNHEALTHY);
        assert_eq!(status(78, Food::Sandwich), OLD_NEUTRAL);
        assert_eq!(status(85, Food::Pizza), EXTREME_PIZZA);
        assert_eq!(status(81, Food::FriedChicken), EXTREME_FRIED_CHICKEN);
        assert_eq!(status(85, Food::Rice), OLD_HEALTHY);
    }

    #[test]
    fn test_every_estimate_gets_a_distinct_grid_or_extreme_message() {
        let mut seen = HashSet::new();
        for age in [10, 50, 78, 90] {
            for food in Food::ALL {
                seen.insert(status(age, food));
            }
        }
        // 15 grid cells plus both extreme messages
        assert_eq!(seen.len(), 17);
        assert!(!seen.contains(IN_PIT));
    }

    #[test]
    fn test_in_pit_without_extreme_case() {
        let mut prediction = predict(
            &EstimatorConfig::default(),
            &UserProfile::new("Test", 40, Gender::Male, Food::Rice),
            &mut ScriptedSource::new(),
        );
        prediction.is_in_pit = true;
        assert_eq!(status_for(&prediction), IN_PIT);
    }
}
