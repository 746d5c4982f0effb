use estimator::rules::{Pose, ScenePlacement};

use crate::state::{SceneConfig, SceneLayout};

pub const FIGURE_WIDTH: f64 = 120.0;
pub const COFFIN_WIDTH: f64 = 175.0;
pub const MARGIN: f64 = 100.0;
pub const LEFT_OFFSET: f64 = 50.0;
pub const DISAPPEAR_DELAY_MS: u64 = 2000;
pub const DEFAULT_SCENE_WIDTH: f64 = 800.0;

pub fn scene_config() -> SceneConfig {
    SceneConfig {
        figure_width: FIGURE_WIDTH,
        coffin_width: COFFIN_WIDTH,
        margin: MARGIN,
        left_offset: LEFT_OFFSET,
        disappear_delay_ms: DISAPPEAR_DELAY_MS,
    }
}

/// Convert a placement into pixel offsets for a scene of the given width
pub fn layout(placement: &ScenePlacement, scene_width: f64) -> SceneLayout {
    let walkway = (scene_width - FIGURE_WIDTH - COFFIN_WIDTH - MARGIN).max(0.0);

    let (left_px, bottom_px, disappear_after_ms) = match placement.pose {
        Pose::InPit => (scene_width - COFFIN_WIDTH + 10.0, 15.0, Some(DISAPPEAR_DELAY_MS)),
        Pose::LyingDown => (
            LEFT_OFFSET + walkway * (1.0 - placement.distance_from_coffin),
            25.0,
            None,
        ),
        Pose::Standing => (
            LEFT_OFFSET + walkway * (1.0 - placement.distance_from_coffin),
            5.0,
            None,
        ),
    };

    SceneLayout {
        pose: placement.pose,
        distance_from_coffin: placement.distance_from_coffin,
        left_px,
        bottom_px,
        disappear_after_ms,
    }
}
