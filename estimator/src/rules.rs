//! Rules - each turns a profile or prediction into something the page shows

pub mod breakdown;
pub mod lifespan;
pub mod scene;
pub mod status;

pub use breakdown::{breakdown, TimeBreakdown};
pub use lifespan::predict;
pub use scene::{coffin_distance, placement, Pose, ScenePlacement};
pub use status::status_for;
