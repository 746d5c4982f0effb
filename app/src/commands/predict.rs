use estimator::rules::placement;
use estimator::{ProfileForm, Report, UserProfile};
use serde::Deserialize;
use tracing::{info, warn};

use crate::commands::scene::{layout, DEFAULT_SCENE_WIDTH};
use crate::state::{AppState, PredictionView};

#[derive(Deserialize, Debug, Clone)]
pub struct PredictArgs {
    pub form: ProfileForm,
    #[serde(default)]
    pub scene_width: Option<f64>,
}

/// Handle one form submission. Validation failures come back as the
/// message the form should show.
pub fn predict(state: &AppState, args: PredictArgs) -> Result<PredictionView, String> {
    let profile = UserProfile::try_from(&args.form).map_err(|e| {
        warn!("Rejected form: {}", e);
        e.to_string()
    })?;

    let mut rng = state
        .rng
        .lock()
        .map_err(|_| "random source unavailable".to_string())?;

    let prediction = state
        .estimator
        .estimate(&profile, &mut *rng)
        .map_err(|e| {
            warn!("Rejected profile: {}", e);
            e.to_string()
        })?;
    let placement = placement(&prediction, &mut *rng);
    drop(rng);

    let report = Report::build(&profile, prediction);
    info!(
        name = %report.name,
        pose = ?placement.pose,
        "Prediction ready: {}",
        report.breakdown
    );

    Ok(PredictionView {
        time_lines: report.breakdown.lines(),
        scene: layout(&placement, args.scene_width.unwrap_or(DEFAULT_SCENE_WIDTH)),
        report,
        image: args.form.image,
    })
}
