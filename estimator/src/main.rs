//! Death Clock sample run
//!
//! Runs the estimator over a handful of sample profiles and prints the
//! resulting reports as JSON lines.

use estimator::{Estimator, Food, Gender, Report, RngSource, UserProfile};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Death Clock estimator starting...");

    let estimator = Estimator::default();
    let mut rng = match std::env::var("DEATHCLOCK_SEED") {
        Ok(seed) => RngSource::seeded(seed.parse()?),
        Err(_) => RngSource::from_entropy(),
    };

    let samples = [
        UserProfile::new("Ada", 30, Gender::Female, Food::Salad),
        UserProfile::new("Bob", 30, Gender::Male, Food::Salad),
        UserProfile::new("Cyd", 50, Gender::Male, Food::Pizza),
        UserProfile::new("Dee", 78, Gender::Male, Food::Sandwich),
        UserProfile::new("Eve", 85, Gender::Female, Food::Pizza),
        UserProfile::new("Fay", 92, Gender::Female, Food::FriedChicken),
    ];

    for profile in &samples {
        let prediction = estimator.estimate(profile, &mut rng)?;
        let report = Report::build(profile, prediction);
        info!(name = %report.name, breakdown = %report.breakdown, "{}", report.status);
        println!("{}", report.to_json()?);
    }

    info!("Processed {} sample profiles", samples.len());
    Ok(())
}
