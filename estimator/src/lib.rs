//! Death Clock Estimator
//!
//! Rules engine behind the Death Clock page: turns a name, age, gender and
//! favourite food into a facetious remaining-lifetime estimate, a calendar
//! breakdown, a status message and hints for the coffin animation.
//! Randomness is injected through [`RandomSource`].

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod random;
pub mod report;
pub mod rules;

pub use components::*;
pub use config::EstimatorConfig;
pub use engine::{estimate, Estimator};
pub use error::{ConfigError, InvalidProfile};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use report::Report;
