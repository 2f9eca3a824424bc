//! cashcast command-line host
//!
//! Loads a YAML scenario, runs the projection engine on it and prints either a
//! text report or the raw projection as JSON.

pub mod format;
pub mod logging;
pub mod report;
pub mod scenario;

pub use logging::init_logging;
pub use report::{ReportOptions, write_report};
pub use scenario::{ScenarioError, ScenarioFile, load_scenario};
