pub mod advisory;
pub mod config;
pub mod core;
pub mod models;
pub mod seed;

pub use crate::core::{ActiveView, RecordStore, ViewController};
pub use models::{Material, NewMaterial, NewProject, Project, ProjectStatus};
pub use advisory::{Advisor, AdvisoryClient, AdvisoryOutcome, GeminiClient};
pub use config::AppConfig;

#[cfg(feature = "gui")]
pub mod gui;

/// Builds the session state described by `config`.
pub fn session_from_config(config: &AppConfig) -> ViewController {
    let store = if config.seed_demo_data {
        RecordStore::new(seed::demo_projects(), seed::demo_materials())
    } else {
        RecordStore::default()
    };
    ViewController::new(
        store,
        config.validation.numeric_policy,
        &config.report.title,
    )
}
