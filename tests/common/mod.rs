mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from promaster for tests
pub use promaster::core::{
    ActiveView, FormField, MaterialRepository, NumericPolicy, ProjectRepository, RecordStore,
    ReportFormat, ViewController,
};
pub use promaster::models::{Material, NewMaterial, NewProject, Project, ProjectStatus};
