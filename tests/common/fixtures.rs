use promaster::core::{NumericPolicy, ProjectRepository, RecordStore, ViewController};
use promaster::models::{NewMaterial, NewProject, Project, ProjectStatus};
use time::macros::date;

pub const TEST_REPORT_TITLE: &str = "Test Report";

/// Creates a NewProject with the given name and figures, other fields filled
/// with plausible test data.
pub fn make_new_project(name: &str, budget: f64, spent: f64, status: ProjectStatus) -> NewProject {
    NewProject {
        name: name.to_string(),
        client: format!("{name} Client"),
        location: "Surabaya".to_string(),
        budget,
        spent,
        start_date: Some(date!(2026 - 01 - 05)),
        end_date: Some(date!(2026 - 12 - 20)),
        progress: 40,
        status,
        manager: "Dewi Lestari".to_string(),
    }
}

pub fn make_new_material(name: &str, quantity: f64, unit_price: f64) -> NewMaterial {
    NewMaterial {
        name: name.to_string(),
        category: "Structure".to_string(),
        quantity,
        unit: "bag".to_string(),
        unit_price,
    }
}

/// The two projects of the dashboard worked example.
pub fn worked_example_store() -> RecordStore {
    let mut store = RecordStore::default();
    store.add_project(make_new_project(
        "Tower A",
        1_000_000_000.0,
        400_000_000.0,
        ProjectStatus::Ongoing,
    ));
    store.add_project(make_new_project(
        "Bridge B",
        500_000_000.0,
        500_000_000.0,
        ProjectStatus::Completed,
    ));
    store
}

/// Creates a controller over an empty store with the default numeric policy.
pub fn create_test_controller() -> ViewController {
    ViewController::new(RecordStore::default(), NumericPolicy::Accept, TEST_REPORT_TITLE)
}

/// Creates a controller over the worked example projects.
pub fn create_seeded_controller(policy: NumericPolicy) -> ViewController {
    ViewController::new(worked_example_store(), policy, TEST_REPORT_TITLE)
}

pub fn ids(projects: &[Project]) -> Vec<&str> {
    projects.iter().map(|p| p.id.as_str()).collect()
}
