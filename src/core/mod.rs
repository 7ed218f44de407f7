pub mod aggregation;
pub mod controller;
pub mod form;
pub mod locale;
pub mod report;
pub mod store;

pub use aggregation::{
    BudgetPoint, DashboardData, InventorySummary, StatusCount, Totals, compute_budget_series,
    compute_inventory_summary, compute_status_distribution, compute_totals,
};
pub use controller::{ActiveView, ProjectEditor, ViewController};
pub use form::{FormError, FormField, FormSubmission, NumericPolicy, ProjectForm};
pub use report::{Report, ReportFormat, export_report, render_report};
pub use store::{MaterialRepository, ProjectRepository, RecordStore};
