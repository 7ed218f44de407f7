use time::Date;

use crate::{
    advisory::{AdvisoryContext, AdvisoryOutcome, AdvisoryPanel, AdvisoryRequest, Ticket},
    core::{
        aggregation::{DashboardData, InventorySummary, compute_inventory_summary},
        form::{FormError, FormField, FormSubmission, NumericPolicy, ProjectForm},
        report::{Report, render_report},
        store::{MaterialRepository, ProjectRepository, RecordStore},
    },
    models::{Project, ProjectStatus},
};

/// The four mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Projects,
    Inventory,
    AdvisoryPanel,
}

impl ActiveView {
    pub const ALL: [ActiveView; 4] = [
        ActiveView::Dashboard,
        ActiveView::Projects,
        ActiveView::Inventory,
        ActiveView::AdvisoryPanel,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ActiveView::Dashboard => "Dashboard Overview",
            ActiveView::Projects => "Project Management",
            ActiveView::Inventory => "Material Stock",
            ActiveView::AdvisoryPanel => "AI Intelligence",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            ActiveView::Dashboard => "Dashboard",
            ActiveView::Projects => "Projects",
            ActiveView::Inventory => "Inventory",
            ActiveView::AdvisoryPanel => "AI Consultant",
        }
    }
}

/// An open add or edit form and the reason its last submit was refused.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectEditor {
    pub form: ProjectForm,
    pub error: Option<FormError>,
}

/// Session state: the record store plus everything the screens switch on.
#[derive(Debug, Clone)]
pub struct ViewController {
    store: RecordStore,
    active_view: ActiveView,
    numeric_policy: NumericPolicy,
    report_title: String,
    editor: Option<ProjectEditor>,
    pending_delete: Option<String>,
    advisory: AdvisoryPanel,
}

impl ViewController {
    pub fn new(store: RecordStore, numeric_policy: NumericPolicy, report_title: &str) -> Self {
        Self {
            store,
            active_view: ActiveView::default(),
            numeric_policy,
            report_title: report_title.to_string(),
            editor: None,
            pending_delete: None,
            advisory: AdvisoryPanel::default(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn projects(&self) -> &[Project] {
        self.store.projects()
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn set_active_view(&mut self, view: ActiveView) {
        if view == self.active_view {
            return;
        }
        if self.active_view == ActiveView::AdvisoryPanel {
            self.advisory.abandon();
        }
        tracing::debug!(from = ?self.active_view, to = ?view, "switching view");
        self.active_view = view;
    }

    pub fn dashboard(&self) -> DashboardData {
        DashboardData::compute(self.store.projects())
    }

    pub fn inventory(&self) -> InventorySummary {
        compute_inventory_summary(self.store.materials())
    }

    pub fn report(&self, generated_on: Date) -> Report {
        render_report(self.store.projects(), &self.report_title, generated_on)
    }

    pub fn report_title(&self) -> &str {
        &self.report_title
    }

    // Project editor

    pub fn editor(&self) -> Option<&ProjectEditor> {
        self.editor.as_ref()
    }

    pub fn open_add_form(&mut self) {
        self.editor = Some(ProjectEditor {
            form: ProjectForm::default(),
            error: None,
        });
    }

    /// Opens the editor prefilled with the record. Returns `false` for an unknown id.
    pub fn open_edit_form(&mut self, id: &str) -> bool {
        let Some(project) = self.store.project_by_id(id) else {
            return false;
        };
        self.editor = Some(ProjectEditor {
            form: ProjectForm::from_project(project),
            error: None,
        });
        true
    }

    pub fn update_form(&mut self, field: FormField, value: String) {
        if let Some(editor) = self.editor.as_mut() {
            editor.form.set(field, value);
        }
    }

    pub fn set_form_status(&mut self, status: ProjectStatus) {
        if let Some(editor) = self.editor.as_mut() {
            editor.form.status = status;
        }
    }

    pub fn cancel_form(&mut self) {
        self.editor = None;
    }

    /// Submits the open form. On success the editor closes and the saved
    /// record is returned; a refused submit keeps the editor open.
    pub fn submit_form(&mut self) -> Result<Option<Project>, FormError> {
        let Some(editor) = self.editor.as_mut() else {
            return Ok(None);
        };
        let submission = match editor.form.submit(self.numeric_policy) {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(error = %e, "form submit refused");
                editor.error = Some(e.clone());
                return Err(e);
            }
        };
        self.editor = None;
        let saved = match submission {
            FormSubmission::Create(draft) => Some(self.store.add_project(draft).clone()),
            FormSubmission::Update(project) => self
                .store
                .update_project(project.clone())
                .map(|_| project),
        };
        Ok(saved)
    }

    // Deletion

    /// First step of a delete. Returns `false` for an unknown id.
    pub fn request_delete(&mut self, id: &str) -> bool {
        if self.store.project_by_id(id).is_none() {
            return false;
        }
        self.pending_delete = Some(id.to_string());
        true
    }

    /// The record awaiting confirmation, if any.
    pub fn pending_delete(&self) -> Option<&Project> {
        self.pending_delete
            .as_deref()
            .and_then(|id| self.store.project_by_id(id))
    }

    pub fn confirm_delete(&mut self) -> Option<Project> {
        let id = self.pending_delete.take()?;
        let removed = self.store.delete_project(&id)?;
        // An editor left open on the deleted record has nothing to save into.
        if self
            .editor
            .as_ref()
            .is_some_and(|editor| editor.form.id.as_deref() == Some(id.as_str()))
        {
            tracing::debug!(%id, "closing editor of deleted project");
            self.editor = None;
        }
        Some(removed)
    }

    pub fn decline_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            tracing::debug!(%id, "delete declined");
        }
    }

    // Advisory panel

    pub fn advisory(&self) -> &AdvisoryPanel {
        &self.advisory
    }

    /// Starts a question with a snapshot of the current records.
    pub fn begin_advisory(&mut self, query: &str) -> Option<AdvisoryRequest> {
        let context = AdvisoryContext {
            projects: self.store.projects().to_vec(),
            materials: self.store.materials().to_vec(),
        };
        self.advisory.begin(query, context)
    }

    pub fn complete_advisory(&mut self, ticket: Ticket, outcome: AdvisoryOutcome) -> bool {
        self.advisory.complete(ticket, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ViewController {
        ViewController::new(RecordStore::default(), NumericPolicy::Accept, "Report")
    }

    #[test]
    fn starts_on_dashboard() {
        assert_eq!(controller().active_view(), ActiveView::Dashboard);
    }

    #[test]
    fn refused_submit_keeps_editor_open_with_error() {
        let mut vc = controller();
        vc.open_add_form();
        vc.update_form(FormField::Name, "Tower".into());

        assert!(vc.submit_form().is_err());
        let editor = vc.editor().expect("editor stays open");
        assert_eq!(editor.error, Some(FormError::MissingField(FormField::Client)));
        assert!(vc.projects().is_empty());
    }

    #[test]
    fn submit_without_open_form_is_noop() {
        let mut vc = controller();
        assert_eq!(vc.submit_form(), Ok(None));
    }

    #[test]
    fn leaving_advisory_panel_drops_pending_request() {
        let mut vc = controller();
        vc.set_active_view(ActiveView::AdvisoryPanel);
        let request = vc.begin_advisory("status?").expect("accepted");
        vc.set_active_view(ActiveView::Inventory);

        assert!(!vc.advisory().is_pending());
        assert!(!vc.complete_advisory(request.ticket, AdvisoryOutcome::Resolved("late".into())));
    }

    #[test]
    fn edit_of_unknown_id_is_refused() {
        let mut vc = controller();
        assert!(!vc.open_edit_form("PRJ-NONE"));
        assert!(vc.editor().is_none());
        assert!(!vc.request_delete("PRJ-NONE"));
    }
}
