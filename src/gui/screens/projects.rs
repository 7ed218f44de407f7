use std::{convert::Infallible, path::PathBuf};

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, button, column, container, pick_list, progress_bar, row, scrollable, text, text_input},
};
use rfd::AsyncFileDialog;

use crate::{
    core::{
        FormField, ProjectEditor, ReportFormat, export_report,
        locale::{format_rupiah, today},
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::panel,
    },
    models::{Project, ProjectStatus},
};

#[derive(Debug, Clone, Default)]
pub struct ProjectsScreen {
    /// Outcome of the last save or export, shown above the table
    notice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ProjectsMessage {
    Add,
    Edit(String),
    Delete(String),
    ConfirmDelete,
    DeclineDelete,
    FieldChanged(FormField, String),
    StatusSelected(ProjectStatus),
    Save,
    Cancel,
    ExportReport,
    ExportPathChosen(Option<PathBuf>),
}

const FORM_FIELDS: [(FormField, &str); 9] = [
    (FormField::Name, "e.g. Menara Sudirman"),
    (FormField::Client, "Client company"),
    (FormField::Location, "City"),
    (FormField::Budget, "0"),
    (FormField::Spent, "0"),
    (FormField::StartDate, "YYYY-MM-DD"),
    (FormField::EndDate, "YYYY-MM-DD"),
    (FormField::Progress, "0-100"),
    (FormField::Manager, "Project manager"),
];

impl Screen for ProjectsScreen {
    type Message = ProjectsMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let session = &state.session;

        let toolbar = row![
            text("All Projects").size(18).width(Length::Fill),
            button("Print Report").on_press(msg(ProjectsMessage::ExportReport)),
            button("Add Project").on_press(msg(ProjectsMessage::Add)),
        ]
        .spacing(12)
        .align_y(Center);

        let mut content = Column::new().spacing(16).push(toolbar);
        if let Some(notice) = &self.notice {
            content = content.push(text(notice.as_str()));
        }
        if let Some(editor) = session.editor() {
            content = content.push(editor_view(editor));
        }
        if let Some(project) = session.pending_delete() {
            content = content.push(confirm_view(project));
        }
        content = content.push(table_view(session.projects()));

        scrollable(content).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        let session = &mut state.session;
        match message {
            ProjectsMessage::Add => session.open_add_form(),
            ProjectsMessage::Edit(id) => {
                session.open_edit_form(&id);
            }
            ProjectsMessage::Delete(id) => {
                session.request_delete(&id);
            }
            ProjectsMessage::ConfirmDelete => {
                if let Some(project) = session.confirm_delete() {
                    self.notice = Some(format!("Deleted {}", project.name));
                }
            }
            ProjectsMessage::DeclineDelete => session.decline_delete(),
            ProjectsMessage::FieldChanged(field, value) => session.update_form(field, value),
            ProjectsMessage::StatusSelected(status) => session.set_form_status(status),
            ProjectsMessage::Save => {
                // A refused submit leaves its reason on the editor.
                if let Ok(Some(project)) = session.submit_form() {
                    self.notice = Some(format!("Saved {}", project.name));
                }
            }
            ProjectsMessage::Cancel => session.cancel_form(),
            ProjectsMessage::ExportReport => {
                let file_name = format!(
                    "{}.{}",
                    state.report_file_name,
                    ReportFormat::Html.extension()
                );
                return Task::perform(
                    AsyncFileDialog::new()
                        .set_title("Save Project Report")
                        .set_file_name(file_name)
                        .add_filter("HTML document", &["html"])
                        .save_file(),
                    |handle| msg(ProjectsMessage::ExportPathChosen(
                        handle.map(|h| h.path().to_path_buf()),
                    )),
                );
            }
            ProjectsMessage::ExportPathChosen(None) => {}
            ProjectsMessage::ExportPathChosen(Some(path)) => {
                let report = session.report(today());
                self.notice = Some(
                    match export_report(&report, &path, &state.report_file_name, ReportFormat::Html) {
                        Ok(written) => format!("Report saved to {}", written.display()),
                        Err(e) => {
                            tracing::error!(error = %e, "report export failed");
                            format!("Could not save the report: {e}")
                        }
                    },
                );
            }
        }
        Task::none()
    }
}

fn msg(message: ProjectsMessage) -> ScreenMessage<ProjectsScreen> {
    ScreenMessage::ScreenMessage(message)
}

fn editor_view<'a>(editor: &'a ProjectEditor) -> Element<'a, ScreenMessage<ProjectsScreen>> {
    let form = &editor.form;
    let title = if form.is_edit() { "Edit Project" } else { "Add Project" };

    let mut fields = Column::new().spacing(8).push(text(title).size(18));
    for (field, placeholder) in FORM_FIELDS {
        fields = fields.push(
            row![
                text(field.to_string()).width(Length::Fixed(120.0)),
                text_input(placeholder, form.value(field))
                    .on_input(move |value| msg(ProjectsMessage::FieldChanged(field, value)))
                    .on_submit(msg(ProjectsMessage::Save)),
            ]
            .spacing(12)
            .align_y(Center),
        );
    }
    fields = fields.push(
        row![
            text("Status").width(Length::Fixed(120.0)),
            pick_list(ProjectStatus::ALL, Some(form.status), |status| {
                msg(ProjectsMessage::StatusSelected(status))
            }),
        ]
        .spacing(12)
        .align_y(Center),
    );
    if let Some(error) = &editor.error {
        fields = fields.push(text(error.to_string()));
    }
    fields = fields.push(
        row![
            button("Cancel").on_press(msg(ProjectsMessage::Cancel)),
            button("Save").on_press(msg(ProjectsMessage::Save)),
        ]
        .spacing(12),
    );
    panel(fields).into()
}

fn confirm_view<'a>(project: &'a Project) -> Element<'a, ScreenMessage<ProjectsScreen>> {
    panel(
        row![
            text(format!("Delete project \"{}\"?", project.name)).width(Length::Fill),
            button("Cancel").on_press(msg(ProjectsMessage::DeclineDelete)),
            button("Delete")
                .style(button::danger)
                .on_press(msg(ProjectsMessage::ConfirmDelete)),
        ]
        .spacing(12)
        .align_y(Center),
    )
    .into()
}

fn table_view<'a>(projects: &'a [Project]) -> Element<'a, ScreenMessage<ProjectsScreen>> {
    if projects.is_empty() {
        return panel(text(
            "No project data yet. Click \"Add Project\" to get started.",
        ))
        .into();
    }

    let header = row![
        text("Project").width(Length::FillPortion(3)),
        text("Location").width(Length::FillPortion(2)),
        text("Budget").width(Length::FillPortion(3)),
        text("Progress").width(Length::FillPortion(2)),
        text("Status").width(Length::FillPortion(1)),
        text("").width(Length::FillPortion(2)),
    ]
    .spacing(12);

    let rows = projects.iter().fold(Column::new().spacing(10).push(header), |table, p| {
        table.push(
            row![
                column![text(p.name.as_str()), text(p.client.as_str()).size(12)]
                    .width(Length::FillPortion(3)),
                text(p.location.as_str()).width(Length::FillPortion(2)),
                column![
                    text(format_rupiah(p.budget)),
                    text(format!("Spent: {}", format_rupiah(p.spent))).size(12),
                ]
                .width(Length::FillPortion(3)),
                row![
                    container(progress_bar(0.0..=100.0, p.progress.clamp(0, 100) as f32))
                        .width(Length::Fill),
                    text(format!("{}%", p.progress)).size(12),
                ]
                .spacing(6)
                .align_y(Center)
                .width(Length::FillPortion(2)),
                text(p.status.label()).width(Length::FillPortion(1)),
                row![
                    button("Edit").on_press(msg(ProjectsMessage::Edit(p.id.clone()))),
                    button("Delete")
                        .style(button::danger)
                        .on_press(msg(ProjectsMessage::Delete(p.id.clone()))),
                ]
                .spacing(6)
                .width(Length::FillPortion(2)),
            ]
            .spacing(12)
            .align_y(Center),
        )
    });

    panel(rows).into()
}
