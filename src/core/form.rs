use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::models::{NewProject, Project, ProjectStatus};

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// What to do with amounts below zero and progress outside 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericPolicy {
    /// Keep whatever was entered
    #[default]
    Accept,
    Clamp,
    Reject,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(FormField),
    #[error("{field} is out of range: {value}")]
    OutOfRange { field: FormField, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Client,
    Location,
    Budget,
    Spent,
    StartDate,
    EndDate,
    Progress,
    Manager,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FormField::Name => "Project name",
            FormField::Client => "Client",
            FormField::Location => "Location",
            FormField::Budget => "Budget",
            FormField::Spent => "Spent",
            FormField::StartDate => "Start date",
            FormField::EndDate => "End date",
            FormField::Progress => "Progress",
            FormField::Manager => "Manager",
        };
        f.write_str(label)
    }
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub enum FormSubmission {
    Create(NewProject),
    Update(Project),
}

/// Editor state for a project, every input held as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    /// Set when editing an existing record
    pub id: Option<String>,
    pub name: String,
    pub client: String,
    pub location: String,
    pub budget: String,
    pub spent: String,
    pub start_date: String,
    pub end_date: String,
    pub progress: String,
    pub status: ProjectStatus,
    pub manager: String,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            client: String::new(),
            location: String::new(),
            budget: "0".to_string(),
            spent: "0".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            progress: "0".to_string(),
            status: ProjectStatus::Planning,
            manager: String::new(),
        }
    }
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: Some(project.id.clone()),
            name: project.name.clone(),
            client: project.client.clone(),
            location: project.location.clone(),
            budget: project.budget.to_string(),
            spent: project.spent.to_string(),
            start_date: project.start_date.map(format_date).unwrap_or_default(),
            end_date: project.end_date.map(format_date).unwrap_or_default(),
            progress: project.progress.to_string(),
            status: project.status,
            manager: project.manager.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Client => &self.client,
            FormField::Location => &self.location,
            FormField::Budget => &self.budget,
            FormField::Spent => &self.spent,
            FormField::StartDate => &self.start_date,
            FormField::EndDate => &self.end_date,
            FormField::Progress => &self.progress,
            FormField::Manager => &self.manager,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Client => &mut self.client,
            FormField::Location => &mut self.location,
            FormField::Budget => &mut self.budget,
            FormField::Spent => &mut self.spent,
            FormField::StartDate => &mut self.start_date,
            FormField::EndDate => &mut self.end_date,
            FormField::Progress => &mut self.progress,
            FormField::Manager => &mut self.manager,
        };
        *slot = value;
    }

    /// Maps the inputs to a record. Name and client must be non-empty.
    pub fn submit(&self, policy: NumericPolicy) -> Result<FormSubmission, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField(FormField::Name));
        }
        if self.client.trim().is_empty() {
            return Err(FormError::MissingField(FormField::Client));
        }

        let budget = apply_policy(FormField::Budget, coerce_number(&self.budget), 0.0, None, policy)?;
        let spent = apply_policy(FormField::Spent, coerce_number(&self.spent), 0.0, None, policy)?;
        let progress = apply_policy(
            FormField::Progress,
            coerce_number(&self.progress).trunc(),
            0.0,
            Some(100.0),
            policy,
        )? as i32;

        let draft = NewProject {
            name: self.name.clone(),
            client: self.client.clone(),
            location: self.location.clone(),
            budget,
            spent,
            start_date: parse_date(FormField::StartDate, &self.start_date),
            end_date: parse_date(FormField::EndDate, &self.end_date),
            progress,
            status: self.status,
            manager: self.manager.clone(),
        };
        Ok(match &self.id {
            Some(id) => FormSubmission::Update(draft.into_project(id.clone())),
            None => FormSubmission::Create(draft),
        })
    }
}

/// Blank input is zero, anything unparseable is zero too.
fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::debug!(input = trimmed, "non-numeric input coerced to 0");
            0.0
        }
    }
}

fn apply_policy(
    field: FormField,
    value: f64,
    min: f64,
    max: Option<f64>,
    policy: NumericPolicy,
) -> Result<f64, FormError> {
    let above_max = max.is_some_and(|max| value > max);
    if value >= min && !above_max {
        return Ok(value);
    }
    match policy {
        NumericPolicy::Accept => Ok(value),
        NumericPolicy::Clamp => Ok(value.clamp(min, max.unwrap_or(f64::MAX))),
        NumericPolicy::Reject => Err(FormError::OutOfRange {
            field,
            value: value.to_string(),
        }),
    }
}

fn parse_date(field: FormField, raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match Date::parse(trimmed, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(%field, input = trimmed, error = %e, "ignoring malformed date");
            None
        }
    }
}

fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_default()
}
