use serde::{Deserialize, Serialize};
use time::Date;

/// Lifecycle state of a project.
///
/// The declaration order is the order used by every per-status listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Planning,
    Ongoing,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::Ongoing,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];

    /// Position of this status in [`ProjectStatus::ALL`]
    pub fn index(self) -> usize {
        match self {
            ProjectStatus::Planning => 0,
            ProjectStatus::Ongoing => 1,
            ProjectStatus::Completed => 2,
            ProjectStatus::OnHold => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: String,
    pub location: String,
    pub budget: f64,
    /// May exceed `budget`
    pub spent: f64,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    /// Percentage. The range is only enforced by the configured numeric policy.
    pub progress: i32,
    pub status: ProjectStatus,
    pub manager: String,
}

impl Project {
    /// Share of the budget already spent, as a percentage.
    pub fn utilisation(&self) -> Option<f64> {
        if self.budget == 0.0 {
            return None;
        }
        Some(self.spent / self.budget * 100.0)
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }
}

/// Project fields as submitted by the editor, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewProject {
    pub name: String,
    pub client: String,
    pub location: String,
    pub budget: f64,
    pub spent: f64,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub progress: i32,
    pub status: ProjectStatus,
    pub manager: String,
}

impl NewProject {
    pub(crate) fn into_project(self, id: String) -> Project {
        Project {
            id,
            name: self.name,
            client: self.client,
            location: self.location,
            budget: self.budget,
            spent: self.spent,
            start_date: self.start_date,
            end_date: self.end_date,
            progress: self.progress,
            status: self.status,
            manager: self.manager,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    /// e.g. "bag", "m3"
    pub unit: String,
    pub unit_price: f64,
    pub last_updated: Date,
}

impl Material {
    /// Value of the stock currently held
    pub fn stock_value(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMaterial {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_price: f64,
}

impl NewMaterial {
    pub(crate) fn into_material(self, id: String, last_updated: Date) -> Material {
        Material {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            unit: self.unit,
            unit_price: self.unit_price,
            last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_index_matches_declaration_order() {
        for (i, status) in ProjectStatus::ALL.iter().enumerate() {
            assert_eq!(status.index(), i);
        }
    }

    #[test]
    fn utilisation_is_undefined_for_zero_budget() {
        let project = NewProject {
            name: "Gudang".into(),
            spent: 10.0,
            ..Default::default()
        }
        .into_project("PRJ-1".into());
        assert_eq!(project.utilisation(), None);
        assert!(project.is_over_budget());
    }
}
