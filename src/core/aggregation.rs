//! Dashboard statistics and chart series.
//!
//! Everything here is recomputed from the full record list on each call.

use crate::models::{Material, Project, ProjectStatus};

const LABEL_MAX_CHARS: usize = 15;
const LABEL_ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub total_budget: f64,
    pub total_spent: f64,
    /// Projects in [`ProjectStatus::Ongoing`]
    pub active_count: usize,
    pub completed_count: usize,
    /// Projects in [`ProjectStatus::Planning`]
    pub pending_count: usize,
}

impl Totals {
    /// Spent as a percentage of budget, `None` when nothing is budgeted.
    pub fn utilisation(&self) -> Option<f64> {
        if self.total_budget == 0.0 {
            return None;
        }
        Some(self.total_spent / self.total_budget * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetPoint {
    pub label: String,
    pub budget: f64,
    pub spent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub count: usize,
}

/// Per-status counters indexed by [`ProjectStatus::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts([usize; ProjectStatus::ALL.len()]);

impl StatusCounts {
    pub fn tally(projects: &[Project]) -> Self {
        let mut counts = Self::default();
        for project in projects {
            counts.0[project.status.index()] += 1;
        }
        counts
    }

    pub fn get(&self, status: ProjectStatus) -> usize {
        self.0[status.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = StatusCount> + '_ {
        ProjectStatus::ALL.iter().map(|&status| StatusCount {
            status,
            count: self.get(status),
        })
    }
}

pub fn compute_totals(projects: &[Project]) -> Totals {
    let counts = StatusCounts::tally(projects);
    Totals {
        total_budget: projects.iter().map(|p| p.budget).sum(),
        total_spent: projects.iter().map(|p| p.spent).sum(),
        active_count: counts.get(ProjectStatus::Ongoing),
        completed_count: counts.get(ProjectStatus::Completed),
        pending_count: counts.get(ProjectStatus::Planning),
    }
}

pub fn compute_budget_series(projects: &[Project]) -> Vec<BudgetPoint> {
    projects
        .iter()
        .map(|p| BudgetPoint {
            label: chart_label(&p.name),
            budget: p.budget,
            spent: p.spent,
        })
        .collect()
}

/// Always one entry per status, in declaration order.
pub fn compute_status_distribution(projects: &[Project]) -> Vec<StatusCount> {
    StatusCounts::tally(projects).iter().collect()
}

fn chart_label(name: &str) -> String {
    match name.char_indices().nth(LABEL_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &name[..cut], LABEL_ELLIPSIS),
        None => name.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub category: String,
    pub items: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventorySummary {
    pub item_count: usize,
    pub total_value: f64,
    /// In order of first appearance
    pub categories: Vec<CategoryCount>,
}

pub fn compute_inventory_summary(materials: &[Material]) -> InventorySummary {
    let mut categories: Vec<CategoryCount> = Vec::new();
    for material in materials {
        match categories.iter_mut().find(|c| c.category == material.category) {
            Some(entry) => entry.items += 1,
            None => categories.push(CategoryCount {
                category: material.category.clone(),
                items: 1,
            }),
        }
    }
    InventorySummary {
        item_count: materials.len(),
        total_value: materials.iter().map(Material::stock_value).sum(),
        categories,
    }
}

/// Everything the dashboard screen shows, computed in one pass over the store.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub totals: Totals,
    pub budget_series: Vec<BudgetPoint>,
    pub status_distribution: Vec<StatusCount>,
    pub project_count: usize,
}

impl DashboardData {
    pub fn compute(projects: &[Project]) -> Self {
        Self {
            totals: compute_totals(projects),
            budget_series: compute_budget_series(projects),
            status_distribution: compute_status_distribution(projects),
            project_count: projects.len(),
        }
    }
}
