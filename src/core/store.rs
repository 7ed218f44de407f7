use uuid::Uuid;

use crate::{
    core::locale::today,
    models::{Material, NewMaterial, NewProject, Project},
};

const PROJECT_ID_PREFIX: &str = "PRJ";
const MATERIAL_ID_PREFIX: &str = "MAT";

/// Anything held by the store and addressed by a string id.
pub trait Record: Clone {
    fn id(&self) -> &str;
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Material {
    fn id(&self) -> &str {
        &self.id
    }
}

pub trait ProjectRepository {
    fn projects(&self) -> &[Project];
    fn project_by_id(&self, id: &str) -> Option<&Project>;
    fn add_project(&mut self, project: NewProject) -> &Project;
    /// Replaces the record with the same id. Returns the previous record.
    fn update_project(&mut self, project: Project) -> Option<Project>;
    fn delete_project(&mut self, id: &str) -> Option<Project>;
}

pub trait MaterialRepository {
    fn materials(&self) -> &[Material];
    fn material_by_id(&self, id: &str) -> Option<&Material>;
    fn add_material(&mut self, material: NewMaterial) -> &Material;
    /// Replaces the record with the same id and stamps it with today's date.
    fn update_material(&mut self, material: Material) -> Option<Material>;
    fn delete_material(&mut self, id: &str) -> Option<Material>;
}

/// Insertion-ordered list with unique ids.
#[derive(Debug, Clone)]
struct RecordList<T> {
    items: Vec<T>,
}

impl<T: Record> RecordList<T> {
    fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn push(&mut self, item: T) -> &T {
        self.items.push(item);
        let last = self.items.len() - 1;
        &self.items[last]
    }

    fn replace(&mut self, item: T) -> Option<T> {
        let slot = self.items.iter_mut().find(|existing| existing.id() == item.id())?;
        Some(std::mem::replace(slot, item))
    }

    fn remove(&mut self, id: &str) -> Option<T> {
        let position = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(position))
    }

    /// Generates an id with the given prefix that no current item uses.
    fn fresh_id(&self, prefix: &str) -> String {
        loop {
            let simple = Uuid::new_v4().simple().to_string();
            let candidate = format!("{}-{}", prefix, simple[..8].to_ascii_uppercase());
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}

/// In-memory owner of every project and material record of a session.
#[derive(Debug, Clone)]
pub struct RecordStore {
    projects: RecordList<Project>,
    materials: RecordList<Material>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl RecordStore {
    /// Creates a store from initial records. Later duplicates of an id are dropped.
    pub fn new(projects: Vec<Project>, materials: Vec<Material>) -> Self {
        Self {
            projects: RecordList::new(dedup_by_id(projects)),
            materials: RecordList::new(dedup_by_id(materials)),
        }
    }
}

fn dedup_by_id<T: Record>(items: Vec<T>) -> Vec<T> {
    let mut kept: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if kept.iter().any(|existing| existing.id() == item.id()) {
            tracing::warn!(id = item.id(), "dropping record with duplicate id");
            continue;
        }
        kept.push(item);
    }
    kept
}

impl ProjectRepository for RecordStore {
    fn projects(&self) -> &[Project] {
        &self.projects.items
    }

    fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    fn add_project(&mut self, project: NewProject) -> &Project {
        let id = self.projects.fresh_id(PROJECT_ID_PREFIX);
        tracing::info!(%id, name = %project.name, "project created");
        self.projects.push(project.into_project(id))
    }

    fn update_project(&mut self, project: Project) -> Option<Project> {
        let id = project.id.clone();
        let previous = self.projects.replace(project);
        match previous {
            Some(_) => tracing::info!(%id, "project updated"),
            None => tracing::warn!(%id, "update for unknown project ignored"),
        }
        previous
    }

    fn delete_project(&mut self, id: &str) -> Option<Project> {
        let removed = self.projects.remove(id);
        if removed.is_some() {
            tracing::info!(%id, "project deleted");
        }
        removed
    }
}

impl MaterialRepository for RecordStore {
    fn materials(&self) -> &[Material] {
        &self.materials.items
    }

    fn material_by_id(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    fn add_material(&mut self, material: NewMaterial) -> &Material {
        let id = self.materials.fresh_id(MATERIAL_ID_PREFIX);
        tracing::info!(%id, name = %material.name, "material created");
        self.materials.push(material.into_material(id, today()))
    }

    fn update_material(&mut self, mut material: Material) -> Option<Material> {
        material.last_updated = today();
        let id = material.id.clone();
        let previous = self.materials.replace(material);
        if previous.is_some() {
            tracing::info!(%id, "material updated");
        }
        previous
    }

    fn delete_material(&mut self, id: &str) -> Option<Material> {
        let removed = self.materials.remove(id);
        if removed.is_some() {
            tracing::info!(%id, "material deleted");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectStatus;

    fn draft(name: &str) -> NewProject {
        NewProject {
            name: name.to_string(),
            client: "PT Maju".to_string(),
            budget: 100.0,
            ..Default::default()
        }
    }

    #[test]
    fn created_project_is_appended_with_fresh_id() {
        let mut store = RecordStore::default();
        let first = store.add_project(draft("A")).id.clone();
        let second = store.add_project(draft("B")).clone();

        assert!(second.id.starts_with("PRJ-"));
        assert_ne!(first, second.id);
        assert_eq!(store.projects().last(), Some(&second));
    }

    #[test]
    fn update_of_unknown_id_leaves_store_untouched() {
        let mut store = RecordStore::default();
        store.add_project(draft("A"));
        let before = store.projects().to_vec();

        let stray = draft("ghost").into_project("PRJ-NOPE".into());
        assert!(store.update_project(stray).is_none());
        assert_eq!(store.projects(), before.as_slice());
    }

    #[test]
    fn update_replaces_record_wholesale() {
        let mut store = RecordStore::default();
        let mut project = store.add_project(draft("A")).clone();
        project.status = ProjectStatus::Completed;
        project.location = String::new();

        let previous = store.update_project(project.clone());
        assert_eq!(previous.map(|p| p.status), Some(ProjectStatus::Planning));
        assert_eq!(store.project_by_id(&project.id), Some(&project));
    }

    #[test]
    fn duplicate_initial_ids_are_dropped() {
        let a = draft("A").into_project("PRJ-1".into());
        let b = draft("B").into_project("PRJ-1".into());
        let store = RecordStore::new(vec![a.clone(), b], Vec::new());
        assert_eq!(store.projects(), &[a]);
    }

    #[test]
    fn material_update_stamps_date() {
        let mut store = RecordStore::default();
        let mut material = store
            .add_material(NewMaterial {
                name: "Semen".into(),
                category: "Bahan".into(),
                quantity: 10.0,
                unit: "sak".into(),
                unit_price: 65_000.0,
            })
            .clone();
        material.last_updated = time::macros::date!(2000 - 01 - 01);
        material.quantity = 4.0;

        store.update_material(material.clone());
        let stored = store.material_by_id(&material.id).cloned();
        assert_eq!(stored.as_ref().map(|m| m.quantity), Some(4.0));
        assert_ne!(stored.map(|m| m.last_updated), Some(material.last_updated));
    }
}
