//! Integration tests for Project and Material CRUD on the record store.
//!
//! Tests cover:
//! - Creating records with fresh, unique ids
//! - Wholesale replacement on update
//! - Deleting known and unknown ids
//! - Insertion order surviving every mutation

mod common;

use common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_add_project_appends_with_fresh_id() {
    let mut store = RecordStore::default();

    let first = store
        .add_project(make_new_project("Tower A", 100.0, 10.0, ProjectStatus::Ongoing))
        .clone();
    let second = store
        .add_project(make_new_project("Bridge B", 50.0, 0.0, ProjectStatus::Planning))
        .clone();

    assert!(first.id.starts_with("PRJ-"));
    assert_ne!(first.id, second.id);
    assert_eq!(ids(store.projects()), vec![first.id.as_str(), second.id.as_str()]);
    assert_eq!(first.name, "Tower A");
    assert_eq!(second.status, ProjectStatus::Planning);
}

#[test]
fn test_ids_stay_unique_across_many_creates() {
    let mut store = RecordStore::default();
    for i in 0..200 {
        store.add_project(make_new_project(&format!("P{i}"), 1.0, 0.0, ProjectStatus::Planning));
    }

    let mut seen: Vec<&str> = ids(store.projects());
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 200);
}

#[test]
fn test_update_project_replaces_record_in_place() {
    let mut store = worked_example_store();
    let mut edited = store.projects()[0].clone();
    edited.spent = 750_000_000.0;
    edited.status = ProjectStatus::OnHold;
    edited.manager = "Agus Wijaya".to_string();

    let previous = store.update_project(edited.clone());

    assert_eq!(previous.map(|p| p.spent), Some(400_000_000.0));
    assert_eq!(store.projects()[0], edited);
    assert_eq!(store.projects()[1].name, "Bridge B");
    assert_eq!(store.projects().len(), 2);
}

#[test]
fn test_update_unknown_project_is_noop() {
    let mut store = worked_example_store();
    let before = store.projects().to_vec();

    let mut ghost = before[0].clone();
    ghost.id = "PRJ-MISSING".to_string();
    ghost.name = "Ghost".to_string();

    assert_eq!(store.update_project(ghost), None);
    assert_eq!(store.projects(), before.as_slice());
}

#[test]
fn test_delete_project_removes_only_that_record() {
    let mut store = worked_example_store();
    store.add_project(make_new_project("Road C", 10.0, 1.0, ProjectStatus::Planning));
    let before = store.projects().to_vec();

    let removed = store.delete_project(&before[1].id);

    assert_eq!(removed.as_ref().map(|p| p.name.as_str()), Some("Bridge B"));
    assert_eq!(
        ids(store.projects()),
        vec![before[0].id.as_str(), before[2].id.as_str()]
    );
    assert!(store.project_by_id(&before[1].id).is_none());
}

#[test]
fn test_delete_unknown_project_leaves_store_unchanged() {
    let mut store = worked_example_store();
    let before = store.projects().to_vec();

    assert_eq!(store.delete_project("PRJ-NOPE"), None);
    assert_eq!(store.projects(), before.as_slice());
}

#[test]
fn test_duplicate_seed_ids_keep_first_occurrence() {
    let mut seeded = worked_example_store().projects().to_vec();
    let mut duplicate = seeded[0].clone();
    duplicate.name = "Duplicate".to_string();
    seeded.push(duplicate);

    let store = RecordStore::new(seeded, Vec::new());

    assert_eq!(store.projects().len(), 2);
    assert_eq!(store.projects()[0].name, "Tower A");
}

#[test]
fn test_material_crud() {
    let mut store = RecordStore::default();
    let cement = store
        .add_material(make_new_material("Semen Portland", 450.0, 65_000.0))
        .clone();
    let rebar = store
        .add_material(make_new_material("Besi Beton 10mm", 1_200.0, 85_000.0))
        .clone();
    assert!(cement.id.starts_with("MAT-"));
    assert_eq!(cement.stock_value(), 450.0 * 65_000.0);

    let mut restocked = cement.clone();
    restocked.quantity = 900.0;
    assert!(store.update_material(restocked).is_some());
    assert_eq!(store.material_by_id(&cement.id).map(|m| m.quantity), Some(900.0));

    assert_eq!(store.delete_material(&cement.id).map(|m| m.id), Some(cement.id));
    assert_eq!(store.materials().len(), 1);
    assert_eq!(store.materials()[0].id, rebar.id);
    assert_eq!(store.delete_material("MAT-NOPE"), None);
}
