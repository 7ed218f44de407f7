//! Demo records the dashboard starts with.

use time::macros::date;

use crate::models::{Material, Project, ProjectStatus};

pub fn demo_projects() -> Vec<Project> {
    vec![
        Project {
            id: "PRJ-001".to_string(),
            name: "Menara Perkantoran Sudirman".to_string(),
            client: "PT Graha Nusantara".to_string(),
            location: "Jakarta Selatan".to_string(),
            budget: 45_000_000_000.0,
            spent: 28_500_000_000.0,
            start_date: Some(date!(2025 - 02 - 01)),
            end_date: Some(date!(2027 - 06 - 30)),
            progress: 62,
            status: ProjectStatus::Ongoing,
            manager: "Budi Santoso".to_string(),
        },
        Project {
            id: "PRJ-002".to_string(),
            name: "Jembatan Kali Brantas".to_string(),
            client: "Dinas PUPR Jawa Timur".to_string(),
            location: "Kediri".to_string(),
            budget: 12_500_000_000.0,
            spent: 12_500_000_000.0,
            start_date: Some(date!(2024 - 05 - 15)),
            end_date: Some(date!(2025 - 11 - 30)),
            progress: 100,
            status: ProjectStatus::Completed,
            manager: "Siti Rahmawati".to_string(),
        },
        Project {
            id: "PRJ-003".to_string(),
            name: "Perumahan Griya Asri".to_string(),
            client: "PT Bumi Asri Properti".to_string(),
            location: "Bekasi".to_string(),
            budget: 8_750_000_000.0,
            spent: 1_200_000_000.0,
            start_date: Some(date!(2026 - 03 - 01)),
            end_date: Some(date!(2027 - 12 - 31)),
            progress: 10,
            status: ProjectStatus::Planning,
            manager: "Andi Wijaya".to_string(),
        },
        Project {
            id: "PRJ-004".to_string(),
            name: "Gudang Logistik Cikarang".to_string(),
            client: "PT Logistik Prima".to_string(),
            location: "Cikarang".to_string(),
            budget: 6_300_000_000.0,
            spent: 3_900_000_000.0,
            start_date: Some(date!(2025 - 08 - 10)),
            end_date: Some(date!(2026 - 12 - 20)),
            progress: 48,
            status: ProjectStatus::OnHold,
            manager: "Rina Kusuma".to_string(),
        },
    ]
}

pub fn demo_materials() -> Vec<Material> {
    let material = |id: &str, name: &str, category: &str, quantity: f64, unit: &str, unit_price: f64| {
        Material {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            unit: unit.to_string(),
            unit_price,
            last_updated: date!(2026 - 10 - 01),
        }
    };
    vec![
        material("MAT-001", "Semen Portland", "Bahan Dasar", 1_200.0, "sak", 65_000.0),
        material("MAT-002", "Besi Beton 12mm", "Struktur", 850.0, "batang", 98_000.0),
        material("MAT-003", "Pasir Beton", "Bahan Dasar", 120.0, "m3", 310_000.0),
        material("MAT-004", "Bata Ringan", "Dinding", 15_000.0, "pcs", 9_500.0),
        material("MAT-005", "Cat Tembok Eksterior", "Finishing", 64.0, "pail", 1_150_000.0),
    ]
}
