use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::form::NumericPolicy;

pub const CONFIG_FILE_NAME: &str = "promaster.toml";

/// Runtime settings, read from `promaster.toml`. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Start the session with the demo projects and materials
    pub seed_demo_data: bool,
    pub validation: ValidationConfig,
    pub advisory: AdvisoryConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub numeric_policy: NumericPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    /// Base URL; the model name and `:generateContent` are appended
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    /// Without extension, the export format decides it
    pub file_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            validation: ValidationConfig::default(),
            advisory: AdvisoryConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Project Data Report - Konstruksi Pro Master".to_string(),
            file_name: "project-report".to_string(),
        }
    }
}

impl AdvisoryConfig {
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

pub fn parse_config(content: &str) -> anyhow::Result<AppConfig> {
    toml::from_str(content).context("Failed to parse configuration")
}

/// Load configuration.
///
/// Searches in order:
/// 1. Explicit config path (must exist)
/// 2. ./promaster.toml
/// 3. <config dir>/promaster/promaster.toml
///
/// Returns defaults if no file is found.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("promaster").join(CONFIG_FILE_NAME));
    }
    for path in &candidates {
        if path.exists() {
            return read_config(path);
        }
    }

    tracing::info!("no {} found, using defaults", CONFIG_FILE_NAME);
    Ok(AppConfig::default())
}

fn read_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {:?}", path))?;
    let config = parse_config(&content).with_context(|| format!("In {:?}", path))?;
    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}
