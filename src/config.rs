use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

use crate::provision::RuntimeSelector;

pub const DEFAULT_PYTHON_VERSION: &str = "3.11";
pub const DEFAULT_PYTHON_PREFIX: &str = "/usr/local/bin/python";
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// Everything a scaffolding run needs, resolved up front and passed to each stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub project_name: String,
    pub project_path: PathBuf,
    pub templates_dir: PathBuf,
    pub python_prefix: String,
    pub selector: RuntimeSelector,
}

/// Optional user overrides read from `settings.json`.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub templates_dir: Option<PathBuf>,
    pub python_prefix: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid project name '{0}': must be a single directory name")]
    InvalidProjectName(String),
    #[error("could not determine the home directory")]
    HomeDirUnavailable,
}

impl ScaffoldConfig {
    pub fn resolve(
        project_name: &str,
        python_version: &str,
        cwd: &Path,
        home: &Path,
        settings: &Settings,
    ) -> Result<Self, ConfigError> {
        validate_project_name(project_name)?;

        let templates_dir = settings
            .templates_dir
            .clone()
            .unwrap_or_else(|| home.join(TEMPLATES_DIR_NAME));
        let python_prefix = settings
            .python_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_PYTHON_PREFIX.to_string());

        Ok(Self {
            project_name: project_name.to_string(),
            project_path: cwd.join(project_name),
            templates_dir,
            python_prefix,
            selector: RuntimeSelector::parse(python_version),
        })
    }

    /// Resolve against the current directory, the user's home and the settings file.
    pub fn from_environment(project_name: &str, python_version: &str) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("resolving current directory")?;
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
        let settings = match settings_file_path() {
            Some(path) => load_settings(&path)?,
            None => Settings::default(),
        };
        tracing::debug!(?settings, "loaded settings");

        Ok(Self::resolve(
            project_name,
            python_version,
            &cwd,
            &home,
            &settings,
        )?)
    }
}

pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading settings file at {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&data)
        .with_context(|| format!("parsing settings file at {}", path.display()))?;
    Ok(settings)
}

fn settings_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("new-project").join("settings.json"))
}

fn validate_project_name(name: &str) -> Result<(), ConfigError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => Err(ConfigError::InvalidProjectName(name.to_string())),
    }
}
