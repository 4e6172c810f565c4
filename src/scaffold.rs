use std::fmt;
use std::path::PathBuf;

use crate::config::ScaffoldConfig;
use crate::layout::{Preparation, prepare_project_dir, write_stubs};
use crate::prompt::Confirm;
use crate::provision::{EnvironmentKind, EnvironmentProvisioner};
use crate::templates::{ManifestOutcome, copy_templates, render_manifest};
use crate::vcs::VersionControl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Directories,
    Templates,
    Manifest,
    Stubs,
    Environment,
    Repository,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Directories => "creating directories",
            Stage::Templates => "copying templates",
            Stage::Manifest => "rendering manifest",
            Stage::Stubs => "writing source stubs",
            Stage::Environment => "provisioning environment",
            Stage::Repository => "initializing repository",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_path: PathBuf,
    pub copied_templates: Vec<PathBuf>,
    pub manifest: ManifestOutcome,
    pub environment: EnvironmentKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(ScaffoldReport),
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("{stage} failed: {message}")]
    StageFailed { stage: Stage, message: String },
}

/// Run every scaffolding stage in order against `config`.
///
/// Stages run strictly in sequence and nothing is rolled back when a later
/// stage fails.
pub fn create_project(
    config: &ScaffoldConfig,
    confirm: &mut dyn Confirm,
    provisioner: &dyn EnvironmentProvisioner,
    vcs: &dyn VersionControl,
) -> Result<Outcome, ScaffoldError> {
    let project_path = &config.project_path;
    println!("{}", project_path.display());

    let preparation =
        stage(Stage::Directories, || prepare_project_dir(project_path, confirm))?;
    if preparation == Preparation::Cancelled {
        tracing::info!(path = %project_path.display(), "overwrite declined");
        println!("Operation cancelled by the user.");
        return Ok(Outcome::Cancelled);
    }

    let copied_templates = stage(Stage::Templates, || {
        copy_templates(&config.templates_dir, project_path)
    })?;
    stage(Stage::Stubs, || write_stubs(project_path))?;
    println!("Project setup complete.");
    let manifest = stage(Stage::Manifest, || {
        render_manifest(&config.templates_dir, project_path, &config.project_name)
    })?;

    let environment = stage(Stage::Environment, || provisioner.provision(config))?;
    stage(Stage::Repository, || vcs.init(project_path))?;

    Ok(Outcome::Created(ScaffoldReport {
        project_path: project_path.clone(),
        copied_templates,
        manifest,
        environment,
    }))
}

fn stage<T>(
    stage: Stage,
    run: impl FnOnce() -> anyhow::Result<T>,
) -> Result<T, ScaffoldError> {
    tracing::info!("{stage}");
    run().map_err(|err| ScaffoldError::StageFailed {
        stage,
        message: format!("{err:#}"),
    })
}
