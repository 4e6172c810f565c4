use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;
use crate::executor::{CommandSpec, run_command};

pub const VENV_DIR_NAME: &str = "venv";
const CONDA_PROGRAM: &str = "conda";

/// How the runtime environment should be created, decided by the
/// `--python-version` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeSelector {
    /// Named environment in conda. Holds the raw selector, e.g. `conda` or `conda3.12`.
    Conda(String),
    /// Local venv created by the interpreter for this version, e.g. `3.11`.
    Local(String),
}

impl RuntimeSelector {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("conda") {
            RuntimeSelector::Conda(raw.to_string())
        } else {
            RuntimeSelector::Local(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RuntimeSelector::Conda(raw) | RuntimeSelector::Local(raw) => raw,
        }
    }
}

/// The environment that was requested from the external tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentKind {
    Conda { name: String },
    Venv { path: PathBuf },
}

pub trait EnvironmentProvisioner {
    fn provision(&self, config: &ScaffoldConfig) -> anyhow::Result<EnvironmentKind>;
}

/// Provisions environments by launching `conda` or a Python interpreter.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProvisioner;

impl EnvironmentProvisioner for SystemProvisioner {
    fn provision(&self, config: &ScaffoldConfig) -> anyhow::Result<EnvironmentKind> {
        let (spec, kind) = environment_command(config);
        run_command(&spec)?.warn_if_failed(&spec);

        let selector = config.selector.as_str();
        match &kind {
            EnvironmentKind::Conda { name } => {
                println!("Created conda env '{name}' with Python {selector}");
                println!("Cd into project and activate with: conda activate {name}");
            }
            EnvironmentKind::Venv { .. } => {
                println!("Created virtual environment with Python {selector}");
                println!("Cd into project and activate with: source {VENV_DIR_NAME}/bin/activate");
            }
        }

        Ok(kind)
    }
}

/// Build the command for the configured selector along with the environment it creates.
pub fn environment_command(config: &ScaffoldConfig) -> (CommandSpec, EnvironmentKind) {
    match &config.selector {
        RuntimeSelector::Conda(selector) => (
            conda_command(&config.project_name, selector),
            EnvironmentKind::Conda {
                name: config.project_name.clone(),
            },
        ),
        RuntimeSelector::Local(version) => (
            venv_command(&config.python_prefix, version, &config.project_path),
            EnvironmentKind::Venv {
                path: config.project_path.join(VENV_DIR_NAME),
            },
        ),
    }
}

/// `conda create -y -n <name> python=<selector>`. The selector is passed through
/// untouched, so a bare `conda` becomes `python=conda`.
pub fn conda_command(name: &str, selector: &str) -> CommandSpec {
    CommandSpec::new(CONDA_PROGRAM)
        .arg("create")
        .arg("-y")
        .arg("-n")
        .arg(name)
        .arg(format!("python={selector}"))
}

pub fn venv_command(prefix: &str, version: &str, project_path: &Path) -> CommandSpec {
    CommandSpec::new(format!("{prefix}{version}"))
        .arg("-m")
        .arg("venv")
        .path_arg(&project_path.join(VENV_DIR_NAME))
}
