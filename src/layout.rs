use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::prompt::Confirm;

pub const SUBDIRECTORIES: [&str; 6] = ["data", "docs", "notebooks", "src", "tests", "scratch"];

pub const INIT_STUB: &str = "__version__ = '0.1.0'";
pub const MAIN_STUB: &str = "#!/usr/bin/env python3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preparation {
    Ready,
    Cancelled,
}

/// Create the project root and its fixed subdirectories.
///
/// An existing entry at `project_path` is only reused after `confirm` agrees;
/// declining returns [`Preparation::Cancelled`] without touching the filesystem.
pub fn prepare_project_dir(
    project_path: &Path,
    confirm: &mut dyn Confirm,
) -> anyhow::Result<Preparation> {
    if fs::symlink_metadata(project_path).is_ok() {
        let question = format!(
            "The directory '{}' already exists. Do you want to override it? (yes/no): ",
            project_path.display()
        );
        if !confirm.confirm(&question)? {
            return Ok(Preparation::Cancelled);
        }
    }

    fs::create_dir_all(project_path)
        .with_context(|| format!("creating project directory {}", project_path.display()))?;

    for name in SUBDIRECTORIES {
        let dir = project_path.join(name);
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating directory {}", dir.display()))?;
    }

    Ok(Preparation::Ready)
}

/// Write `src/__init__.py` and `src/main.py`, replacing any existing files.
pub fn write_stubs(project_path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let src = project_path.join("src");
    let stubs = [("__init__.py", INIT_STUB), ("main.py", MAIN_STUB)];

    let mut written = Vec::with_capacity(stubs.len());
    for (name, contents) in stubs {
        let path = src.join(name);
        fs::write(&path, contents)
            .with_context(|| format!("writing stub {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
