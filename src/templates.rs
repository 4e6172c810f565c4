use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;

/// Copied verbatim from the template directory into the project root.
pub const TEMPLATE_FILES: [&str; 3] = ["README.md", ".gitignore", "LICENSE"];
pub const MANIFEST_FILE: &str = "pyproject.toml";
pub const PLACEHOLDER: &str = "PROJECT_NAME_PLACEHOLDER";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template file not found: {}", .0.display())]
    Missing(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestOutcome {
    Rendered(PathBuf),
    TemplateMissing,
}

pub fn copy_templates(templates_dir: &Path, project_path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut copied = Vec::with_capacity(TEMPLATE_FILES.len());
    for name in TEMPLATE_FILES {
        let source = templates_dir.join(name);
        if !source.is_file() {
            return Err(TemplateError::Missing(source).into());
        }

        let dest = project_path.join(name);
        fs::copy(&source, &dest).with_context(|| {
            format!("copying template {} to {}", source.display(), dest.display())
        })?;
        tracing::debug!(template = name, dest = %dest.display(), "copied template");
        copied.push(dest);
    }

    Ok(copied)
}

/// Render `pyproject.toml` from the template directory into the project root.
///
/// A missing template is reported and skipped rather than treated as an error.
pub fn render_manifest(
    templates_dir: &Path,
    project_path: &Path,
    project_name: &str,
) -> anyhow::Result<ManifestOutcome> {
    let source_path = templates_dir.join(MANIFEST_FILE);
    if !source_path.exists() {
        tracing::debug!(template = %source_path.display(), "manifest template missing, skipping");
        println!("{MANIFEST_FILE} template not found.");
        return Ok(ManifestOutcome::TemplateMissing);
    }

    let mut source = String::new();
    File::open(&source_path)
        .with_context(|| format!("opening template {}", source_path.display()))?
        .read_to_string(&mut source)
        .with_context(|| format!("reading template {}", source_path.display()))?;

    let rendered = substitute_placeholder(&source, project_name);

    let dest = project_path.join(MANIFEST_FILE);
    let mut dest_file = File::create(&dest)
        .with_context(|| format!("writing manifest {}", dest.display()))?;
    dest_file.write_all(rendered.as_bytes())?;

    println!("{MANIFEST_FILE} set up with project name.");
    Ok(ManifestOutcome::Rendered(dest))
}

pub fn substitute_placeholder(template: &str, project_name: &str) -> String {
    template.replace(PLACEHOLDER, project_name)
}
