use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use which::which;

/// A fully resolved external command: program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<OsString>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Paths are passed through as raw OS strings, never re-encoded.
    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.as_os_str().to_owned())
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutcome {
    /// Non-zero exits are reported, never fatal.
    pub fn warn_if_failed(&self, spec: &CommandSpec) {
        if !self.success {
            tracing::warn!(command = %spec, code = ?self.code, "command exited unsuccessfully");
        }
    }
}

/// Run `spec` to completion with inherited stdio.
///
/// Failing to launch the program is an error. A non-zero exit status is
/// returned in the outcome for the caller to judge.
pub fn run_command(spec: &CommandSpec) -> anyhow::Result<CommandOutcome> {
    let program = resolve_program(&spec.program);
    tracing::debug!(program = %program.display(), command = %spec, "running command");

    let status = Command::new(&program)
        .args(&spec.args)
        .status()
        .with_context(|| format!("launching {spec}"))?;

    Ok(CommandOutcome {
        success: status.success(),
        code: status.code(),
    })
}

fn resolve_program(program: &str) -> PathBuf {
    let path = Path::new(program);
    if path.components().count() > 1 {
        return path.to_path_buf();
    }

    which(program).unwrap_or_else(|_| path.to_path_buf())
}
