use std::path::Path;

use crate::executor::{CommandSpec, run_command};

pub trait VersionControl {
    fn init(&self, path: &Path) -> anyhow::Result<()>;
}

/// Initializes repositories with the `git` binary found on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl VersionControl for GitCli {
    fn init(&self, path: &Path) -> anyhow::Result<()> {
        let spec = git_init_command(path);
        run_command(&spec)?.warn_if_failed(&spec);
        Ok(())
    }
}

pub fn git_init_command(path: &Path) -> CommandSpec {
    CommandSpec::new("git").arg("init").path_arg(path)
}
