use clap::{ArgAction, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{DEFAULT_PYTHON_VERSION, ScaffoldConfig};
use crate::prompt::ConsoleConfirm;
use crate::provision::SystemProvisioner;
use crate::scaffold::{Outcome, create_project};
use crate::vcs::GitCli;

#[derive(Debug, Parser)]
#[command(
    name = "new-project",
    version,
    about = "Create a Python project directory",
    after_help = "Examples:\n  new-project my_project\n  new-project my_project --python-version 3.12\n  new-project my_project --python-version conda"
)]
pub struct Cli {
    /// Name of the project, used for the directory and any conda environment
    project_name: String,

    /// Python version for a local venv, or "conda" (optionally followed by a version)
    /// for a named conda environment
    #[arg(long, default_value = DEFAULT_PYTHON_VERSION)]
    python_version: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Parse arguments, scaffold the project and return the process exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match execute(&cli) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<Outcome> {
    let config = ScaffoldConfig::from_environment(&cli.project_name, &cli.python_version)?;
    tracing::debug!(?config, "resolved configuration");

    let mut confirm = ConsoleConfirm::stdio();
    let outcome = create_project(&config, &mut confirm, &SystemProvisioner, &GitCli)?;
    Ok(outcome)
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
