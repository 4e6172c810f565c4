pub mod cli;
pub mod config;
pub mod executor;
pub mod layout;
pub mod prompt;
pub mod provision;
pub mod scaffold;
pub mod templates;
pub mod vcs;

/// Run the command line interface and return an exit code.
pub fn run_cli() -> i32 {
    cli::run()
}
