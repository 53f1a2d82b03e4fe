mod check;
mod completions;
mod init;
mod run;
mod weave;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use init::InitCommand;
use run::RunCommand;
use weave::WeaveCommand;

/// Extension trait for exiting on manifest/aggregation errors with pretty
/// formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for dts_stitch_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for dts_stitch_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "stitch")]
#[command(version)]
#[command(about = "Stitch declaration files into a package's entry after compilation")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Run(cmd) => cmd.run(),
            Commands::Weave(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter stitch.toml in the current directory
    Init(InitCommand),

    /// Invoke the compiler from [build], then stitch declarations
    Run(RunCommand),

    /// Stitch declarations into the entry file (aggregation only)
    Weave(WeaveCommand),

    /// Validate stitch.toml and show the resolved plan
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
