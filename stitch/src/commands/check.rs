use std::path::PathBuf;

use clap::Args;
use dts_stitch_manifest::StitchToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to stitch.toml (defaults to ./stitch.toml)
    #[arg(short, long, default_value = "stitch.toml")]
    pub config: PathBuf,

    /// Project root the manifest paths are resolved against
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let stitch_toml = StitchToml::open(&self.config).unwrap_or_exit();

        println!("✓ {} is valid\n", self.config.display());

        let report = ops::check(stitch_toml.schema(), &self.project_root);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
