use std::path::PathBuf;

use clap::Args;
use dts_stitch_manifest::StitchToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, WeaveOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct WeaveCommand {
    /// Path to stitch.toml (defaults to ./stitch.toml)
    #[arg(short, long, default_value = "stitch.toml")]
    pub config: PathBuf,

    /// Project root the manifest paths are resolved against
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Preview the reference block and copies without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl WeaveCommand {
    /// Run the weave command
    pub fn run(&self) -> Result<()> {
        let stitch_toml = StitchToml::open(&self.config).unwrap_or_exit();

        let report = ops::weave(
            stitch_toml.schema(),
            WeaveOptions {
                project_root: &self.project_root,
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
