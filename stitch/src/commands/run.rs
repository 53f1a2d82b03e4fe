use std::path::PathBuf;
use std::process::Command;

use clap::Args;
use dts_stitch_manifest::StitchToml;
use eyre::{Result, WrapErr};

use super::UnwrapOrExit;
use crate::{
    ops::{self, WeaveOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RunCommand {
    /// Path to stitch.toml (defaults to ./stitch.toml)
    #[arg(short, long, default_value = "stitch.toml")]
    pub config: PathBuf,

    /// Project root the manifest paths are resolved against
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,
}

impl RunCommand {
    /// Run the compiler from [build], then stitch.
    pub fn run(&self) -> Result<()> {
        let stitch_toml = StitchToml::open(&self.config).unwrap_or_exit();
        let manifest = stitch_toml.schema();

        // The compiler is an opaque collaborator; if it fails, stitching
        // must not run.
        if let Some(build) = &manifest.build {
            let status = Command::new(&build.command)
                .args(&build.args)
                .current_dir(&self.project_root)
                .status()
                .wrap_err_with(|| format!("Failed to run '{}'", build.command))?;

            if !status.success() {
                eyre::bail!("build command '{}' exited with {}", build.command, status);
            }
        }

        let report = ops::weave(
            manifest,
            WeaveOptions {
                project_root: &self.project_root,
                dry_run: false,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
