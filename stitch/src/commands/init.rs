use std::path::Path;

use clap::Args;
use dts_stitch_manifest::starter;
use eyre::{Result, WrapErr};

#[derive(Args)]
pub struct InitCommand {
    /// Package name recorded in stitch.toml (defaults to the directory name)
    pub name: Option<String>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let name = match &self.name {
            Some(name) => name.clone(),
            None => {
                let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
                cwd.file_name()
                    .and_then(|n| n.to_str())
                    .ok_or_else(|| eyre::eyre!("Current directory has no valid name"))?
                    .to_string()
            }
        };

        let path = Path::new("stitch.toml");
        if path.exists() {
            eyre::bail!("stitch.toml already exists in this directory");
        }
        std::fs::write(path, starter(&name)).wrap_err("Failed to write stitch.toml")?;

        println!("Created stitch.toml for '{}'", name);
        println!();
        println!("Next steps:");
        println!("  stitch check");
        println!("  stitch run");

        Ok(())
    }
}
