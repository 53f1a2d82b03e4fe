//! Manifest types and parsing for stitch.toml files.

mod file;
mod parse;
mod starter;
mod validate;

use std::path::{Path, PathBuf};

pub use file::StitchToml;
use serde::Deserialize;
pub use starter::starter;

/// Root manifest for stitch.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Package metadata (reporting only)
    pub package: Option<PackageConfig>,

    /// Declaration layout and references
    #[serde(default)]
    pub declarations: Declarations,

    /// Optional external compiler step, run by `stitch run`
    pub build: Option<BuildConfig>,
}

/// Package metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageConfig {
    /// Package name shown in reports
    pub name: String,
}

/// Where declaration files live and which references the entry always gets.
///
/// Defaults match the conventional TypeScript layout: the compiler emits
/// into `dist/` preserving the `src/` structure, hand-written `.d.ts` files
/// sit under `src/`, and the entry is `dist/src/index.d.ts`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Declarations {
    /// Compiler output tree, relative to the project root
    pub out_dir: String,

    /// Subtree scanned for declaration files, relative to the project root
    pub source_dir: String,

    /// Declaration file suffix, without the leading dot
    pub extension: String,

    /// Entry declaration file name, directly under `<out_dir>/<source_dir>`
    pub entry: String,

    /// External declaration files referenced from the entry before any
    /// discovered file, in this order
    pub references: Vec<String>,
}

impl Default for Declarations {
    fn default() -> Self {
        Self {
            out_dir: "dist".to_string(),
            source_dir: "src".to_string(),
            extension: "d.ts".to_string(),
            entry: "index.d.ts".to_string(),
            references: vec!["../../type.d.ts".to_string()],
        }
    }
}

impl Declarations {
    /// Tree scanned for declaration files.
    pub fn source_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.source_dir)
    }

    /// Tree receiving mirrored copies.
    pub fn output_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.out_dir).join(&self.source_dir)
    }

    /// The entry declaration file.
    pub fn entry_path(&self, project_root: &Path) -> PathBuf {
        self.output_root(project_root).join(&self.entry)
    }
}

/// The external compiler invocation preceding aggregation.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Program to run (e.g. `npx`)
    pub command: String,

    /// Arguments passed to the program
    #[serde(default)]
    pub args: Vec<String>,
}
