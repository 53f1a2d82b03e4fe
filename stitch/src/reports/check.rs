//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Resolved plan description for `stitch check`.
#[derive(Debug)]
pub struct CheckReport {
    /// Package name from the manifest, when present.
    pub package: Option<String>,
    /// Tree scanned for declaration files.
    pub source_root: PathBuf,
    /// Tree receiving mirrored copies.
    pub output_root: PathBuf,
    /// Entry declaration file.
    pub entry: PathBuf,
    /// Declaration file suffix.
    pub extension: String,
    /// External references emitted first.
    pub references: Vec<String>,
    /// Build command line, when a [build] table is present.
    pub build: Option<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(name) = &self.package {
            out.key_value("Package", name);
        }
        out.key_value("Scan", &self.source_root.display().to_string());
        out.key_value("Mirror", &self.output_root.display().to_string());
        out.key_value("Entry", &self.entry.display().to_string());
        out.key_value("Extension", &format!(".{}", self.extension));

        out.newline();
        if self.references.is_empty() {
            out.preformatted("No external references configured.");
        } else {
            out.section("External references");
            for reference in &self.references {
                out.list_item(reference);
            }
        }

        if let Some(build) = &self.build {
            out.newline();
            out.key_value("Build", build);
        }
    }
}
