//! Weave command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from stitching declarations into the entry file.
#[derive(Debug)]
pub struct WeaveReport {
    /// Package name from the manifest, when present.
    pub package: Option<String>,
    /// What the operation did (or would do).
    pub result: WeaveResult,
}

/// Outcome of a weave operation.
#[derive(Debug)]
pub enum WeaveResult {
    /// Dry run: nothing was written.
    Preview {
        /// Declaration files that would be copied.
        discovered: Vec<String>,
        /// Block that would be prepended to the entry.
        block: String,
    },
    /// Files were copied and the entry was rewritten.
    Written {
        /// Declaration files copied to the output tree.
        discovered: Vec<String>,
        /// Every reference directive written, in order.
        references: Vec<String>,
        /// The entry file that was rewritten.
        entry: PathBuf,
    },
}

impl Report for WeaveReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(name) = &self.package {
            out.preformatted(name);
            out.newline();
        }

        match &self.result {
            WeaveResult::Preview { discovered, block } => {
                out.divider("reference block");
                out.preformatted(block.trim_end());
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} declaration file{} would be copied",
                    discovered.len(),
                    plural(discovered.len())
                ));
            }
            WeaveResult::Written {
                discovered,
                references,
                entry,
            } => {
                out.preformatted(&format!(
                    "Stitched {} reference{} into {}",
                    references.len(),
                    plural(references.len()),
                    entry.display()
                ));

                if !discovered.is_empty() {
                    out.newline();
                    out.section("Copied");
                    for file in discovered {
                        out.added_item(file);
                    }
                }
            }
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
