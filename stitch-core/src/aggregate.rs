//! Sequential orchestration of one aggregation run.

use std::path::PathBuf;

use crate::{Error, Result, entry, mirror, reference, scan};

/// Resolved inputs for one aggregation run.
///
/// Built fresh per invocation from the manifest and project root; nothing
/// here persists between runs. Callers should serialize invocations against
/// the same output tree.
#[derive(Debug, Clone)]
pub struct StitchPlan {
    /// Tree scanned for declaration files.
    pub source_root: PathBuf,
    /// Tree receiving mirrored copies; the entry file lives directly here.
    pub output_root: PathBuf,
    /// Entry declaration file rewritten in place.
    pub entry: PathBuf,
    /// Declaration file suffix without the leading dot (e.g. `d.ts`).
    pub extension: String,
    /// External references emitted first, in manifest order.
    pub references: Vec<String>,
}

impl StitchPlan {
    /// Full reference list: external references first, discovered after.
    fn reference_list(&self, discovered: &[String]) -> Vec<String> {
        let mut references = self.references.clone();
        references.extend(discovered.iter().cloned());
        references
    }
}

/// Result of a completed aggregation.
#[derive(Debug)]
pub struct StitchReport {
    /// Declaration files found under the source root, sorted.
    pub discovered: Vec<String>,
    /// Every reference directive written to the entry, in order.
    pub references: Vec<String>,
    /// The entry file that was rewritten.
    pub entry: PathBuf,
}

/// Result of a dry run.
#[derive(Debug)]
pub struct StitchPreview {
    /// Declaration files that would be copied, sorted.
    pub discovered: Vec<String>,
    /// Every reference directive that would be written, in order.
    pub references: Vec<String>,
    /// The block that would be prepended to the entry.
    pub block: String,
}

/// Run the aggregation described by `plan`.
///
/// Steps are strictly sequential: discover, copy every discovered file to
/// its mirrored path, build the reference block, rewrite the entry. The
/// first error aborts the remaining steps; there is no rollback.
///
/// The entry file is checked up front so a missing entry fails before any
/// copy is made.
pub fn aggregate(plan: &StitchPlan) -> Result<StitchReport> {
    if !plan.entry.exists() {
        return Err(Error::EntryMissing {
            path: plan.entry.clone(),
        });
    }

    let discovered = scan::discover(&plan.source_root, &plan.extension)?;

    for relative in &discovered {
        mirror::materialize(relative, &plan.source_root, &plan.output_root)?;
    }

    let references = plan.reference_list(&discovered);
    let block = reference::reference_block(&references);
    entry::rewrite_entry(&plan.entry, &block)?;

    Ok(StitchReport {
        discovered,
        references,
        entry: plan.entry.clone(),
    })
}

/// Discovery and block construction only; touches nothing on disk.
pub fn preview(plan: &StitchPlan) -> Result<StitchPreview> {
    let discovered = scan::discover(&plan.source_root, &plan.extension)?;
    let references = plan.reference_list(&discovered);
    let block = reference::reference_block(&references);

    Ok(StitchPreview {
        discovered,
        references,
        block,
    })
}
