//! Weave operation - declaration aggregation from the manifest.

use std::path::Path;

use dts_stitch_core::{StitchPlan, aggregate, preview};
use dts_stitch_manifest::Manifest;

use crate::reports::{WeaveReport, WeaveResult};

/// Options for the weave operation.
pub struct WeaveOptions<'a> {
    /// Project root the manifest paths are resolved against.
    pub project_root: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the weave operation.
///
/// Resolves the manifest against the project root and runs (or previews)
/// the aggregation.
pub fn weave(manifest: &Manifest, opts: WeaveOptions) -> dts_stitch_core::Result<WeaveReport> {
    let plan = plan_for(manifest, opts.project_root);

    let result = if opts.dry_run {
        let dry = preview(&plan)?;
        WeaveResult::Preview {
            discovered: dry.discovered,
            block: dry.block,
        }
    } else {
        let report = aggregate(&plan)?;
        WeaveResult::Written {
            discovered: report.discovered,
            references: report.references,
            entry: report.entry,
        }
    };

    Ok(WeaveReport {
        package: manifest.package.as_ref().map(|p| p.name.clone()),
        result,
    })
}

fn plan_for(manifest: &Manifest, project_root: &Path) -> StitchPlan {
    let decl = &manifest.declarations;
    StitchPlan {
        source_root: decl.source_root(project_root),
        output_root: decl.output_root(project_root),
        entry: decl.entry_path(project_root),
        extension: decl.extension.clone(),
        references: decl.references.clone(),
    }
}
