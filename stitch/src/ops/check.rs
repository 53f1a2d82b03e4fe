//! Check operation - resolve and describe the plan without touching disk.

use std::path::Path;

use dts_stitch_manifest::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
pub fn check(manifest: &Manifest, project_root: &Path) -> CheckReport {
    let decl = &manifest.declarations;

    let build = manifest.build.as_ref().map(|b| {
        if b.args.is_empty() {
            b.command.clone()
        } else {
            format!("{} {}", b.command, b.args.join(" "))
        }
    });

    CheckReport {
        package: manifest.package.as_ref().map(|p| p.name.clone()),
        source_root: decl.source_root(project_root),
        output_root: decl.output_root(project_root),
        entry: decl.entry_path(project_root),
        extension: decl.extension.clone(),
        references: decl.references.clone(),
        build,
    }
}
