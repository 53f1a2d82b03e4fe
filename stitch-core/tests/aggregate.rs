//! End-to-end tests for the aggregation step against real temp trees.

use std::fs;
use std::path::{Path, PathBuf};

use dts_stitch_core::{Error, StitchPlan, aggregate, preview, strip_reference_block};
use tempfile::TempDir;

const ENTRY_CONTENT: &str = "export {};\n";

/// Lay out `<root>/src` and `<root>/dist/src/index.d.ts` the way the
/// compiler leaves them, and return a plan with the default fixed reference.
fn plan_for(root: &Path) -> StitchPlan {
    let source_root = root.join("src");
    let output_root = root.join("dist").join("src");
    fs::create_dir_all(&source_root).unwrap();
    fs::create_dir_all(&output_root).unwrap();

    let entry = output_root.join("index.d.ts");
    fs::write(&entry, ENTRY_CONTENT).unwrap();

    StitchPlan {
        source_root,
        output_root,
        entry,
        extension: "d.ts".to_string(),
        references: vec!["../../type.d.ts".to_string()],
    }
}

fn write_decl(plan: &StitchPlan, relative: &str, content: &str) {
    let path = plan.source_root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn mirrored(plan: &StitchPlan, relative: &str) -> PathBuf {
    plan.output_root.join(relative)
}

#[test]
fn test_two_file_scenario() {
    let temp = TempDir::new().unwrap();
    let plan = plan_for(temp.path());
    write_decl(&plan, "a/foo.d.ts", "declare const foo: string;\n");
    write_decl(&plan, "b/bar.d.ts", "declare const bar: number;\n");

    let report = aggregate(&plan).unwrap();

    assert_eq!(report.discovered, vec!["a/foo.d.ts", "b/bar.d.ts"]);
    assert_eq!(
        report.references,
        vec!["../../type.d.ts", "a/foo.d.ts", "b/bar.d.ts"]
    );

    // Every discovered file has an identical mirrored copy.
    assert_eq!(
        fs::read_to_string(mirrored(&plan, "a/foo.d.ts")).unwrap(),
        "declare const foo: string;\n"
    );
    assert_eq!(
        fs::read_to_string(mirrored(&plan, "b/bar.d.ts")).unwrap(),
        "declare const bar: number;\n"
    );

    assert_eq!(
        fs::read_to_string(&plan.entry).unwrap(),
        "/// <reference path=\"../../type.d.ts\" />\n\
         /// <reference path=\"a/foo.d.ts\" />\n\
         /// <reference path=\"b/bar.d.ts\" />\n\
         \n\
         export {};\n"
    );
}

#[test]
fn test_empty_discovery_still_writes_fixed_reference() {
    let temp = TempDir::new().unwrap();
    let plan = plan_for(temp.path());

    let report = aggregate(&plan).unwrap();

    assert!(report.discovered.is_empty());
    assert_eq!(report.references, vec!["../../type.d.ts"]);
    assert_eq!(
        fs::read_to_string(&plan.entry).unwrap(),
        "/// <reference path=\"../../type.d.ts\" />\n\nexport {};\n"
    );
}

#[test]
fn test_original_entry_content_is_preserved() {
    let temp = TempDir::new().unwrap();
    let plan = plan_for(temp.path());
    let original = "// keep me\nexport {};\n\ndeclare global {\n  const v: string;\n}\n";
    fs::write(&plan.entry, original).unwrap();
    write_decl(&plan, "env.d.ts", "declare const env: string;\n");

    aggregate(&plan).unwrap();

    let rewritten = fs::read_to_string(&plan.entry).unwrap();
    assert_eq!(strip_reference_block(&rewritten), original);
}

#[test]
fn test_missing_entry_fails_before_any_copy() {
    let temp = TempDir::new().unwrap();
    let plan = plan_for(temp.path());
    fs::remove_file(&plan.entry).unwrap();
    write_decl(&plan, "a/foo.d.ts", "declare const foo: string;\n");

    let result = aggregate(&plan);

    assert!(matches!(result, Err(Error::EntryMissing { .. })));
    assert!(!mirrored(&plan, "a/foo.d.ts").exists());
}

#[test]
fn test_missing_source_root_fails() {
    let temp = TempDir::new().unwrap();
    let plan = plan_for(temp.path());
    fs::remove_dir_all(&plan.source_root).unwrap();

    let result = aggregate(&plan);
    assert!(matches!(result, Err(Error::Discovery { .. })));
}

#[test]
fn test_aggregate_twice_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let plan = plan_for(temp.path());
    write_decl(&plan, "a/foo.d.ts", "declare const foo: string;\n");

    aggregate(&plan).unwrap();
    let first = fs::read_to_string(&plan.entry).unwrap();
    aggregate(&plan).unwrap();
    let second = fs::read_to_string(&plan.entry).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_discovered_references_are_sorted() {
    let temp = TempDir::new().unwrap();
    let plan = plan_for(temp.path());
    write_decl(&plan, "z/last.d.ts", "declare const z: string;\n");
    write_decl(&plan, "m/mid.d.ts", "declare const m: string;\n");
    write_decl(&plan, "a/first.d.ts", "declare const a: string;\n");

    let report = aggregate(&plan).unwrap();
    assert_eq!(
        report.discovered,
        vec!["a/first.d.ts", "m/mid.d.ts", "z/last.d.ts"]
    );
}

#[test]
fn test_no_fixed_references_configured() {
    let temp = TempDir::new().unwrap();
    let mut plan = plan_for(temp.path());
    plan.references.clear();
    write_decl(&plan, "env.d.ts", "declare const env: string;\n");

    aggregate(&plan).unwrap();

    assert_eq!(
        fs::read_to_string(&plan.entry).unwrap(),
        "/// <reference path=\"env.d.ts\" />\n\nexport {};\n"
    );
}

#[test]
fn test_preview_touches_nothing() {
    let temp = TempDir::new().unwrap();
    let plan = plan_for(temp.path());
    write_decl(&plan, "a/foo.d.ts", "declare const foo: string;\n");

    let result = preview(&plan).unwrap();

    assert_eq!(result.discovered, vec!["a/foo.d.ts"]);
    assert!(!mirrored(&plan, "a/foo.d.ts").exists());
    assert_eq!(fs::read_to_string(&plan.entry).unwrap(), ENTRY_CONTENT);
    insta::assert_snapshot!(result.block.trim_end(), @r#"
    /// <reference path="../../type.d.ts" />
    /// <reference path="a/foo.d.ts" />
    "#);
}
