//! Post-parse validation of the manifest.

use std::path::{Component, Path};

use miette::SourceSpan;

use super::Manifest;
use crate::{Result, error::SourceContext};

/// Validate the manifest after parsing.
pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let decl = &manifest.declarations;

    if decl.extension.is_empty() {
        return Err(ctx.validation_error("declaration extension cannot be empty"));
    }
    if decl.extension.starts_with('.') {
        return Err(value_error(
            ctx,
            &decl.extension,
            "declaration extension must not start with a dot",
        ));
    }
    if decl.extension.contains('/') || decl.extension.contains('\\') {
        return Err(value_error(
            ctx,
            &decl.extension,
            "declaration extension must not contain path separators",
        ));
    }

    validate_dir(ctx, &decl.out_dir, "out_dir")?;
    validate_dir(ctx, &decl.source_dir, "source_dir")?;

    if decl.entry.contains('/') || decl.entry.contains('\\') {
        return Err(value_error(
            ctx,
            &decl.entry,
            "entry must be a bare file name directly under <out_dir>/<source_dir>",
        ));
    }
    let expected_suffix = format!(".{}", decl.extension);
    if !decl.entry.ends_with(&expected_suffix) {
        return Err(value_error(
            ctx,
            &decl.entry,
            format!("entry must end with '{}'", expected_suffix),
        ));
    }

    for reference in &decl.references {
        if reference.is_empty() {
            return Err(ctx.validation_error("references cannot contain empty paths"));
        }
    }

    if let Some(build) = &manifest.build {
        if build.command.is_empty() {
            return Err(ctx.validation_error("build command cannot be empty"));
        }
    }

    Ok(())
}

fn validate_dir(ctx: &SourceContext, value: &str, key: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ctx.validation_error(format!("{} cannot be empty", key)));
    }

    let path = Path::new(value);
    if path.is_absolute() {
        return Err(value_error(
            ctx,
            value,
            format!("{} must be relative to the project root", key),
        ));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(value_error(
            ctx,
            value,
            format!("{} must not escape the project root", key),
        ));
    }

    Ok(())
}

/// Create a validation error labeled at the offending value when it can be
/// located in the source.
fn value_error(
    ctx: &SourceContext,
    value: &str,
    message: impl Into<String>,
) -> Box<crate::Error> {
    match find_value_span(ctx.src(), value) {
        Some(span) => ctx.validation_error_at(message, span),
        None => ctx.validation_error(message),
    }
}

/// Find the span of a quoted value in the TOML source.
fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}
