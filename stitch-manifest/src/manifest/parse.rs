//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::validate_manifest};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "stitch.toml")
    }
}

impl Manifest {
    /// Parse a stitch.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a stitch.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub(crate) fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest = Manifest::from_str("").unwrap();
        assert!(manifest.package.is_none());
        assert!(manifest.build.is_none());
        assert_eq!(manifest.declarations.out_dir, "dist");
        assert_eq!(manifest.declarations.references, vec!["../../type.d.ts"]);
    }

    #[test]
    fn test_full_manifest_parses() {
        let manifest = Manifest::from_str(
            r#"
            [package]
            name = "ts-core"

            [declarations]
            out_dir = "build"
            source_dir = "lib"
            extension = "d.ts"
            entry = "main.d.ts"
            references = ["../shared/global.d.ts", "../shared/dom.d.ts"]

            [build]
            command = "npx"
            args = ["ttsc"]
            "#,
        )
        .unwrap();

        assert_eq!(manifest.package.unwrap().name, "ts-core");
        assert_eq!(manifest.declarations.out_dir, "build");
        assert_eq!(manifest.declarations.entry, "main.d.ts");
        assert_eq!(manifest.declarations.references.len(), 2);
        let build = manifest.build.unwrap();
        assert_eq!(build.command, "npx");
        assert_eq!(build.args, vec!["ttsc"]);
    }

    #[test]
    fn test_partial_declarations_fill_defaults() {
        let manifest = Manifest::from_str(
            r#"
            [declarations]
            out_dir = "build"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.declarations.out_dir, "build");
        assert_eq!(manifest.declarations.source_dir, "src");
        assert_eq!(manifest.declarations.entry, "index.d.ts");
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let result = Manifest::from_str("[declarations\nout_dir = ");
        let err = result.unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing_path_is_io_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = Manifest::from_file(temp.path().join("stitch.toml"));
        let err = result.unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_from_file_round_trip() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("stitch.toml");
        std::fs::write(&path, "[package]\nname = \"pkg\"\n").unwrap();

        let manifest = Manifest::from_file(&path).unwrap();
        assert_eq!(manifest.package.unwrap().name, "pkg");
    }
}
