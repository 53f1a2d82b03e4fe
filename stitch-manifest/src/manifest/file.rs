use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a stitch.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct StitchToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl StitchToml {
    /// Open and parse a stitch.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn schema(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_parses_and_keeps_raw_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stitch.toml");
        let content = "[package]\nname = \"pkg\"\n";
        std::fs::write(&path, content).unwrap();

        let stitch_toml = StitchToml::open(&path).unwrap();
        assert_eq!(stitch_toml.path(), path);
        assert_eq!(stitch_toml.content(), content);
        assert_eq!(stitch_toml.schema().package.as_ref().unwrap().name, "pkg");
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let result = StitchToml::open(temp.path().join("stitch.toml"));
        assert!(matches!(*result.unwrap_err(), crate::Error::Io { .. }));
    }
}
