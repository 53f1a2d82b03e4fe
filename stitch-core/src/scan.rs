//! Discovery of declaration files under a source tree.

use std::path::Path;

use crate::{Error, Result};

/// Recursively collect every file under `root` whose name ends in
/// `.<extension>`.
///
/// Declaration suffixes like `d.ts` contain a dot of their own, so matching
/// goes through the full file name rather than `Path::extension`. Returned
/// paths are relative to `root`, `/`-separated, and sorted lexicographically
/// so the reference order is stable across filesystems.
///
/// An empty result is a valid outcome; a missing or unreadable `root` is not.
pub fn discover(root: &Path, extension: &str) -> Result<Vec<String>> {
    let suffix = format!(".{}", extension);
    let mut found = Vec::new();
    scan_dir(root, "", &suffix, &mut found)?;
    found.sort();
    Ok(found)
}

fn scan_dir(dir: &Path, prefix: &str, suffix: &str, found: &mut Vec<String>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::Discovery {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| Error::Discovery {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();

        let relative = if prefix.is_empty() {
            file_name.clone()
        } else {
            format!("{}/{}", prefix, file_name)
        };

        if path.is_dir() {
            scan_dir(&path, &relative, suffix, found)?;
        } else if file_name.ends_with(suffix) {
            found.push(relative);
        }
    }

    Ok(())
}
