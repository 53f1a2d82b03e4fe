//! Rewriting the entry declaration file.

use std::path::Path;

use crate::{Error, Result, reference};

/// Prepend `block` to the entry declaration file at `entry`.
///
/// Any previously-inserted reference block is stripped first, so repeated
/// aggregation does not accumulate directives. The original (non-block)
/// content is preserved byte-for-byte after the inserted block.
///
/// The write is whole-file, not streamed; a crash mid-write can corrupt the
/// entry file. Accepted for a one-shot build step on a developer machine.
pub fn rewrite_entry(entry: &Path, block: &str) -> Result<()> {
    if !entry.exists() {
        return Err(Error::EntryMissing {
            path: entry.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(entry).map_err(|e| Error::EntryRead {
        path: entry.to_path_buf(),
        source: e,
    })?;

    let original = reference::strip_reference_block(&content);
    let mut rewritten = String::with_capacity(block.len() + original.len());
    rewritten.push_str(block);
    rewritten.push_str(original);

    std::fs::write(entry, rewritten).map_err(|e| Error::EntryWrite {
        path: entry.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_rewrite_prepends_block() {
        let temp = TempDir::new().unwrap();
        let entry = temp.path().join("index.d.ts");
        fs::write(&entry, "export {};\n").unwrap();

        rewrite_entry(&entry, "/// <reference path=\"a.d.ts\" />\n\n").unwrap();

        assert_eq!(
            fs::read_to_string(&entry).unwrap(),
            "/// <reference path=\"a.d.ts\" />\n\nexport {};\n"
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let entry = temp.path().join("index.d.ts");
        fs::write(&entry, "export {};\n").unwrap();

        let block = "/// <reference path=\"a.d.ts\" />\n\n";
        rewrite_entry(&entry, block).unwrap();
        let first = fs::read_to_string(&entry).unwrap();
        rewrite_entry(&entry, block).unwrap();
        let second = fs::read_to_string(&entry).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_rewrite_missing_entry_fails() {
        let temp = TempDir::new().unwrap();
        let entry = temp.path().join("index.d.ts");

        let result = rewrite_entry(&entry, "");
        assert!(matches!(result, Err(Error::EntryMissing { .. })));
    }
}
