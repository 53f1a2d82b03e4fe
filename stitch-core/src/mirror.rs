//! Mirrored copies of discovered declaration files.

use std::path::Path;

use crate::{Error, Result};

/// Copy `source_root/relative` to `output_root/relative`, creating
/// intermediate directories as needed.
///
/// After a successful return the mirrored file exists with identical
/// content. Any failure aborts the whole aggregation; there is no
/// partial-success policy.
pub fn materialize(relative: &str, source_root: &Path, output_root: &Path) -> Result<()> {
    let from = source_root.join(relative);
    let to = output_root.join(relative);

    if let Some(parent) = to.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::Copy {
            from: from.clone(),
            to: to.clone(),
            source: e,
        })?;
    }

    std::fs::copy(&from, &to).map_err(|e| Error::Copy {
        from,
        to,
        source: e,
    })?;

    Ok(())
}
