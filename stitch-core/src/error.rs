use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for aggregation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while stitching declaration files.
///
/// Every variant is fatal to the aggregation step: nothing is retried and
/// there is no partial-success mode. A failure leaves the output tree in
/// whatever state the failing step reached.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to scan '{path}' for declaration files")]
    #[diagnostic(
        code(stitch::discovery),
        help("check that the source directory exists and matches [declarations] source_dir")
    )]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy '{from}' to '{to}'")]
    #[diagnostic(code(stitch::copy))]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("entry declaration file '{path}' does not exist")]
    #[diagnostic(
        code(stitch::entry_missing),
        help("run the compiler first so it emits the entry declaration file")
    )]
    EntryMissing { path: PathBuf },

    #[error("failed to read entry declaration file '{path}'")]
    #[diagnostic(code(stitch::entry_read))]
    EntryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write entry declaration file '{path}'")]
    #[diagnostic(code(stitch::entry_write))]
    EntryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
