//! Core aggregation engine for dts-stitch.
//!
//! After an external compiler has emitted per-source declaration files,
//! this crate discovers the hand-written declaration files under a source
//! tree, mirrors them into the compiled output tree, and rewrites the
//! package's entry declaration file so it begins with one reference
//! directive per declaration file.
//!
//! Everything is single-threaded and sequential; one [`StitchPlan`] in,
//! one [`StitchReport`] out.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod aggregate;
mod entry;
mod error;
mod mirror;
mod reference;
mod scan;

pub use aggregate::{StitchPlan, StitchPreview, StitchReport, aggregate, preview};
pub use entry::rewrite_entry;
pub use error::{Error, Result};
pub use mirror::materialize;
pub use reference::{reference_block, reference_line, strip_reference_block};
pub use scan::discover;
