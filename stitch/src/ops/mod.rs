mod check;
mod weave;

pub use check::check;
pub use weave::{WeaveOptions, weave};
