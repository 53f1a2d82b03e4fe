//! Reference directive construction and stripping.
//!
//! A reference directive is the comment-like marker line a TypeScript type
//! checker follows to load another declaration file:
//!
//! ```text
//! /// <reference path="a/foo.d.ts" />
//! ```

const DIRECTIVE_PREFIX: &str = "/// <reference";

/// Format a single reference directive line (without trailing newline).
pub fn reference_line(path: &str) -> String {
    format!("/// <reference path=\"{}\" />", path)
}

/// Build the block prepended to the entry declaration file: one directive
/// line per reference, in list order, followed by one blank line.
///
/// Pure and deterministic. An empty reference list yields an empty block.
pub fn reference_block(references: &[String]) -> String {
    if references.is_empty() {
        return String::new();
    }

    let mut block = String::new();
    for reference in references {
        block.push_str(&reference_line(reference));
        block.push('\n');
    }
    block.push('\n');
    block
}

/// Strip a previously-inserted reference block from the start of `content`.
///
/// Removes each leading run of directive lines plus the single blank
/// separator line after it. Repeats until the content no longer starts with
/// a directive, so entries double-stitched by older tool versions also come
/// out clean. Content that never carried a block is returned unchanged.
pub fn strip_reference_block(content: &str) -> &str {
    let mut rest = content;
    let mut stripped_any = false;

    loop {
        let mut run = false;
        while let Some(len) = leading_line(rest) {
            if rest[..len].trim_end().starts_with(DIRECTIVE_PREFIX) {
                rest = &rest[len..];
                run = true;
                stripped_any = true;
            } else {
                break;
            }
        }
        if !run {
            break;
        }
        if let Some(len) = leading_line(rest) {
            if rest[..len].trim_end().is_empty() {
                rest = &rest[len..];
            }
        }
    }

    if stripped_any { rest } else { content }
}

/// Length of the first line of `s` including its newline, if any.
fn leading_line(s: &str) -> Option<usize> {
    if s.is_empty() {
        None
    } else {
        Some(s.find('\n').map(|i| i + 1).unwrap_or(s.len()))
    }
}
