//! Filename directives.
//!
//! A template may name its own output file on its first line:
//!
//! ```text
//! +++ # {{ dateFormat "20060102" .Date }}__{{ makeSlug .Title }}.md
//! title = "{{ .Title }}"
//! +++
//! ```
//!
//! The line must open with a front-matter fence (`+++` or `---`), then optional
//! whitespace, then `#`. Everything after the first `#` (trimmed) is the
//! filename template. The directive line stays part of the body template.

use crate::error::{NoteError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Fences a directive line may start with.
pub const SENTINELS: &[&str] = &["+++", "---"];

/// Separates the fence from the filename template.
pub const SEPARATOR: char = '#';

/// Reads the first line of a template file, trimmed.
///
/// A file without a line terminator yields its whole content; an empty file
/// yields an empty string.
pub fn first_line(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|source| NoteError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Extracts the filename template from a template's first line.
///
/// Returns [`NoteError::NoFilenameTemplate`] when the line carries no
/// directive, or a directive with nothing after the separator.
pub fn extract_filename_template(line: &str) -> Result<&str> {
    let line = line.trim();
    let after_fence = SENTINELS
        .iter()
        .find_map(|sentinel| line.strip_prefix(*sentinel))
        .ok_or(NoteError::NoFilenameTemplate)?;

    let template = after_fence
        .trim_start()
        .strip_prefix(SEPARATOR)
        .map(str::trim)
        .ok_or(NoteError::NoFilenameTemplate)?;

    if template.is_empty() {
        return Err(NoteError::NoFilenameTemplate);
    }
    Ok(template)
}

/// Same as [`extract_filename_template`], with absence as `None`.
pub fn directive_in(source: &str) -> Option<&str> {
    let line = source.lines().next().unwrap_or_default();
    extract_filename_template(line).ok()
}

/// Reads a template file's directive, if it has one.
pub fn filename_template_from_file(path: &Path) -> Result<Option<String>> {
    let line = first_line(path)?;
    match extract_filename_template(&line) {
        Ok(template) => Ok(Some(template.to_string())),
        Err(NoteError::NoFilenameTemplate) => Ok(None),
        Err(e) => Err(e),
    }
}
