//! # Templates
//!
//! Note bodies and filenames are both rendered through [minijinja] templates
//! with the same setup:
//!
//! - Go `text/template` actions (`{{ makeSlug .Title }}`) are rewritten into
//!   minijinja syntax first ([`go_syntax`]), so either dialect works;
//! - the record fields are `Title`, `Content`, `Date` and `TitleSlug`
//!   (see [`crate::model::NoteData`]);
//! - `dateFormat` and `makeSlug` are the only injected functions
//!   ([`functions`]);
//! - undefined variables are errors, not empty strings;
//! - output is never auto-escaped, whatever the template is called;
//! - a trailing newline in the template is kept;
//! - there is no loader, so `include` and friends cannot reach the filesystem.
//!
//! Compiling a template ([`NoteTemplate::from_source`] / [`NoteTemplate::from_file`])
//! surfaces syntax errors as [`NoteError::TemplateParse`]; a template file that
//! cannot be opened is [`NoteError::NotFound`]. Failures while rendering are
//! [`NoteError::Execution`].
//!
//! Filename resolution on top of this lives in [`filename`], the first-line
//! directive convention in [`directive`].

use crate::error::{NoteError, Result};
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub mod directive;
pub mod filename;
pub mod functions;
pub mod go_syntax;

/// Body used when no template file is given.
///
/// The opening fence names the slug filename, but the default body is never
/// read for a directive: its filename comes from [`filename::FilenameDefaults`].
pub const DEFAULT_BODY_TEMPLATE: &str = r#"+++ # {{ makeSlug .Title }}.md
title = "{{ .Title }}"
created_at = "{{ dateFormat "2006-01-02T15:04:05Z07:00" .Date }}"
modified_at = "{{ dateFormat "2006-01-02T15:04:05Z07:00" .Date }}"
+++

{{ .Content }}
"#;

const INLINE_NAME: &str = "note";

/// A compiled template, ready to render a record.
pub struct NoteTemplate {
    env: Environment<'static>,
    name: String,
}

impl std::fmt::Debug for NoteTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteTemplate")
            .field("name", &self.name)
            .finish()
    }
}

impl NoteTemplate {
    /// Compiles a template from a string.
    pub fn from_source(name: &str, source: &str) -> Result<Self> {
        let mut env = environment();
        let source = go_syntax::translate(source).map_err(NoteError::TemplateParse)?;
        env.add_template_owned(name.to_string(), source.into_owned())
            .map_err(NoteError::TemplateParse)?;
        Ok(Self {
            env,
            name: name.to_string(),
        })
    }

    /// Compiles the built-in body template.
    pub fn default_body() -> Result<Self> {
        Self::from_source(INLINE_NAME, DEFAULT_BODY_TEMPLATE)
    }

    /// Reads and compiles a template file.
    ///
    /// Only a file that is missing or cannot be opened is `NotFound`; other read
    /// failures (such as invalid UTF-8) are I/O errors.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => NoteError::NotFound {
                path: path.to_path_buf(),
                source,
            },
            _ => NoteError::Io(source),
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| INLINE_NAME.to_string());
        Self::from_source(&name, &source)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders into `writer`.
    ///
    /// On failure the writer may already hold part of the output; callers that
    /// write to disk should render into a scratch file and only keep it on
    /// success.
    pub fn render_to<T: Serialize, W: Write>(&self, data: &T, writer: W) -> Result<()> {
        let tmpl = self
            .env
            .get_template(&self.name)
            .map_err(NoteError::Execution)?;
        tmpl.render_to_write(data, writer)
            .map(|_| ())
            .map_err(classify_render_error)
    }

    /// Renders to a string.
    pub fn render_to_string<T: Serialize>(&self, data: &T) -> Result<String> {
        let tmpl = self
            .env
            .get_template(&self.name)
            .map_err(NoteError::Execution)?;
        tmpl.render(data).map_err(classify_render_error)
    }
}

/// Compiles and renders a one-off template string.
pub fn render_str<T: Serialize>(name: &str, source: &str, data: &T) -> Result<String> {
    NoteTemplate::from_source(name, source)?.render_to_string(data)
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    functions::register(&mut env);
    env
}

fn classify_render_error(err: minijinja::Error) -> NoteError {
    match err.kind() {
        ErrorKind::WriteFailure => NoteError::Io(io::Error::other(err)),
        _ => NoteError::Execution(err),
    }
}
