//! # Model
//!
//! [`NoteData`] is the record every template is rendered against. It is built
//! once per invocation and never changes afterwards.
//!
//! [`Draft`] binds a record to its body template and caches the filename the
//! template (or the defaults) produced at bind time:
//!
//! 1. a filename template passed to [`Draft::filename`] always wins;
//! 2. otherwise the directive on the template's first line, rendered at bind time;
//! 3. otherwise the default filename template ([`FilenameDefaults`]).
//!
//! A malformed directive fails [`Draft::bind`]; it is never skipped.

use crate::error::{NoteError, Result};
use crate::slug::make_slug;
use crate::template::directive::{directive_in, filename_template_from_file};
use crate::template::filename::{render_filename, FilenameDefaults};
use crate::template::NoteTemplate;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// The values exposed to templates as `Title`, `Content`, `Date` and `TitleSlug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NoteData {
    date: DateTime<FixedOffset>,
    title: String,
    content: String,
    title_slug: String,
}

impl NoteData {
    /// Creates a record. The title is trimmed and must not be empty.
    pub fn new(title: &str, date: DateTime<FixedOffset>) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(NoteError::Validation("Title is required".to_string()));
        }

        Ok(Self {
            date,
            title: title.to_string(),
            content: String::new(),
            title_slug: make_slug(title),
        })
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Derives `TitleSlug` from `text` instead of the title.
    pub fn with_slug(mut self, text: &str) -> Self {
        self.title_slug = make_slug(text);
        self
    }

    pub fn date(&self) -> &DateTime<FixedOffset> {
        &self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn title_slug(&self) -> &str {
        &self.title_slug
    }
}

/// Where the body template comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// The built-in body template.
    #[default]
    Default,
    /// A template file on disk.
    File(PathBuf),
    /// A template held in memory.
    Inline(String),
}

/// A record bound to its body template, with the filename resolved.
#[derive(Debug)]
pub struct Draft {
    data: NoteData,
    template: NoteTemplate,
    resolved_filename: String,
}

impl Draft {
    /// Compiles the body template and resolves the filename for `data`.
    pub fn bind(data: NoteData, source: &TemplateSource, defaults: &FilenameDefaults) -> Result<Self> {
        let (template, directive) = match source {
            TemplateSource::Default => (NoteTemplate::default_body()?, None),
            TemplateSource::File(path) => {
                let directive = filename_template_from_file(path)?;
                (NoteTemplate::from_file(path)?, directive)
            }
            TemplateSource::Inline(body) => (
                NoteTemplate::from_source("note", body)?,
                directive_in(body).map(str::to_string),
            ),
        };

        let resolved_filename = match directive {
            Some(filename_template) => {
                tracing::debug!(%filename_template, "using filename directive from template");
                render_filename(&filename_template, &data)?
            }
            None => {
                let filename_template = defaults.template();
                tracing::debug!(%filename_template, "no filename directive, using default");
                render_filename(&filename_template, &data)?
            }
        };

        Ok(Self {
            data,
            template,
            resolved_filename,
        })
    }

    /// The note's filename. An explicit filename template overrides whatever
    /// was resolved at bind time.
    pub fn filename(&self, explicit: Option<&str>) -> Result<String> {
        match explicit.map(str::trim).filter(|t| !t.is_empty()) {
            Some(filename_template) => {
                tracing::debug!(%filename_template, "using explicit filename template");
                render_filename(filename_template, &self.data)
            }
            None => Ok(self.resolved_filename.clone()),
        }
    }

    /// Renders the note body into `writer`.
    pub fn render<W: Write>(&self, writer: W) -> Result<()> {
        self.template.render_to(&self.data, writer)
    }

    pub fn data(&self) -> &NoteData {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DATED_DIRECTIVE: &str =
        "+++ #  {{ dateFormat \"20060102\" .Date }}__{{ makeSlug .Title }}.md\n+++\n# {{ .Title }}\n";

    fn date() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("1985-10-26T00:00:00-05:00").unwrap()
    }

    fn data() -> NoteData {
        NoteData::new("My test note ", date()).unwrap()
    }

    fn template_file(dir: &TempDir, content: &str) -> TemplateSource {
        let path = dir.path().join("template.note");
        fs::write(&path, content).unwrap();
        TemplateSource::File(path)
    }

    #[test]
    fn test_title_is_trimmed_and_slugged() {
        let data = data();
        assert_eq!(data.title(), "My test note");
        assert_eq!(data.title_slug(), "my-test-note");
        assert_eq!(data.content(), "");
    }

    #[test]
    fn test_empty_title_is_rejected() {
        for title in ["", "   ", "\n\t"] {
            let err = NoteData::new(title, date()).unwrap_err();
            assert!(matches!(err, NoteError::Validation(_)));
        }
    }

    #[test]
    fn test_slug_override_is_normalized() {
        let data = data().with_slug("Custom Slug!");
        assert_eq!(data.title_slug(), "custom-slug");
        assert_eq!(data.title(), "My test note");
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(data().with_content("body")).unwrap();
        assert_eq!(value["Title"], "My test note");
        assert_eq!(value["Content"], "body");
        assert_eq!(value["TitleSlug"], "my-test-note");
        assert_eq!(value["Date"], "1985-10-26T00:00:00-05:00");
    }

    #[test]
    fn test_directive_in_file_names_the_note() {
        let dir = TempDir::new().unwrap();
        let source = template_file(&dir, DATED_DIRECTIVE);
        let draft = Draft::bind(data(), &source, &FilenameDefaults::default()).unwrap();
        assert_eq!(draft.filename(None).unwrap(), "19851026__my-test-note.md");
    }

    #[test]
    fn test_file_without_directive_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let source = template_file(&dir, "+++\ntitle = \"{{ Title }}\"\n+++\n");
        let draft = Draft::bind(data(), &source, &FilenameDefaults::default()).unwrap();
        assert_eq!(draft.filename(None).unwrap(), "my-test-note.md");
    }

    #[test]
    fn test_default_template_respects_date_prefix() {
        let defaults = FilenameDefaults {
            date_prefix: true,
            ..Default::default()
        };
        let draft = Draft::bind(data(), &TemplateSource::Default, &defaults).unwrap();
        assert_eq!(draft.filename(None).unwrap(), "19851026__my-test-note.md");

        let plain_text = FilenameDefaults {
            date_prefix: false,
            file_ext: ".txt".to_string(),
        };
        let draft = Draft::bind(data(), &TemplateSource::Default, &plain_text).unwrap();
        assert_eq!(draft.filename(None).unwrap(), "my-test-note.txt");
    }

    #[test]
    fn test_unreadable_template_body_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("template.note");
        fs::write(&path, b"+++ # {{ .TitleSlug }}.md\n\xff\xfe\n+++\n").unwrap();
        let source = TemplateSource::File(path);
        let err = Draft::bind(data(), &source, &FilenameDefaults::default()).unwrap_err();
        assert!(matches!(err, NoteError::Io(_)));
    }

    #[test]
    fn test_explicit_filename_template_beats_directive() {
        let dir = TempDir::new().unwrap();
        let source = template_file(&dir, DATED_DIRECTIVE);
        let draft = Draft::bind(data(), &source, &FilenameDefaults::default()).unwrap();
        assert_eq!(
            draft.filename(Some("{{ TitleSlug }}.txt")).unwrap(),
            "my-test-note.txt"
        );
        assert_eq!(draft.filename(Some("  ")).unwrap(), "19851026__my-test-note.md");
    }

    #[test]
    fn test_malformed_directive_fails_bind() {
        let dir = TempDir::new().unwrap();
        let source = template_file(&dir, "+++ # {{ makeSlug(Title) .md\n+++\n");
        let err = Draft::bind(data(), &source, &FilenameDefaults::default()).unwrap_err();
        assert!(matches!(err, NoteError::TemplateParse(_)));
    }

    #[test]
    fn test_missing_template_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let source = TemplateSource::File(dir.path().join("missing.note"));
        let err = Draft::bind(data(), &source, &FilenameDefaults::default()).unwrap_err();
        assert!(matches!(err, NoteError::NotFound { .. }));
    }

    #[test]
    fn test_inline_template_directive() {
        let source = TemplateSource::Inline(DATED_DIRECTIVE.to_string());
        let draft = Draft::bind(data(), &source, &FilenameDefaults::default()).unwrap();
        assert_eq!(draft.filename(None).unwrap(), "19851026__my-test-note.md");

        let mut body = Vec::new();
        draft.render(&mut body).unwrap();
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "+++ #  19851026__my-test-note.md\n+++\n# My test note\n"
        );
    }
}
