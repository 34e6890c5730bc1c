//! Filename templates and the default filename strategy.

use super::render_str;
use crate::error::{NoteError, Result};
use serde::Serialize;

pub const DEFAULT_FILE_EXT: &str = ".md";

/// `TitleSlug` already honours a slug override.
const SLUG_PART: &str = "{{ .TitleSlug }}";
const DATE_PART: &str = r#"{{ dateFormat "20060102" .Date }}__"#;

/// How the tier-3 filename is built when nothing else names the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameDefaults {
    /// Prefix the slug with the compact date (`19851026__`).
    pub date_prefix: bool,
    /// Suffix appended to the slug, dot included.
    pub file_ext: String,
}

impl Default for FilenameDefaults {
    fn default() -> Self {
        Self {
            date_prefix: false,
            file_ext: DEFAULT_FILE_EXT.to_string(),
        }
    }
}

impl FilenameDefaults {
    /// The filename template these settings describe.
    ///
    /// `{{ .TitleSlug }}.md`, or with the date prefix
    /// `{{ dateFormat "20060102" .Date }}__{{ .TitleSlug }}.md`.
    pub fn template(&self) -> String {
        let prefix = if self.date_prefix { DATE_PART } else { "" };
        format!("{}{}{}", prefix, SLUG_PART, self.file_ext)
    }
}

/// Renders a filename template against a record.
///
/// Surrounding whitespace is dropped; a filename that renders empty is a
/// validation error.
pub fn render_filename<T: Serialize>(template: &str, data: &T) -> Result<String> {
    let rendered = render_str("filename", template, data)?;
    let filename = rendered.trim();
    if filename.is_empty() {
        return Err(NoteError::Validation(format!(
            "Filename template '{}' rendered an empty filename",
            template
        )));
    }
    Ok(filename.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoteData;
    use chrono::DateTime;

    fn data(title: &str) -> NoteData {
        let date = DateTime::parse_from_rfc3339("1985-10-26T00:00:00+01:00").unwrap();
        NoteData::new(title, date).unwrap()
    }

    #[test]
    fn test_default_templates() {
        assert_eq!(FilenameDefaults::default().template(), "{{ .TitleSlug }}.md");
        let dated = FilenameDefaults {
            date_prefix: true,
            file_ext: ".txt".to_string(),
        };
        assert_eq!(
            dated.template(),
            r#"{{ dateFormat "20060102" .Date }}__{{ .TitleSlug }}.txt"#
        );
    }

    #[test]
    fn test_render_date_prefixed_filename() {
        let template = r#"{{ dateFormat("20060102", Date) }}__{{ makeSlug(Title) }}.md"#;
        assert_eq!(
            render_filename(template, &data("My test note ")).unwrap(),
            "19851026__my-test-note.md"
        );
    }

    #[test]
    fn test_render_go_filename_templates() {
        let note = data("My test note ");
        assert_eq!(
            render_filename("{{ makeSlug .Title }}.md", &note).unwrap(),
            "my-test-note.md"
        );
        assert_eq!(
            render_filename(
                r#"{{ dateFormat "20060102" .Date }}__{{ makeSlug .Title }}.md"#,
                &note
            )
            .unwrap(),
            "19851026__my-test-note.md"
        );
    }

    #[test]
    fn test_default_template_uses_slug_override() {
        let note = data("Meeting 2024-03-15").with_slug("weekly sync");
        let dated = FilenameDefaults {
            date_prefix: true,
            ..FilenameDefaults::default()
        };
        assert_eq!(
            render_filename(&FilenameDefaults::default().template(), &note).unwrap(),
            "weekly-sync.md"
        );
        assert_eq!(
            render_filename(&dated.template(), &note).unwrap(),
            "19851026__weekly-sync.md"
        );
    }

    #[test]
    fn test_rendered_whitespace_is_trimmed() {
        assert_eq!(
            render_filename("  {{ TitleSlug }}.md \n", &data("Trim me")).unwrap(),
            "trim-me.md"
        );
    }

    #[test]
    fn test_empty_filename_is_rejected() {
        let err = render_filename("{{ Content }}", &data("Anything")).unwrap_err();
        assert!(matches!(err, NoteError::Validation(_)));
    }

    #[test]
    fn test_malformed_filename_template() {
        let err = render_filename("{{ makeSlug(Title) .md", &data("x")).unwrap_err();
        assert!(matches!(err, NoteError::TemplateParse(_)));
    }
}
