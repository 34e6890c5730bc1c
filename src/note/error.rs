use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    /// A template file does not exist or could not be opened.
    #[error("Template not found: {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The first line of a template carries no filename directive.
    ///
    /// Callers fall through to the default filename template; this only
    /// surfaces from the low-level directive extraction.
    #[error("No filename template found in first line")]
    NoFilenameTemplate,

    #[error("Template syntax error: {0}")]
    TemplateParse(#[source] minijinja::Error),

    #[error("Invalid date '{input}', expected one of: 2006-01-02T15:04:05Z07:00, 2006-01-02 15:04:05, 2006-01-02")]
    DateParse { input: String },

    #[error("Template execution error: {0}")]
    Execution(#[source] minijinja::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NoteError {
    /// Errors caused by what the user typed, worth a usage hint.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            NoteError::Validation(_) | NoteError::DateParse { .. } | NoteError::TemplateParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, NoteError>;
