//! Creating a note: from request to file.
//!
//! 1. resolve the date (absent means `now`, bad input is an error);
//! 2. build the record, validating the title;
//! 3. bind the body template, resolving the filename;
//! 4. ask the store whether the target exists;
//! 5. render and write it, or leave the existing file alone.
//!
//! Every failure up to step 5 happens before anything touches the store.

use crate::commands::{CmdMessage, CmdResult};
use crate::date::resolve_date;
use crate::error::Result;
use crate::model::{Draft, NoteData, TemplateSource};
use crate::store::{NoteStore, TargetState};
use crate::template::filename::FilenameDefaults;
use chrono::{DateTime, FixedOffset};

/// Everything needed to create one note.
#[derive(Debug, Clone, Default)]
pub struct NoteRequest {
    pub title: String,
    pub content: String,
    /// User supplied date, in one of the accepted formats.
    pub date: Option<String>,
    pub template: TemplateSource,
    /// Filename template that overrides directives and defaults.
    pub filename_template: Option<String>,
    /// Text to derive `TitleSlug` from instead of the title.
    pub slug: Option<String>,
    pub defaults: FilenameDefaults,
}

pub fn run<S: NoteStore>(
    store: &mut S,
    request: &NoteRequest,
    now: DateTime<FixedOffset>,
) -> Result<CmdResult> {
    let date = resolve_date(request.date.as_deref(), now)?;

    let mut data = NoteData::new(&request.title, date)?.with_content(request.content.clone());
    if let Some(slug) = request.slug.as_deref() {
        data = data.with_slug(slug);
    }

    let draft = Draft::bind(data, &request.template, &request.defaults)?;
    let filename = draft.filename(request.filename_template.as_deref())?;

    match store.resolve_target(&filename)? {
        TargetState::Existing(path) => {
            tracing::info!(path = %path.display(), "note already exists, opening it as is");
            let message = CmdMessage::info(format!("Note exists: {}", path.display()));
            let mut result = CmdResult::new(path, false);
            result.add_message(message);
            Ok(result)
        }
        TargetState::Create(path) => {
            store.create(&path, |writer| draft.render(writer))?;
            tracing::info!(path = %path.display(), template = ?request.template, "note created");
            let message = CmdMessage::success(format!("Note created: {}", path.display()));
            let mut result = CmdResult::new(path, true);
            result.add_message(message);
            Ok(result)
        }
    }
}
