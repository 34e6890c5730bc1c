//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for note
//! operations, whichever UI drives them.
//!
//! The API dispatches to the command functions and returns structured types
//! (`Result<CmdResult>`). It holds no business logic and does no terminal I/O.
//!
//! `NoteApi<S: NoteStore>` is generic over the storage backend:
//! - Production: `NoteApi<FileStore>`
//! - Testing: `NoteApi<InMemoryStore>`
//!
//! API tests check dispatch and return types; the create logic itself is
//! tested in `commands/create.rs`.

use crate::commands;
use crate::date;
use crate::error::Result;
use crate::store::NoteStore;
use chrono::{DateTime, FixedOffset};

pub use crate::commands::create::NoteRequest;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for note operations.
pub struct NoteApi<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NoteApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates the note described by `request`, dated now unless the request
    /// carries a date.
    pub fn create_note(&mut self, request: &NoteRequest) -> Result<CmdResult> {
        self.create_note_at(request, date::now())
    }

    /// Like [`create_note`](Self::create_note) with an explicit notion of "now".
    pub fn create_note_at(
        &mut self,
        request: &NoteRequest,
        now: DateTime<FixedOffset>,
    ) -> Result<CmdResult> {
        commands::create::run(&mut self.store, request, now)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
