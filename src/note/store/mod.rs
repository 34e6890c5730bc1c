//! # Storage Layer
//!
//! Notes are plain files. The [`NoteStore`] trait covers the only two things
//! the create pipeline needs from storage:
//!
//! - [`NoteStore::resolve_target`]: decide, for a rendered filename, whether the
//!   note must be created or already exists and should only be opened;
//! - [`NoteStore::create`]: write a new note whose bytes come from a render
//!   callback, all or nothing, never over an existing file.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store rooted at the notes directory. Renders
//!   into a temporary file next to the target and renames it into place.
//! - [`memory::InMemoryStore`]: in-memory store for tests.

use crate::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// What to do with a note's target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetState {
    /// Nothing is there yet: render and write the note.
    Create(PathBuf),
    /// A file already exists: leave it untouched and just open it.
    Existing(PathBuf),
}

impl TargetState {
    pub fn path(&self) -> &Path {
        match self {
            TargetState::Create(path) | TargetState::Existing(path) => path,
        }
    }
}

/// Abstract interface for note storage.
pub trait NoteStore {
    /// Maps a filename onto the store and reports whether it already exists.
    fn resolve_target(&self, filename: &str) -> Result<TargetState>;

    /// Creates the note at `path` with whatever `render` writes.
    ///
    /// If `render` fails nothing is left at `path`. An existing file at `path`
    /// is never replaced.
    fn create<F>(&mut self, path: &Path, render: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Write) -> Result<()>;
}
