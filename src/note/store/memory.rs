use super::{NoteStore, TargetState};
use crate::error::{NoteError, Result};
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    root: PathBuf,
    files: HashMap<PathBuf, Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of the note at `path`, if any.
    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Seeds a file, as if it had been created earlier.
    pub fn insert(&mut self, filename: &str, content: impl Into<Vec<u8>>) -> PathBuf {
        let path = self.root.join(filename);
        self.files.insert(path.clone(), content.into());
        path
    }
}

impl NoteStore for InMemoryStore {
    fn resolve_target(&self, filename: &str) -> Result<TargetState> {
        let path = self.root.join(filename);
        if self.files.contains_key(&path) {
            Ok(TargetState::Existing(path))
        } else {
            Ok(TargetState::Create(path))
        }
    }

    fn create<F>(&mut self, path: &Path, render: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        if self.files.contains_key(path) {
            return Err(NoteError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            )));
        }

        let mut buf = Vec::new();
        render(&mut buf)?;
        self.files.insert(path.to_path_buf(), buf);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_note(mut self, filename: &str, content: &str) -> Self {
            self.store.insert(filename, content);
            self
        }
    }
}
