use super::{NoteStore, TargetState};
use crate::error::{NoteError, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File-backed store rooted at the notes directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(NoteError::Io)?;
        }
        Ok(())
    }
}

impl NoteStore for FileStore {
    fn resolve_target(&self, filename: &str) -> Result<TargetState> {
        let path = self.root.join(filename);
        if path.try_exists().map_err(NoteError::Io)? {
            Ok(TargetState::Existing(path))
        } else {
            Ok(TargetState::Create(path))
        }
    }

    fn create<F>(&mut self, path: &Path, render: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        self.ensure_dir(dir)?;

        // The scratch file lives next to the target so the final rename never
        // crosses filesystems. Dropping it on error deletes it.
        let mut scratch = tempfile::Builder::new()
            .prefix(".note-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(NoteError::Io)?;

        {
            let mut writer = BufWriter::new(scratch.as_file_mut());
            render(&mut writer)?;
            writer.flush().map_err(NoteError::Io)?;
        }

        scratch
            .persist_noclobber(path)
            .map_err(|e| NoteError::Io(e.error))?;
        Ok(())
    }
}
