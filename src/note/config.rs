use crate::error::{NoteError, Result};
use crate::template::filename::{FilenameDefaults, DEFAULT_FILE_EXT};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Overrides the directory `config.json` is read from.
pub const CONFIG_DIR_ENV: &str = "NOTE_CONFIG_DIR";

/// User configuration, stored in `config.json` inside the config directory.
///
/// Every key is optional; command line flags take precedence over all of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NoteConfig {
    /// Prefix default filenames with the note's date (`19851026__`).
    pub date_prefix: bool,

    /// Extension for default filenames (e.g. ".md", ".txt").
    pub file_ext: String,

    /// Editor command, used when no `--editor` flag is given.
    pub editor: Option<String>,

    /// Body template used when no `--template` flag is given.
    pub template: Option<PathBuf>,

    /// Directory new notes are written to. Defaults to the working directory.
    pub notes_dir: Option<PathBuf>,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            date_prefix: false,
            file_ext: DEFAULT_FILE_EXT.to_string(),
            editor: None,
            template: None,
            notes_dir: None,
        }
    }
}

impl NoteConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NoteError::Io)?;
        let mut config: NoteConfig =
            serde_json::from_str(&content).map_err(NoteError::Serialization)?;
        let ext = config.file_ext.clone();
        config.set_file_ext(&ext);
        Ok(config)
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Set the file extension (normalizes to start with a dot, empty stays empty)
    pub fn set_file_ext(&mut self, ext: &str) {
        let ext = ext.trim();
        if ext.is_empty() || ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }

    pub fn filename_defaults(&self) -> FilenameDefaults {
        FilenameDefaults {
            date_prefix: self.date_prefix,
            file_ext: self.file_ext.clone(),
        }
    }
}

/// The config directory: `$NOTE_CONFIG_DIR` when set, else the platform's
/// per-user config location.
pub fn config_dir(env_override: Option<&str>) -> Option<PathBuf> {
    match env_override.map(str::trim).filter(|dir| !dir.is_empty()) {
        Some(dir) => Some(PathBuf::from(dir)),
        None => ProjectDirs::from("com", "note", "note").map(|dirs| dirs.config_dir().to_path_buf()),
    }
}
