use std::path::PathBuf;

pub mod create;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug)]
pub struct CmdResult {
    /// Where the note lives, whether it was just written or already there.
    pub note_path: PathBuf,
    /// True when this command wrote the file.
    pub created: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn new(note_path: PathBuf, created: bool) -> Self {
        Self {
            note_path,
            created,
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}
