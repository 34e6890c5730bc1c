use colored::*;
use note::api::{CmdMessage, MessageLevel};
use std::path::Path;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

/// Bare path on stdout, for `--no-editor` pipelines.
pub(super) fn print_path(path: &Path) {
    println!("{}", path.display());
}
