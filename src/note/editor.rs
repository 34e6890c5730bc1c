use crate::error::{NoteError, Result};
use std::env;
use std::path::Path;
use std::process::Command;

/// Tried in order when neither flag, config nor environment names an editor.
const FALLBACK_EDITORS: [&str; 3] = ["vim", "vi", "nano"];

/// Picks the editor command.
///
/// Checks the `--editor` flag, the configured editor, `$EDITOR`, then `$VISUAL`,
/// then falls back to the first common editor found on the path. Blank values
/// are skipped.
pub fn resolve_editor<E, P>(
    flag: Option<&str>,
    configured: Option<&str>,
    env_var: E,
    on_path: P,
) -> Result<String>
where
    E: Fn(&str) -> Option<String>,
    P: Fn(&str) -> bool,
{
    let candidates = [
        flag.map(str::to_string),
        configured.map(str::to_string),
        env_var("EDITOR"),
        env_var("VISUAL"),
    ];

    if let Some(editor) = candidates
        .into_iter()
        .flatten()
        .map(|editor| editor.trim().to_string())
        .find(|editor| !editor.is_empty())
    {
        return Ok(editor);
    }

    FALLBACK_EDITORS
        .iter()
        .find(|fallback| on_path(fallback))
        .map(|fallback| fallback.to_string())
        .ok_or_else(|| {
            NoteError::Editor("No editor found. Set $EDITOR or pass --editor.".to_string())
        })
}

/// [`resolve_editor`] against the real environment.
pub fn get_editor(flag: Option<&str>, configured: Option<&str>) -> Result<String> {
    resolve_editor(flag, configured, |key| env::var(key).ok(), is_on_path)
}

fn is_on_path(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Splits an editor command like `code --wait` into program and arguments.
pub fn editor_command(editor: &str) -> Result<(String, Vec<String>)> {
    let mut parts = editor.split_whitespace().map(str::to_string);
    let program = parts
        .next()
        .ok_or_else(|| NoteError::Editor("Editor command is empty".to_string()))?;
    Ok((program, parts.collect()))
}

/// Opens a file in the editor and waits for it to close.
pub fn open_in_editor<P: AsRef<Path>>(editor: &str, file_path: P) -> Result<()> {
    let path = file_path.as_ref();
    let (program, args) = editor_command(editor)?;
    tracing::debug!(%program, ?args, path = %path.display(), "launching editor");

    let status = Command::new(&program)
        .args(&args)
        .arg(path)
        .status()
        .map_err(|e| NoteError::Editor(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(NoteError::Editor(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    Ok(())
}
