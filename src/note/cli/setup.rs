use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "note", bin_name = "note", version = get_version())]
#[command(
    about = "Render a template into a new note and open it in your editor",
    long_about = None
)]
pub struct Cli {
    /// Note title, as words (used when --title is not given)
    #[arg(value_name = "TITLE")]
    pub words: Vec<String>,

    /// Note title
    #[arg(long)]
    pub title: Option<String>,

    /// Text available to templates as Content
    #[arg(long)]
    pub content: Option<String>,

    /// Note date: "2006-01-02T15:04:05Z07:00", "2006-01-02 15:04:05" or "2006-01-02"
    #[arg(long)]
    pub date: Option<String>,

    /// Template file to render the note from
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Filename template, overrides the template's own filename directive
    #[arg(long, value_name = "TEMPLATE")]
    pub filename_format: Option<String>,

    /// Text to derive TitleSlug from instead of the title
    #[arg(long)]
    pub slug: Option<String>,

    /// Editor command to open the note with
    #[arg(short, long, conflicts_with = "no_editor")]
    pub editor: Option<String>,

    /// Do not open an editor, just print the note's path
    #[arg(long)]
    pub no_editor: bool,

    /// Directory to write the note to
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Prefix default filenames with the note's date
    #[arg(long)]
    pub date_prefix: bool,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The title flag when it has text, else the positional words joined by spaces.
    pub fn title_text(&self) -> String {
        match self.title.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(title) => title.to_string(),
            None => self.words.join(" "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("note").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_title_from_words() {
        let cli = parse(&["Review", "Slides"]);
        assert_eq!(cli.title_text(), "Review Slides");
    }

    #[test]
    fn test_title_flag_wins_over_words() {
        let cli = parse(&["--title", "Weekly Sync", "ignored"]);
        assert_eq!(cli.title_text(), "Weekly Sync");

        let cli = parse(&["--title", " ", "Review"]);
        assert_eq!(cli.title_text(), "Review");
    }

    #[test]
    fn test_all_options() {
        let cli = parse(&[
            "--date",
            "1985-10-26",
            "-t",
            "daily.note",
            "--filename-format",
            "{{ TitleSlug }}.txt",
            "--slug",
            "daily",
            "-e",
            "code -w",
            "-d",
            "notes",
            "--date-prefix",
            "--content",
            "Agenda",
            "-vv",
            "Daily",
        ]);
        assert_eq!(cli.date.as_deref(), Some("1985-10-26"));
        assert_eq!(cli.template, Some(PathBuf::from("daily.note")));
        assert_eq!(cli.filename_format.as_deref(), Some("{{ TitleSlug }}.txt"));
        assert_eq!(cli.slug.as_deref(), Some("daily"));
        assert_eq!(cli.editor.as_deref(), Some("code -w"));
        assert_eq!(cli.dir, Some(PathBuf::from("notes")));
        assert!(cli.date_prefix);
        assert_eq!(cli.content.as_deref(), Some("Agenda"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.title_text(), "Daily");
    }

    #[test]
    fn test_editor_conflicts_with_no_editor() {
        let result = Cli::try_parse_from(["note", "-e", "vim", "--no-editor", "x"]);
        assert!(result.is_err());
    }
}
