use super::print::{print_messages, print_path};
use super::setup::Cli;
use clap::Parser;
use note::api::{NoteApi, NoteRequest};
use note::config::{config_dir, NoteConfig, CONFIG_DIR_ENV};
use note::editor::{get_editor, open_in_editor};
use note::error::Result;
use note::logging::{self, LOG_ENV};
use note::model::TemplateSource;
use note::store::fs::FileStore;
use std::io::IsTerminal;
use std::path::PathBuf;

struct AppContext {
    api: NoteApi<FileStore>,
    config: NoteConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let directives = std::env::var(LOG_ENV).ok();
    let subscriber = logging::subscriber(
        cli.verbose,
        directives.as_deref(),
        std::io::stderr,
        std::io::stderr().is_terminal(),
    );

    tracing::subscriber::with_default(subscriber, || {
        let ctx = init_context(&cli)?;
        handle_create(ctx, &cli)
    })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let env_dir = std::env::var(CONFIG_DIR_ENV).ok();
    let config = match config_dir(env_dir.as_deref()) {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "loading config");
            NoteConfig::load(&dir)?
        }
        None => NoteConfig::default(),
    };

    let notes_dir = cli
        .dir
        .clone()
        .or_else(|| config.notes_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(AppContext {
        api: NoteApi::new(FileStore::new(notes_dir)),
        config,
    })
}

fn build_request(cli: &Cli, config: &NoteConfig) -> NoteRequest {
    let template = cli
        .template
        .clone()
        .or_else(|| config.template.clone())
        .map(TemplateSource::File)
        .unwrap_or_default();

    let mut defaults = config.filename_defaults();
    if cli.date_prefix {
        defaults.date_prefix = true;
    }

    NoteRequest {
        title: cli.title_text(),
        content: cli.content.clone().unwrap_or_default(),
        date: cli.date.clone(),
        template,
        filename_template: cli.filename_format.clone(),
        slug: cli.slug.clone(),
        defaults,
    }
}

fn handle_create(mut ctx: AppContext, cli: &Cli) -> Result<()> {
    let editor = if cli.no_editor {
        None
    } else {
        Some(get_editor(cli.editor.as_deref(), ctx.config.editor.as_deref())?)
    };

    let request = build_request(cli, &ctx.config);
    let result = ctx.api.create_note(&request)?;
    print_messages(&result.messages);

    match editor {
        Some(editor) => open_in_editor(&editor, &result.note_path),
        None => {
            print_path(&result.note_path);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("note").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_request_from_flags() {
        let cli = parse(&[
            "--date",
            "1985-10-26",
            "--content",
            "Agenda",
            "--slug",
            "slides",
            "--filename-format",
            "{{ TitleSlug }}.txt",
            "Review",
            "Slides",
        ]);
        let request = build_request(&cli, &NoteConfig::default());

        assert_eq!(request.title, "Review Slides");
        assert_eq!(request.content, "Agenda");
        assert_eq!(request.date.as_deref(), Some("1985-10-26"));
        assert_eq!(request.slug.as_deref(), Some("slides"));
        assert_eq!(request.filename_template.as_deref(), Some("{{ TitleSlug }}.txt"));
        assert_eq!(request.template, TemplateSource::Default);
        assert!(!request.defaults.date_prefix);
    }

    #[test]
    fn test_config_fills_in_missing_flags() {
        let config = NoteConfig {
            date_prefix: true,
            file_ext: ".txt".to_string(),
            template: Some(PathBuf::from("daily.note")),
            ..Default::default()
        };
        let request = build_request(&parse(&["Daily"]), &config);

        assert_eq!(request.template, TemplateSource::File(PathBuf::from("daily.note")));
        assert!(request.defaults.date_prefix);
        assert_eq!(request.defaults.file_ext, ".txt");
    }

    #[test]
    fn test_flags_override_config() {
        let config = NoteConfig {
            template: Some(PathBuf::from("daily.note")),
            ..Default::default()
        };
        let cli = parse(&["-t", "meeting.note", "--date-prefix", "Sync"]);
        let request = build_request(&cli, &config);

        assert_eq!(request.template, TemplateSource::File(PathBuf::from("meeting.note")));
        assert!(request.defaults.date_prefix);
    }
}
