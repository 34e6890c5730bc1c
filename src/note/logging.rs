//! Diagnostics via `tracing`.
//!
//! The subscriber is built per invocation and installed with
//! [`tracing::subscriber::with_default`], so nothing global is touched and the
//! sink lives exactly as long as the invocation. Output goes to stderr; stdout
//! stays reserved for user-facing messages.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter directives in this variable override `-v`.
pub const LOG_ENV: &str = "NOTE_LOG";

/// The filter for a `-v` count: warnings by default, `-v` info, `-vv` debug,
/// `-vvv` and above trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the filter. Non-empty `directives` (from [`LOG_ENV`]) win when they
/// parse; otherwise the verbosity level applies.
pub fn env_filter(verbosity: u8, directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(level_for(verbosity)))
}

pub fn subscriber<W>(
    verbosity: u8,
    directives: Option<&str>,
    writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity, directives))
        .with_writer(writer)
        .with_target(false)
        .without_time()
        .with_ansi(ansi)
        .finish()
}
