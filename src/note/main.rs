//! The `note` binary: a thin wrapper that runs the CLI and turns errors into
//! exit codes. See `cli/` for the flow and the `note` library for the core.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        if e.is_usage() {
            eprintln!("Run 'note --help' for usage.");
        }
        std::process::exit(1);
    }
}
