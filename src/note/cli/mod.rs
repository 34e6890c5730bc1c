//! # CLI Layer
//!
//! This module is **one possible UI client** for note. It is the only place
//! that knows about terminal I/O, environment variables and exit codes.
//!
//! ## Flow
//!
//! 1. Parse arguments (`setup.rs`).
//! 2. Install a `tracing` subscriber on stderr for this invocation.
//! 3. Load `config.json` and merge it under the flags.
//! 4. Resolve the editor, so a missing editor fails before anything is written.
//! 5. Create the note through `NoteApi`.
//! 6. Print messages and open the note, new or existing, in the editor.
//!
//! ## Structure
//!
//! - `run()`: Entry point (called by `main.rs`)
//! - `commands.rs`: Context setup and the create handler
//! - `print.rs`: Output formatting functions

mod commands;
mod print;
mod setup;

pub use commands::run;
