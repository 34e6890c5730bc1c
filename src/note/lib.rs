//! # Note Architecture
//!
//! Note is a **templating tool for note taking**: it renders a template into a
//! new file, named after the note, and hands that file to an editor. The
//! rendering core is a library; the `note` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, loads config, launches the editor      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, supplies "now"                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Date, record, template binding, filename, write          │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract NoteStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Templates
//!
//! Templates use minijinja syntax and see four values: `Title`, `Content`,
//! `Date` and `TitleSlug`, plus two functions, `dateFormat layout date` and
//! `makeSlug text`, written as Go template actions. Missing values are errors,
//! never blanks.
//!
//! A template may name its own output file on its first line:
//!
//! ```text
//! +++ # {{ dateFormat "20060102" .Date }}__{{ makeSlug .Title }}.md
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: The create pipeline
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The note record and the bound draft
//! - [`template`]: Template engine, directives and filename templates
//! - [`date`]: Date parsing and layout formatting
//! - [`slug`]: Filename-safe slugs
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`logging`]: Per-invocation tracing subscriber
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod date;
pub mod editor;
pub mod error;
pub mod logging;
pub mod model;
pub mod slug;
pub mod store;
pub mod template;
