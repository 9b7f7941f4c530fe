//! # CLI Behavior
//!
//! This is **one possible UI client** for folio, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution (`folio`)
//!
//! Running `folio` with no arguments defaults to `folio list`.
//!
//! ## Ids
//!
//! Listings show the first 8 characters of each id. Any unique prefix works
//! wherever an id is expected (`folio view 3f2a`).
//!
//! ## First Run
//!
//! An empty catalog is filled with a few sample projects, unless `--no-samples`
//! is passed or `seed_samples = false` is configured.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and per-command handlers that call the API
//! - `render`: Output formatting (lists, detail view, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
