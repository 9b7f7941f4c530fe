//! # Folio CLI
//!
//! Folio ships a terminal client, but the binary is intentionally thin: the CLI
//! lives in `src/cli/`, while this file only invokes `cli::run()` and handles
//! process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/folioapp/`: Core library with UI-agnostic catalog logic
//! - `crates/folio/`: This CLI tool, depends on the `folioapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/folio/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/folioapp/src/api.rs)                     │
//! │  - Resolves id prefixes, validates input                    │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog + Storage (crates/folioapp/src/{catalog,store}/)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer is responsible
//! for **all** user-facing concerns: argument parsing, context initialization,
//! dispatch, error handling, logging setup, and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
