//! # Folio Architecture
//!
//! Folio is a **UI-agnostic project catalog library**. It keeps a portfolio of
//! project records (title, description, category, image, link, tags, date), lets a
//! UI browse, filter, search, create, edit, delete, import and export them, and
//! persists the whole list to a synchronous key-value store after every change.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Client (e.g. the `folio` CLI)                           │
//! │  - Parses input, renders records and messages               │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Validates form input, resolves id prefixes               │
//! │  - Edit workflow (begin_edit → submit)                      │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog/)                                         │
//! │  - Owns the ordered record list and view state              │
//! │  - create / update / delete / list / import / export        │
//! │  - Persists a full snapshot after every mutation            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore: soft-failing persistence adapter            │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Persistence Never Blocks the User
//!
//! Storage failures are logged (via `tracing`) and absorbed by the storage layer.
//! Catalog operations only ever fail for catalog reasons: an unknown id
//! (`NotFound`) or an unreadable import (`InvalidFormat`).
//!
//! ## Testing Strategy
//!
//! 1. **Catalog** (`catalog/*.rs`): thorough unit tests against `InMemoryStore`.
//!    This is where most of the testing lives.
//! 2. **Storage** (`store/`): backend I/O and the soft-fail policy.
//! 3. **API** (`api.rs`): validation, id resolution, the edit workflow, messages.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for UI clients
//! - [`catalog`]: The record list and its operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`ProjectRecord`, `Category`, `ProjectInput`, `ProjectPatch`)
//! - [`normalize`]: Repairing loosely-typed JSON into records
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod store;

#[cfg(test)]
pub mod test_utils;
