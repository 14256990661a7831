//! # civreg Architecture
//!
//! civreg is a registry of citizens and licensed drivers kept in memory for a
//! single session. The library holds the records, their validation and
//! derivation rules, and the registry operations; the `civreg` binary is one
//! interactive client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts and retry-on-invalid-input            │
//! │  - The ONLY place that reads stdin or writes stdout         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's registry (Vec<Citizen>)               │
//! │  - Dispatches to commands, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create, view, edit, delete, list                         │
//! │  - Operates on the registry slice it is handed              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, validation.rs, registry.rs)                │
//! │  - Person / Driver records and the derived expiry date      │
//! │  - Date, category and license-type validators               │
//! │  - Lookup, accent-insensitive ordering, table rendering     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code takes plain Rust values and returns
//! `Result<T, RegistryError>`. It never prints, never logs and never loops on
//! bad input: a validator is called once per attempt, and re-prompting is the
//! client's job.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade owning the registry
//! - [`commands`]: One module per registry operation
//! - [`model`]: `Person`, `Driver`, `Citizen` and the `Record` trait
//! - [`validation`]: Parsers for dates, categories and license types
//! - [`registry`]: Search, sort and table rendering over a record slice
//! - [`seed`]: Demo records for a fresh session
//! - [`config`]: Session settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod seed;
pub mod validation;
