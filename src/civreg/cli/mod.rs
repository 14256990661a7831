//! Interactive client for the registry.
//!
//! - `setup`: command-line flags and tracing
//! - `prompt`: line prompts that retry on invalid input
//! - `render`: printing messages, details and tables
//! - `commands`: the menu loop and one handler per option

mod commands;
mod prompt;
mod render;
mod setup;

pub use commands::run;
