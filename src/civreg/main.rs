//! # civreg
//!
//! Interactive registry of citizens and licensed drivers. All behaviour lives
//! in the `civreg` library and the `cli` module; this file only reports a
//! fatal error and sets the exit status.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
