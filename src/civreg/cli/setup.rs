use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "civreg", bin_name = "civreg", version)]
#[command(about = "Interactive registry of citizens and licensed drivers", long_about = None)]
pub struct Cli {
    /// Start with an empty registry instead of the demo records
    #[arg(long)]
    pub no_seed: bool,

    /// Return to the menu right away instead of waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Directory holding civreg.json (defaults to the user config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Sends diagnostics to stderr. `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["civreg"]).unwrap();
        assert!(!cli.no_seed);
        assert!(!cli.no_pause);
        assert!(cli.config_dir.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "civreg",
            "--no-seed",
            "--no-pause",
            "--config-dir",
            "/tmp/civreg",
            "-v",
        ])
        .unwrap();
        assert!(cli.no_seed);
        assert!(cli.no_pause);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/civreg")));
        assert!(cli.verbose);
    }
}
