use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "civreg.json";

/// Session settings, read from `civreg.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Start the session with the demo records loaded
    #[serde(default = "default_true")]
    pub seed_demo_records: bool,

    /// Wait for Enter before showing the menu again
    #[serde(default = "default_true")]
    pub pause_after_command: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            seed_demo_records: true,
            pause_after_command: true,
        }
    }
}

impl RegistryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RegistryError::Io)?;
        let config: RegistryConfig =
            serde_json::from_str(&content).map_err(RegistryError::Serialization)?;
        Ok(config)
    }
}
