use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional overrides loaded from `shipex.toml`. A missing file just means
/// defaults; a present-but-invalid file is an error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub terminal: Option<String>,

    #[serde(default)]
    pub container: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
