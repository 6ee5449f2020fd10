//! Configuration for the hackt CLI.
//!
//! spec.md's CLI takes exactly one positional argument and no flags, so the
//! only place left for settings is an optional `hackt.toml` in the working
//! directory. Its absence is not an error; the defaults match the behavior
//! spec.md describes when no file is present.

use serde::Deserialize;
use std::path::Path;

use crate::error::HacktError;

pub const CONFIG_FILE_NAME: &str = "hackt.toml";

/// Settings `hackt.toml` can control.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Whether the tokenizer's diagnostic `T.xml` dump is written alongside
    /// compiled output. Off by default.
    #[serde(default)]
    pub emit_token_xml: bool,
}

impl Config {
    /// Load `hackt.toml` from `working_dir`, or defaults if it isn't there.
    pub fn load(working_dir: &Path) -> anyhow::Result<Self> {
        let path = working_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| HacktError::ConfigRead(path.clone(), e))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| HacktError::ConfigParse(path.clone(), e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(!config.emit_token_xml);
    }

    #[test]
    fn present_config_file_is_parsed() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "emit_token_xml = true\n").unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.emit_token_xml);
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "not valid toml {{{\n").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }
}
