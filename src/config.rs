use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::encoding::FileEncoding;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub attributes: AttributesConfig,
    pub default_encoding: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AttributesConfig {
    pub file_version: Option<bool>,
    pub informational_version: Option<bool>,
    pub commit_date: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attributes: AttributesConfig {
                file_version: Some(true),
                informational_version: Some(true),
                commit_date: Some(true),
            },
            default_encoding: None,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {:?}: {}", path, e))?;

        let config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse TOML config {:?}: {}", path, e))?;

        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let content = toml::to_string(self)
            .map_err(|e| format!("Failed to serialize config to TOML: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config file {:?}: {}", path, e))?;

        Ok(())
    }

    /// Encoding used when the target file carries no byte-order mark.
    pub fn fallback_encoding(
        &self,
    ) -> std::result::Result<FileEncoding, Box<dyn std::error::Error>> {
        match &self.default_encoding {
            Some(name) => FileEncoding::from_name(name),
            None => Ok(FileEncoding::Utf8),
        }
    }
}
