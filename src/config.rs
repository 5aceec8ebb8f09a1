//! Dashboard configuration.

use crate::consts::dash_consts::{
    DEFAULT_KNOWN_DECISIONS, DEFAULT_KNOWN_REQUESTS, DEFAULT_OUTPUT, DEFAULT_SOURCE, DEFAULT_TITLE,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};

/// Returns the default config location, `~/.codemonkeys/dash.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Home directory not found")
    })?;
    Ok(home.join(".codemonkeys").join("dash.json"))
}

/// Nexus items to show. The inbox and outbox are not listed by the host, so
/// every item must be named here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NexusListing {
    #[serde(default)]
    pub requests: Vec<String>,
    #[serde(default)]
    pub decisions: Vec<String>,
}

impl Default for NexusListing {
    fn default() -> Self {
        Self {
            requests: DEFAULT_KNOWN_REQUESTS.iter().map(|s| s.to_string()).collect(),
            decisions: DEFAULT_KNOWN_DECISIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Dash root: a directory or an http(s) URL.
    pub source: String,
    /// Where the rendered page is written.
    pub output: PathBuf,
    pub title: String,
    pub nexus: NexusListing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
            nexus: NexusListing::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}
