// File: src/config.rs
use crate::error::{GrocerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "grocer.json";
pub const DEFAULT_BACKUP_PATH: &str = "frequency.dat";

/// Runtime settings for the tracker, read from an optional JSON file.
///
/// ```json
/// { "backup_path": "frequency.dat", "input_path": "CS210_Project_Three_Input_File.txt" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrocerConfig {
    /// Where the text backup is written after loading.
    pub backup_path: PathBuf,
    /// Item list to try before prompting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_path: Option<PathBuf>,
    /// Where to write a binary snapshot on exit, if anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
}

impl Default for GrocerConfig {
    fn default() -> Self {
        Self {
            backup_path: PathBuf::from(DEFAULT_BACKUP_PATH),
            input_path: None,
            snapshot_path: None,
        }
    }
}

impl GrocerConfig {
    /// Loads the config at `path`. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(GrocerError::SourceUnavailable {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_json(&text, path)
    }

    pub fn from_json(text: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| GrocerError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// A command-line input path beats the configured one.
    pub fn with_input_override(mut self, input: Option<PathBuf>) -> Self {
        if input.is_some() {
            self.input_path = input;
        }
        self
    }
}
