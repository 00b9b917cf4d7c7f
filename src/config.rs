use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error produced when orchestrator-supplied input values cannot be decoded
#[derive(Error, Debug)]
pub enum InputsError {
    #[error("Invalid input values: {0}")]
    Invalid(String),
}

/// Plugin inputs supplied by the orchestrator's configuration surface.
///
/// Defaults are applied here, at decode time, so path resolution only ever
/// sees fully-populated values. Values are validated by type only; nothing
/// checks that the configured directories exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BridgeInputs {
    /// Name of the build tool's output folder
    #[serde(default = "default_build_dir_name")]
    pub custom_build_dir_name: String,

    /// Where that folder lives, relative to the project root
    #[serde(default = "default_build_dir_path")]
    pub build_dir_path: String,

    /// Fixed build directory handed down by the host. When set, the
    /// resolver ignores the two fields above and caches the `.next` folder
    /// under this directory instead.
    #[serde(default)]
    pub host_build_dir: Option<String>,
}

impl Default for BridgeInputs {
    fn default() -> Self {
        Self {
            custom_build_dir_name: default_build_dir_name(),
            build_dir_path: default_build_dir_path(),
            host_build_dir: None,
        }
    }
}

impl BridgeInputs {
    /// Decode inputs from the orchestrator's name/value pairs.
    ///
    /// Unknown names are ignored; the orchestrator routes the whole input
    /// map through and other plugins own their own keys.
    pub fn from_values(values: serde_json::Map<String, Value>) -> Result<Self, InputsError> {
        serde_json::from_value(Value::Object(values))
            .map_err(|e| InputsError::Invalid(e.to_string()))
    }

    /// Load inputs from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read inputs file: {}", path.as_ref().display()))?;

        let inputs: BridgeInputs = toml::from_str(&content)
            .with_context(|| format!("Failed to parse inputs file: {}", path.as_ref().display()))?;

        Ok(inputs)
    }
}

fn default_build_dir_name() -> String {
    ".next".to_string()
}

fn default_build_dir_path() -> String {
    ".".to_string()
}
