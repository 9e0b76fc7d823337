//! Logger configuration loading.
//!
//! A configuration document looks like:
//!
//! ```json
//! { "level": "info", "name": "A1-C0D3R MAIN", "file": "/var/log/a1.log" }
//! ```
//!
//! `file` may be omitted or empty to log to standard output.

use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::{Result, Severity};

/// Construction parameters for a [`LevelLogger`](crate::LevelLogger).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LoggerConfig {
    /// Minimum severity that is written
    #[serde(default)]
    pub level: Severity,

    /// Label written at the start of every line
    #[serde(default)]
    pub name: String,

    /// Log file to append to; standard output when absent or empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl LoggerConfig {
    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// JSON schema describing [`LoggerConfig`].
pub fn config_schema() -> Value {
    let schema = schema_for!(LoggerConfig);
    serde_json::to_value(&schema).unwrap_or(Value::Null)
}
