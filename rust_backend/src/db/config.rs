//! Data-source configuration.
//!
//! Credentials stay out of the file: the config names the environment
//! variable holding the access token, never the token itself.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::repository::{RepositoryError, RepositoryResult};

/// Table names in the planning base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableNames {
    pub requirements: String,
    pub logs: String,
    pub explorers: String,
    pub roles: String,
    pub missions: String,
    pub clients: String,
    pub scenarios: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            requirements: "Mission Requirements".to_string(),
            logs: "Mission Logs".to_string(),
            explorers: "EXPLORER".to_string(),
            roles: "Roles".to_string(),
            missions: "Mission".to_string(),
            clients: "Clients".to_string(),
            scenarios: "Scenarios".to_string(),
        }
    }
}

/// Where the planning data lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Identifier of the planning base.
    pub base_id: String,
    /// Name of the environment variable carrying the access token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default)]
    pub tables: TableNames,
}

fn default_token_env() -> String {
    "PLANNING_TOKEN".to_string()
}

impl SourceConfig {
    pub fn from_toml_str(content: &str) -> RepositoryResult<Self> {
        toml::from_str(content)
            .map_err(|e| RepositoryError::Configuration(format!("Invalid source config: {e}")))
    }

    pub fn load(path: &Path) -> RepositoryResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RepositoryError::Configuration(format!("Cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }
}
