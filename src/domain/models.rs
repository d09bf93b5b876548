use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_request_timeout_ms() -> u64 {
    60_000
}

/// Connection to a SharePoint Online site, persisted between invocations.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Site {
    pub url: String,
    pub connected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

#[derive(Serialize)]
pub struct StatusReport {
    pub connected: bool,
    pub url: Option<String>,
}

/// An SPFx project as seen by the upgrade rules.
#[derive(Debug, Clone)]
pub struct Project {
    pub path: PathBuf,
    /// `config/config.json`, or `None` when missing or not valid JSON.
    pub config_json: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Required,
    Recommended,
    Optional,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionType {
    Json,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub description: String,
    pub resolution: String,
    pub resolution_type: ResolutionType,
    pub severity: Severity,
    pub file: String,
}
