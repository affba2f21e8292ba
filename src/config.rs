//! Configuration structures and utilities

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::LabelPolicy;
use crate::error::{Error, Result};
use crate::rendering::RenderConfig;

pub const DEFAULT_OUTPUT_PATH: &str = "rdf_triplets.txt";

/// Knowledge-base pipeline settings. `Default` reproduces the seed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Where the artifact is written
    pub output_path: PathBuf,
    /// How identifiers are labelled during projection
    pub label_policy: LabelPolicy,
    pub render: RenderConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            label_policy: LabelPolicy::default(),
            render: RenderConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Load from a JSON file; missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

pub const DEFAULT_PREDICTION_URL: &str =
    "https://fork.start-ai.ru/api/v1/prediction/194a0cbf-2f66-4afc-afa7-b3fa340216a4";
pub const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 30;

/// Prediction relay settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub telegram_token: Option<String>,
    pub prediction_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            telegram_token: None,
            prediction_url: DEFAULT_PREDICTION_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_RELAY_TIMEOUT_SECS),
        }
    }
}

impl RelayConfig {
    /// Read `TELEGRAM_TOKEN`, `FLOWISE_API_URL` and `FLOWISE_API_KEY` from the environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            telegram_token: get("TELEGRAM_TOKEN"),
            prediction_url: get("FLOWISE_API_URL")
                .unwrap_or_else(|| DEFAULT_PREDICTION_URL.to_string()),
            api_key: get("FLOWISE_API_KEY"),
            ..Self::default()
        }
    }

    pub fn require_token(&self) -> Result<&str> {
        self.telegram_token
            .as_deref()
            .ok_or_else(|| Error::Config("TELEGRAM_TOKEN not set in environment (.env)".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_pipeline_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.output_path, PathBuf::from("rdf_triplets.txt"));
        assert_eq!(config.label_policy, LabelPolicy::Declared);
    }

    #[test]
    fn test_pipeline_config_from_partial_json() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"label_policy": "lexical", "output_path": "kb.txt"}"#)
                .unwrap();
        assert_eq!(config.label_policy, LabelPolicy::Lexical);
        assert_eq!(config.output_path, PathBuf::from("kb.txt"));
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn test_missing_config_file() {
        let err = PipelineConfig::from_json_file("/nonexistent/rdfkb.json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_relay_config_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("TELEGRAM_TOKEN", "123:abc"),
            ("FLOWISE_API_URL", "http://localhost:3000/api/v1/prediction/x"),
            ("FLOWISE_API_KEY", " "),
        ]
        .into_iter()
        .collect();
        let config = RelayConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.require_token().unwrap(), "123:abc");
        assert_eq!(config.prediction_url, "http://localhost:3000/api/v1/prediction/x");
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_relay_config_defaults() {
        let config = RelayConfig::from_lookup(|_| None);
        assert_eq!(config.prediction_url, DEFAULT_PREDICTION_URL);
        assert!(matches!(config.require_token(), Err(Error::Config(_))));
    }
}
