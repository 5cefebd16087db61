//! Configuration management for the resume optimizer

use crate::error::{Result, ResumeOptimizerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub matching: MatchingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// OpenAI-compatible endpoint root, without the `/chat/completions` path.
    pub base_url: String,
    pub model: String,
    /// Optional key in the config file; the OPENAI_API_KEY environment
    /// variable takes precedence when set.
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Jaro-Winkler threshold for offline fuzzy keyword matching.
    pub fuzzy_threshold: f64,
    /// How many job-description keywords the offline matcher extracts.
    pub max_job_keywords: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://api.openai.com/v1".to_string(),
                model: "gpt-4-turbo".to_string(),
                api_key: None,
                max_tokens: 4096,
                timeout_secs: 120,
                max_retries: 3,
            },
            matching: MatchingConfig {
                fuzzy_threshold: 0.9,
                max_job_keywords: 20,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeOptimizerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeOptimizerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-optimizer")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.api.base_url, config.api.base_url);
        assert_eq!(parsed.api.model, config.api.model);
        assert_eq!(parsed.matching.max_job_keywords, config.matching.max_job_keywords);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.api.api_key.is_none());
        assert_eq!(config.api.max_retries, 3);
        assert_eq!(config.output.format, OutputFormat::Console);
        assert!((config.matching.fuzzy_threshold - 0.9).abs() < f64::EPSILON);
    }
}
