use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Claude (Anthropic Messages API) configuration
    pub claude: ClaudeConfig,

    /// Caption retrieval settings
    pub captions: CaptionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeConfig {
    /// API key for the Anthropic Messages API
    pub api_key: String,

    /// Messages API endpoint
    pub api_url: String,

    /// Model identifier sent with each request
    pub model: String,

    /// Maximum number of tokens Claude may generate for the summary
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionConfig {
    /// Preferred caption languages, tried in order
    pub languages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            claude: ClaudeConfig {
                api_key: "".to_string(),
                api_url: "https://api.anthropic.com/v1/messages".to_string(),
                model: "claude-3-opus-20240229".to_string(),
                max_tokens: 1000,
            },
            captions: CaptionConfig {
                languages: vec!["en".to_string()],
            },
        }
    }
}

impl Config {
    /// Load configuration from file, writing a default template on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = fs_err::read_to_string(&config_path)
                .context("Failed to read config file")?;

            let config: Config = serde_yaml::from_str(&content)
                .context("Failed to parse config file")?;

            config.validate(&config_path)?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(&config_path)?;
            anyhow::bail!(
                "Wrote a default config to {}. Set claude.api_key before running again.",
                config_path.display()
            );
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs_err::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs_err::write(config_path, content)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get configuration file path
    fn config_path() -> Result<PathBuf> {
        // First try current directory for easy testing
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?;

        Ok(config_dir.join("ytsum").join("config.yaml"))
    }

    /// Validate configuration
    fn validate(&self, config_path: &PathBuf) -> Result<()> {
        if self.claude.api_key.is_empty() {
            anyhow::bail!(
                "Claude API key must be configured (edit claude.api_key in {})",
                config_path.display()
            );
        }

        if self.claude.api_url.is_empty() {
            anyhow::bail!("Claude API URL must be configured");
        }

        if self.captions.languages.is_empty() {
            anyhow::bail!("At least one caption language must be configured");
        }

        Ok(())
    }

    /// Display current configuration with the API key masked
    pub fn display(&self) {
        println!("Current Configuration:");
        println!("  API URL: {}", self.claude.api_url);
        println!("  API Key: {}", mask_key(&self.claude.api_key));
        println!("  Model: {}", self.claude.model);
        println!("  Max Tokens: {}", self.claude.max_tokens);
        println!("  Caption Languages: {}", self.captions.languages.join(", "));
    }
}

fn mask_key(key: &str) -> String {
    let chars = key.chars().count();
    if chars <= 8 {
        "<not set>".to_string()
    } else {
        let head: String = key.chars().take(4).collect();
        let tail: String = key.chars().skip(chars - 4).collect();
        format!("{}...{}", head, tail)
    }
}
