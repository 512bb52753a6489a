use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::reframe::types::ProviderId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReframerConfig {
    /// Remote generation providers, tried in listed order. An empty list is
    /// valid: the service then always answers from the local template path.
    #[serde(default)]
    pub providers: Vec<ProviderProfile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ReframerConfig {
    fn default() -> Self {
        Self {
            providers: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProviderDialect {
    /// Plain-prompt hosted inference endpoint (`POST {endpoint}/models/{model}`).
    HostedText,
    /// Role-structured chat endpoint (`POST {endpoint}/api/chat`).
    ChatCompletion,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialRef {
    Env { var: String },
    InlineToken { token: String },
    None,
}

impl Default for CredentialRef {
    fn default() -> Self {
        CredentialRef::None
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub id: ProviderId,
    pub dialect: ProviderDialect,
    pub endpoint: String,
    pub model: String,
    #[serde(default)]
    pub credential: CredentialRef,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Per-attempt budget; a hung endpoint must not delay the local fallback.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_max_tokens() -> u32 {
    150
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_ms() -> u64 {
    4_000
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_enabled_true")]
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            filter: default_logging_filter(),
            rotation: default_logging_rotation(),
            stderr_warn_enabled: true,
        }
    }
}

fn default_logging_dir() -> PathBuf {
    PathBuf::from("./logs/reframer")
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_enabled_true() -> bool {
    true
}

impl ReframerConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config: ReframerConfig = json5::from_str(&config_content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen: Vec<&str> = Vec::new();
        for profile in &self.providers {
            if profile.id.trim().is_empty() {
                return Err(anyhow!("provider id must not be empty"));
            }
            if seen.contains(&profile.id.as_str()) {
                return Err(anyhow!("duplicate provider id '{}'", profile.id));
            }
            seen.push(&profile.id);

            if profile.endpoint.trim().is_empty() {
                return Err(anyhow!("provider '{}' has an empty endpoint", profile.id));
            }
            if profile.model.trim().is_empty() {
                return Err(anyhow!("provider '{}' has an empty model", profile.id));
            }
            if profile.timeout_ms == 0 {
                return Err(anyhow!("provider '{}' has timeout_ms = 0", profile.id));
            }
        }
        Ok(())
    }
}
