use std::path::PathBuf;

use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MAX_BODY_BYTES: i64 = 40 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub transcription: TranscriptionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Must leave room for a 25 MiB clip after base64 expansion.
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: ProviderKind,
    pub base_url: String,
    pub api_key: String,
    pub chat_model: String,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: ProviderKind,
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub azure_deployment: Option<String>,
    pub azure_api_version: String,
    pub scratch_dir: Option<PathBuf>,
    pub timeout_seconds: u64,
}

impl TranscriptionSettings {
    pub fn scratch_dir(&self) -> PathBuf {
        self.scratch_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<environment>` and `APP_*` variables, in that order.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let openai_api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("server.max_body_bytes", DEFAULT_MAX_BODY_BYTES)?
            .set_default("llm.provider", "openai")?
            .set_default("llm.base_url", OPENAI_BASE_URL)?
            .set_default("llm.api_key", openai_api_key.clone())?
            .set_default("llm.chat_model", "gpt-4o-mini")?
            .set_default("llm.temperature", 0.7_f64)?
            .set_default("llm.timeout_seconds", 120_i64)?
            .set_default("transcription.provider", "openai")?
            .set_default("transcription.base_url", OPENAI_BASE_URL)?
            .set_default("transcription.api_key", openai_api_key)?
            .set_default("transcription.model", "whisper-1")?
            .set_default("transcription.azure_api_version", "2024-06-01")?
            .set_default("transcription.timeout_seconds", 120_i64)?
            .set_default("logging.level", "info,reelchat=debug,tower_http=debug")?
            .set_default("logging.enable_json", environment == Environment::Prod)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
