//! Configuration structures and loading.

use crate::error::{ConfigError, ConfigResult};
use crate::paths::AppPaths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Environment variable consulted when no key is present in the config file.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> ConfigResult<Self> {
        let paths = AppPaths::new().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&paths.config_file)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> ConfigResult<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> ConfigResult<()> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        debug!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Create a default config file with comments.
    pub fn create_default_file(path: &PathBuf) -> ConfigResult<()> {
        let default_config = Self::default_config_string();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, default_config)?;
        Ok(())
    }

    /// Generate a default config file with helpful comments.
    pub fn default_config_string() -> String {
        r#"# Rhetorica Configuration
# AI body-language analysis reports from short videos

[gemini]
# API key for the Gemini API. Leave unset to read it from the
# GEMINI_API_KEY environment variable instead.
# api_key = ""

# API endpoint
base_url = "https://generativelanguage.googleapis.com"

# Models to prefer, in order, when picking from the provider's list
preferred_models = [
    "models/gemini-1.5-flash",
    "models/gemini-1.5-pro",
]

# Model used when the provider's model list cannot be queried
fallback_model = "gemini-1.5-flash"

# Request timeout in seconds
timeout_seconds = 120

[analysis]
# Number of evenly spaced frames sampled from the video
frame_count = 3

[report]
# Default output path for the PDF report
output_file = "Rhetorica_Report.pdf"

# TTF font with Hebrew glyph coverage (e.g. Assistant-Regular.ttf).
# When the file is missing the built-in Helvetica is used, which has
# no non-Latin glyphs.
# font_path = "Assistant-Regular.ttf"

[ui]
# Enable colored output
color = true

# Default output language: en or he
language = "en"
"#
        .to_string()
    }
}

/// Gemini API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub preferred_models: Vec<String>,
    pub fallback_model: String,
    pub timeout_seconds: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            preferred_models: vec![
                "models/gemini-1.5-flash".to_string(),
                "models/gemini-1.5-pro".to_string(),
            ],
            fallback_model: "gemini-1.5-flash".to_string(),
            timeout_seconds: 120,
        }
    }
}

impl GeminiConfig {
    /// Resolve the API key: config file first, then the environment.
    ///
    /// Resolution is an explicit step so a missing key fails up front,
    /// before any video work happens.
    pub fn resolve_api_key(&self) -> ConfigResult<String> {
        if let Some(key) = &self.api_key {
            if !key.trim().is_empty() {
                return Ok(key.trim().to_string());
            }
        }

        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(ConfigError::MissingApiKey),
        }
    }
}

/// Analysis pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub frame_count: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { frame_count: 3 }
    }
}

/// PDF report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_file: String,
    pub font_path: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_file: "Rhetorica_Report.pdf".to_string(),
            font_path: None,
        }
    }
}

/// UI/Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub color: bool,
    pub language: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            language: "en".to_string(),
        }
    }
}
