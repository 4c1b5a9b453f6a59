use serde::Deserialize;

use crate::error::ConfigError;
use crate::pipeline::services::image::ClassifierConfig;

const DEFAULT_CONFIG_FILE: &str = "nutrilens";
const ENV_PREFIX: &str = "NUTRILENS";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub server: ServerSettings,
    pub nutrition: NutritionSettings,
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub max_concurrent_recognitions: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_upload_bytes: 10 * 1024 * 1024,
            max_concurrent_recognitions: 8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NutritionSettings {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for NutritionSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.nal.usda.gov/fdc/v1".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

impl Configuration {
    /// Loads `nutrilens.{toml,json,yaml}` (or the file named by
    /// `NUTRILENS_CONFIG`) if present, then applies `NUTRILENS_*` environment
    /// overrides, e.g. `NUTRILENS_SERVER__PORT=8080`.
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var("NUTRILENS_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let settings = config::Config::builder()
            .add_source(config::File::with_name(&file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut configuration: Configuration = settings.try_deserialize()?;
        if configuration.nutrition.api_key.is_empty() {
            if let Ok(key) = std::env::var("USDA_API_KEY") {
                configuration.nutrition.api_key = key;
            }
        }

        configuration.validate()?;
        Ok(configuration)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid(
                "server.max_upload_bytes must be greater than 0".to_string(),
            ));
        }
        if self.server.max_concurrent_recognitions == 0 {
            return Err(ConfigError::Invalid(
                "server.max_concurrent_recognitions must be greater than 0".to_string(),
            ));
        }
        if self.nutrition.base_url.is_empty() {
            return Err(ConfigError::Invalid(
                "nutrition.base_url must not be empty".to_string(),
            ));
        }
        self.classifier.validate().map_err(ConfigError::Invalid)
    }
}
