use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Tunables for the extraction core
#[derive(Debug, Deserialize, Clone)]
pub struct ExtractionConfig {
    /// Minimum similarity ratio for approximate ingredient mentions (0.0-1.0)
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
    /// Title used when the source metadata has no name
    #[serde(default = "default_title")]
    pub default_title: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            default_title: default_title(),
        }
    }
}

// Default value functions
fn default_fuzzy_threshold() -> f64 {
    0.6
}

fn default_title() -> String {
    "Unknown Title".to_string()
}

impl ExtractionConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE__FUZZY_THRESHOLD
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
