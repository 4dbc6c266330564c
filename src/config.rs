use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the recipe API, including the trailing slash
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// API key appended to every request; uploads are tagged with it
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Number of search results shown per page
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,
    /// Directory holding the persisted bookmark blob
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    /// Recipe shown when no id was requested
    #[serde(default = "default_recipe_id")]
    pub default_recipe_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            results_per_page: default_results_per_page(),
            storage_dir: default_storage_dir(),
            default_recipe_id: default_recipe_id(),
        }
    }
}

// Default value functions
fn default_api_url() -> String {
    "https://forkify-api.jonas.io/api/v2/recipes/".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_results_per_page() -> usize {
    10
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".forkify")
}

fn default_recipe_id() -> String {
    "664c8f193e7aa067e94e897b".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FORKIFY__ prefix
    /// 2. forkify.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FORKIFY__RESULTS_PER_PAGE
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("forkify").required(false))
        .add_source(
            Environment::with_prefix("FORKIFY")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    if config.results_per_page == 0 {
        return Err(ConfigError::Message(
            "results_per_page must be at least 1".to_string(),
        ));
    }
    Ok(config)
}
