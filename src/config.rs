use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use crate::core::{default_graph, ProximityGraph};
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub proximity: ProximitySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorySettings {
    pub fixture_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    pub score_cache_size: Option<u64>,
    pub ttl_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_same_neighborhood_weight")]
    pub same_neighborhood: u8,
    #[serde(default = "default_adjacent_neighborhood_weight")]
    pub adjacent_neighborhood: u8,
    #[serde(default = "default_child_age_weight")]
    pub child_age: u8,
    #[serde(default = "default_employment_weight")]
    pub employment: u8,
    #[serde(default = "default_per_shared_interest_weight")]
    pub per_shared_interest: u8,
    #[serde(default = "default_shared_interest_cap")]
    pub shared_interest_cap: u8,
    #[serde(default = "default_nationality_weight")]
    pub nationality: u8,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            same_neighborhood: default_same_neighborhood_weight(),
            adjacent_neighborhood: default_adjacent_neighborhood_weight(),
            child_age: default_child_age_weight(),
            employment: default_employment_weight(),
            per_shared_interest: default_per_shared_interest_weight(),
            shared_interest_cap: default_shared_interest_cap(),
            nationality: default_nationality_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            same_neighborhood: config.same_neighborhood,
            adjacent_neighborhood: config.adjacent_neighborhood,
            child_age: config.child_age,
            employment: config.employment,
            per_shared_interest: config.per_shared_interest,
            shared_interest_cap: config.shared_interest_cap,
            nationality: config.nationality,
        }
    }
}

fn default_same_neighborhood_weight() -> u8 { 40 }
fn default_adjacent_neighborhood_weight() -> u8 { 30 }
fn default_child_age_weight() -> u8 { 30 }
fn default_employment_weight() -> u8 { 10 }
fn default_per_shared_interest_weight() -> u8 { 5 }
fn default_shared_interest_cap() -> u8 { 15 }
fn default_nationality_weight() -> u8 { 5 }

/// Optional replacement for the built-in neighborhood adjacency
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProximitySettings {
    #[serde(default)]
    pub neighborhoods: BTreeMap<String, Vec<String>>,
}

impl ProximitySettings {
    /// Configured graph, or the built-in one when nothing is configured
    pub fn graph(&self) -> ProximityGraph {
        if self.neighborhoods.is_empty() {
            default_graph()
        } else {
            ProximityGraph::from_adjacency(
                self.neighborhoods
                    .iter()
                    .map(|(name, neighbors)| (name.as_str(), neighbors.iter().map(String::as_str))),
            )
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MUMMATCH)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MUMMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MUMMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MUMMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

/// Apply the short-form fixture override
///
/// `MUMMATCH_FIXTURE` takes precedence over `directory.fixture_path`.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("MUMMATCH_FIXTURE") {
        Ok(path) => Config::builder()
            .add_source(settings)
            .set_override("directory.fixture_path", path)?
            .build(),
        Err(_) => Ok(settings),
    }
}
