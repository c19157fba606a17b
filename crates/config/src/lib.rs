mod args;
mod cache;
mod chain;
mod controllers;
mod error;
mod express;
mod log;
mod substrate;

pub use args::Args;
pub use cache::CacheConfig;
pub use chain::{CacheOptions, ChainConfigError, ChainProfile, ChainProfiles, DEFAULT_PROFILE};
pub use controllers::{Controller, UnknownController};
pub use error::ConfigError;
pub use express::ExpressConfig;
pub use log::{LogConfig, VALID_LOG_LEVELS};
pub use substrate::SubstrateConfig;

use serde::Deserialize;

/// Flat view of the `SAS_*` environment, as `envy` sees it.
#[derive(Debug, Default, Deserialize)]
struct EnvVars {
    express_bind_host: Option<String>,
    express_port: Option<u16>,
    express_injected_controllers: Option<bool>,
    log_level: Option<String>,
    log_json: Option<bool>,
    log_strip_ansi: Option<bool>,
    log_write: Option<bool>,
    log_write_path: Option<String>,
    log_write_max_file_size: Option<u64>,
    log_write_max_files: Option<usize>,
    substrate_url: Option<String>,
    cache_capacity: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct SidecarConfig {
    pub express: ExpressConfig,
    pub log: LogConfig,
    pub substrate: SubstrateConfig,
    pub cache: CacheConfig,
}

impl SidecarConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars = envy::prefixed("SAS_").from_env::<EnvVars>()?;
        Self::from_vars(vars)
    }

    /// Build from explicit `(SAS_*, value)` pairs instead of the process environment.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars = envy::prefixed("SAS_").from_iter::<_, EnvVars>(pairs)?;
        Self::from_vars(vars)
    }

    fn from_vars(vars: EnvVars) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            express: ExpressConfig {
                bind_host: vars.express_bind_host.unwrap_or(defaults.express.bind_host),
                port: vars.express_port.unwrap_or(defaults.express.port),
                injected_controllers: vars
                    .express_injected_controllers
                    .unwrap_or(defaults.express.injected_controllers),
            },
            log: LogConfig {
                level: vars.log_level.unwrap_or(defaults.log.level),
                json: vars.log_json.unwrap_or(defaults.log.json),
                strip_ansi: vars.log_strip_ansi.unwrap_or(defaults.log.strip_ansi),
                write: vars.log_write.unwrap_or(defaults.log.write),
                write_path: vars.log_write_path.unwrap_or(defaults.log.write_path),
                write_max_file_size: vars
                    .log_write_max_file_size
                    .unwrap_or(defaults.log.write_max_file_size),
                write_max_files: vars
                    .log_write_max_files
                    .unwrap_or(defaults.log.write_max_files),
            },
            substrate: SubstrateConfig {
                url: vars.substrate_url.unwrap_or(defaults.substrate.url),
            },
            cache: CacheConfig {
                capacity: vars.cache_capacity,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.express.validate()?;
        self.log.validate()?;
        self.substrate.validate()?;
        self.cache.validate()?;
        Ok(())
    }
}
