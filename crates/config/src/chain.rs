use crate::controllers::Controller;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Name of the profile used when no spec-specific profile applies.
pub const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Error)]
pub enum ChainConfigError {
    #[error("Failed to parse chain config JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Chain '{0}' not found in configuration")]
    ChainNotFound(String),

    #[error("Chain '{chain}' lists controller {controller} more than once")]
    DuplicateController { chain: String, controller: Controller },

    #[error("Chain '{0}' has a cache capacity of 0")]
    ZeroCacheCapacity(String),
}

/// Sizing of the per-block chain client cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheOptions {
    /// Number of blocks whose chain client is kept
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    8
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

/// Static declarations for one chain: which controllers are mounted and how
/// large the caches are.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainProfile {
    pub controllers: Vec<Controller>,

    #[serde(default)]
    pub cache: CacheOptions,
}

impl ChainProfile {
    pub fn has_controller(&self, controller: Controller) -> bool {
        self.controllers.contains(&controller)
    }

    fn validate(&self, chain: &str) -> Result<(), ChainConfigError> {
        let mut seen = HashSet::new();
        for controller in &self.controllers {
            if !seen.insert(*controller) {
                return Err(ChainConfigError::DuplicateController {
                    chain: chain.to_string(),
                    controller: *controller,
                });
            }
        }

        if self.cache.capacity == 0 {
            return Err(ChainConfigError::ZeroCacheCapacity(chain.to_string()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ChainProfiles {
    profiles: HashMap<String, ChainProfile>,
}

impl ChainProfiles {
    /// Load the profiles embedded in the binary.
    pub fn load() -> Result<Self, ChainConfigError> {
        const CONFIG_JSON: &str = include_str!("chain_config.json");
        Self::from_json(CONFIG_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ChainConfigError> {
        let profiles: HashMap<String, ChainProfile> = serde_json::from_str(json)?;
        for (chain, profile) in &profiles {
            profile.validate(chain)?;
        }
        if !profiles.contains_key(DEFAULT_PROFILE) {
            return Err(ChainConfigError::ChainNotFound(DEFAULT_PROFILE.to_string()));
        }
        Ok(Self { profiles })
    }

    pub fn get(&self, spec_name: &str) -> Option<&ChainProfile> {
        self.profiles
            .get(spec_name)
            .or_else(|| self.profiles.get(&spec_name.to_lowercase()))
    }

    pub fn get_or_error(&self, spec_name: &str) -> Result<&ChainProfile, ChainConfigError> {
        self.get(spec_name)
            .ok_or_else(|| ChainConfigError::ChainNotFound(spec_name.to_string()))
    }

    /// Pick the profile for a runtime.
    ///
    /// With `injected` set, the profile named after the runtime's spec name
    /// wins when one exists. Everything else gets the `default` profile.
    pub fn resolve(&self, spec_name: &str, injected: bool) -> Result<&ChainProfile, ChainConfigError> {
        if injected && let Some(profile) = self.get(spec_name) {
            return Ok(profile);
        }
        self.get_or_error(DEFAULT_PROFILE)
    }

    pub fn chain_names(&self) -> Vec<&str> {
        self.profiles.keys().map(|s| s.as_str()).collect()
    }
}
