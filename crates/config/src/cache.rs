use crate::{CacheOptions, ConfigError};

#[derive(Debug, Clone, Default)]
pub struct CacheConfig {
    /// Overrides the chain profile's block client cache capacity
    ///
    /// Env: SAS_CACHE_CAPACITY
    /// Default: unset (use the chain profile)
    pub capacity: Option<usize>,
}

impl CacheConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == Some(0) {
            return Err(ConfigError::ValidateError(
                "Cache capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply the override on top of a profile's cache options.
    pub fn apply(&self, options: CacheOptions) -> CacheOptions {
        match self.capacity {
            Some(capacity) => CacheOptions { capacity },
            None => options,
        }
    }
}
