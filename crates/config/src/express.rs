use crate::ConfigError;
use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct ExpressConfig {
    /// Address to bind the HTTP server to
    ///
    /// Env: SAS_EXPRESS_BIND_HOST
    /// Default: 127.0.0.1
    pub bind_host: String,

    /// Port to bind the HTTP server to
    ///
    /// Env: SAS_EXPRESS_PORT
    /// Default: 8080
    pub port: u16,

    /// Pick the controller set from the chain profile matching the runtime's
    /// spec name instead of the `default` profile
    ///
    /// Env: SAS_EXPRESS_INJECTED_CONTROLLERS
    /// Default: false
    pub injected_controllers: bool,
}

fn default_bind_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ExpressConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::ValidateError(
                "Express port cannot be 0".to_string(),
            ));
        }

        if self.bind_host.parse::<IpAddr>().is_err() {
            return Err(ConfigError::ValidateError(format!(
                "Invalid bind host '{}'. Must be an IPv4 or IPv6 address",
                self.bind_host
            )));
        }

        Ok(())
    }
}

impl Default for ExpressConfig {
    fn default() -> Self {
        Self {
            bind_host: default_bind_host(),
            port: default_port(),
            injected_controllers: false,
        }
    }
}
