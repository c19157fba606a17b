// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::chain::{ChainError, ChainStateAccessor, RpcChainState};
use crate::routes::RouteRegistry;
use polkadot_assets_api_config::{ChainConfigError, ChainProfile, ChainProfiles, SidecarConfig};
use std::sync::Arc;
use subxt_rpcs::RpcClient;
use subxt_rpcs::client::ReconnectingRpcClient;
use thiserror::Error;

/// SS58 prefix used when the runtime does not declare `System::SS58Prefix`.
const GENERIC_SS58_PREFIX: u16 = 42;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Failed to connect to {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    ChainConfig(#[from] ChainConfigError),
}

/// Facts about the connected runtime, read once at startup.
#[derive(Debug, Clone)]
pub struct ChainInfo {
    pub spec_name: String,
    pub spec_version: u32,
    pub ss58_prefix: u16,
}

#[derive(Clone)]
pub struct AppState {
    pub config: SidecarConfig,
    pub chain: Arc<dyn ChainStateAccessor>,
    pub chain_info: ChainInfo,
    pub profile: ChainProfile,
    pub route_registry: RouteRegistry,
}

impl AppState {
    /// Connect to the node, identify its runtime and pick the chain profile.
    pub async fn new(config: SidecarConfig) -> Result<Self, StateError> {
        let url = config.substrate.url.clone();
        let client = ReconnectingRpcClient::builder()
            .build(url.clone())
            .await
            .map_err(|e| StateError::ConnectionFailed {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        let rpc = RpcChainState::new(RpcClient::new(client), Default::default()).await?;

        let version = rpc.runtime_version(None).await?;
        let profiles = ChainProfiles::load()?;
        let profile = profiles
            .resolve(&version.spec_name, config.express.injected_controllers)?
            .clone();
        let cache = config.cache.apply(profile.cache);
        rpc.resize_cache(cache);

        let finalized = rpc.finalized_head().await?;
        let ss58_prefix = rpc
            .ss58_prefix(finalized)
            .await?
            .unwrap_or(GENERIC_SS58_PREFIX);

        tracing::info!(
            url = %url,
            spec_name = %version.spec_name,
            spec_version = version.spec_version,
            ss58_prefix,
            cache_capacity = cache.capacity,
            controllers = ?profile.controllers,
            "Connected to chain"
        );

        Ok(Self {
            config,
            chain: Arc::new(rpc),
            chain_info: ChainInfo {
                spec_name: version.spec_name,
                spec_version: version.spec_version,
                ss58_prefix,
            },
            profile,
            route_registry: RouteRegistry::new(),
        })
    }

    /// State over an in-memory chain with every controller enabled.
    #[cfg(test)]
    pub fn for_tests(chain: crate::chain::memory::InMemoryChainState) -> Self {
        let profile = ChainProfiles::load()
            .ok()
            .and_then(|profiles| profiles.get("statemint").cloned())
            .unwrap_or_else(|| ChainProfile {
                controllers: polkadot_assets_api_config::Controller::ALL.to_vec(),
                cache: Default::default(),
            });
        Self {
            config: SidecarConfig::default(),
            chain: Arc::new(chain),
            chain_info: ChainInfo {
                spec_name: "statemint".to_string(),
                spec_version: 1_000_000,
                ss58_prefix: GENERIC_SS58_PREFIX,
            },
            profile,
            route_registry: RouteRegistry::new(),
        }
    }
}
