// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! [`ChainStateAccessor`] over a node's JSON-RPC interface.
//!
//! Block lookups use the legacy `chain_*` methods directly. Storage is read
//! through a subxt client pinned to the block, which brings the runtime
//! metadata of that block with it. Pinned clients are kept in a
//! [`BlockCache`].

use super::accessor::{ChainError, ChainStateAccessor, StorageKey, StorageValue};
use super::cache::BlockCache;
use super::metadata::decode_value;
use crate::types::BlockHash;
use async_trait::async_trait;
use polkadot_assets_api_config::CacheOptions;
use serde::Deserialize;
use std::sync::Arc;
use subxt::{OnlineClient, OnlineClientAtBlock, SubstrateConfig};
use subxt_rpcs::{RpcClient, rpc_params};

type ClientAtBlock = OnlineClientAtBlock<SubstrateConfig>;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeVersion {
    pub spec_name: String,
    pub spec_version: u32,
}

#[derive(Debug, Deserialize)]
struct Header {
    number: String,
}

/// Key count and value type of one storage entry, as declared by the runtime.
struct EntryLayout {
    key_count: usize,
    value_ty: u32,
}

fn entry_layout(client_at: &ClientAtBlock, pallet: &str, entry: &str) -> Option<EntryLayout> {
    let metadata = client_at.metadata();
    let entry = metadata
        .pallet_by_name(pallet)?
        .storage()?
        .entry_by_name(entry)?;
    Some(EntryLayout {
        key_count: entry.keys().count(),
        value_ty: entry.value_ty(),
    })
}

fn entry_layout_or_err(
    client_at: &ClientAtBlock,
    pallet: &str,
    entry: &str,
) -> Result<EntryLayout, ChainError> {
    entry_layout(client_at, pallet, entry).ok_or_else(|| ChainError::StorageEntryNotFound {
        pallet: pallet.to_string(),
        entry: entry.to_string(),
    })
}

pub struct RpcChainState {
    rpc_client: RpcClient,
    client: OnlineClient<SubstrateConfig>,
    blocks: BlockCache<ClientAtBlock>,
}

impl RpcChainState {
    pub async fn new(rpc_client: RpcClient, cache: CacheOptions) -> Result<Self, ChainError> {
        let client = OnlineClient::<SubstrateConfig>::from_rpc_client(rpc_client.clone())
            .await
            .map_err(|e| ChainError::Client(e.to_string()))?;
        Ok(Self {
            rpc_client,
            client,
            blocks: BlockCache::new(cache),
        })
    }

    pub fn resize_cache(&self, cache: CacheOptions) {
        self.blocks.resize(cache);
    }

    /// Runtime version at `at`, or at the best block when `None`.
    pub async fn runtime_version(&self, at: Option<BlockHash>) -> Result<RuntimeVersion, ChainError> {
        let at = at.map(|h| h.to_string());
        self.rpc_client
            .request("state_getRuntimeVersion", rpc_params![at])
            .await
            .map_err(ChainError::rpc("state_getRuntimeVersion"))
    }

    /// `System::SS58Prefix` of the runtime at `at`, when it declares one.
    pub async fn ss58_prefix(&self, at: BlockHash) -> Result<Option<u16>, ChainError> {
        let client_at = self.client_at(at).await?;
        let prefix = client_at
            .constants()
            .entry(subxt::dynamic::constant::<u16>("System", "SS58Prefix"))
            .ok();
        Ok(prefix)
    }

    /// Client pinned to block `at`. Unknown hashes fail with
    /// [`ChainError::BlockNotFound`] before any runtime data is requested.
    async fn client_at(&self, at: BlockHash) -> Result<Arc<ClientAtBlock>, ChainError> {
        if let Some(client_at) = self.blocks.get(&at) {
            return Ok(client_at);
        }

        let height = self.block_height(at).await?;
        let client_at = Arc::new(self.client.at_block(at.0).await?);
        tracing::debug!(block = %at, height, "Pinned chain client to block");
        self.blocks.insert(at, client_at.clone());
        Ok(client_at)
    }
}

#[async_trait]
impl ChainStateAccessor for RpcChainState {
    async fn finalized_head(&self) -> Result<BlockHash, ChainError> {
        let hash: String = self
            .rpc_client
            .request("chain_getFinalizedHead", rpc_params![])
            .await
            .map_err(ChainError::rpc("chain_getFinalizedHead"))?;
        Ok(hash.parse()?)
    }

    async fn block_hash(&self, number: u64) -> Result<BlockHash, ChainError> {
        let hash: Option<String> = self
            .rpc_client
            .request("chain_getBlockHash", rpc_params![number])
            .await
            .map_err(ChainError::rpc("chain_getBlockHash"))?;
        let hash = hash.ok_or_else(|| ChainError::BlockNotFound(number.to_string()))?;
        Ok(hash.parse()?)
    }

    async fn block_height(&self, at: BlockHash) -> Result<u64, ChainError> {
        let header: Option<Header> = self
            .rpc_client
            .request("chain_getHeader", rpc_params![at.to_string()])
            .await
            .map_err(ChainError::rpc("chain_getHeader"))?;
        let header = header.ok_or_else(|| ChainError::BlockNotFound(at.to_string()))?;

        let digits = header.number.trim_start_matches("0x");
        u64::from_str_radix(digits, 16).map_err(|_| ChainError::MalformedHeader(header.number))
    }

    async fn has_storage_map(
        &self,
        at: BlockHash,
        pallet: &str,
        entry: &str,
    ) -> Result<bool, ChainError> {
        let client_at = self.client_at(at).await?;
        Ok(entry_layout(&client_at, pallet, entry).is_some_and(|layout| layout.key_count > 0))
    }

    async fn fetch(
        &self,
        at: BlockHash,
        pallet: &str,
        entry: &str,
        keys: &[StorageKey],
    ) -> Result<Option<StorageValue>, ChainError> {
        let client_at = self.client_at(at).await?;
        let layout = entry_layout_or_err(&client_at, pallet, entry)?;
        if layout.key_count != keys.len() {
            return Err(ChainError::KeyArity {
                pallet: pallet.to_string(),
                entry: entry.to_string(),
                expected: layout.key_count,
                got: keys.len(),
            });
        }

        let addr = subxt::dynamic::storage::<Vec<StorageKey>, scale_value::Value>(
            pallet.to_string(),
            entry.to_string(),
        );
        let value = client_at
            .storage()
            .try_fetch(addr, keys.to_vec())
            .await
            .map_err(ChainError::storage(pallet, entry))?;

        let Some(value) = value else {
            return Ok(None);
        };
        let metadata = client_at.metadata();
        decode_value(metadata.types(), layout.value_ty, pallet, entry, value.bytes()).map(Some)
    }

    async fn map_keys(
        &self,
        at: BlockHash,
        pallet: &str,
        entry: &str,
    ) -> Result<Vec<StorageKey>, ChainError> {
        let client_at = self.client_at(at).await?;
        let layout = entry_layout_or_err(&client_at, pallet, entry)?;
        let opaque = |reason| ChainError::OpaqueKeys {
            pallet: pallet.to_string(),
            entry: entry.to_string(),
            reason,
        };
        if layout.key_count != 1 {
            return Err(opaque("not a single-key map"));
        }

        let addr = subxt::dynamic::storage::<(StorageKey,), scale_value::Value>(
            pallet.to_string(),
            entry.to_string(),
        );
        let mut entries = client_at
            .storage()
            .iter(addr, ())
            .await
            .map_err(ChainError::storage(pallet, entry))?;

        let mut keys = Vec::new();
        while let Some(result) = entries.next().await {
            let kv = result.map_err(ChainError::storage(pallet, entry))?;
            let key = kv.key().map_err(ChainError::storage(pallet, entry))?;
            let part = key.part(0).ok_or_else(|| opaque("the key has no parts"))?;
            let decoded = part
                .decode_as::<StorageKey>()
                .map_err(ChainError::storage(pallet, entry))?
                .ok_or_else(|| opaque("the key hasher does not keep the key"))?;
            keys.push(decoded);
        }

        tracing::debug!(pallet, entry, count = keys.len(), "Enumerated storage map keys");
        Ok(keys)
    }
}
