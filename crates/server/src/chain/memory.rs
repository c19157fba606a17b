// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-process [`ChainStateAccessor`] used by handler and service tests.

use super::accessor::{ChainError, ChainStateAccessor, StorageKey, StorageValue};
use crate::types::BlockHash;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Values keyed by the display form of their key parts, with the parts kept
/// for enumeration.
type StorageMap = BTreeMap<Vec<String>, (Vec<StorageKey>, StorageValue)>;

fn rendered(keys: &[StorageKey]) -> Vec<String> {
    keys.iter().map(ToString::to_string).collect()
}

#[derive(Default)]
struct BlockState {
    maps: HashMap<(String, String), StorageMap>,
}

/// Chain of blocks whose storage is held in memory. The last block added is
/// the finalized head.
#[derive(Default)]
pub struct InMemoryChainState {
    heights: HashMap<BlockHash, u64>,
    hashes: HashMap<u64, BlockHash>,
    finalized: Option<BlockHash>,
    states: HashMap<BlockHash, BlockState>,
    fetches: AtomicUsize,
}

impl InMemoryChainState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block(mut self, number: u64, hash: BlockHash) -> Self {
        self.heights.insert(hash, number);
        self.hashes.insert(number, hash);
        self.states.entry(hash).or_default();
        self.finalized = Some(hash);
        self
    }

    /// Declare `pallet::entry` as a storage map at `at`, without any values.
    pub fn with_map(mut self, at: BlockHash, pallet: &str, entry: &str) -> Self {
        self.states
            .entry(at)
            .or_default()
            .maps
            .entry((pallet.to_string(), entry.to_string()))
            .or_default();
        self
    }

    pub fn insert(
        &mut self,
        at: BlockHash,
        pallet: &str,
        entry: &str,
        keys: Vec<StorageKey>,
        value: StorageValue,
    ) {
        self.states
            .entry(at)
            .or_default()
            .maps
            .entry((pallet.to_string(), entry.to_string()))
            .or_default()
            .insert(rendered(&keys), (keys, value));
    }

    /// Number of `fetch` calls served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn map(&self, at: BlockHash, pallet: &str, entry: &str) -> Result<&StorageMap, ChainError> {
        let state = self
            .states
            .get(&at)
            .ok_or_else(|| ChainError::BlockNotFound(at.to_string()))?;
        state
            .maps
            .get(&(pallet.to_string(), entry.to_string()))
            .ok_or_else(|| ChainError::StorageEntryNotFound {
                pallet: pallet.to_string(),
                entry: entry.to_string(),
            })
    }
}

#[async_trait]
impl ChainStateAccessor for InMemoryChainState {
    async fn finalized_head(&self) -> Result<BlockHash, ChainError> {
        self.finalized
            .ok_or_else(|| ChainError::BlockNotFound("finalized head".to_string()))
    }

    async fn block_hash(&self, number: u64) -> Result<BlockHash, ChainError> {
        self.hashes
            .get(&number)
            .copied()
            .ok_or_else(|| ChainError::BlockNotFound(number.to_string()))
    }

    async fn block_height(&self, at: BlockHash) -> Result<u64, ChainError> {
        self.heights
            .get(&at)
            .copied()
            .ok_or_else(|| ChainError::BlockNotFound(at.to_string()))
    }

    async fn has_storage_map(
        &self,
        at: BlockHash,
        pallet: &str,
        entry: &str,
    ) -> Result<bool, ChainError> {
        let state = self
            .states
            .get(&at)
            .ok_or_else(|| ChainError::BlockNotFound(at.to_string()))?;
        Ok(state
            .maps
            .contains_key(&(pallet.to_string(), entry.to_string())))
    }

    async fn fetch(
        &self,
        at: BlockHash,
        pallet: &str,
        entry: &str,
        keys: &[StorageKey],
    ) -> Result<Option<StorageValue>, ChainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let map = self.map(at, pallet, entry)?;
        Ok(map.get(&rendered(keys)).map(|(_, value)| value.clone()))
    }

    async fn map_keys(
        &self,
        at: BlockHash,
        pallet: &str,
        entry: &str,
    ) -> Result<Vec<StorageKey>, ChainError> {
        self.map(at, pallet, entry)?
            .values()
            .map(|(parts, _)| match parts.as_slice() {
                [key] => Ok(key.clone()),
                _ => Err(ChainError::OpaqueKeys {
                    pallet: pallet.to_string(),
                    entry: entry.to_string(),
                    reason: "not a single-key map",
                }),
            })
            .collect()
    }
}
