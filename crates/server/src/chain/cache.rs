// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::types::BlockHash;
use lru::LruCache;
use polkadot_assets_api_config::CacheOptions;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

/// Per-block state keyed by block hash, least recently used first out.
pub struct BlockCache<V> {
    entries: Mutex<LruCache<BlockHash, Arc<V>>>,
}

impl<V> BlockCache<V> {
    pub fn new(options: CacheOptions) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity_of(options))),
        }
    }

    /// Apply new options, evicting least recently used entries if shrinking.
    pub fn resize(&self, options: CacheOptions) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.resize(capacity_of(options));
        }
    }

    pub fn get(&self, at: &BlockHash) -> Option<Arc<V>> {
        self.entries.lock().ok()?.get(at).cloned()
    }

    pub fn insert(&self, at: BlockHash, value: Arc<V>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.put(at, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn capacity_of(options: CacheOptions) -> NonZeroUsize {
    NonZeroUsize::new(options.capacity).unwrap_or(NonZeroUsize::MIN)
}
