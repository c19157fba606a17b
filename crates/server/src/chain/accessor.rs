// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::types::{BlockHash, BlockHashParseError};
use async_trait::async_trait;
use subxt::error::OnlineClientAtBlockError;
use thiserror::Error;

/// Shape information carried on every decoded storage value.
///
/// Values are decoded against the runtime's own type registry; the hint keeps
/// just enough of the type to render it later (bytes as hex, accounts as SS58).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeHint {
    #[default]
    Other,
    /// A sequence or array of `u8`.
    Bytes,
    /// A 32-byte account identifier newtype.
    AccountId,
    /// A sequence or array of anything but `u8`. Always rendered as a list.
    Sequence,
    /// A tuple. Rendered as a list unless it is the unit type.
    Tuple,
}

/// A storage value decoded with the runtime's type registry.
pub type StorageValue = scale_value::Value<TypeHint>;

/// One key part of a storage map, encoded against the key type the runtime
/// declares for it.
pub type StorageKey = scale_value::Value;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("RPC call {method} failed: {source}")]
    Rpc {
        method: &'static str,
        #[source]
        source: subxt_rpcs::Error,
    },

    #[error("Block {0} not found")]
    BlockNotFound(String),

    #[error("Invalid block hash returned by the node: {0}")]
    InvalidBlockHash(#[from] BlockHashParseError),

    #[error("Failed to create the chain client: {0}")]
    Client(String),

    #[error("Failed to load block state: {0}")]
    ClientAtBlock(#[source] Box<OnlineClientAtBlockError>),

    #[error("Storage query {pallet}::{entry} failed: {reason}")]
    Storage {
        pallet: String,
        entry: String,
        reason: String,
    },

    #[error("Storage entry {pallet}::{entry} not found in runtime metadata")]
    StorageEntryNotFound { pallet: String, entry: String },

    #[error("Storage entry {pallet}::{entry} takes {expected} key(s), got {got}")]
    KeyArity {
        pallet: String,
        entry: String,
        expected: usize,
        got: usize,
    },

    #[error("Keys of {pallet}::{entry} cannot be enumerated: {reason}")]
    OpaqueKeys {
        pallet: String,
        entry: String,
        reason: &'static str,
    },

    #[error("Failed to decode {pallet}::{entry}: {reason}")]
    ValueDecode {
        pallet: String,
        entry: String,
        reason: String,
    },

    #[error("Malformed block header: {0}")]
    MalformedHeader(String),
}

impl ChainError {
    pub(crate) fn rpc(method: &'static str) -> impl FnOnce(subxt_rpcs::Error) -> Self {
        move |source| Self::Rpc { method, source }
    }

    pub(crate) fn storage<E: std::fmt::Display>(pallet: &str, entry: &str) -> impl FnOnce(E) -> Self + use<E> {
        let (pallet, entry) = (pallet.to_string(), entry.to_string());
        move |e| Self::Storage {
            pallet,
            entry,
            reason: e.to_string(),
        }
    }
}

impl From<OnlineClientAtBlockError> for ChainError {
    fn from(err: OnlineClientAtBlockError) -> Self {
        Self::ClientAtBlock(Box::new(err))
    }
}

/// Read access to the storage state of a chain at a given block.
///
/// Every call is scoped to one snapshot (`at`). Implementations must not
/// cache per-block data beyond what is immutable for that block.
#[async_trait]
pub trait ChainStateAccessor: Send + Sync {
    /// Hash of the latest finalized block.
    async fn finalized_head(&self) -> Result<BlockHash, ChainError>;

    /// Hash of the canonical block at `number`.
    async fn block_hash(&self, number: u64) -> Result<BlockHash, ChainError>;

    /// Height of the block identified by `at`.
    async fn block_height(&self, at: BlockHash) -> Result<u64, ChainError>;

    /// Whether the runtime at `at` declares the storage map `pallet::entry`.
    async fn has_storage_map(
        &self,
        at: BlockHash,
        pallet: &str,
        entry: &str,
    ) -> Result<bool, ChainError>;

    /// Fetch one storage value, with one key part per hasher of the entry.
    /// `None` when nothing is stored.
    async fn fetch(
        &self,
        at: BlockHash,
        pallet: &str,
        entry: &str,
        keys: &[StorageKey],
    ) -> Result<Option<StorageValue>, ChainError>;

    /// Keys of every value stored in a single-key map.
    async fn map_keys(
        &self,
        at: BlockHash,
        pallet: &str,
        entry: &str,
    ) -> Result<Vec<StorageKey>, ChainError>;
}
