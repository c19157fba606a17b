// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::chain::{ChainError, ChainStateAccessor};
use crate::types::{BlockHash, BlockHashParseError};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BlockIdParseError {
    #[error("Invalid block hash: {0}")]
    InvalidHash(#[from] BlockHashParseError),

    #[error("Block identifier must be a 0x-prefixed hash or a block number, got '{0}'")]
    InvalidNumber(String),
}

/// Value of an `at` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockId {
    Hash(BlockHash),
    Number(u64),
}

impl FromStr for BlockId {
    type Err = BlockIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("0x") {
            return Ok(Self::Hash(s.parse()?));
        }
        s.parse::<u64>()
            .map(Self::Number)
            .map_err(|_| BlockIdParseError::InvalidNumber(s.to_string()))
    }
}

/// Resolve an optional block identifier to the snapshot a query reads.
///
/// - `None` is the latest finalized block
/// - a hash is used as given; its existence is checked by the header lookup
/// - a number is looked up in the canonical chain
pub async fn resolve_snapshot(
    chain: &dyn ChainStateAccessor,
    at: Option<BlockId>,
) -> Result<BlockHash, ChainError> {
    match at {
        None => chain.finalized_head().await,
        Some(BlockId::Hash(hash)) => Ok(hash),
        Some(BlockId::Number(number)) => chain.block_hash(number).await,
    }
}
