// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Access to chain storage at a given block.

pub mod accessor;
pub mod cache;
#[cfg(test)]
pub mod memory;
pub mod metadata;
pub mod rpc;
#[cfg(test)]
pub mod test_fixtures;

pub use accessor::{ChainError, ChainStateAccessor, StorageKey, StorageValue, TypeHint};
pub use cache::BlockCache;
pub use rpc::{RpcChainState, RuntimeVersion};
