// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Assets and PoolAssets pallet storage queries.
//!
//! Both pallets are instances of the same FRAME pallet and share one storage
//! layout, so every function here takes the instance to read.
//!
//! # Storage Items Covered
//! - `Asset` - asset details, also the source of the asset id set
//! - `Metadata` - asset metadata (name, symbol, decimals)
//! - `Account` - per-account balances, in one of three historical layouts
//! - `Approvals` - delegated spending allowances
//!
//! # Account record layouts
//!
//! The `Account` value changed shape across runtime upgrades. Records are
//! classified once into [`AssetAccountRecord`], testing in this order:
//!
//! 1. `reason` present: sufficiency comes from the existence reason, the
//!    frozen flag from `is_frozen` or, on newer runtimes, from `status`
//! 2. `sufficient` present and true
//! 3. `is_sufficient` present
//! 4. anything else is treated as no record

use crate::chain::{ChainError, ChainStateAccessor, StorageKey, StorageValue};
use crate::types::BlockHash;
use scale_value::{At, Value, ValueDef};
use sp_core::crypto::AccountId32;
use std::fmt;

/// Instance of the assets pallet a query reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetsPallet {
    Assets,
    PoolAssets,
}

impl AssetsPallet {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Assets => "Assets",
            Self::PoolAssets => "PoolAssets",
        }
    }
}

impl fmt::Display for AssetsPallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The uniform view of an account's holding of one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetBalanceFields {
    pub balance: u128,
    pub is_frozen: bool,
    pub is_sufficient: bool,
}

/// An `Account` storage value, classified by layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetAccountRecord {
    /// `{ balance, status | is_frozen, reason, .. }`
    WithReason(AssetBalanceFields),
    /// `{ balance, is_frozen, sufficient: true, .. }`
    Flat(AssetBalanceFields),
    /// `{ balance, is_frozen, is_sufficient, .. }`
    Legacy(AssetBalanceFields),
    Absent,
}

impl AssetAccountRecord {
    pub fn classify(value: Option<&StorageValue>) -> Self {
        let Some(value) = value else {
            return Self::Absent;
        };

        if let Some(reason) = value.at("reason") {
            return match read_with_reason(value, reason) {
                Some(fields) => Self::WithReason(fields),
                None => unreadable(value),
            };
        }

        if value.at("sufficient").and_then(|v| v.as_bool()) == Some(true) {
            return match read_flat(value, "sufficient") {
                Some(fields) => Self::Flat(fields),
                None => unreadable(value),
            };
        }

        if value.at("is_sufficient").is_some() {
            return match read_flat(value, "is_sufficient") {
                Some(fields) => Self::Legacy(fields),
                None => unreadable(value),
            };
        }

        Self::Absent
    }

    pub fn fields(&self) -> Option<AssetBalanceFields> {
        match self {
            Self::WithReason(fields) | Self::Flat(fields) | Self::Legacy(fields) => Some(*fields),
            Self::Absent => None,
        }
    }
}

fn unreadable(value: &StorageValue) -> AssetAccountRecord {
    tracing::warn!(record = %value, "Asset account record has an unexpected shape");
    AssetAccountRecord::Absent
}

fn read_with_reason(value: &StorageValue, reason: &StorageValue) -> Option<AssetBalanceFields> {
    let balance = value.at("balance")?.as_u128()?;
    let is_frozen = match value.at("is_frozen") {
        Some(flag) => flag.as_bool()?,
        None => matches!(variant_name(value.at("status")?)?, "Frozen" | "Blocked"),
    };
    let is_sufficient = match &reason.value {
        ValueDef::Variant(variant) => variant.name == "Sufficient",
        _ => reason.at("is_sufficient")?.as_bool()?,
    };
    Some(AssetBalanceFields {
        balance,
        is_frozen,
        is_sufficient,
    })
}

fn read_flat(value: &StorageValue, sufficient_field: &str) -> Option<AssetBalanceFields> {
    Some(AssetBalanceFields {
        balance: value.at("balance")?.as_u128()?,
        is_frozen: value.at("is_frozen")?.as_bool()?,
        is_sufficient: value.at(sufficient_field)?.as_bool()?,
    })
}

fn variant_name(value: &StorageValue) -> Option<&str> {
    match &value.value {
        ValueDef::Variant(variant) => Some(variant.name.as_str()),
        _ => None,
    }
}

/// An `Approvals` storage value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetApprovalRecord {
    pub amount: u128,
    pub deposit: u128,
}

impl AssetApprovalRecord {
    pub fn from_value(value: Option<&StorageValue>) -> Option<Self> {
        let value = value?;
        let record = Self {
            amount: value.at("amount")?.as_u128()?,
            deposit: value.at("deposit")?.as_u128()?,
        };
        Some(record)
    }
}

pub fn asset_id_key(asset_id: u32) -> StorageKey {
    Value::u128(asset_id.into())
}

/// An `AccountId32` key part: a newtype around 32 bytes.
pub fn account_key(account: &AccountId32) -> StorageKey {
    let bytes: &[u8; 32] = account.as_ref();
    Value::unnamed_composite(vec![Value::from_bytes(bytes)])
}

/// Every asset id registered in the pallet's `Asset` map at `at`.
pub async fn get_all_asset_ids(
    chain: &dyn ChainStateAccessor,
    at: BlockHash,
    pallet: AssetsPallet,
) -> Result<Vec<u32>, ChainError> {
    let keys = chain.map_keys(at, pallet.name(), "Asset").await?;
    let ids = keys
        .iter()
        .filter_map(|key| match key.as_u128().map(u32::try_from) {
            Some(Ok(id)) => Some(id),
            _ => {
                tracing::warn!(pallet = %pallet, %key, "Skipping asset key that is not a u32 id");
                None
            }
        })
        .collect();
    Ok(ids)
}

pub async fn get_asset_account(
    chain: &dyn ChainStateAccessor,
    at: BlockHash,
    pallet: AssetsPallet,
    asset_id: u32,
    account: &AccountId32,
) -> Result<AssetAccountRecord, ChainError> {
    let keys = [asset_id_key(asset_id), account_key(account)];
    let value = chain.fetch(at, pallet.name(), "Account", &keys).await?;
    let record = AssetAccountRecord::classify(value.as_ref());
    tracing::debug!(pallet = %pallet, asset_id, ?record, "Fetched asset account");
    Ok(record)
}

pub async fn get_asset_approval(
    chain: &dyn ChainStateAccessor,
    at: BlockHash,
    pallet: AssetsPallet,
    asset_id: u32,
    owner: &AccountId32,
    delegate: &AccountId32,
) -> Result<Option<AssetApprovalRecord>, ChainError> {
    let keys = [asset_id_key(asset_id), account_key(owner), account_key(delegate)];
    let value = chain.fetch(at, pallet.name(), "Approvals", &keys).await?;
    let record = AssetApprovalRecord::from_value(value.as_ref());
    if value.is_some() && record.is_none() {
        tracing::warn!(pallet = %pallet, asset_id, "Asset approval record has an unexpected shape");
    }
    Ok(record)
}

/// Raw `Asset` details of one asset, decoded with the runtime's types.
pub async fn get_asset_details(
    chain: &dyn ChainStateAccessor,
    at: BlockHash,
    pallet: AssetsPallet,
    asset_id: u32,
) -> Result<Option<StorageValue>, ChainError> {
    chain
        .fetch(at, pallet.name(), "Asset", &[asset_id_key(asset_id)])
        .await
}

/// Raw `Metadata` of one asset, decoded with the runtime's types.
pub async fn get_asset_metadata(
    chain: &dyn ChainStateAccessor,
    at: BlockHash,
    pallet: AssetsPallet,
    asset_id: u32,
) -> Result<Option<StorageValue>, ChainError> {
    chain
        .fetch(at, pallet.name(), "Metadata", &[asset_id_key(asset_id)])
        .await
}
