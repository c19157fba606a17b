// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for account-related handlers.

use super::utils::AddressValidationError;
use crate::chain::ChainError;
use crate::handlers::runtime_queries::assets::{AssetBalanceFields, AssetsPallet};
use crate::utils::BlockIdParseError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

// ================================================================================================
// Error Response Helpers
// ================================================================================================

/// Creates a JSON error response with the given status code and message.
fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    let body = Json(json!({ "error": message }));
    (status, body).into_response()
}

/// Implements `IntoResponse` for an error enum from a variant-to-status table.
///
/// ```ignore
/// impl_error_response!(MyError,
///     MyError::InvalidBlockParam(_) => BAD_REQUEST,
///     _ => INTERNAL_SERVER_ERROR
/// );
/// ```
macro_rules! impl_error_response {
    ($error_type:ty, $($variant:pat => $status:ident),+ $(,)?) => {
        impl IntoResponse for $error_type {
            fn into_response(self) -> axum::response::Response {
                let status = match &self {
                    $($variant => StatusCode::$status,)+
                };
                error_response(status, self.to_string())
            }
        }
    };
}

// ================================================================================================
// Query Parameters
// ================================================================================================

/// Query parameters for the asset-balances and pool-asset-balances endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssetBalancesQueryParams {
    /// Block identifier (hash or height) - defaults to latest finalized
    #[serde(default)]
    pub at: Option<String>,

    /// Comma-separated asset IDs; every asset of the pallet when omitted or empty
    #[serde(default, deserialize_with = "deserialize_asset_ids")]
    pub assets: Vec<u32>,
}

fn deserialize_asset_ids<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| serde::de::Error::custom(format!("invalid asset id '{s}'")))
        })
        .collect()
}

/// Query parameters for the asset-approvals and pool-asset-approvals endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssetApprovalQueryParams {
    /// Block identifier (hash or height) - defaults to latest finalized
    #[serde(default)]
    pub at: Option<String>,

    /// The asset ID to query approval for (required)
    pub asset_id: u32,

    /// The delegate address with spending approval (required)
    pub delegate: String,
}

// ================================================================================================
// Response Types
// ================================================================================================

/// Block a response was read at. Height is a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    pub hash: String,
    pub height: String,
}

/// One asset holding. The value fields are all set or all null.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    pub asset_id: u32,
    /// Balance as decimal string
    pub balance: Option<String>,
    pub is_frozen: Option<bool>,
    pub is_sufficient: Option<bool>,
}

impl AssetBalance {
    pub fn new(asset_id: u32, fields: Option<AssetBalanceFields>) -> Self {
        match fields {
            Some(fields) => Self {
                asset_id,
                balance: Some(fields.balance.to_string()),
                is_frozen: Some(fields.is_frozen),
                is_sufficient: Some(fields.is_sufficient),
            },
            None => Self {
                asset_id,
                balance: None,
                is_frozen: None,
                is_sufficient: None,
            },
        }
    }
}

/// Balances read from one assets pallet instance, before naming the list
#[derive(Debug, Clone, PartialEq)]
pub struct AssetBalances {
    pub at: BlockInfo,
    pub balances: Vec<AssetBalance>,
}

/// Response for GET /accounts/{accountId}/asset-balances
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalancesResponse {
    pub at: BlockInfo,
    pub assets: Vec<AssetBalance>,
}

impl From<AssetBalances> for AssetBalancesResponse {
    fn from(balances: AssetBalances) -> Self {
        Self {
            at: balances.at,
            assets: balances.balances,
        }
    }
}

/// Response for GET /accounts/{accountId}/pool-asset-balances
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoolAssetBalancesResponse {
    pub at: BlockInfo,
    pub pool_assets: Vec<AssetBalance>,
}

impl From<AssetBalances> for PoolAssetBalancesResponse {
    fn from(balances: AssetBalances) -> Self {
        Self {
            at: balances.at,
            pool_assets: balances.balances,
        }
    }
}

/// Response for GET /accounts/{accountId}/asset-approvals and pool-asset-approvals
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetApprovalResponse {
    pub at: BlockInfo,

    /// The approved amount (null if approval doesn't exist)
    pub amount: Option<String>,

    /// The deposit associated with the approval (null if approval doesn't exist)
    pub deposit: Option<String>,
}

// ================================================================================================
// Unified Accounts Error Type
// ================================================================================================

#[derive(Debug, Error)]
pub enum AccountsError {
    #[error("Invalid block parameter: {0}")]
    InvalidBlockParam(#[from] BlockIdParseError),

    #[error("Invalid account address: {0}")]
    InvalidAddress(#[from] AddressValidationError),

    #[error("Invalid delegate address: {0}")]
    InvalidDelegateAddress(String),

    #[error("The runtime does not include the {0} pallet at this block")]
    PalletNotAvailable(AssetsPallet),

    #[error(transparent)]
    Chain(#[from] ChainError),
}

impl_error_response!(AccountsError,
    AccountsError::InvalidBlockParam(_) => BAD_REQUEST,
    AccountsError::InvalidAddress(_) => BAD_REQUEST,
    AccountsError::InvalidDelegateAddress(_) => BAD_REQUEST,
    AccountsError::PalletNotAvailable(_) => BAD_REQUEST,
    AccountsError::Chain(ChainError::BlockNotFound(_)) => NOT_FOUND,
    _ => INTERNAL_SERVER_ERROR
);
