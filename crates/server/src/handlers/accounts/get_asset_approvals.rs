// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::types::{AccountsError, AssetApprovalQueryParams, AssetApprovalResponse};
use super::utils::{query_asset_approval, validate_and_parse_address};
use crate::extractors::JsonQuery;
use crate::handlers::runtime_queries::assets::AssetsPallet;
use crate::state::AppState;
use crate::utils::{BlockId, resolve_snapshot};
use axum::{
    Json,
    extract::{Path, State},
};

/// Shared by the asset and pool-asset approval endpoints.
pub(super) async fn approval_for(
    state: &AppState,
    pallet: AssetsPallet,
    account_id: &str,
    params: AssetApprovalQueryParams,
) -> Result<AssetApprovalResponse, AccountsError> {
    let owner = validate_and_parse_address(account_id, state.chain_info.ss58_prefix)?;
    let delegate = validate_and_parse_address(&params.delegate, state.chain_info.ss58_prefix)
        .map_err(|_| AccountsError::InvalidDelegateAddress(params.delegate.clone()))?;

    let block_id = params.at.as_deref().map(str::parse::<BlockId>).transpose()?;
    let at = resolve_snapshot(state.chain.as_ref(), block_id).await?;

    query_asset_approval(
        state.chain.as_ref(),
        pallet,
        at,
        &owner,
        params.asset_id,
        &delegate,
    )
    .await
}

/// Handler for GET /accounts/{accountId}/asset-approvals
///
/// Returns the amount `delegate` may spend from the account's holding of `assetId`.
#[utoipa::path(
    get,
    path = "/v1/accounts/{accountId}/asset-approvals",
    tag = "accounts",
    summary = "Account asset approvals",
    description = "Returns asset approval information for a given account, asset, and delegate.",
    params(
        ("accountId" = String, Path, description = "SS58-encoded or 0x-prefixed hex account id"),
        ("at" = Option<String>, Query, description = "Block hash or number to query at"),
        ("assetId" = u32, Query, description = "The asset ID to query approval for"),
        ("delegate" = String, Query, description = "The delegate address with spending approval")
    ),
    responses(
        (status = 200, description = "Asset approval information", body = AssetApprovalResponse),
        (status = 400, description = "Invalid parameters"),
        (status = 404, description = "Block not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_asset_approvals(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    JsonQuery(params): JsonQuery<AssetApprovalQueryParams>,
) -> Result<Json<AssetApprovalResponse>, AccountsError> {
    approval_for(&state, AssetsPallet::Assets, &account_id, params)
        .await
        .map(Json)
}
