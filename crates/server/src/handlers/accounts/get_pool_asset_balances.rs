// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::types::{AccountsError, AssetBalancesQueryParams, PoolAssetBalancesResponse};
use super::utils::{query_asset_balances, validate_and_parse_address};
use crate::extractors::JsonQuery;
use crate::handlers::runtime_queries::assets::AssetsPallet;
use crate::state::AppState;
use crate::utils::{BlockId, resolve_snapshot};
use axum::{
    Json,
    extract::{Path, State},
};

/// Handler for GET /accounts/{accountId}/pool-asset-balances
///
/// Same as asset-balances, read from the PoolAssets pallet.
#[utoipa::path(
    get,
    path = "/v1/accounts/{accountId}/pool-asset-balances",
    tag = "accounts",
    summary = "Account pool asset balances",
    description = "Returns pool asset (liquidity token) balances for a given account.",
    params(
        ("accountId" = String, Path, description = "SS58-encoded or 0x-prefixed hex account id"),
        ("at" = Option<String>, Query, description = "Block hash or number to query at"),
        ("assets" = Option<String>, Query, description = "Comma-separated list of pool asset IDs to query")
    ),
    responses(
        (status = 200, description = "Account pool asset balances", body = PoolAssetBalancesResponse),
        (status = 400, description = "Invalid parameters"),
        (status = 404, description = "Block not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_pool_asset_balances(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    JsonQuery(params): JsonQuery<AssetBalancesQueryParams>,
) -> Result<Json<PoolAssetBalancesResponse>, AccountsError> {
    let account = validate_and_parse_address(&account_id, state.chain_info.ss58_prefix)?;
    let block_id = params.at.as_deref().map(str::parse::<BlockId>).transpose()?;
    let at = resolve_snapshot(state.chain.as_ref(), block_id).await?;

    let balances = query_asset_balances(
        state.chain.as_ref(),
        AssetsPallet::PoolAssets,
        at,
        &account,
        &params.assets,
    )
    .await?;
    Ok(Json(balances.into()))
}
