// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::types::{AccountsError, AssetBalancesQueryParams, AssetBalancesResponse};
use super::utils::{query_asset_balances, validate_and_parse_address};
use crate::extractors::JsonQuery;
use crate::handlers::runtime_queries::assets::AssetsPallet;
use crate::state::AppState;
use crate::utils::{BlockId, resolve_snapshot};
use axum::{
    Json,
    extract::{Path, State},
};

/// Handler for GET /accounts/{accountId}/asset-balances
///
/// Returns the account's balance of each requested asset, or of every asset
/// in the Assets pallet when `assets` is omitted.
#[utoipa::path(
    get,
    path = "/v1/accounts/{accountId}/asset-balances",
    tag = "accounts",
    summary = "Account asset balances",
    description = "Returns asset balances for a given account.",
    params(
        ("accountId" = String, Path, description = "SS58-encoded or 0x-prefixed hex account id"),
        ("at" = Option<String>, Query, description = "Block hash or number to query at"),
        ("assets" = Option<String>, Query, description = "Comma-separated list of asset IDs to query")
    ),
    responses(
        (status = 200, description = "Account asset balances", body = AssetBalancesResponse),
        (status = 400, description = "Invalid parameters"),
        (status = 404, description = "Block not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_asset_balances(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    JsonQuery(params): JsonQuery<AssetBalancesQueryParams>,
) -> Result<Json<AssetBalancesResponse>, AccountsError> {
    let account = validate_and_parse_address(&account_id, state.chain_info.ss58_prefix)?;
    let block_id = params.at.as_deref().map(str::parse::<BlockId>).transpose()?;
    let at = resolve_snapshot(state.chain.as_ref(), block_id).await?;

    let balances = query_asset_balances(
        state.chain.as_ref(),
        AssetsPallet::Assets,
        at,
        &account,
        &params.assets,
    )
    .await?;
    Ok(Json(balances.into()))
}
