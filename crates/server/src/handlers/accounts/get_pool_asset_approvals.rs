// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::get_asset_approvals::approval_for;
use super::types::{AccountsError, AssetApprovalQueryParams, AssetApprovalResponse};
use crate::extractors::JsonQuery;
use crate::handlers::runtime_queries::assets::AssetsPallet;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};

/// Handler for GET /accounts/{accountId}/pool-asset-approvals
#[utoipa::path(
    get,
    path = "/v1/accounts/{accountId}/pool-asset-approvals",
    tag = "accounts",
    summary = "Account pool asset approvals",
    description = "Returns pool asset approval information for a given account, asset, and delegate.",
    params(
        ("accountId" = String, Path, description = "SS58-encoded or 0x-prefixed hex account id"),
        ("at" = Option<String>, Query, description = "Block hash or number to query at"),
        ("assetId" = u32, Query, description = "The pool asset ID to query approval for"),
        ("delegate" = String, Query, description = "The delegate address with spending approval")
    ),
    responses(
        (status = 200, description = "Pool asset approval information", body = AssetApprovalResponse),
        (status = 400, description = "Invalid parameters"),
        (status = 404, description = "Block not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_pool_asset_approvals(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    JsonQuery(params): JsonQuery<AssetApprovalQueryParams>,
) -> Result<Json<AssetApprovalResponse>, AccountsError> {
    approval_for(&state, AssetsPallet::PoolAssets, &account_id, params)
        .await
        .map(Json)
}
