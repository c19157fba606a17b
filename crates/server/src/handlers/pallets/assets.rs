// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Handler for /pallets/assets/{assetId}/asset-info endpoint.

use crate::extractors::JsonQuery;
use crate::chain::StorageValue;
use crate::handlers::pallets::common::{AtResponse, PalletError};
use crate::handlers::runtime_queries::assets::{
    AssetsPallet, get_asset_details, get_asset_metadata,
};
use crate::state::AppState;
use crate::utils::{BlockId, from_scale_value, resolve_snapshot, sanitize};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssetsQueryParams {
    #[serde(default)]
    pub at: Option<String>,
}

/// `assetInfo` and `assetMetaData` carry the runtime's own layout,
/// sanitized: numbers as decimal strings, byte strings as hex, accounts as SS58.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PalletsAssetsInfoResponse {
    pub at: AtResponse,
    #[schema(value_type = Object)]
    pub asset_info: Option<serde_json::Value>,
    #[schema(value_type = Object)]
    pub asset_meta_data: Option<serde_json::Value>,
}

#[utoipa::path(
    get,
    path = "/v1/pallets/assets/{assetId}/asset-info",
    tag = "pallets",
    summary = "Asset details and metadata",
    description = "Returns the Assets pallet details and metadata of one asset.",
    params(
        ("assetId" = u32, Path, description = "The asset ID"),
        ("at" = Option<String>, Query, description = "Block hash or number to query at")
    ),
    responses(
        (status = 200, description = "Asset information", body = PalletsAssetsInfoResponse),
        (status = 400, description = "Invalid parameters"),
        (status = 404, description = "Block or pallet not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn pallets_assets_asset_info(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
    JsonQuery(params): JsonQuery<AssetsQueryParams>,
) -> Result<Json<PalletsAssetsInfoResponse>, PalletError> {
    let asset_id: u32 = asset_id
        .parse()
        .map_err(|_| PalletError::InvalidAssetId(asset_id.clone()))?;

    let block_id = params.at.as_deref().map(str::parse::<BlockId>).transpose()?;
    let chain = state.chain.as_ref();
    let at = resolve_snapshot(chain, block_id).await?;

    let pallet = AssetsPallet::Assets;
    if !chain.has_storage_map(at, pallet.name(), "Asset").await? {
        return Err(PalletError::PalletNotFound(pallet.to_string()));
    }

    let (height, details, metadata) = tokio::try_join!(
        chain.block_height(at),
        get_asset_details(chain, at, pallet, asset_id),
        get_asset_metadata(chain, at, pallet, asset_id),
    )?;
    tracing::debug!(
        asset_id,
        found_details = details.is_some(),
        found_metadata = metadata.is_some(),
        "Fetched asset info"
    );

    let ss58_prefix = state.chain_info.ss58_prefix;
    let render = |value: Option<StorageValue>| {
        value.map(|v| sanitize(&from_scale_value(&v, ss58_prefix)))
    };

    Ok(Json(PalletsAssetsInfoResponse {
        at: AtResponse {
            hash: at.to_string(),
            height: height.to_string(),
        },
        asset_info: render(details),
        asset_meta_data: render(metadata),
    }))
}
