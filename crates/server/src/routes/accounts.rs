// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::handlers::accounts;
use crate::routes::{API_VERSION, RegisterRoute, RouteRegistry};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Asset balance and approval routes backed by the Assets pallet.
pub fn assets_routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/accounts/:accountId/asset-balances",
            "get",
            get(accounts::get_asset_balances),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/accounts/:accountId/asset-approvals",
            "get",
            get(accounts::get_asset_approvals),
        )
}

/// The same routes backed by the PoolAssets pallet.
pub fn pool_assets_routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/accounts/:accountId/pool-asset-balances",
            "get",
            get(accounts::get_pool_asset_balances),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/accounts/:accountId/pool-asset-approvals",
            "get",
            get(accounts::get_pool_asset_approvals),
        )
}
