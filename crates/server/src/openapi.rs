// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Polkadot Assets API",
        description = "REST API for asset balances, approvals and asset details of Substrate chains running the assets pallet.",
        license(name = "GPL-3.0-or-later")
    ),
    servers(
        (url = "http://localhost:8080", description = "Localhost")
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "accounts", description = "Account asset and pool asset balances and approvals"),
        (name = "pallets", description = "Assets pallet details and metadata"),
    ),
    paths(
        crate::handlers::health::get_health,
        // Accounts
        crate::handlers::accounts::get_asset_balances::get_asset_balances,
        crate::handlers::accounts::get_asset_approvals::get_asset_approvals,
        crate::handlers::accounts::get_pool_asset_balances::get_pool_asset_balances,
        crate::handlers::accounts::get_pool_asset_approvals::get_pool_asset_approvals,
        // Pallets
        crate::handlers::pallets::assets::pallets_assets_asset_info,
    ),
)]
pub struct ApiDoc;
