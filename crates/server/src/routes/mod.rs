// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod accounts;
pub mod health;
pub mod pallets;
pub mod registry;
pub mod root;

pub use registry::{API_VERSION, RegisterRoute, RouteRegistry};

use crate::state::AppState;
use axum::Router;
use polkadot_assets_api_config::{ChainProfile, Controller};

/// Routes of one controller, relative to [`API_VERSION`].
pub fn controller_routes(controller: Controller, registry: &RouteRegistry) -> Router<AppState> {
    match controller {
        Controller::AccountsAssets => accounts::assets_routes(registry),
        Controller::AccountsPoolAssets => accounts::pool_assets_routes(registry),
        Controller::PalletsAssets => pallets::assets_routes(registry),
    }
}

/// Versioned routes for a chain profile: health plus every enabled controller.
pub fn versioned_routes(profile: &ChainProfile, registry: &RouteRegistry) -> Router<AppState> {
    profile
        .controllers
        .iter()
        .fold(health::routes(registry), |router, &controller| {
            tracing::debug!(%controller, "Mounting controller");
            router.merge(controller_routes(controller, registry))
        })
}
