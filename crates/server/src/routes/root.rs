// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Root endpoint: API information and the routes this instance serves.

use crate::routes::{RegisterRoute, RouteRegistry};
use crate::state::AppState;
use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

/// Handler for GET /
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "docs": "/openapi.json",
        "version": env!("CARGO_PKG_VERSION"),
        "listen": format!("{}:{}", state.config.express.bind_host, state.config.express.port),
        "specName": state.chain_info.spec_name,
        "controllers": state.profile.controllers.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
        "routes": state.route_registry.routes(),
    }))
}

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new().route_registered(registry, "", "/", "get", get(root_handler))
}
