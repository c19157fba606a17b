// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::state::AppState;
use axum::{extract::State, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub spec_name: String,
    pub spec_version: u32,
}

/// Service liveness plus the runtime it was started against.
#[utoipa::path(
    get,
    path = "/v1/health",
    tag = "health",
    summary = "Health check",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        spec_name: state.chain_info.spec_name.clone(),
        spec_version: state.chain_info.spec_version,
    })
}
