// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::logging::http_logger_middleware;
use crate::openapi::ApiDoc;
use crate::routes::{self, API_VERSION, RouteRegistry};
use crate::state::AppState;
use axum::{Json, Router, middleware, routing::get};
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Router for the state's chain profile. Routes of disabled controllers are
/// neither served nor listed at `/`.
pub fn create_app(mut state: AppState) -> Router {
    let registry = RouteRegistry::new();
    state.route_registry = registry.clone();

    Router::new()
        .merge(routes::root::routes(&registry))
        .nest(API_VERSION, routes::versioned_routes(&state.profile, &registry))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(middleware::from_fn(http_logger_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// [`create_app`] with trailing slashes trimmed before routing.
pub fn create_service(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(create_app(state))
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
