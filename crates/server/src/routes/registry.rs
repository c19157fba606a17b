// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Route registry backing the root endpoint's route listing.
//!
//! Only routes of enabled controllers are registered, so the listing always
//! matches what the router serves.

use axum::{Router, routing::MethodRouter};
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Prefix every versioned route is served under.
pub const API_VERSION: &str = "/v1";

/// A registered route, e.g. `get /v1/accounts/:accountId/asset-balances`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub path: String,
    pub method: String,
}

/// Shared, append-only list of routes.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry(Arc<RwLock<Vec<RouteInfo>>>);

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, path: &str, method: &str) {
        if let Ok(mut routes) = self.0.write() {
            routes.push(RouteInfo {
                path: path.to_string(),
                method: method.to_string(),
            });
        }
    }

    pub fn routes(&self) -> Vec<RouteInfo> {
        self.0.read().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0
            .read()
            .map(|routes| routes.iter().any(|r| r.path == path))
            .unwrap_or(false)
    }
}

/// Extension trait for registering routes with automatic registry tracking.
pub trait RegisterRoute<S: Clone + Send + Sync + 'static> {
    /// Route `path` to `handler` and record `prefix + path` in `registry`.
    /// The router itself is expected to be nested under `prefix`.
    fn route_registered(
        self,
        registry: &RouteRegistry,
        prefix: &str,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self;
}

impl<S: Clone + Send + Sync + 'static> RegisterRoute<S> for Router<S> {
    fn route_registered(
        self,
        registry: &RouteRegistry,
        prefix: &str,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self {
        registry.add(&format!("{prefix}{path}"), method);
        self.route(path, handler)
    }
}
