// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs every request on the `http` target as `METHOD /path?query STATUS DURATIONms`.
///
/// 2xx/3xx are logged at DEBUG, 4xx at WARN and 5xx at ERROR, so the `http`
/// log level shows successful requests while `info` only shows failures.
pub async fn http_logger_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = match req.uri().query() {
        Some(query) => format!("{}?{}", req.uri().path(), query),
        None => req.uri().path().to_string(),
    };
    let start = Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    macro_rules! log_request {
        ($level:ident) => {
            tracing::$level!(
                target: "http",
                method = %method,
                path = %path,
                status,
                duration_ms,
                "{} {} {} {}ms",
                method,
                path,
                status,
                duration_ms
            )
        };
    }

    match status {
        200..=399 => log_request!(debug),
        400..=499 => log_request!(warn),
        _ => log_request!(error),
    }

    response
}
