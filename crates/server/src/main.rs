// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::ServiceExt;
use axum::extract::Request;
use polkadot_assets_api::{app, logging, state::AppState};
use polkadot_assets_api_config::{Args, SidecarConfig};

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    args.load_env_file()?;

    let config = SidecarConfig::from_env()?;
    logging::init_with_config((&config.log).into())?;

    tracing::info!(
        env_file = %args.env_file,
        log_level = %config.log.level,
        substrate_url = %config.substrate.url,
        "Starting polkadot-assets-api v{}",
        env!("CARGO_PKG_VERSION")
    );

    let addr = format!("{}:{}", config.express.bind_host, config.express.port);
    let state = AppState::new(config).await?;
    let service = app::create_service(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{addr}");
    axum::serve(listener, ServiceExt::<Request>::into_make_service(service)).await?;

    Ok(())
}
