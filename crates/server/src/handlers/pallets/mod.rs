// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Handlers for pallets-related endpoints.

pub mod assets;
pub mod common;

pub use assets::pallets_assets_asset_info;
