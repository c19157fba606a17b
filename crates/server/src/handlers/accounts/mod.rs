// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Account-related handlers.

pub mod get_asset_approvals;
pub mod get_asset_balances;
pub mod get_pool_asset_approvals;
pub mod get_pool_asset_balances;
mod types;
pub mod utils;

pub use get_asset_approvals::get_asset_approvals;
pub use get_asset_balances::get_asset_balances;
pub use get_pool_asset_approvals::get_pool_asset_approvals;
pub use get_pool_asset_balances::get_pool_asset_balances;
pub use types::*;
