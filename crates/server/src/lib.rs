// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod chain;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod types;
pub mod utils;
