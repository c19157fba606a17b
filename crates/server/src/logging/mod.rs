// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod http_logger;
pub mod logger;

pub use http_logger::http_logger_middleware;
pub use logger::{LoggingConfig, LoggingError, init_with_config};
