// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common type wrappers for API responses

pub mod hash;

pub use hash::{BlockHash, BlockHashParseError};
