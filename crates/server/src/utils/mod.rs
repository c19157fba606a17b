// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod block;
pub mod format;
pub mod sanitize;

pub use block::{BlockId, BlockIdParseError, resolve_snapshot};
pub use sanitize::{BigInteger, Sanitizable, ToSanitizable, from_scale_value, sanitize};
