// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod accounts;
pub mod health;
pub mod pallets;
pub mod runtime_queries;
