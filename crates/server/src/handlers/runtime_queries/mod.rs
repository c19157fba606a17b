// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Runtime storage query functions.
//!
//! Standalone functions over a [`ChainStateAccessor`](crate::chain::ChainStateAccessor),
//! one submodule per pallet family.

pub mod assets;
