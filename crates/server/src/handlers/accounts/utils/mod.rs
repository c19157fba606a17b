// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility functions for account-related handlers.

use sp_core::crypto::{AccountId32, Ss58AddressFormat, Ss58Codec};

// ================================================================================================
// Address Validation Error
// ================================================================================================

/// Error type for address validation failures.
/// Converted to handler-specific errors via #[from].
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct AddressValidationError(pub String);

mod assets;

pub use assets::{query_asset_approval, query_asset_balances};

// ================================================================================================
// Address Validation
// ================================================================================================

/// Validate and parse account address (supports SS58 and hex formats)
///
/// SS58 addresses must use the chain's network prefix.
/// Hex addresses (0x-prefixed, 32 bytes) are accepted regardless of prefix.
pub fn validate_and_parse_address(
    addr: &str,
    ss58_prefix: u16,
) -> Result<AccountId32, AddressValidationError> {
    if let Ok((account, version)) = AccountId32::from_ss58check_with_version(addr) {
        if version == Ss58AddressFormat::custom(ss58_prefix) {
            return Ok(account);
        }
        return Err(AddressValidationError(format!(
            "Address '{}' uses SS58 prefix {} but expected prefix {}",
            addr,
            u16::from(version),
            ss58_prefix
        )));
    }

    if let Some(hex_part) = addr.strip_prefix("0x")
        && let Ok(bytes) = hex::decode(hex_part)
        && let Ok(arr) = <[u8; 32]>::try_from(bytes.as_slice())
    {
        return Ok(AccountId32::from(arr));
    }

    Err(AddressValidationError(format!(
        "'{addr}' is neither an SS58 address nor a 0x-prefixed 32-byte hex account id"
    )))
}

// ================================================================================================
// Tests
// ================================================================================================
