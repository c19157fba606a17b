// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Formatting utilities for hex encoding, key casing and address conversion.

use sp_core::crypto::{AccountId32, Ss58AddressFormat, Ss58Codec};

/// Format bytes as hex string with "0x" prefix
pub fn hex_with_prefix(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// Lowercase only the first character ("DepositHeld" -> "depositHeld").
/// Used for enum variant names, which are already PascalCase.
pub fn lowercase_first_char(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a snake_case field name to lowerCamelCase ("min_balance" -> "minBalance").
pub fn snake_to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Encode a 32-byte account id as SS58 with the chain's prefix.
pub fn account_to_ss58(bytes: [u8; 32], ss58_prefix: u16) -> String {
    AccountId32::from(bytes).to_ss58check_with_version(Ss58AddressFormat::custom(ss58_prefix))
}
