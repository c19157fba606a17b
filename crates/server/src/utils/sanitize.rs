// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion of decoded chain values into JSON without precision loss.
//!
//! Every integer that reaches a response goes through [`sanitize`], which
//! renders it as a base-10 string. The input tree is a closed set of shapes
//! ([`Sanitizable`]); values that know how to present themselves implement
//! [`ToSanitizable`] and are expanded before the walk continues.
//!
//! ```text
//! {a: Raw(BigInt(u128::MAX))}  ->  {"a": "340282366920938463463374607431768211455"}
//! ```

use super::format::{account_to_ss58, hex_with_prefix, lowercase_first_char, snake_to_camel_case};
use crate::chain::{StorageValue, TypeHint};
use primitive_types::U256;
use scale_value::{Composite, Primitive, ValueDef};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Signed integer of up to 256 bits of magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigInteger {
    negative: bool,
    magnitude: U256,
}

impl BigInteger {
    /// From a little-endian unsigned 256-bit integer.
    pub fn from_u256_le(bytes: &[u8; 32]) -> Self {
        Self {
            negative: false,
            magnitude: U256::from_little_endian(bytes),
        }
    }

    /// From a little-endian two's complement signed 256-bit integer.
    pub fn from_i256_le(bytes: &[u8; 32]) -> Self {
        let raw = U256::from_little_endian(bytes);
        if bytes[31] & 0x80 == 0 {
            return Self {
                negative: false,
                magnitude: raw,
            };
        }
        let (magnitude, _) = (!raw).overflowing_add(U256::one());
        Self {
            negative: true,
            magnitude,
        }
    }
}

impl From<u128> for BigInteger {
    fn from(value: u128) -> Self {
        Self {
            negative: false,
            magnitude: U256::from(value),
        }
    }
}

impl From<i128> for BigInteger {
    fn from(value: i128) -> Self {
        Self {
            negative: value < 0,
            magnitude: U256::from(value.unsigned_abs()),
        }
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.magnitude.is_zero() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

/// A value that controls its own JSON presentation.
pub trait ToSanitizable: Send + Sync + fmt::Debug {
    fn to_sanitizable(&self) -> Sanitizable;
}

/// The shapes a response tree can take before sanitization.
#[derive(Debug, Clone)]
pub enum Sanitizable {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    BigInt(BigInteger),
    /// A wrapper exposing its integer under a raw property.
    Raw(Box<Sanitizable>),
    Custom(Arc<dyn ToSanitizable>),
    Array(Vec<Sanitizable>),
    Object(Vec<(String, Sanitizable)>),
}

/// Render a tree as JSON, turning every big integer into its decimal string.
///
/// Keys and element order are kept. Applying it to its own output (through
/// `Sanitizable::from`) changes nothing.
pub fn sanitize(value: &Sanitizable) -> Value {
    match value {
        Sanitizable::Null => Value::Null,
        Sanitizable::Bool(b) => Value::Bool(*b),
        Sanitizable::Number(n) => Value::Number(n.clone()),
        Sanitizable::String(s) => Value::String(s.clone()),
        Sanitizable::BigInt(n) => Value::String(n.to_string()),
        Sanitizable::Raw(inner) => sanitize(inner),
        Sanitizable::Custom(custom) => sanitize(&custom.to_sanitizable()),
        Sanitizable::Array(items) => Value::Array(items.iter().map(sanitize).collect()),
        Sanitizable::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), sanitize(value)))
                .collect::<Map<String, Value>>(),
        ),
    }
}

impl From<Value> for Sanitizable {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(fields) => Self::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

/// An account id that renders as SS58 with the chain's prefix.
#[derive(Debug)]
struct AccountIdView {
    bytes: [u8; 32],
    ss58_prefix: u16,
}

impl ToSanitizable for AccountIdView {
    fn to_sanitizable(&self) -> Sanitizable {
        Sanitizable::String(account_to_ss58(self.bytes, self.ss58_prefix))
    }
}

/// Map a decoded storage value onto the sanitizer's shapes.
///
/// Field names become lowerCamelCase, byte strings become `0x` hex, `Option`
/// collapses to its content or null, and account ids render as SS58.
pub fn from_scale_value(value: &StorageValue, ss58_prefix: u16) -> Sanitizable {
    match &value.value {
        ValueDef::Primitive(primitive) => from_primitive(primitive),
        ValueDef::BitSequence(bits) => Sanitizable::Array(bits.iter().map(Sanitizable::Bool).collect()),
        ValueDef::Variant(variant) => match (variant.name.as_str(), variant.values.len()) {
            ("None", 0) => Sanitizable::Null,
            ("Some", 1) => from_composite(&variant.values, TypeHint::Other, ss58_prefix),
            (name, 0) => Sanitizable::String(name.to_string()),
            (name, _) => Sanitizable::Object(vec![(
                lowercase_first_char(name),
                from_composite(&variant.values, TypeHint::Other, ss58_prefix),
            )]),
        },
        ValueDef::Composite(composite) => from_composite(composite, value.context, ss58_prefix),
    }
}

fn from_primitive(primitive: &Primitive) -> Sanitizable {
    match primitive {
        Primitive::Bool(b) => Sanitizable::Bool(*b),
        Primitive::Char(c) => Sanitizable::String(c.to_string()),
        Primitive::String(s) => Sanitizable::String(s.clone()),
        Primitive::U128(n) => Sanitizable::BigInt(BigInteger::from(*n)),
        Primitive::I128(n) => Sanitizable::BigInt(BigInteger::from(*n)),
        Primitive::U256(bytes) => Sanitizable::BigInt(BigInteger::from_u256_le(bytes)),
        Primitive::I256(bytes) => Sanitizable::BigInt(BigInteger::from_i256_le(bytes)),
    }
}

fn from_composite(
    composite: &Composite<TypeHint>,
    hint: TypeHint,
    ss58_prefix: u16,
) -> Sanitizable {
    match composite {
        Composite::Named(fields) => Sanitizable::Object(
            fields
                .iter()
                .map(|(name, value)| (snake_to_camel_case(name), from_scale_value(value, ss58_prefix)))
                .collect(),
        ),
        Composite::Unnamed(values) => {
            if hint == TypeHint::AccountId
                && let Some(bytes) = collect_account_bytes(composite)
            {
                return Sanitizable::Custom(Arc::new(AccountIdView { bytes, ss58_prefix }));
            }
            if hint == TypeHint::Bytes
                && let Some(bytes) = collect_bytes(composite)
            {
                return Sanitizable::String(hex_with_prefix(&bytes));
            }
            let items = || {
                Sanitizable::Array(
                    values
                        .iter()
                        .map(|v| from_scale_value(v, ss58_prefix))
                        .collect(),
                )
            };
            match (hint, values.as_slice()) {
                (TypeHint::Sequence | TypeHint::Bytes, _) => items(),
                (_, []) => Sanitizable::Null,
                // Newtype wrappers render as their content; 1-tuples do not.
                (TypeHint::Tuple, [_]) => items(),
                (_, [single]) => from_scale_value(single, ss58_prefix),
                _ => items(),
            }
        }
    }
}

fn collect_bytes(composite: &Composite<TypeHint>) -> Option<Vec<u8>> {
    composite
        .values()
        .map(|v| match &v.value {
            ValueDef::Primitive(Primitive::U128(n)) => u8::try_from(*n).ok(),
            _ => None,
        })
        .collect()
}

/// Account ids are a newtype around `[u8; 32]`; accept either layer.
fn collect_account_bytes(composite: &Composite<TypeHint>) -> Option<[u8; 32]> {
    let bytes = match composite.values().next().map(|v| &v.value) {
        Some(ValueDef::Composite(inner)) if composite.len() == 1 => collect_bytes(inner)?,
        _ => collect_bytes(composite)?,
    };
    bytes.try_into().ok()
}
