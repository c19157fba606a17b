// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoding of raw storage values against a runtime's type registry.

use super::accessor::{ChainError, StorageValue, TypeHint};
use scale_info::{PortableRegistry, TypeDef, TypeDefPrimitive};

const ACCOUNT_ID_TYPE: &str = "AccountId32";

/// Decode the raw value of `pallet::entry`, whose registry type is `value_ty`,
/// tagging every nested value with its [`TypeHint`].
pub fn decode_value(
    types: &PortableRegistry,
    value_ty: u32,
    pallet: &str,
    entry: &str,
    bytes: &[u8],
) -> Result<StorageValue, ChainError> {
    let value = scale_value::scale::decode_as_type(&mut &bytes[..], value_ty, types).map_err(
        |e| ChainError::ValueDecode {
            pallet: pallet.to_string(),
            entry: entry.to_string(),
            reason: e.to_string(),
        },
    )?;
    Ok(value.map_context(|id| type_hint(types, id)))
}

pub fn type_hint(types: &PortableRegistry, id: u32) -> TypeHint {
    let Some(ty) = types.resolve(id) else {
        return TypeHint::Other;
    };

    if ty.path.segments.last().map(String::as_str) == Some(ACCOUNT_ID_TYPE) {
        return TypeHint::AccountId;
    }

    let element = match &ty.type_def {
        TypeDef::Sequence(seq) => seq.type_param.id,
        TypeDef::Array(arr) => arr.type_param.id,
        TypeDef::Tuple(_) => return TypeHint::Tuple,
        _ => return TypeHint::Other,
    };
    match types.resolve(element).map(|t| &t.type_def) {
        Some(TypeDef::Primitive(TypeDefPrimitive::U8)) => TypeHint::Bytes,
        _ => TypeHint::Sequence,
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use parity_scale_codec::Encode;
    use scale_info::MetaType;
    use scale_value::{Composite, ValueDef};

    fn encoded_account(balance: u128, status: u8, reason: u8) -> Vec<u8> {
        let mut bytes = balance.encode();
        bytes.push(status);
        bytes.push(reason);
        bytes
    }

    #[test]
    fn test_decode_value_named_composite() {
        let assets = AssetsTypes::new();
        let value = assets.decode(assets.account, &encoded_account(1_000, 1, 1));

        let ValueDef::Composite(Composite::Named(fields)) = &value.value else {
            panic!("expected a named composite, got {value:?}");
        };
        let names: Vec<_> = fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["balance", "status", "reason", "extra"]);
        assert_eq!(fields[0].1.as_u128(), Some(1_000));
        assert_eq!(fields[3].1.context, TypeHint::Tuple);
    }

    #[test]
    fn test_decode_value_tags_bytes_and_accounts() {
        let assets = AssetsTypes::new();
        let mut bytes = 5u128.encode();
        bytes.extend(b"Tether".to_vec().encode());
        bytes.extend(b"USDT".to_vec().encode());
        bytes.extend(6u8.encode());
        bytes.extend(false.encode());

        let value = assets.decode(assets.metadata, &bytes);
        let ValueDef::Composite(Composite::Named(fields)) = &value.value else {
            panic!("expected a named composite");
        };
        assert_eq!(fields[1].1.context, TypeHint::Bytes);
        assert_eq!(fields[3].1.context, TypeHint::Other);

        let mut account = encoded_account(1, 0, 4);
        account.extend([7u8; 32]);
        account.extend(10u128.encode());
        let value = assets.decode(assets.account, &account);
        let ValueDef::Composite(Composite::Named(fields)) = &value.value else {
            panic!("expected a named composite");
        };
        let ValueDef::Variant(reason) = &fields[2].1.value else {
            panic!("expected a variant");
        };
        assert_eq!(reason.name, "DepositFrom");
        let depositor = reason.values.values().next().unwrap();
        assert_eq!(depositor.context, TypeHint::AccountId);
    }

    #[test]
    fn test_type_hint_sequences() {
        let mut ids = (0, 0, 0);
        let types = registry_with(|register| {
            ids.0 = register(MetaType::new::<Vec<u32>>());
            ids.1 = register(MetaType::new::<[u16; 2]>());
            ids.2 = register(MetaType::new::<[u8; 4]>());
        });
        assert_eq!(type_hint(&types, ids.0), TypeHint::Sequence);
        assert_eq!(type_hint(&types, ids.1), TypeHint::Sequence);
        assert_eq!(type_hint(&types, ids.2), TypeHint::Bytes);
        assert_eq!(type_hint(&types, 9_999), TypeHint::Other);
    }

    #[test]
    fn test_decode_value_rejects_truncated_bytes() {
        let assets = AssetsTypes::new();
        let result = decode_value(&assets.types, assets.approval, "Assets", "Approvals", &[1, 2, 3]);
        assert!(matches!(result, Err(ChainError::ValueDecode { .. })));
    }
}
