// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! A mock node serving an assets runtime over the legacy JSON-RPC methods,
//! usable with `OnlineClient::from_rpc_client()`.

use super::metadata::test_support::{AccountId32, Approval, AssetAccount, AssetDetails, AssetMetadata};
use frame_metadata::v15::{
    CustomMetadata, ExtrinsicMetadata, OuterEnums, PalletConstantMetadata, PalletMetadata,
    PalletStorageMetadata, RuntimeMetadataV15, StorageEntryMetadata, StorageEntryModifier,
    StorageEntryType, StorageHasher,
};
use frame_metadata::{META_RESERVED, RuntimeMetadata, RuntimeMetadataPrefixed};
use parity_scale_codec::{Compact, Encode};
use scale_info::{MetaType, TypeInfo, meta_type};
use serde_json::{Value as Json, json, value::RawValue};
use sp_crypto_hashing::{blake2_128, twox_128};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use subxt_rpcs::RpcClient;
use subxt_rpcs::client::MockRpcClient;
use subxt_rpcs::client::mock_rpc_client::Json as MockJson;

pub const BLOCK_HASH: &str = "0x4242424242424242424242424242424242424242424242424242424242424242";
pub const GENESIS_HASH: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";
pub const BLOCK_NUMBER: u64 = 436;
pub const SPEC_VERSION: u32 = 1_004_000;
pub const SS58_PREFIX: u16 = 0;

#[derive(TypeInfo)]
pub enum RuntimeCall {
    Remark(Vec<u8>),
}

#[derive(TypeInfo)]
pub enum RuntimeEvent {
    Remarked,
}

#[derive(TypeInfo)]
pub enum RuntimeError {
    Other,
}

#[derive(TypeInfo)]
pub struct Runtime;

fn map_entry(
    name: &'static str,
    hashers: usize,
    key: MetaType,
    value: MetaType,
) -> StorageEntryMetadata {
    StorageEntryMetadata {
        name,
        modifier: StorageEntryModifier::Optional,
        ty: StorageEntryType::Map {
            hashers: vec![StorageHasher::Blake2_128Concat; hashers],
            key,
            value,
        },
        default: vec![0],
        docs: vec![],
    }
}

fn pallet(name: &'static str, index: u8, entries: Vec<StorageEntryMetadata>) -> PalletMetadata {
    PalletMetadata {
        name,
        storage: Some(PalletStorageMetadata {
            prefix: name,
            entries,
        }),
        calls: None,
        event: None,
        constants: vec![],
        error: None,
        index,
        docs: vec![],
    }
}

/// `System` with its SS58 prefix and an `Assets` pallet with the current
/// storage layout. `PoolAssets` is absent.
pub fn assets_runtime_metadata() -> RuntimeMetadataPrefixed {
    let system = PalletMetadata {
        name: "System",
        storage: None,
        calls: None,
        event: None,
        constants: vec![PalletConstantMetadata {
            name: "SS58Prefix",
            ty: meta_type::<u16>(),
            value: SS58_PREFIX.encode(),
            docs: vec![],
        }],
        error: None,
        index: 0,
        docs: vec![],
    };
    let assets = pallet(
        "Assets",
        50,
        vec![
            map_entry("Asset", 1, meta_type::<u32>(), meta_type::<AssetDetails>()),
            map_entry(
                "Account",
                2,
                meta_type::<(u32, AccountId32)>(),
                meta_type::<AssetAccount>(),
            ),
            map_entry(
                "Approvals",
                3,
                meta_type::<(u32, AccountId32, AccountId32)>(),
                meta_type::<Approval>(),
            ),
            map_entry("Metadata", 1, meta_type::<u32>(), meta_type::<AssetMetadata>()),
            StorageEntryMetadata {
                name: "NextAssetId",
                modifier: StorageEntryModifier::Optional,
                ty: StorageEntryType::Plain(meta_type::<u32>()),
                default: vec![0],
                docs: vec![],
            },
        ],
    );

    let metadata = RuntimeMetadataV15::new(
        vec![system, assets],
        ExtrinsicMetadata {
            version: 4,
            address_ty: meta_type::<()>(),
            call_ty: meta_type::<RuntimeCall>(),
            signature_ty: meta_type::<()>(),
            extra_ty: meta_type::<()>(),
            signed_extensions: vec![],
        },
        meta_type::<Runtime>(),
        vec![],
        OuterEnums {
            call_enum_ty: meta_type::<RuntimeCall>(),
            event_enum_ty: meta_type::<RuntimeEvent>(),
            error_enum_ty: meta_type::<RuntimeError>(),
        },
        CustomMetadata {
            map: BTreeMap::new(),
        },
    );
    RuntimeMetadataPrefixed(META_RESERVED, RuntimeMetadata::V15(metadata))
}

/// Storage key of `pallet::entry` under `Blake2_128Concat` hashed key parts,
/// each given in its SCALE encoding.
pub fn storage_key(pallet: &str, entry: &str, parts: &[Vec<u8>]) -> Vec<u8> {
    let mut key = twox_128(pallet.as_bytes()).to_vec();
    key.extend(twox_128(entry.as_bytes()));
    for part in parts {
        key.extend(blake2_128(part));
        key.extend(part);
    }
    key
}

fn core_version_response() -> Vec<u8> {
    let mut encoded = Vec::new();
    "statemint".encode_to(&mut encoded);
    "statemint".encode_to(&mut encoded);
    1u32.encode_to(&mut encoded);
    SPEC_VERSION.encode_to(&mut encoded);
    0u32.encode_to(&mut encoded);
    Compact(0u32).encode_to(&mut encoded);
    15u32.encode_to(&mut encoded);
    encoded
}

fn metadata_response() -> Vec<u8> {
    let metadata = assets_runtime_metadata().encode();
    let mut encoded = Compact(metadata.len() as u32).encode();
    encoded.extend(metadata);
    encoded
}

fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

fn bytes_of(value: &Json) -> Option<Vec<u8>> {
    hex::decode(value.as_str()?.trim_start_matches("0x")).ok()
}

fn params_of(params: Option<Box<RawValue>>) -> Vec<Json> {
    params
        .and_then(|p| serde_json::from_str::<Vec<Json>>(p.get()).ok())
        .unwrap_or_default()
}

type Storage = Arc<BTreeMap<Vec<u8>, Vec<u8>>>;

/// Builder of a single-block node holding the given raw storage.
#[derive(Default)]
pub struct MockNode {
    storage: BTreeMap<Vec<u8>, Vec<u8>>,
    unknown_block: bool,
    key_pages: Arc<AtomicUsize>,
}

impl MockNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `chain_getHeader` with `null`, as a node does for a hash it
    /// has never seen.
    pub fn unknown_block(mut self) -> Self {
        self.unknown_block = true;
        self
    }

    pub fn with_value(mut self, pallet: &str, entry: &str, parts: &[Vec<u8>], value: Vec<u8>) -> Self {
        self.storage.insert(storage_key(pallet, entry, parts), value);
        self
    }

    /// Counter of `state_getKeysPaged` calls served.
    pub fn key_pages(&self) -> Arc<AtomicUsize> {
        self.key_pages.clone()
    }

    pub fn rpc_client(self) -> RpcClient {
        let storage: Storage = Arc::new(self.storage);
        let key_pages = self.key_pages;
        let unknown_block = self.unknown_block;
        let core_version = core_version_response();
        let metadata = metadata_response();

        let get_storage = storage.clone();
        let paged_storage = storage.clone();
        let query_storage = storage;

        let mock = MockRpcClient::builder()
            .method_handler("rpc_methods", async |_params| {
                MockJson(json!({ "methods": [] }))
            })
            .method_handler("chain_getBlockHash", async |_params| MockJson(BLOCK_HASH))
            .method_handler("chain_getFinalizedHead", async |_params| MockJson(BLOCK_HASH))
            .method_handler("chain_getHeader", move |_params: Option<Box<RawValue>>| async move {
                if unknown_block {
                    return MockJson(Json::Null);
                }
                MockJson(json!({
                    "number": format!("0x{BLOCK_NUMBER:x}"),
                    "parentHash": GENESIS_HASH,
                    "stateRoot": GENESIS_HASH,
                    "extrinsicsRoot": GENESIS_HASH,
                    "digest": { "logs": [] }
                }))
            })
            .method_handler("state_getRuntimeVersion", async |_params| {
                MockJson(json!({ "specName": "statemint", "specVersion": SPEC_VERSION }))
            })
            .method_handler("state_call", move |params: Option<Box<RawValue>>| {
                let core_version = core_version.clone();
                let metadata = metadata.clone();
                async move {
                    let params = params_of(params);
                    match params.first().and_then(Json::as_str).unwrap_or_default() {
                        "Core_version" => MockJson(to_hex(&core_version)),
                        "Metadata_metadata_versions" => MockJson(to_hex(&Compact(0u32).encode())),
                        "Metadata_metadata" => MockJson(to_hex(&metadata)),
                        _ => MockJson("0x".to_string()),
                    }
                }
            })
            .method_handler("state_getStorage", move |params: Option<Box<RawValue>>| {
                let storage = get_storage.clone();
                async move {
                    let params = params_of(params);
                    let value = params
                        .first()
                        .and_then(bytes_of)
                        .and_then(|key| storage.get(&key).map(|v| to_hex(v)));
                    MockJson(json!(value))
                }
            })
            .method_handler("state_getKeysPaged", move |params: Option<Box<RawValue>>| {
                let storage = paged_storage.clone();
                let key_pages = key_pages.clone();
                async move {
                    key_pages.fetch_add(1, Ordering::SeqCst);
                    let params = params_of(params);
                    let prefix = params.first().and_then(bytes_of).unwrap_or_default();
                    let count = params.get(1).and_then(Json::as_u64).unwrap_or(u64::MAX) as usize;
                    let start_key = params.get(2).and_then(bytes_of);

                    let page: Vec<String> = storage
                        .keys()
                        .filter(|key| key.starts_with(&prefix))
                        .filter(|key| start_key.as_ref().is_none_or(|start| *key > start))
                        .take(count)
                        .map(|key| to_hex(key))
                        .collect();
                    MockJson(json!(page))
                }
            })
            .method_handler("state_queryStorageAt", move |params: Option<Box<RawValue>>| {
                let storage = query_storage.clone();
                async move {
                    let params = params_of(params);
                    let keys: BTreeSet<Vec<u8>> = params
                        .first()
                        .and_then(Json::as_array)
                        .map(|keys| keys.iter().filter_map(bytes_of).collect())
                        .unwrap_or_default();
                    let changes: Vec<Json> = keys
                        .iter()
                        .map(|key| json!([to_hex(key), storage.get(key).map(|v| to_hex(v))]))
                        .collect();
                    MockJson(json!([{ "block": BLOCK_HASH, "changes": changes }]))
                }
            })
            .build();
        RpcClient::new(mock)
    }
}
