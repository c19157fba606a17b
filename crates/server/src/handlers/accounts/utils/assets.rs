// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::chain::ChainStateAccessor;
use crate::handlers::accounts::{
    AccountsError, AssetApprovalResponse, AssetBalance, AssetBalances, BlockInfo,
};
use crate::handlers::runtime_queries::assets::{
    AssetsPallet, get_all_asset_ids, get_asset_account, get_asset_approval,
};
use crate::types::BlockHash;
use futures::future::try_join_all;
use sp_core::crypto::AccountId32;

async fn ensure_storage_map(
    chain: &dyn ChainStateAccessor,
    at: BlockHash,
    pallet: AssetsPallet,
    entry: &str,
) -> Result<(), AccountsError> {
    if chain.has_storage_map(at, pallet.name(), entry).await? {
        Ok(())
    } else {
        Err(AccountsError::PalletNotAvailable(pallet))
    }
}

/// Balances of `account` for `asset_ids` at block `at`.
///
/// An empty `asset_ids` queries every asset registered in the pallet. Given
/// ids are queried in order, duplicates included.
pub async fn query_asset_balances(
    chain: &dyn ChainStateAccessor,
    pallet: AssetsPallet,
    at: BlockHash,
    account: &AccountId32,
    asset_ids: &[u32],
) -> Result<AssetBalances, AccountsError> {
    ensure_storage_map(chain, at, pallet, "Account").await?;

    let asset_ids = if asset_ids.is_empty() {
        let discovered = get_all_asset_ids(chain, at, pallet).await?;
        tracing::debug!(pallet = %pallet, count = discovered.len(), "Discovered asset ids");
        discovered
    } else {
        asset_ids.to_vec()
    };

    let lookups = asset_ids.iter().map(|&asset_id| async move {
        let record = get_asset_account(chain, at, pallet, asset_id, account).await?;
        Ok::<_, AccountsError>(AssetBalance::new(asset_id, record.fields()))
    });

    let (height, balances) = tokio::try_join!(
        async { chain.block_height(at).await.map_err(AccountsError::from) },
        try_join_all(lookups),
    )?;

    Ok(AssetBalances {
        at: BlockInfo {
            hash: at.to_string(),
            height: height.to_string(),
        },
        balances,
    })
}

/// Approval granted by `owner` to `delegate` over `asset_id` at block `at`.
pub async fn query_asset_approval(
    chain: &dyn ChainStateAccessor,
    pallet: AssetsPallet,
    at: BlockHash,
    owner: &AccountId32,
    asset_id: u32,
    delegate: &AccountId32,
) -> Result<AssetApprovalResponse, AccountsError> {
    ensure_storage_map(chain, at, pallet, "Approvals").await?;

    let (height, approval) = tokio::try_join!(
        chain.block_height(at),
        get_asset_approval(chain, at, pallet, asset_id, owner, delegate),
    )?;

    Ok(AssetApprovalResponse {
        at: BlockInfo {
            hash: at.to_string(),
            height: height.to_string(),
        },
        amount: approval.map(|a| a.amount.to_string()),
        deposit: approval.map(|a| a.deposit.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainError;
    use crate::chain::memory::InMemoryChainState;
    use crate::handlers::runtime_queries::assets::test_values::{
        approval, flat, legacy, record, with_reason,
    };
    use crate::chain::RpcChainState;
    use crate::chain::test_fixtures::{BLOCK_HASH, BLOCK_NUMBER, MockNode};
    use crate::handlers::runtime_queries::assets::{account_key, asset_id_key};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use parity_scale_codec::Encode;

    const AT: BlockHash = BlockHash(primitive_types::H256([7u8; 32]));

    fn alice() -> AccountId32 {
        AccountId32::from([1u8; 32])
    }

    fn bob() -> AccountId32 {
        AccountId32::from([2u8; 32])
    }

    /// Assets 3 and 7 held by Alice in different layouts, 9 registered but not held.
    fn chain_with_assets(pallet: &str) -> InMemoryChainState {
        let mut chain = InMemoryChainState::new()
            .with_block(1_000, AT)
            .with_map(AT, pallet, "Account")
            .with_map(AT, pallet, "Asset")
            .with_map(AT, pallet, "Approvals");
        for id in [3u32, 7, 9] {
            chain.insert(AT, pallet, "Asset", vec![asset_id_key(id)], record(vec![]));
        }
        chain.insert(
            AT,
            pallet,
            "Account",
            vec![asset_id_key(3), account_key(&alice())],
            with_reason(100, "Liquid", "Sufficient"),
        );
        chain.insert(
            AT,
            pallet,
            "Account",
            vec![asset_id_key(7), account_key(&alice())],
            legacy(5, true, false),
        );
        chain.insert(
            AT,
            pallet,
            "Account",
            vec![asset_id_key(9), account_key(&bob())],
            flat(1, false, true),
        );
        chain
    }

    #[tokio::test]
    async fn test_given_ids_keep_order_and_duplicates() {
        let chain = chain_with_assets("Assets");
        let result = query_asset_balances(&chain, AssetsPallet::Assets, AT, &alice(), &[3, 7, 3])
            .await
            .unwrap();

        assert_eq!(
            result.at,
            BlockInfo {
                hash: AT.to_string(),
                height: "1000".to_string()
            }
        );
        let ids: Vec<u32> = result.balances.iter().map(|b| b.asset_id).collect();
        assert_eq!(ids, vec![3, 7, 3]);
        assert_eq!(result.balances[0], result.balances[2]);
        assert_eq!(result.balances[0].balance.as_deref(), Some("100"));
        assert_eq!(result.balances[0].is_sufficient, Some(true));
        assert_eq!(result.balances[1].is_frozen, Some(true));
        assert_eq!(chain.fetch_count(), 3);
    }

    #[tokio::test]
    async fn test_missing_record_yields_null_fields() {
        let chain = chain_with_assets("Assets");
        let result = query_asset_balances(&chain, AssetsPallet::Assets, AT, &alice(), &[42])
            .await
            .unwrap();
        assert_eq!(result.balances, vec![AssetBalance::new(42, None)]);
    }

    #[tokio::test]
    async fn test_empty_ids_discover_then_fetch() {
        let chain = chain_with_assets("PoolAssets");
        let mut result =
            query_asset_balances(&chain, AssetsPallet::PoolAssets, AT, &alice(), &[])
                .await
                .unwrap();

        result.balances.sort_by_key(|b| b.asset_id);
        let ids: Vec<u32> = result.balances.iter().map(|b| b.asset_id).collect();
        assert_eq!(ids, vec![3, 7, 9]);
        assert_eq!(result.balances[2], AssetBalance::new(9, None));
        assert_eq!(chain.fetch_count(), 3);
    }

    #[tokio::test]
    async fn test_pallet_not_available() {
        let chain = chain_with_assets("Assets");
        let err = query_asset_balances(&chain, AssetsPallet::PoolAssets, AT, &alice(), &[1])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AccountsError::PalletNotAvailable(AssetsPallet::PoolAssets)
        ));
        assert_eq!(chain.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_block_aborts() {
        let chain = chain_with_assets("Assets");
        let unknown = BlockHash::from([0xee; 32]);
        let err = query_asset_balances(&chain, AssetsPallet::Assets, unknown, &alice(), &[3])
            .await
            .unwrap_err();
        assert!(matches!(err, AccountsError::Chain(ChainError::BlockNotFound(_))));
    }

    #[tokio::test]
    async fn test_approval_present_and_absent() {
        let mut chain = chain_with_assets("Assets");
        chain.insert(
            AT,
            "Assets",
            "Approvals",
            vec![asset_id_key(3), account_key(&alice()), account_key(&bob())],
            approval(500, 10),
        );

        let present = query_asset_approval(&chain, AssetsPallet::Assets, AT, &alice(), 3, &bob())
            .await
            .unwrap();
        assert_eq!(present.amount.as_deref(), Some("500"));
        assert_eq!(present.deposit.as_deref(), Some("10"));
        assert_eq!(present.at.height, "1000");

        // Approvals are directional.
        let reversed = query_asset_approval(&chain, AssetsPallet::Assets, AT, &bob(), 3, &alice())
            .await
            .unwrap();
        assert_eq!(reversed.amount, None);
        assert_eq!(reversed.deposit, None);
    }

    #[tokio::test]
    async fn test_approval_pallet_not_available() {
        let chain = InMemoryChainState::new()
            .with_block(1, AT)
            .with_map(AT, "Assets", "Account");
        let err = query_asset_approval(&chain, AssetsPallet::Assets, AT, &alice(), 1, &bob())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The runtime does not include the Assets pallet at this block"
        );
    }

    async fn rpc_chain(node: MockNode) -> RpcChainState {
        RpcChainState::new(node.rpc_client(), Default::default())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_balances_over_rpc() {
        let mut record = 100u128.encode();
        record.extend([0u8, 1u8]);
        let node = MockNode::new().with_value(
            "Assets",
            "Account",
            &[3u32.encode(), [1u8; 32].to_vec()],
            record,
        );
        let chain = rpc_chain(node).await;
        let at: BlockHash = BLOCK_HASH.parse().unwrap();

        let result = query_asset_balances(&chain, AssetsPallet::Assets, at, &alice(), &[3, 4])
            .await
            .unwrap();
        assert_eq!(result.at.height, BLOCK_NUMBER.to_string());
        assert_eq!(result.balances[0].balance.as_deref(), Some("100"));
        assert_eq!(result.balances[0].is_frozen, Some(false));
        assert_eq!(result.balances[0].is_sufficient, Some(true));
        assert_eq!(result.balances[1], AssetBalance::new(4, None));
    }

    #[tokio::test]
    async fn test_unknown_block_over_rpc_is_not_found() {
        let chain = rpc_chain(MockNode::new().unknown_block()).await;
        let at: BlockHash = BLOCK_HASH.parse().unwrap();

        let err = query_asset_balances(&chain, AssetsPallet::Assets, at, &alice(), &[3])
            .await
            .unwrap_err();
        assert!(matches!(err, AccountsError::Chain(ChainError::BlockNotFound(_))));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
