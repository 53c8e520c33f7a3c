// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! Sessions and the dashboard refresh over a scripted chain.

mod common;

use common::{token_info, MockPrices, MockSdk, ADDRESS, WIF};

use neo_wallet::sdk::{crypto, ClaimAmounts};
use neo_wallet::state::wallet::load_wallet_data;
use neo_wallet::state::{account, Store};
use neo_wallet::tokens::TOKENS;
use neo_wallet::Error;

#[tokio::test]
async fn a_refresh_fills_every_dashboard_slice() {
    let sdk = MockSdk::new();
    {
        let mut chain = sdk.chain.lock().await;
        chain.claims = ClaimAmounts {
            available: 586_435,
            unavailable: 250_000,
        };
        chain.token_balances.insert(TOKENS[0].script_hash.into(), 77.5);
    }
    let store = Store::new();
    let prices = MockPrices::quoting(44.5, 21.2);

    load_wallet_data(&store, &sdk, &prices, ADDRESS)
        .await
        .unwrap();

    let state = store.snapshot();
    assert_eq!(state.wallet.neo, 5.0);
    assert_eq!(state.wallet.gas, 1.0);
    assert!(state.wallet.loaded);
    assert_eq!(state.wallet.neo_price, 44.5);
    assert_eq!(state.wallet.gas_price, 21.2);
    assert_eq!(state.wallet.total_value(), 5.0 * 44.5 + 1.0 * 21.2);
    assert_eq!(state.wallet.transactions.len(), 2);
    assert_eq!(state.claim.available, 586_435);
    assert_eq!(state.claim.unavailable, 250_000);
    assert_eq!(state.metadata.block_height, 586_435);

    let rpx = state.wallet.token("RPX").unwrap();
    assert_eq!(rpx.balance, 77.5);
    assert_eq!(rpx.info.as_ref(), Some(&token_info("RPX")));
    // every tracked token got its contract details
    assert!(state.wallet.tokens.iter().all(|t| t.info.is_some()));
}

#[tokio::test]
async fn a_dead_ticker_or_contract_degrades_quietly() {
    let sdk = MockSdk::new();
    {
        let mut chain = sdk.chain.lock().await;
        // one tracked contract answers nothing at all
        chain.token_balances.remove(TOKENS[3].script_hash);
        chain.token_infos.remove(TOKENS[3].script_hash);
        chain.token_balances.insert(TOKENS[0].script_hash.into(), 12.0);
    }
    let store = Store::new();

    load_wallet_data(&store, &sdk, &MockPrices::dead(), ADDRESS)
        .await
        .unwrap();

    let state = store.snapshot();
    // balances and history still landed
    assert!(state.wallet.loaded);
    assert_eq!(state.wallet.transactions.len(), 2);
    // no quotes, so the valuations stay at zero
    assert_eq!(state.wallet.neo_price, 0.0);
    assert_eq!(state.wallet.total_value(), 0.0);
    // the dead token shows a zero balance instead of vanishing
    let qlc = state.wallet.token(TOKENS[3].symbol).unwrap();
    assert_eq!(qlc.balance, 0.0);
    assert_eq!(qlc.info, None);
    assert_eq!(state.wallet.token("RPX").unwrap().balance, 12.0);
}

#[tokio::test]
async fn a_failing_balance_lookup_reaches_the_caller() {
    let sdk = MockSdk::new();
    sdk.chain.lock().await.fail_balance = true;
    let store = Store::new();

    let res = load_wallet_data(&store, &sdk, &MockPrices::quoting(44.5, 21.2), ADDRESS).await;
    assert!(matches!(res, Err(Error::ApiStatus(_))));

    // the secondary lookups are not taken down with it
    let state = store.snapshot();
    assert!(!state.wallet.loaded);
    assert_eq!(state.metadata.block_height, 586_435);
    assert_eq!(state.wallet.neo_price, 44.5);
    assert_eq!(state.wallet.transactions.len(), 2);
}

#[tokio::test]
async fn logout_clears_the_session_but_not_the_chain_view() {
    let sdk = MockSdk::new();
    let store = Store::new();
    let account = account::login(&store, &sdk, WIF).expect("a session");

    load_wallet_data(
        &store,
        &sdk,
        &MockPrices::quoting(44.5, 21.2),
        &account.address,
    )
    .await
    .unwrap();
    assert!(store.select(|s| s.wallet.loaded));

    account::logout(&store);

    let state = store.snapshot();
    assert!(!state.account.logged_in);
    assert_eq!(state.account.wif, None);
    assert!(!state.wallet.loaded);
    assert_eq!(state.wallet.neo, 0.0);
    // the chain height is a property of the network, not the session
    assert_eq!(state.metadata.block_height, 586_435);
}

#[tokio::test]
async fn a_bad_key_flashes_the_login_error() {
    let sdk = MockSdk::new();
    let store = Store::new();

    let err = account::login(&store, &sdk, "garbage").unwrap_err();
    assert!(matches!(err, Error::InvalidWif));

    let status = store.select(|s| s.transactions.status.clone()).unwrap();
    assert!(!status.success);
    assert_eq!(status.message, "That is not a valid private key");
    assert!(!store.select(|s| s.account.logged_in));
}

#[tokio::test]
async fn an_encrypted_key_needs_its_passphrase() {
    let sdk = MockSdk::new();
    let blob = crypto::encrypt_wif(WIF, "correct horse").unwrap();

    let store = Store::new();
    let account = account::login_nep2(&store, &sdk, "correct horse", &blob)
        .await
        .unwrap();
    assert_eq!(account.wif, WIF);
    assert!(store.select(|s| s.account.logged_in));
    assert!(!store.select(|s| s.account.decrypting));

    let store = Store::new();
    let err = account::login_nep2(&store, &sdk, "battery staple", &blob)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::BadPassphrase));
    let status = store.select(|s| s.transactions.status.clone()).unwrap();
    assert_eq!(status.message, "Wrong passphrase or invalid encrypted key");
    assert!(!store.select(|s| s.account.logged_in));
}
