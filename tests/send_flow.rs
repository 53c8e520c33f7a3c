// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! The send flow, from form entry to receipt, over a scripted chain.

mod common;

use common::{drain, MockSdk, ADDRESS, WIF};

use neo_wallet::sdk::Asset;
use neo_wallet::state::dashboard::{DashboardAction, Pane};
use neo_wallet::state::transactions::{self, SendEntry, TransactionsAction, CLEAR_DELAY};
use neo_wallet::state::wallet::WalletAction;
use neo_wallet::state::{account, Action, Store};
use neo_wallet::Error;

/// A logged-in session holding 5 NEO and 1 GAS
fn session(sdk: &MockSdk) -> Store {
    let store = Store::new();
    account::login(&store, sdk, WIF).expect("a session");
    store.dispatch(WalletAction::SetBalance { neo: 5.0, gas: 1.0 });
    store
}

fn entry(address: &str, amount: f64) -> SendEntry {
    SendEntry {
        address: address.into(),
        amount,
    }
}

#[tokio::test(start_paused = true)]
async fn invalid_address_flashes_and_clears() {
    let sdk = MockSdk::new();
    let store = session(&sdk);
    let rx = store.observe();

    assert!(!transactions::submit_send(
        &store,
        &sdk,
        &entry("not an address", 1.0)
    ));

    assert_eq!(
        drain(&rx),
        vec![Action::Transactions(TransactionsAction::SendEvent {
            success: false,
            message: "The address you entered was not valid.".into(),
        })]
    );
    let status = store.select(|s| s.transactions.status.clone()).unwrap();
    assert!(!status.success);

    // the paused clock jumps straight to the scheduled clear
    let flashed = tokio::time::Instant::now();
    assert_eq!(
        rx.recv_async().await.unwrap(),
        Action::Transactions(TransactionsAction::ClearTransactionEvent)
    );
    assert_eq!(flashed.elapsed(), CLEAR_DELAY);
    assert_eq!(store.select(|s| s.transactions.status.clone()), None);
}

#[tokio::test]
async fn unparsable_amounts_are_caught_before_the_asset_rules() {
    let sdk = MockSdk::new();
    let store = session(&sdk);
    let rx = store.observe();

    assert!(!transactions::submit_send(
        &store,
        &sdk,
        &entry(ADDRESS, f64::NAN)
    ));
    assert_eq!(
        drain(&rx),
        vec![Action::Transactions(TransactionsAction::SendEvent {
            success: false,
            message: "You must enter a valid amount.".into(),
        })]
    );
}

#[tokio::test]
async fn fractional_neo_is_rejected() {
    let sdk = MockSdk::new();
    let store = session(&sdk);
    let rx = store.observe();

    assert!(!transactions::submit_send(&store, &sdk, &entry(ADDRESS, 1.5)));
    assert_eq!(
        drain(&rx),
        vec![Action::Transactions(TransactionsAction::SendEvent {
            success: false,
            message: "You cannot send fractional amounts of Neo.".into(),
        })]
    );
}

#[tokio::test]
async fn overdrawn_amounts_name_the_asset() {
    let sdk = MockSdk::new();
    let store = session(&sdk);
    let rx = store.observe();

    assert!(!transactions::submit_send(&store, &sdk, &entry(ADDRESS, 6.0)));
    store.dispatch(TransactionsAction::ToggleAsset);
    assert!(!transactions::submit_send(&store, &sdk, &entry(ADDRESS, 2.0)));

    assert_eq!(
        drain(&rx),
        vec![
            Action::Transactions(TransactionsAction::SendEvent {
                success: false,
                message: "You do not have enough NEO to send.".into(),
            }),
            Action::Transactions(TransactionsAction::ToggleAsset),
            Action::Transactions(TransactionsAction::SendEvent {
                success: false,
                message: "You do not have enough GAS to send.".into(),
            }),
        ]
    );
}

#[tokio::test]
async fn negative_amounts_are_rejected() {
    let sdk = MockSdk::new();
    let store = session(&sdk);
    let rx = store.observe();

    assert!(!transactions::submit_send(&store, &sdk, &entry(ADDRESS, -1.0)));
    assert_eq!(
        drain(&rx),
        vec![Action::Transactions(TransactionsAction::SendEvent {
            success: false,
            message: "You cannot send negative amounts of an asset.".into(),
        })]
    );
}

#[tokio::test]
async fn valid_entry_opens_the_confirmation_pane_only() {
    let sdk = MockSdk::new();
    let store = session(&sdk);
    let rx = store.observe();

    assert!(transactions::submit_send(&store, &sdk, &entry(ADDRESS, 4.0)));
    assert_eq!(
        drain(&rx),
        vec![Action::Dashboard(DashboardAction::TogglePane(Pane::Confirm))]
    );
    assert_eq!(store.select(|s| s.transactions.status.clone()), None);
    assert!(store.select(|s| s.dashboard.confirm_pane));
}

#[tokio::test]
async fn sending_the_entire_balance_is_allowed() {
    let sdk = MockSdk::new();
    let store = session(&sdk);

    assert!(transactions::submit_send(&store, &sdk, &entry(ADDRESS, 5.0)));
}

#[tokio::test]
async fn gas_entries_may_be_fractional() {
    let sdk = MockSdk::new();
    let store = session(&sdk);
    store.dispatch(TransactionsAction::ToggleAsset);
    let rx = store.observe();

    assert!(transactions::submit_send(&store, &sdk, &entry(ADDRESS, 0.5)));
    assert_eq!(
        drain(&rx),
        vec![Action::Dashboard(DashboardAction::TogglePane(Pane::Confirm))]
    );
}

#[tokio::test(start_paused = true)]
async fn confirmation_reports_progress_before_the_receipt() {
    let sdk = MockSdk::new();
    let store = session(&sdk);
    let entry = entry(ADDRESS, 4.0);
    assert!(transactions::submit_send(&store, &sdk, &entry));

    let rx = store.observe();
    let receipt = transactions::confirm_send(&store, &sdk, &entry)
        .await
        .unwrap();
    assert!(receipt.result);
    assert!(receipt.txid.is_some());

    assert_eq!(
        drain(&rx),
        vec![
            Action::Transactions(TransactionsAction::SendEvent {
                success: true,
                message: "Processing...".into(),
            }),
            Action::Dashboard(DashboardAction::TogglePane(Pane::Confirm)),
            Action::Transactions(TransactionsAction::SendEvent {
                success: true,
                message: "Transaction complete! Your balance will automatically update \
                          when the blockchain has processed it."
                    .into(),
            }),
        ]
    );
    // the pane the submit opened is closed again
    assert!(!store.select(|s| s.dashboard.confirm_pane));

    let sends = sdk.chain.lock().await.sends.clone();
    assert_eq!(sends, vec![(ADDRESS.to_string(), Asset::Neo, 4.0)]);

    // the completion status clears after the usual delay
    assert_eq!(
        rx.recv_async().await.unwrap(),
        Action::Transactions(TransactionsAction::ClearTransactionEvent)
    );
    assert_eq!(store.select(|s| s.transactions.status.clone()), None);
}

#[tokio::test]
async fn rejected_sends_flash_the_failure() {
    let sdk = MockSdk::new();
    sdk.chain.lock().await.accept = false;
    let store = session(&sdk);
    let entry = entry(ADDRESS, 4.0);
    assert!(transactions::submit_send(&store, &sdk, &entry));

    let rx = store.observe();
    let err = transactions::confirm_send(&store, &sdk, &entry)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::TxRejected));

    assert_eq!(
        drain(&rx),
        vec![
            Action::Transactions(TransactionsAction::SendEvent {
                success: true,
                message: "Processing...".into(),
            }),
            Action::Dashboard(DashboardAction::TogglePane(Pane::Confirm)),
            Action::Transactions(TransactionsAction::SendEvent {
                success: false,
                message: "Transaction failed!".into(),
            }),
        ]
    );
}

#[tokio::test]
async fn confirming_without_a_session_is_refused() {
    let sdk = MockSdk::new();
    let store = Store::new();
    let rx = store.observe();

    let err = transactions::confirm_send(&store, &sdk, &entry(ADDRESS, 1.0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotLoggedIn));
    assert!(drain(&rx).is_empty());
}
