// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! The send flow: validation, confirmation, submission.
//!
//! Validation runs a fixed chain of checks and the first failure wins.
//! Every failure flashes its message through the send status and
//! schedules the clear; a fully valid entry opens the confirmation pane
//! and nothing else. Confirming reports progress optimistically, then
//! submits and reports the receipt.

use std::time::Duration;

use crate::error::Error;
use crate::sdk::{Asset, SendReceipt, WalletSdk};
use crate::state::dashboard::{DashboardAction, Pane};
use crate::state::Store;
use tokio::task::JoinHandle;

/// How long a transient send status stays up before it is cleared
pub const CLEAR_DELAY: Duration = Duration::from_millis(5000);

/// Outcome message of a send attempt
#[derive(Debug, Clone, PartialEq)]
pub struct SendStatus {
    /// Whether the attempt was (so far) successful
    pub success: bool,
    /// The user-facing message
    pub message: String,
}

/// Send-form status and asset selection
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionsState {
    /// The transient status line, absent when nothing is pending
    pub status: Option<SendStatus>,
    /// The asset the send form operates on
    pub selected_asset: Asset,
}

impl Default for TransactionsState {
    fn default() -> Self {
        Self {
            status: None,
            selected_asset: Asset::Neo,
        }
    }
}

/// Send flow events
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionsAction {
    /// Record the outcome message of a send attempt
    SendEvent {
        /// Whether the attempt was successful
        success: bool,
        /// The user-facing message
        message: String,
    },
    /// Drop the transient send status
    ClearTransactionEvent,
    /// Flip the send form between Neo and Gas
    ToggleAsset,
}

pub(crate) fn reduce(state: &mut TransactionsState, action: TransactionsAction) {
    match action {
        TransactionsAction::SendEvent { success, message } => {
            state.status = Some(SendStatus { success, message });
        }
        TransactionsAction::ClearTransactionEvent => state.status = None,
        TransactionsAction::ToggleAsset => {
            state.selected_asset = state.selected_asset.toggled();
        }
    }
}

/// Flash a send status and schedule the clear that takes it down
pub fn flash_event(store: &Store, success: bool, message: &str) -> JoinHandle<()> {
    store.dispatch(TransactionsAction::SendEvent {
        success,
        message: message.into(),
    });
    store.dispatch_later(TransactionsAction::ClearTransactionEvent, CLEAR_DELAY)
}

/// What the user typed into the send form
#[derive(Debug, Clone, PartialEq)]
pub struct SendEntry {
    /// Recipient address
    pub address: String,
    /// Amount of the selected asset
    pub amount: f64,
}

/// Run the validation chain over a send entry
///
/// Checks run in a fixed order and the first failure short-circuits:
/// address, then a finite-amount guard, the NEO whole-unit rule, the
/// balance ceiling, and last the negative-amount rule. The balance check
/// deliberately precedes the negative check.
pub fn validate_entry<S: WalletSdk>(
    sdk: &S,
    entry: &SendEntry,
    asset: Asset,
    balance: f64,
) -> Result<(), String> {
    if entry.address.is_empty() || !sdk.verify_address(&entry.address) {
        return Err("The address you entered was not valid.".into());
    }
    if !entry.amount.is_finite() {
        return Err("You must enter a valid amount.".into());
    }
    if asset == Asset::Neo && entry.amount.fract() != 0.0 {
        return Err("You cannot send fractional amounts of Neo.".into());
    }
    if entry.amount > balance {
        return Err(format!("You do not have enough {} to send.", asset.symbol()));
    }
    if entry.amount < 0.0 {
        return Err("You cannot send negative amounts of an asset.".into());
    }
    Ok(())
}

/// Submit the send form
///
/// An invalid entry flashes its message and schedules the clear; a valid
/// one opens the confirmation pane and dispatches nothing else. Returns
/// whether the pane opened.
pub fn submit_send<S: WalletSdk>(store: &Store, sdk: &S, entry: &SendEntry) -> bool {
    let (asset, balance) = store.select(|s| {
        let asset = s.transactions.selected_asset;
        let balance = match asset {
            Asset::Neo => s.wallet.neo,
            Asset::Gas => s.wallet.gas,
        };
        (asset, balance)
    });
    match validate_entry(sdk, entry, asset, balance) {
        Ok(()) => {
            store.dispatch(DashboardAction::TogglePane(Pane::Confirm));
            true
        }
        Err(message) => {
            flash_event(store, false, &message);
            false
        }
    }
}

/// The user confirmed a validated entry: submit it
///
/// Progress is reported optimistically: the "Processing..." status and
/// the pane toggle land before the request is first polled. The receipt
/// is then awaited and its outcome flashed, so a failed send is not
/// silently lost.
pub async fn confirm_send<S: WalletSdk>(
    store: &Store,
    sdk: &S,
    entry: &SendEntry,
) -> Result<SendReceipt, Error> {
    let (asset, wif) = store.select(|s| {
        (
            s.transactions.selected_asset,
            s.account.wif.clone(),
        )
    });
    let wif = wif.ok_or(Error::NotLoggedIn)?;

    store.dispatch(TransactionsAction::SendEvent {
        success: true,
        message: "Processing...".into(),
    });
    store.dispatch(DashboardAction::TogglePane(Pane::Confirm));

    match sdk
        .do_send_asset(&entry.address, &wif, asset, entry.amount)
        .await
    {
        Ok(receipt) if receipt.result => {
            flash_event(
                store,
                true,
                "Transaction complete! Your balance will automatically update \
                 when the blockchain has processed it.",
            );
            Ok(receipt)
        }
        Ok(_) => {
            flash_event(store, false, "Transaction failed!");
            Err(Error::TxRejected)
        }
        Err(err) => {
            flash_event(store, false, "Transaction failed!");
            Err(err)
        }
    }
}
