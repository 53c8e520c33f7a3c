// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! The state core of the wallet.
//!
//! Every slice of [AppState] pairs a plain data struct with a closed
//! action enum and a reducer; action creators run the async work and
//! dispatch plain actions into the [Store]. Reducers never suspend and
//! never touch the network, so the whole state machine can be driven and
//! asserted synchronously.

pub mod account;
pub mod claim;
pub mod dashboard;
pub mod metadata;
pub mod notifications;
pub mod transactions;
pub mod wallet;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::task::JoinHandle;

use account::{AccountAction, AccountState};
use claim::{ClaimAction, ClaimState};
use dashboard::{DashboardAction, DashboardState};
use metadata::{MetadataAction, MetadataState};
use notifications::{NotificationsAction, NotificationsState};
use transactions::{TransactionsAction, TransactionsState};
use wallet::{WalletAction, WalletState};

/// The full state of a wallet session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Login credentials and session flags
    pub account: AccountState,
    /// Balances, prices, history and token holdings
    pub wallet: WalletState,
    /// Send-form status and asset selection
    pub transactions: TransactionsState,
    /// Network choice and chain height
    pub metadata: MetadataState,
    /// GAS claim bookkeeping
    pub claim: ClaimState,
    /// Pane visibility flags
    pub dashboard: DashboardState,
    /// Pending toasts
    pub notifications: NotificationsState,
}

/// Every event the state responds to
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Session events
    Account(AccountAction),
    /// Balance and market data events
    Wallet(WalletAction),
    /// Send flow events
    Transactions(TransactionsAction),
    /// Network and height events
    Metadata(MetadataAction),
    /// Claim flow events
    Claim(ClaimAction),
    /// Pane toggles
    Dashboard(DashboardAction),
    /// Toast queue events
    Notifications(NotificationsAction),
}

impl From<AccountAction> for Action {
    fn from(a: AccountAction) -> Self {
        Action::Account(a)
    }
}
impl From<WalletAction> for Action {
    fn from(a: WalletAction) -> Self {
        Action::Wallet(a)
    }
}
impl From<TransactionsAction> for Action {
    fn from(a: TransactionsAction) -> Self {
        Action::Transactions(a)
    }
}
impl From<MetadataAction> for Action {
    fn from(a: MetadataAction) -> Self {
        Action::Metadata(a)
    }
}
impl From<ClaimAction> for Action {
    fn from(a: ClaimAction) -> Self {
        Action::Claim(a)
    }
}
impl From<DashboardAction> for Action {
    fn from(a: DashboardAction) -> Self {
        Action::Dashboard(a)
    }
}
impl From<NotificationsAction> for Action {
    fn from(a: NotificationsAction) -> Self {
        Action::Notifications(a)
    }
}

/// Apply one action to the state
///
/// Logout cuts across slices: everything tied to the session resets,
/// while the network choice and any still-queued toasts survive.
fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::Account(AccountAction::Logout) => {
            state.account = AccountState::default();
            state.wallet = WalletState::default();
            state.transactions = TransactionsState::default();
            state.claim = ClaimState::default();
            state.dashboard = DashboardState::default();
        }
        Action::Account(a) => account::reduce(&mut state.account, a),
        Action::Wallet(a) => wallet::reduce(&mut state.wallet, a),
        Action::Transactions(a) => transactions::reduce(&mut state.transactions, a),
        Action::Metadata(a) => metadata::reduce(&mut state.metadata, a),
        Action::Claim(a) => claim::reduce(&mut state.claim, a),
        Action::Dashboard(a) => dashboard::reduce(&mut state.dashboard, a),
        Action::Notifications(a) => notifications::reduce(&mut state.notifications, a),
    }
}

/// Handle to the shared state
///
/// Clones are cheap and all refer to the same state, so a store can be
/// handed to background tasks (the delayed clear) without ceremony.
/// There is no global instance; whoever owns the session builds one and
/// threads it through.
#[derive(Clone, Default)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
    taps: Arc<RwLock<Vec<flume::Sender<Action>>>>,
}

impl Store {
    /// A store holding the initial state
    pub fn new() -> Self {
        Self::default()
    }

    /// Run an action through the reducer and publish it to observers
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        {
            let mut state = self.state.write();
            reduce(&mut state, action.clone());
        }
        let mut taps = self.taps.write();
        taps.retain(|tap| tap.send(action.clone()).is_ok());
    }

    /// Dispatch an action after a delay
    ///
    /// The send flow uses this for the 5000 ms status clear; it is the
    /// only timer in the system.
    pub fn dispatch_later(&self, action: impl Into<Action>, delay: Duration) -> JoinHandle<()> {
        let store = self.clone();
        let action = action.into();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            store.dispatch(action);
        })
    }

    /// Read a value out of the current state
    pub fn select<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        f(&self.state.read())
    }

    /// Clone the entire current state
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    /// A channel carrying every action dispatched from now on
    ///
    /// UIs drain it to follow background events; tests assert exact
    /// action sequences on it. Dropping the receiver detaches it.
    pub fn observe(&self) -> flume::Receiver<Action> {
        let (tx, rx) = flume::unbounded();
        self.taps.write().push(tx);
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_reaches_the_right_slice() {
        let store = Store::new();
        store.dispatch(WalletAction::SetBalance { neo: 5.0, gas: 1.0 });
        assert_eq!(store.select(|s| s.wallet.neo), 5.0);
        assert_eq!(store.select(|s| s.wallet.gas), 1.0);
        assert_eq!(store.select(|s| s.metadata.block_height), 0);
    }

    #[test]
    fn logout_resets_session_slices_only() {
        let store = Store::new();
        store.dispatch(MetadataAction::SetNetwork(metadata::Network::TestNet));
        store.dispatch(MetadataAction::SetBlockHeight(586435));
        store.dispatch(AccountAction::Login {
            wif: "L4SLRcPgqNMAMwM3nFSxnh36f1v5omjPg3Ewy1tg2PnEon8AcHou".into(),
            address: "AWy7RNBVr9vDadRMK9p7i7Z1tL7GrLAxoh".into(),
        });
        store.dispatch(WalletAction::SetBalance { neo: 5.0, gas: 1.0 });

        store.dispatch(AccountAction::Logout);

        let state = store.snapshot();
        assert_eq!(state.account, AccountState::default());
        assert_eq!(state.wallet, WalletState::default());
        // the network choice is not part of the session
        assert_eq!(state.metadata.network, metadata::Network::TestNet);
        assert_eq!(state.metadata.block_height, 586435);
    }

    #[test]
    fn observers_see_actions_in_order() {
        let store = Store::new();
        let rx = store.observe();
        store.dispatch(WalletAction::SetNeoPrice(44.5));
        store.dispatch(WalletAction::SetGasPrice(21.2));
        let seen: Vec<Action> = rx.drain().collect();
        assert_eq!(
            seen,
            vec![
                Action::Wallet(WalletAction::SetNeoPrice(44.5)),
                Action::Wallet(WalletAction::SetGasPrice(21.2)),
            ]
        );
    }

    #[test]
    fn dropped_observers_are_pruned() {
        let store = Store::new();
        let rx = store.observe();
        drop(rx);
        // must not fail or leak the dead sender
        store.dispatch(WalletAction::SetNeoPrice(1.0));
        assert!(store.taps.read().is_empty());
    }
}
