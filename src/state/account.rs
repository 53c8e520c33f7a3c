// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! Session state: which key is logged in, if any.

use crate::error::Error;
use crate::sdk::{crypto, Account, WalletSdk};
use crate::state::{transactions, Store};

/// Login credentials and session flags
///
/// Everything here lives for the process only. Anything persisted to
/// disk is encrypted key material handled elsewhere, never this state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountState {
    /// The WIF the session was opened with
    pub wif: Option<String>,
    /// The address derived from the WIF
    pub address: Option<String>,
    /// Whether a session is open
    pub logged_in: bool,
    /// An encrypted-key login is busy decrypting
    pub decrypting: bool,
}

/// Session events
#[derive(Debug, Clone, PartialEq)]
pub enum AccountAction {
    /// Open a session for a decoded key
    Login {
        /// The key in WIF form
        wif: String,
        /// Its derived address
        address: String,
    },
    /// Flag the encrypted-key decryption as running or finished
    SetDecrypting(bool),
    /// Close the session; the root reducer resets every session slice
    Logout,
}

pub(crate) fn reduce(state: &mut AccountState, action: AccountAction) {
    match action {
        AccountAction::Login { wif, address } => {
            state.wif = Some(wif);
            state.address = Some(address);
            state.logged_in = true;
            state.decrypting = false;
        }
        AccountAction::SetDecrypting(flag) => state.decrypting = flag,
        AccountAction::Logout => *state = AccountState::default(),
    }
}

/// Open a session from a WIF
///
/// A key that does not decode flashes the invalid-key message through
/// the send-status channel, exactly like a failed send.
pub fn login<S: WalletSdk>(store: &Store, sdk: &S, wif: &str) -> Result<Account, Error> {
    match sdk.get_account_from_wif(wif) {
        Ok(account) => {
            store.dispatch(AccountAction::Login {
                wif: account.wif.clone(),
                address: account.address.clone(),
            });
            Ok(account)
        }
        Err(err) => {
            transactions::flash_event(store, false, "That is not a valid private key");
            Err(err)
        }
    }
}

/// Open a session from a passphrase-encrypted key
pub async fn login_nep2<S: WalletSdk>(
    store: &Store,
    sdk: &S,
    passphrase: &str,
    encrypted: &str,
) -> Result<Account, Error> {
    store.dispatch(AccountAction::SetDecrypting(true));
    match crypto::decrypt_wif(encrypted, passphrase) {
        Ok(wif) => {
            store.dispatch(AccountAction::SetDecrypting(false));
            login(store, sdk, &wif)
        }
        Err(err) => {
            store.dispatch(AccountAction::SetDecrypting(false));
            transactions::flash_event(store, false, "Wrong passphrase or invalid encrypted key");
            Err(err)
        }
    }
}

/// Close the open session
pub fn logout(store: &Store) {
    store.dispatch(AccountAction::Logout);
}
