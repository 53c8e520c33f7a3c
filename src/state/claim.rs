// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! GAS claims
//!
//! Claiming is a two-step dance. GAS accrues against NEO but only
//! becomes claimable once that NEO moves, so step one sends the whole
//! NEO balance back to its own address and marks the claim pending.
//! When a later refresh shows availability grew, step two claims it all.

use crate::currency::{Fixed8, Gas};
use crate::error::Error;
use crate::fallback::best_effort;
use crate::sdk::{Asset, WalletSdk};
use crate::state::transactions::{flash_event, TransactionsAction};
use crate::state::Store;

/// GAS claim bookkeeping for the open session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClaimState {
    /// Claimable right now, in raw [Fixed8] units
    pub available: Fixed8,
    /// Accrued but locked until the NEO that earned it moves, raw [Fixed8]
    pub unavailable: Fixed8,
    /// A self-send ran and the wallet waits for new availability
    pub claim_request: bool,
    /// Availability grew while a claim was pending
    pub claim_was_updated: bool,
    /// Parked after a successful claim until fresh GAS accrues
    pub disable_claim: bool,
}

impl ClaimState {
    /// Everything accrued, claimable or not
    pub fn total(&self) -> Gas {
        Gas::from_fixed8(self.available + self.unavailable)
    }
}

/// Claim flow events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimAction {
    /// Record fresh claim amounts
    SetClaim {
        /// Claimable now, raw [Fixed8]
        available: Fixed8,
        /// Still locked, raw [Fixed8]
        unavailable: Fixed8,
    },
    /// Mark a claim as pending or settled
    SetClaimRequest(bool),
    /// Park or release the claim button
    DisableClaim(bool),
}

pub(crate) fn reduce(state: &mut ClaimState, action: ClaimAction) {
    match action {
        ClaimAction::SetClaim {
            available,
            unavailable,
        } => {
            let grown = available > state.available;
            state.claim_was_updated = state.claim_request && grown;
            if grown && !state.claim_request {
                // fresh accrual releases a parked claim button
                state.disable_claim = false;
            }
            state.available = available;
            state.unavailable = unavailable;
        }
        ClaimAction::SetClaimRequest(pending) => {
            state.claim_request = pending;
            if !pending {
                state.claim_was_updated = false;
            }
        }
        ClaimAction::DisableClaim(parked) => state.disable_claim = parked,
    }
}

/// Fetch the claim amounts, if the wallet API answers
pub async fn sync_available_claim<S: WalletSdk>(store: &Store, sdk: &S, address: &str) {
    if let Some(amounts) = best_effort("claim amounts", sdk.get_claim_amounts(address)).await {
        store.dispatch(ClaimAction::SetClaim {
            available: amounts.available,
            unavailable: amounts.unavailable,
        });
    }
}

/// Step one of a claim: send the NEO balance to its own address
///
/// A successful self-send marks the claim pending; the next refresh that
/// shows grown availability hands over to [finish_claim].
pub async fn begin_claim<S: WalletSdk>(store: &Store, sdk: &S) -> Result<(), Error> {
    let (address, wif, neo) = store.select(|s| {
        (
            s.account.address.clone(),
            s.account.wif.clone(),
            s.wallet.neo,
        )
    });
    let (address, wif) = match (address, wif) {
        (Some(address), Some(wif)) => (address, wif),
        _ => return Err(Error::NotLoggedIn),
    };

    store.dispatch(TransactionsAction::SendEvent {
        success: true,
        message: "Sending NEO to yourself...".into(),
    });
    match sdk.do_send_asset(&address, &wif, Asset::Neo, neo).await {
        Ok(receipt) if receipt.result => {
            store.dispatch(ClaimAction::SetClaimRequest(true));
            flash_event(store, true, "Waiting for the claim to become available...");
            Ok(())
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

/// Step two of a claim: collect everything that became available
pub async fn finish_claim<S: WalletSdk>(store: &Store, sdk: &S) -> Result<(), Error> {
    let wif = store
        .select(|s| s.account.wif.clone())
        .ok_or(Error::NotLoggedIn)?;

    store.dispatch(TransactionsAction::SendEvent {
        success: true,
        message: "Claiming GAS...".into(),
    });
    match sdk.do_claim_all_gas(&wif).await {
        Ok(receipt) if receipt.result => {
            store.dispatch(ClaimAction::SetClaimRequest(false));
            store.dispatch(ClaimAction::DisableClaim(true));
            flash_event(
                store,
                true,
                "Claim was successful! Your balance will update once the \
                 blockchain has processed it.",
            );
            Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_only_counts_while_pending() {
        let mut state = ClaimState::default();
        reduce(
            &mut state,
            ClaimAction::SetClaim {
                available: 1000,
                unavailable: 0,
            },
        );
        assert!(!state.claim_was_updated);

        reduce(&mut state, ClaimAction::SetClaimRequest(true));
        reduce(
            &mut state,
            ClaimAction::SetClaim {
                available: 2500,
                unavailable: 0,
            },
        );
        assert!(state.claim_was_updated);
    }

    #[test]
    fn settling_the_request_clears_the_update_flag() {
        let mut state = ClaimState {
            claim_request: true,
            claim_was_updated: true,
            ..Default::default()
        };
        reduce(&mut state, ClaimAction::SetClaimRequest(false));
        assert!(!state.claim_request);
        assert!(!state.claim_was_updated);
    }

    #[test]
    fn fresh_accrual_releases_a_parked_button() {
        let mut state = ClaimState {
            disable_claim: true,
            ..Default::default()
        };
        reduce(
            &mut state,
            ClaimAction::SetClaim {
                available: 42,
                unavailable: 0,
            },
        );
        assert!(!state.disable_claim);
    }

    #[test]
    fn totals_cover_both_buckets() {
        let state = ClaimState {
            available: 150_000_000,
            unavailable: 50_000_000,
            ..Default::default()
        };
        assert_eq!(state.total(), Gas::from(2.0));
    }
}
