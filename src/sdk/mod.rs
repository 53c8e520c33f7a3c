// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! The seam towards the chain: balances, history, claims and transaction
//! submission live behind [WalletSdk], with [ApiClient] as the HTTP-backed
//! implementation. Key material never crosses the seam; the synchronous
//! key utilities are local code.

mod api;
pub mod crypto;
pub mod keys;

pub use api::ApiClient;
pub use keys::Account;

use async_trait::async_trait;
use serde::Deserialize;

use crate::currency::{Fixed8, Gas};
use crate::error::Error;

/// The two native assets of the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    /// The indivisible governance asset
    Neo,
    /// The divisible utility asset
    Gas,
}

impl Asset {
    /// Ticker symbol, as used in user-facing messages
    pub fn symbol(&self) -> &'static str {
        match self {
            Asset::Neo => "NEO",
            Asset::Gas => "GAS",
        }
    }

    /// The on-chain identifier of the asset
    pub fn asset_id(&self) -> &'static str {
        match self {
            Asset::Neo => "c56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b",
            Asset::Gas => "602c79718b16e442de58778e148d0b1084e3b2dffd5de6b7b16cee7969282de7",
        }
    }

    /// The other asset
    pub fn toggled(&self) -> Self {
        match self {
            Asset::Neo => Asset::Gas,
            Asset::Gas => Asset::Neo,
        }
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Asset::Neo => write!(f, "Neo"),
            Asset::Gas => write!(f, "Gas"),
        }
    }
}

impl std::str::FromStr for Asset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NEO" => Ok(Asset::Neo),
            "GAS" => Ok(Asset::Gas),
            _ => Err(Error::UnknownToken(s.into())),
        }
    }
}

/// NEO and GAS holdings of an address
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Balance {
    /// Whole units of NEO
    pub neo: f64,
    /// GAS amount
    pub gas: f64,
}

/// GAS claimable by an address, in raw [Fixed8] units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ClaimAmounts {
    /// Ready to claim now
    pub available: Fixed8,
    /// Accrued but waiting on a spend of the NEO that earned it
    pub unavailable: Fixed8,
}

impl ClaimAmounts {
    /// Everything accrued, claimable or not
    pub fn total(&self) -> Gas {
        Gas::from_fixed8(self.available + self.unavailable)
    }
}

/// One entry of an address's transaction history
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TxHistoryEntry {
    /// Transaction hash
    pub txid: String,
    /// NEO moved in or out by this transaction
    pub neo: f64,
    /// GAS moved in or out by this transaction
    pub gas: f64,
    /// Block the transaction was recorded in
    pub block_index: u64,
}

/// Descriptive data of a NEP-5 token contract
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenInfo {
    /// Full token name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Decimal places the token subdivides into
    pub decimals: u8,
    /// Total issued supply, in whole tokens
    pub total_supply: f64,
}

/// Outcome of a submitted transaction
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SendReceipt {
    /// Whether the network accepted the transaction
    pub result: bool,
    /// Hash of the accepted transaction, when one was produced
    pub txid: Option<String>,
}

/// Chain lookups and transaction submission
///
/// Everything the wallet knows about the chain comes through here, so
/// tests can swap the network for a scripted double. The two synchronous
/// methods are pure derivations with default implementations; a custom
/// implementation rarely needs to touch them.
#[async_trait]
pub trait WalletSdk: Send + Sync {
    /// NEO and GAS balances of an address
    async fn get_balance(&self, address: &str) -> Result<Balance, Error>;

    /// Balance an address holds of a NEP-5 token, in whole tokens
    async fn get_token_balance(&self, script_hash: &str, address: &str) -> Result<f64, Error>;

    /// Descriptive data of a NEP-5 token contract
    async fn get_token_info(&self, script_hash: &str) -> Result<TokenInfo, Error>;

    /// Past transactions touching an address, newest first
    async fn get_transaction_history(&self, address: &str) -> Result<Vec<TxHistoryEntry>, Error>;

    /// GAS claimable by an address
    async fn get_claim_amounts(&self, address: &str) -> Result<ClaimAmounts, Error>;

    /// Current height of the wallet API's view of the chain
    async fn get_wallet_db_height(&self) -> Result<u64, Error>;

    /// Send an amount of NEO or GAS to an address
    async fn do_send_asset(
        &self,
        to: &str,
        wif: &str,
        asset: Asset,
        amount: f64,
    ) -> Result<SendReceipt, Error>;

    /// Claim all GAS currently available to the key's address
    async fn do_claim_all_gas(&self, wif: &str) -> Result<SendReceipt, Error>;

    /// Whether a string is a well-formed address
    fn verify_address(&self, address: &str) -> bool {
        keys::verify_address(address)
    }

    /// Decode a WIF and derive its address
    fn get_account_from_wif(&self, wif: &str) -> Result<Account, Error> {
        keys::account_from_wif(wif)
    }
}
