// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! A scripted chain to drive the wallet flows without a network.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use neo_wallet::prices::PriceSource;
use neo_wallet::sdk::{
    Asset, Balance, ClaimAmounts, SendReceipt, TokenInfo, TxHistoryEntry, WalletSdk,
};
use neo_wallet::state::Action;
use neo_wallet::tokens::TOKENS;
use neo_wallet::Error;

/// A well-formed mainnet WIF to open sessions with
pub const WIF: &str = "L4SLRcPgqNMAMwM3nFSxnh36f1v5omjPg3Ewy1tg2PnEon8AcHou";

/// A well-formed mainnet address, used as recipient and lookup target
pub const ADDRESS: &str = "AWy7RNBVr9vDadRMK9p7i7Z1tL7GrLAxoh";

/// Everything the scripted chain answers with
pub struct Chain {
    pub balance: Balance,
    pub claims: ClaimAmounts,
    pub history: Vec<TxHistoryEntry>,
    pub height: u64,
    /// Token balances by contract script hash; a missing entry fails the lookup
    pub token_balances: HashMap<String, f64>,
    /// Token details by contract script hash; a missing entry fails the lookup
    pub token_infos: HashMap<String, TokenInfo>,
    /// Whether the network accepts submitted transactions
    pub accept: bool,
    /// Answer the balance lookup with an error
    pub fail_balance: bool,
    /// Transfers submitted so far, as (recipient, asset, amount)
    pub sends: Vec<(String, Asset, f64)>,
    /// Claim transactions submitted so far
    pub claims_made: u32,
}

impl Default for Chain {
    fn default() -> Self {
        let mut token_balances = HashMap::new();
        let mut token_infos = HashMap::new();
        for def in &TOKENS {
            token_balances.insert(def.script_hash.to_string(), 0.0);
            token_infos.insert(def.script_hash.to_string(), token_info(def.symbol));
        }
        Self {
            balance: Balance { neo: 5.0, gas: 1.0 },
            claims: ClaimAmounts::default(),
            history: sample_history(),
            height: 586_435,
            token_balances,
            token_infos,
            accept: true,
            fail_balance: false,
            sends: Vec::new(),
            claims_made: 0,
        }
    }
}

/// Contract details the scripted chain hands out for a tracked token
pub fn token_info(symbol: &str) -> TokenInfo {
    TokenInfo {
        name: format!("{} Token", symbol),
        symbol: symbol.into(),
        decimals: 8,
        total_supply: 1_000_000_000.0,
    }
}

fn sample_history() -> Vec<TxHistoryEntry> {
    vec![
        TxHistoryEntry {
            txid: "c55a93e2d744b0bdb375cd4e1c0da4c47582c5d617b4e9e4570b50f3a0aff68a".into(),
            neo: 5.0,
            gas: 0.0,
            block_index: 586_430,
        },
        TxHistoryEntry {
            txid: "3631f66024ca6f5b033d7e0809eb993443374830025af904fb51b0e88310567c".into(),
            neo: 0.0,
            gas: 1.0,
            block_index: 586_001,
        },
    ]
}

/// A [WalletSdk] over a scripted in-memory chain
#[derive(Clone, Default)]
pub struct MockSdk {
    pub chain: Arc<Mutex<Chain>>,
}

impl MockSdk {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalletSdk for MockSdk {
    async fn get_balance(&self, _address: &str) -> Result<Balance, Error> {
        let chain = self.chain.lock().await;
        if chain.fail_balance {
            return Err(Error::ApiStatus(reqwest::StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(chain.balance)
    }

    async fn get_token_balance(&self, script_hash: &str, _address: &str) -> Result<f64, Error> {
        let chain = self.chain.lock().await;
        chain
            .token_balances
            .get(script_hash)
            .copied()
            .ok_or_else(|| Error::UnknownToken(script_hash.into()))
    }

    async fn get_token_info(&self, script_hash: &str) -> Result<TokenInfo, Error> {
        let chain = self.chain.lock().await;
        chain
            .token_infos
            .get(script_hash)
            .cloned()
            .ok_or_else(|| Error::UnknownToken(script_hash.into()))
    }

    async fn get_transaction_history(&self, _address: &str) -> Result<Vec<TxHistoryEntry>, Error> {
        Ok(self.chain.lock().await.history.clone())
    }

    async fn get_claim_amounts(&self, _address: &str) -> Result<ClaimAmounts, Error> {
        Ok(self.chain.lock().await.claims)
    }

    async fn get_wallet_db_height(&self) -> Result<u64, Error> {
        Ok(self.chain.lock().await.height)
    }

    async fn do_send_asset(
        &self,
        to: &str,
        _wif: &str,
        asset: Asset,
        amount: f64,
    ) -> Result<SendReceipt, Error> {
        let mut chain = self.chain.lock().await;
        chain.sends.push((to.into(), asset, amount));
        let accepted = chain.accept;
        Ok(SendReceipt {
            result: accepted,
            txid: accepted.then(|| format!("{:064x}", chain.sends.len())),
        })
    }

    async fn do_claim_all_gas(&self, _wif: &str) -> Result<SendReceipt, Error> {
        let mut chain = self.chain.lock().await;
        chain.claims_made += 1;
        let accepted = chain.accept;
        Ok(SendReceipt {
            result: accepted,
            txid: accepted.then(|| format!("{:064x}", chain.claims_made)),
        })
    }
}

/// A [PriceSource] answering with fixed quotes, or nothing at all
pub struct MockPrices {
    pub neo: f64,
    pub gas: f64,
    pub dead: bool,
}

impl MockPrices {
    pub fn quoting(neo: f64, gas: f64) -> Self {
        Self {
            neo,
            gas,
            dead: false,
        }
    }

    pub fn dead() -> Self {
        Self {
            neo: 0.0,
            gas: 0.0,
            dead: true,
        }
    }
}

#[async_trait]
impl PriceSource for MockPrices {
    async fn neo_usd(&self) -> Result<f64, Error> {
        if self.dead {
            return Err(Error::BadTickerData);
        }
        Ok(self.neo)
    }

    async fn gas_usd(&self) -> Result<f64, Error> {
        if self.dead {
            return Err(Error::BadTickerData);
        }
        Ok(self.gas)
    }
}

/// Everything the store has published since the last drain
pub fn drain(rx: &flume::Receiver<Action>) -> Vec<Action> {
    rx.drain().collect()
}
