// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! Balances, market prices, history and token holdings.
//!
//! [load_wallet_data] is the dashboard refresh: seven secondary lookups
//! plus the primary balance fetch, run as one join. Secondary failures
//! only reach the logs; the primary outcome is the caller's to handle.

use crate::error::Error;
use crate::fallback::best_effort;
use crate::prices::PriceSource;
use crate::sdk::{TokenInfo, TxHistoryEntry, WalletSdk};
use crate::state::{claim, metadata, Store};
use crate::tokens::TOKENS;

/// Holdings of one tracked NEP-5 token
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBalance {
    /// Ticker symbol, unique within the wallet
    pub symbol: String,
    /// Balance in whole tokens
    pub balance: f64,
    /// Contract details, once the info lookup has answered
    pub info: Option<TokenInfo>,
}

/// Balances and market data of the open session
#[derive(Debug, Clone, PartialEq)]
pub struct WalletState {
    /// Whole units of NEO held
    pub neo: f64,
    /// GAS held
    pub gas: f64,
    /// USD price of one NEO, zero while unknown
    pub neo_price: f64,
    /// USD price of one GAS, zero while unknown
    pub gas_price: f64,
    /// Transaction history, newest first
    pub transactions: Vec<TxHistoryEntry>,
    /// Tracked token holdings, keyed by symbol
    pub tokens: Vec<TokenBalance>,
    /// Whether a balance has arrived since login
    pub loaded: bool,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            neo: 0.0,
            gas: 0.0,
            neo_price: 0.0,
            gas_price: 0.0,
            transactions: Vec::new(),
            tokens: TOKENS
                .iter()
                .map(|def| TokenBalance {
                    symbol: def.symbol.into(),
                    balance: 0.0,
                    info: None,
                })
                .collect(),
            loaded: false,
        }
    }
}

impl WalletState {
    /// USD value of the NEO holdings
    pub fn neo_value(&self) -> f64 {
        self.neo * self.neo_price
    }

    /// USD value of the GAS holdings
    pub fn gas_value(&self) -> f64 {
        self.gas * self.gas_price
    }

    /// USD value of NEO and GAS together
    pub fn total_value(&self) -> f64 {
        self.neo_value() + self.gas_value()
    }

    /// The tracked token with this symbol
    pub fn token(&self, symbol: &str) -> Option<&TokenBalance> {
        self.tokens.iter().find(|t| t.symbol == symbol)
    }
}

/// Balance and market data events
#[derive(Debug, Clone, PartialEq)]
pub enum WalletAction {
    /// Record fresh NEO/GAS balances
    SetBalance {
        /// Whole units of NEO
        neo: f64,
        /// GAS amount
        gas: f64,
    },
    /// Record the USD price of NEO
    SetNeoPrice(f64),
    /// Record the USD price of GAS
    SetGasPrice(f64),
    /// Forget both prices
    ResetPrice,
    /// Replace the transaction history
    SetTransactionHistory(Vec<TxHistoryEntry>),
    /// Replace the tracked token balances
    SetTokenBalances(Vec<TokenBalance>),
    /// Attach contract details to one tracked token
    SetTokenInfo {
        /// Symbol of the token the details belong to
        symbol: String,
        /// The contract details
        info: TokenInfo,
    },
}

pub(crate) fn reduce(state: &mut WalletState, action: WalletAction) {
    match action {
        WalletAction::SetBalance { neo, gas } => {
            state.neo = neo;
            state.gas = gas;
            state.loaded = true;
        }
        WalletAction::SetNeoPrice(price) => state.neo_price = price,
        WalletAction::SetGasPrice(price) => state.gas_price = price,
        WalletAction::ResetPrice => {
            state.neo_price = 0.0;
            state.gas_price = 0.0;
        }
        WalletAction::SetTransactionHistory(transactions) => state.transactions = transactions,
        WalletAction::SetTokenBalances(mut tokens) => {
            // the balance and info lookups race; carry known details over
            for token in &mut tokens {
                if token.info.is_none() {
                    token.info = state
                        .token(&token.symbol)
                        .and_then(|old| old.info.clone());
                }
            }
            state.tokens = tokens;
        }
        WalletAction::SetTokenInfo { symbol, info } => {
            if let Some(token) = state.tokens.iter_mut().find(|t| t.symbol == symbol) {
                token.info = Some(info);
            }
        }
    }
}

/// Fetch the USD price of NEO, if the ticker answers
pub async fn get_market_price_usd<P: PriceSource>(store: &Store, prices: &P) {
    if let Some(price) = best_effort("NEO price", prices.neo_usd()).await {
        store.dispatch(WalletAction::SetNeoPrice(price));
    }
}

/// Fetch the USD price of GAS, if the ticker answers
pub async fn get_gas_market_price_usd<P: PriceSource>(store: &Store, prices: &P) {
    if let Some(price) = best_effort("GAS price", prices.gas_usd()).await {
        store.dispatch(WalletAction::SetGasPrice(price));
    }
}

/// Fetch the NEO/GAS balances
///
/// This is the primary lookup of a refresh; its failure is the caller's
/// to surface.
pub async fn retrieve_balance<S: WalletSdk>(
    store: &Store,
    sdk: &S,
    address: &str,
) -> Result<(), Error> {
    let balance = sdk.get_balance(address).await?;
    store.dispatch(WalletAction::SetBalance {
        neo: balance.neo,
        gas: balance.gas,
    });
    Ok(())
}

/// Fetch the transaction history, keeping the old one on failure
pub async fn sync_transaction_history<S: WalletSdk>(store: &Store, sdk: &S, address: &str) {
    if let Some(history) =
        best_effort("transaction history", sdk.get_transaction_history(address)).await
    {
        store.dispatch(WalletAction::SetTransactionHistory(history));
    }
}

/// Fetch the balance of every tracked token
///
/// Tokens whose lookup fails show up with a zero balance rather than
/// dropping off the dashboard.
pub async fn retrieve_tokens_balance<S: WalletSdk>(store: &Store, sdk: &S, address: &str) {
    let mut tokens = Vec::with_capacity(TOKENS.len());
    for def in &TOKENS {
        let label = format!("{} balance", def.symbol);
        let balance = best_effort(&label, sdk.get_token_balance(def.script_hash, address))
            .await
            .unwrap_or(0.0);
        tokens.push(TokenBalance {
            symbol: def.symbol.into(),
            balance,
            info: None,
        });
    }
    store.dispatch(WalletAction::SetTokenBalances(tokens));
}

/// Fetch contract details for every tracked token
pub async fn retrieve_tokens_info<S: WalletSdk>(store: &Store, sdk: &S) {
    for def in &TOKENS {
        let label = format!("{} info", def.symbol);
        if let Some(info) = best_effort(&label, sdk.get_token_info(def.script_hash)).await {
            store.dispatch(WalletAction::SetTokenInfo {
                symbol: def.symbol.into(),
                info,
            });
        }
    }
}

/// Refresh everything the dashboard shows
///
/// The seven secondary lookups and the primary balance fetch run
/// concurrently and independently; a dead ticker or a failing token
/// contract cannot block the rest. Only the primary outcome is returned.
pub async fn load_wallet_data<S: WalletSdk, P: PriceSource>(
    store: &Store,
    sdk: &S,
    prices: &P,
    address: &str,
) -> Result<(), Error> {
    let (primary, ..) = tokio::join!(
        retrieve_balance(store, sdk, address),
        sync_transaction_history(store, sdk, address),
        claim::sync_available_claim(store, sdk, address),
        metadata::sync_block_height(store, sdk),
        get_market_price_usd(store, prices),
        get_gas_market_price_usd(store, prices),
        retrieve_tokens_balance(store, sdk, address),
        retrieve_tokens_info(store, sdk),
    );
    primary
}
