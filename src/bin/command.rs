// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

mod history;

use clap::Subcommand;
use std::fmt;

use crate::io::prompt;
use crate::settings::Settings;

use neo_wallet::format::format_gas;
use neo_wallet::sdk::{crypto, keys};
use neo_wallet::sdk::{Account, Asset, Balance, ClaimAmounts, SendReceipt};
use neo_wallet::tokens::TOKENS;
use neo_wallet::{ApiClient, Error, WalletSdk};

pub(crate) use history::{from_entries, TransactionHistory};

/// Commands that can be run against the wallet API
#[derive(PartialEq, Clone, Subcommand, Debug)]
pub(crate) enum Command {
    /// Create a new wallet key pair
    Create,

    /// Check the NEO and GAS balance of an address
    Balance {
        /// Address to query [default: the address of `--wif`]
        #[clap(short, long)]
        address: Option<String>,
    },

    /// Check the GAS claimable by an address
    Claims {
        /// Address to query [default: the address of `--wif`]
        #[clap(short, long)]
        address: Option<String>,
    },

    /// Show the transaction history of an address
    History {
        /// Address to query [default: the address of `--wif`]
        #[clap(short, long)]
        address: Option<String>,
    },

    /// Check the NEP-5 token balances of an address
    Tokens {
        /// Address to query [default: the address of `--wif`]
        #[clap(short, long)]
        address: Option<String>,
    },

    /// Send NEO or GAS through the network
    Send {
        /// Destination address
        #[clap(short, long)]
        rcvr: String,

        /// Asset to send [NEO, GAS]
        #[clap(short, long)]
        asset: Asset,

        /// Amount to send
        #[clap(short = 'm', long)]
        amt: f64,
    },

    /// Run in interactive mode (default)
    Interactive,
}

impl Command {
    /// Runs the command against the wallet API
    pub async fn run(
        self,
        sdk: &ApiClient,
        settings: &Settings,
    ) -> anyhow::Result<RunResult> {
        match self {
            Command::Create => {
                let key = keys::generate_private_key();
                let wif = keys::wif_from_private_key(&key);
                let account = keys::account_from_wif(&wif)?;
                let passphrase = prompt::create_passphrase()?;
                let encrypted = crypto::encrypt_wif(&account.wif, &passphrase)?;
                Ok(RunResult::Created(account, encrypted))
            }
            Command::Balance { address } => {
                let address = resolve_address(address, settings, sdk)?;
                let balance = sdk.get_balance(&address).await?;
                Ok(RunResult::Balance(balance))
            }
            Command::Claims { address } => {
                let address = resolve_address(address, settings, sdk)?;
                let claims = sdk.get_claim_amounts(&address).await?;
                Ok(RunResult::Claims(claims))
            }
            Command::History { address } => {
                let address = resolve_address(address, settings, sdk)?;
                let entries = sdk.get_transaction_history(&address).await?;
                Ok(RunResult::History(history::from_entries(entries)))
            }
            Command::Tokens { address } => {
                let address = resolve_address(address, settings, sdk)?;
                let mut holdings = Vec::with_capacity(TOKENS.len());
                for token in TOKENS {
                    let balance = sdk
                        .get_token_balance(token.script_hash, &address)
                        .await
                        .unwrap_or_default();
                    holdings.push((token.symbol, balance));
                }
                Ok(RunResult::Tokens(holdings))
            }
            Command::Send { rcvr, asset, amt } => {
                let wif = settings.wif.clone().ok_or(Error::NotLoggedIn)?;
                if !sdk.verify_address(&rcvr) {
                    return Err(Error::InvalidAddress.into());
                }
                if !amt.is_finite() {
                    anyhow::bail!("You must enter a valid amount.");
                }
                if asset == Asset::Neo && amt.fract() != 0.0 {
                    anyhow::bail!("You cannot send fractional amounts of Neo.");
                }
                if amt < 0.0 {
                    anyhow::bail!("You cannot send negative amounts of an asset.");
                }
                let receipt = sdk.do_send_asset(&rcvr, &wif, asset, amt).await?;
                if !receipt.result {
                    return Err(Error::TxRejected.into());
                }
                Ok(RunResult::Tx(receipt))
            }
            Command::Interactive => {
                // interactive mode has its own driver
                anyhow::bail!("this command cannot be run directly")
            }
        }
    }
}

/// An explicit address argument wins; without one the command falls back
/// to the address derived from the `--wif` key.
fn resolve_address(
    address: Option<String>,
    settings: &Settings,
    sdk: &ApiClient,
) -> anyhow::Result<String> {
    match address {
        Some(address) => {
            if sdk.verify_address(&address) {
                Ok(address)
            } else {
                Err(Error::InvalidAddress.into())
            }
        }
        None => {
            let wif = settings.wif.as_ref().ok_or(Error::NotLoggedIn)?;
            Ok(sdk.get_account_from_wif(wif)?.address)
        }
    }
}

/// Typed output of a headless command, rendered through Display
pub enum RunResult {
    Balance(Balance),
    Claims(ClaimAmounts),
    History(Vec<TransactionHistory>),
    Tokens(Vec<(&'static str, f64)>),
    Tx(SendReceipt),
    Created(Account, String),
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RunResult::*;
        match self {
            Balance(balance) => {
                write!(
                    f,
                    "> NEO balance is: {}\n> GAS balance is: {}",
                    balance.neo as u64,
                    format_gas(balance.gas, false)
                )
            }
            Claims(claims) => {
                write!(
                    f,
                    "> Available to claim: {} GAS\n> Once NEO transfers: {} GAS\n> Total: {} GAS",
                    format_gas(claims.available, false),
                    format_gas(claims.unavailable, false),
                    format_gas(claims.total(), false)
                )
            }
            History(entries) => {
                writeln!(f, "{}", TransactionHistory::header())?;
                for entry in entries {
                    writeln!(f, "{}", entry)?;
                }
                Ok(())
            }
            Tokens(holdings) => {
                let lines = holdings
                    .iter()
                    .map(|(symbol, balance)| format!("{}: {}", symbol, balance))
                    .collect::<Vec<String>>()
                    .join("\n> ");
                write!(f, "> {}", lines)
            }
            Tx(receipt) => match receipt.txid {
                Some(ref txid) => write!(f, "> Transaction sent: {}", txid),
                None => write!(f, "> Transaction accepted by the network"),
            },
            Created(account, encrypted) => {
                write!(
                    f,
                    "> Address: {}\n> Private key (WIF): {}\n> Encrypted key: {}\n\
                     Back up the WIF somewhere safe. The encrypted key is only\n\
                     usable together with its passphrase.",
                    account.address, account.wif, encrypted
                )
            }
        }
    }
}
