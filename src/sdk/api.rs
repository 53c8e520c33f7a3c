// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! HTTP implementation of the SDK seam against a wallet API node.
//!
//! Read endpoints are plain GETs returning JSON. The write endpoints take
//! a spend instruction authorized by a detached signature over the request
//! digest; the private key never leaves the process.

use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use url::Url;

use async_trait::async_trait;

use crate::currency::Gas;
use crate::error::Error;
use crate::sdk::keys;
use crate::sdk::{Asset, Balance, ClaimAmounts, SendReceipt, TokenInfo, TxHistoryEntry, WalletSdk};

/// A wallet API node reachable over HTTP
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Point a client at the root URL of a wallet API node
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    /// The node this client talks to
    pub fn endpoint(&self) -> &Url {
        &self.base
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.base.join(path)?;
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::ApiStatus(status));
        }
        Ok(resp.json().await?)
    }

    async fn post_json<T>(&self, path: &str, body: &serde_json::Value) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.base.join(path)?;
        let resp = self.client.post(url).json(body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::ApiStatus(status));
        }
        Ok(resp.json().await?)
    }
}

/// A detached authorization over a canonical instruction string
struct Authorization {
    address: String,
    public_key: String,
    signature: String,
}

fn authorize(wif: &str, instruction: &str) -> Result<Authorization, Error> {
    let key = keys::private_key_from_wif(wif)?;
    let secp = Secp256k1::new();
    let secret = SecretKey::from_slice(&key)?;
    let public = PublicKey::from_secret_key(&secp, &secret);

    let digest: [u8; 32] = Sha256::digest(instruction.as_bytes()).into();
    let msg = Message::from_digest_slice(&digest)?;
    let sig = secp.sign_ecdsa(&msg, &secret);

    Ok(Authorization {
        address: keys::address_from_public_key(&public.serialize()),
        public_key: hex::encode(public.serialize()),
        signature: hex::encode(sig.serialize_compact()),
    })
}

#[derive(Deserialize)]
struct AssetEntry {
    balance: f64,
}

#[derive(Deserialize)]
struct BalanceResponse {
    #[serde(rename = "NEO")]
    neo: AssetEntry,
    #[serde(rename = "GAS")]
    gas: AssetEntry,
}

#[derive(Deserialize)]
struct HistoryEntry {
    txid: String,
    #[serde(rename = "NEO")]
    neo: f64,
    #[serde(rename = "GAS")]
    gas: f64,
    block_index: u64,
}

#[derive(Deserialize)]
struct HistoryResponse {
    history: Vec<HistoryEntry>,
}

#[derive(Deserialize)]
struct HeightResponse {
    height: u64,
}

#[derive(Deserialize)]
struct TokenBalanceResponse {
    balance: f64,
}

#[async_trait]
impl WalletSdk for ApiClient {
    async fn get_balance(&self, address: &str) -> Result<Balance, Error> {
        let resp: BalanceResponse = self
            .get_json(&format!("v2/address/balance/{}", address))
            .await?;
        Ok(Balance {
            neo: resp.neo.balance,
            gas: resp.gas.balance,
        })
    }

    async fn get_token_balance(&self, script_hash: &str, address: &str) -> Result<f64, Error> {
        let resp: TokenBalanceResponse = self
            .get_json(&format!("v2/token/balance/{}/{}", script_hash, address))
            .await?;
        Ok(resp.balance)
    }

    async fn get_token_info(&self, script_hash: &str) -> Result<TokenInfo, Error> {
        self.get_json(&format!("v2/token/info/{}", script_hash))
            .await
    }

    async fn get_transaction_history(&self, address: &str) -> Result<Vec<TxHistoryEntry>, Error> {
        let resp: HistoryResponse = self
            .get_json(&format!("v2/address/history/{}", address))
            .await?;
        Ok(resp
            .history
            .into_iter()
            .map(|e| TxHistoryEntry {
                txid: e.txid,
                neo: e.neo,
                gas: e.gas,
                block_index: e.block_index,
            })
            .collect())
    }

    async fn get_claim_amounts(&self, address: &str) -> Result<ClaimAmounts, Error> {
        self.get_json(&format!("v2/address/claims/{}", address))
            .await
    }

    async fn get_wallet_db_height(&self) -> Result<u64, Error> {
        let resp: HeightResponse = self.get_json("v2/block/height").await?;
        Ok(resp.height)
    }

    async fn do_send_asset(
        &self,
        to: &str,
        wif: &str,
        asset: Asset,
        amount: f64,
    ) -> Result<SendReceipt, Error> {
        // NEO moves in whole units, GAS in Fixed8
        let raw_amount = match asset {
            Asset::Neo => amount as u64,
            Asset::Gas => Gas::from(amount).as_fixed8(),
        };
        let instruction = format!("transfer:{}:{}:{}", asset.asset_id(), to, raw_amount);
        let auth = authorize(wif, &instruction)?;

        let body = serde_json::json!({
            "asset_id": asset.asset_id(),
            "from": auth.address,
            "to": to,
            "amount": raw_amount,
            "public_key": auth.public_key,
            "signature": auth.signature,
        });
        self.post_json("v2/transaction/transfer", &body).await
    }

    async fn do_claim_all_gas(&self, wif: &str) -> Result<SendReceipt, Error> {
        let account = keys::account_from_wif(wif)?;
        let instruction = format!("claim:{}", account.address);
        let auth = authorize(wif, &instruction)?;

        let body = serde_json::json!({
            "address": auth.address,
            "public_key": auth.public_key,
            "signature": auth.signature,
        });
        self.post_json("v2/transaction/claim", &body).await
    }
}
