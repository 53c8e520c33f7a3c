// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! Market prices from a public ticker.
//!
//! The ticker answers `v1/ticker/{coin}/?convert=USD` with a one-element
//! JSON array whose `price_usd` field is, for whatever reason, a string.
//! Prices are decoration only; every caller treats a failure here as
//! "no price known".

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::error::Error;

/// USD market prices for the two native assets
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Current USD price of one NEO
    async fn neo_usd(&self) -> Result<f64, Error>;
    /// Current USD price of one GAS
    async fn gas_usd(&self) -> Result<f64, Error>;
}

/// HTTP client for a coinmarketcap-style v1 ticker
#[derive(Debug, Clone)]
pub struct PriceTicker {
    client: reqwest::Client,
    base: Url,
}

impl PriceTicker {
    /// Point at the root URL of a ticker service
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    async fn coin_usd(&self, coin: &str) -> Result<f64, Error> {
        let url = self.base.join(&format!("v1/ticker/{}/", coin))?;
        let resp = self
            .client
            .get(url)
            .query(&[("convert", "USD")])
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::ApiStatus(status));
        }
        let entries: Vec<TickerEntry> = resp.json().await?;
        entries
            .first()
            .and_then(|e| e.price_usd.parse::<f64>().ok())
            .ok_or(Error::BadTickerData)
    }
}

#[async_trait]
impl PriceSource for PriceTicker {
    async fn neo_usd(&self) -> Result<f64, Error> {
        self.coin_usd("neo").await
    }

    async fn gas_usd(&self) -> Result<f64, Error> {
        self.coin_usd("gas").await
    }
}

#[derive(Deserialize)]
struct TickerEntry {
    price_usd: String,
}
