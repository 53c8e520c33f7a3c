// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! Network choice and chain height.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::fallback::best_effort;
use crate::sdk::WalletSdk;
use crate::state::Store;

/// Which chain the wallet talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    /// The production chain
    MainNet,
    /// The public test chain
    TestNet,
}

impl Default for Network {
    fn default() -> Self {
        Network::MainNet
    }
}

impl Network {
    /// The other network
    pub fn toggled(&self) -> Self {
        match self {
            Network::MainNet => Network::TestNet,
            Network::TestNet => Network::MainNet,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Network::MainNet => write!(f, "MainNet"),
            Network::TestNet => write!(f, "TestNet"),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::MainNet),
            "testnet" => Ok(Network::TestNet),
            other => Err(format!("Unknown network: {}", other)),
        }
    }
}

/// Network choice and chain height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetadataState {
    /// The chain this session talks to
    pub network: Network,
    /// Latest block height the wallet API reported, zero while unknown
    pub block_height: u64,
}

/// Network and height events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataAction {
    /// Switch chains
    SetNetwork(Network),
    /// Record a fresh chain height
    SetBlockHeight(u64),
}

pub(crate) fn reduce(state: &mut MetadataState, action: MetadataAction) {
    match action {
        MetadataAction::SetNetwork(network) => state.network = network,
        MetadataAction::SetBlockHeight(height) => state.block_height = height,
    }
}

/// Fetch the chain height, if the wallet API answers
pub async fn sync_block_height<S: WalletSdk>(store: &Store, sdk: &S) {
    if let Some(height) = best_effort("block height", sdk.get_wallet_db_height()).await {
        store.dispatch(MetadataAction::SetBlockHeight(height));
    }
}
