// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

use serde::Deserialize;
use std::path::Path;
use std::{fs, io};

use neo_wallet::state::metadata::Network;
use url::Url;

/// Endpoints for one network
#[derive(Debug, Deserialize, Clone)]
pub struct NetworkConfig {
    /// Wallet REST API
    pub(crate) api: Url,
    /// Market price ticker
    pub(crate) ticker: Url,
    /// Block explorer transaction page, if any
    pub(crate) explorer: Option<Url>,
}

/// Config holds the static settings of the wallet
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Network selected when none is given on the command line
    pub(crate) network: Network,
    pub(crate) mainnet: NetworkConfig,
    pub(crate) testnet: NetworkConfig,
}

/// Read a file that is allowed to be absent
fn read_optional(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

impl Config {
    /// Load the first config found: the profile directory, then the
    /// user's global config, then the compiled-in defaults
    pub fn load(profile: &Path) -> anyhow::Result<Config> {
        let local = profile.join("config.toml");

        // PANIC: a machine without a resolvable home directory has no
        // place for a global config, so stopping here is fine
        let global = dirs::home_dir()
            .expect("Cannot get home dir")
            .join(".config")
            .join(env!("CARGO_BIN_NAME"))
            .join("config.toml");

        let contents = match read_optional(&local)? {
            Some(contents) => contents,
            None => read_optional(&global)?.unwrap_or_else(|| {
                include_str!("../../default.config.toml").to_string()
            }),
        };

        Ok(toml::from_str(&contents)?)
    }
}
