// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! Saved wallet bookkeeping.
//!
//! Wallets are saved as a label plus the passphrase-encrypted WIF, in a
//! JSON file under the profile directory. Nothing here ever touches a
//! plain private key.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A wallet saved on disk
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SavedWallet {
    /// Name the user picked for it
    pub label: String,
    /// The passphrase-encrypted WIF
    pub key: String,
}

fn accounts_path(profile: &Path) -> PathBuf {
    profile.join("accounts.json")
}

/// All wallets saved under the given profile directory
pub(crate) fn load_wallets(profile: &Path) -> anyhow::Result<Vec<SavedWallet>> {
    let path = accounts_path(profile);
    if !path.exists() {
        return Ok(vec![]);
    }
    let contents = fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save a wallet, replacing any earlier one with the same label
pub(crate) fn save_wallet(
    profile: &Path,
    label: &str,
    encrypted: &str,
) -> anyhow::Result<()> {
    let mut wallets = load_wallets(profile)?;
    let entry = SavedWallet {
        label: label.to_string(),
        key: encrypted.to_string(),
    };
    match wallets.iter_mut().find(|w| w.label == label) {
        Some(existing) => *existing = entry,
        None => wallets.push(entry),
    }
    let contents = serde_json::to_string_pretty(&wallets)?;
    fs::write(accounts_path(profile), contents)?;
    Ok(())
}
