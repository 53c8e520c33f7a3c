// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

use std::fmt::{self, Display};

use neo_wallet::sdk::TxHistoryEntry;

/// One row of the rendered transaction history
pub struct TransactionHistory {
    entry: TxHistoryEntry,
}

impl TransactionHistory {
    pub fn header() -> String {
        format!(
            "{: ^9} | {: ^66} | {: >12} | {: >16}",
            "BLOCK", "TX_ID", "NEO", "GAS"
        )
    }
}

impl Display for TransactionHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{: >9} | {: <66} | {: >12} | {: >16.8}",
            self.entry.block_index, self.entry.txid, self.entry.neo, self.entry.gas
        )
    }
}

/// History entries come newest first from the API and stay that way
pub(crate) fn from_entries(entries: Vec<TxHistoryEntry>) -> Vec<TransactionHistory> {
    entries
        .into_iter()
        .map(|entry| TransactionHistory { entry })
        .collect()
}
