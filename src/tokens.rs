// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

use crate::error::Error;

/// A NEP-5 token the wallet tracks out of the box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenDef {
    /// Ticker symbol, unique within the registry
    pub symbol: &'static str,
    /// Contract script hash, hex encoded
    pub script_hash: &'static str,
}

/// Tokens queried on every balance refresh, keyed by symbol
pub const TOKENS: [TokenDef; 4] = [
    TokenDef {
        symbol: "RPX",
        script_hash: "ecc6b20d3ccac1ee9ef109af5e7cdb85c0c36384",
    },
    TokenDef {
        symbol: "DBC",
        script_hash: "b951ecbbc5fe37a9c280a76cb0ce0014827294cf",
    },
    TokenDef {
        symbol: "RHT",
        script_hash: "2328008e6f6c7bd157a342e789389eb034d9cbc4",
    },
    TokenDef {
        symbol: "QLC",
        script_hash: "0d821bd7b6d53f5c2b40e217c6defc8bbe896cf5",
    },
];

/// Look a token up by its ticker symbol
pub fn token_by_symbol(symbol: &str) -> Result<&'static TokenDef, Error> {
    TOKENS
        .iter()
        .find(|t| t.symbol == symbol)
        .ok_or_else(|| Error::UnknownToken(symbol.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_unique() {
        for (i, a) in TOKENS.iter().enumerate() {
            for b in TOKENS.iter().skip(i + 1) {
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(
            token_by_symbol("RPX").unwrap().script_hash,
            "ecc6b20d3ccac1ee9ef109af5e7cdb85c0c36384"
        );
        assert!(token_by_symbol("NOPE").is_err());
    }
}
