// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

use std::io;

/// Errors returned by this library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network error while talking to the wallet API or the price ticker
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The wallet API answered with a non-success status code
    #[error("The API responded with HTTP status {0}")]
    ApiStatus(reqwest::StatusCode),
    /// Invalid URL provided for the API or ticker
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    /// Filesystem errors
    #[error(transparent)]
    IO(#[from] io::Error),
    /// JSON serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Base58 errors
    #[error(transparent)]
    Base58(#[from] bs58::decode::Error),
    /// Elliptic curve errors
    #[error(transparent)]
    Secp(#[from] secp256k1::Error),
    /// Block cipher errors while decrypting key material
    #[error("Cipher error: {0:?}")]
    BlockMode(#[from] block_modes::BlockModeError),
    /// Cipher key or IV of an unexpected length
    #[error("Invalid cipher key length: {0:?}")]
    KeyIvLength(#[from] block_modes::InvalidKeyIvLength),
    /// The given string does not decode to a WIF private key
    #[error("That is not a valid private key")]
    InvalidWif,
    /// The given string is not a valid NEO address
    #[error("The address is not valid")]
    InvalidAddress,
    /// The passphrase does not decrypt the given key
    #[error("Wrong passphrase or invalid encrypted key")]
    BadPassphrase,
    /// The price ticker answered with an empty or unparsable price list
    #[error("The price ticker returned no usable price")]
    BadTickerData,
    /// The wallet API accepted the request but reported failure
    #[error("The transaction was rejected by the network")]
    TxRejected,
    /// An operation that needs an open session ran without one
    #[error("No wallet is logged in")]
    NotLoggedIn,
    /// A token symbol the wallet does not know about
    #[error("Unknown token: {0}")]
    UnknownToken(String),
}
