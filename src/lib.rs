// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! # NEO Wallet Lib
//!
//! The `neo_wallet` library aims to provide an easy and convenient way of
//! interfacing with the NEO blockchain.
//!
//! Clients can open a session from a WIF private key, watch NEO/GAS and
//! token balances with their fiat valuations, send assets through a
//! validated form flow, and claim accrued GAS. All chain access sits
//! behind the [sdk::WalletSdk] seam; application state lives in the
//! reducer-driven [state::Store].

pub mod currency;
mod error;
mod fallback;
pub mod format;
pub mod prices;
pub mod sdk;
pub mod state;
pub mod tokens;

pub use currency::{Fixed8, Gas};
pub use error::Error;
pub use format::{format_fiat, format_gas};
pub use sdk::{ApiClient, WalletSdk};
pub use state::Store;
