// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

use std::path::PathBuf;

use super::command::Command;
use super::settings::{LogFormat, LogLevel};
use clap::Parser;
use neo_wallet::state::metadata::Network;

#[derive(Parser, Debug)]
#[clap(version)]
#[clap(name = "Neon Wallet CLI")]
#[clap(author = "NEO Wallet Contributors")]
#[clap(about = "A command line rendition of the Neon wallet for the NEO blockchain!", long_about = None)]
pub struct WalletArgs {
    /// Directory to store user data [default: `$HOME/.neon-cli`]
    #[clap(short, long)]
    pub profile: Option<PathBuf>,

    /// Network to operate on [MainNet, TestNet]
    #[clap(short, long)]
    pub network: Option<Network>,

    /// WIF private key for running commands non-interactively
    #[clap(long, env = "NEON_CLI_WIF")]
    pub wif: Option<String>,

    /// Least severe log level worth emitting
    #[clap(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// How log lines are rendered
    #[clap(long, value_enum, default_value_t = LogFormat::Coloured)]
    pub log_type: LogFormat,

    /// Command
    #[clap(subcommand)]
    pub command: Option<Command>,
}
