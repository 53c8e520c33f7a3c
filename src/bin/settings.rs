// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

use super::args::WalletArgs;
use super::config::{Config, NetworkConfig};

use std::fmt;
use std::path::{Path, PathBuf};

use neo_wallet::state::metadata::Network;
use tracing::Level;

/// How log lines are rendered
#[derive(clap::ValueEnum, Debug, Clone)]
pub enum LogFormat {
    /// Human-readable, with ANSI colours
    Coloured,
    /// Human-readable, colour-free
    Plain,
    /// One JSON object per event
    Json,
}

/// The least severe event worth emitting
#[derive(clap::ValueEnum, Debug, Clone)]
pub enum LogLevel {
    /// Everything, including per-request chatter
    Trace,
    /// Diagnostic detail
    Debug,
    /// Notable events
    Info,
    /// Swallowed failures and degraded lookups
    Warn,
    /// Serious problems only
    Error,
}

#[derive(Debug)]
pub struct Logging {
    /// Threshold below which events are dropped
    pub level: LogLevel,
    /// Rendering of emitted events
    pub format: LogFormat,
}

/// Where the wallet points and how it talks, after the static config and
/// the command line arguments have been merged
#[derive(Debug)]
pub struct Settings {
    pub network: Network,
    pub mainnet: NetworkConfig,
    pub testnet: NetworkConfig,
    pub profile: PathBuf,
    pub wif: Option<String>,
    pub logging: Logging,
}

pub struct SettingsBuilder {
    args: WalletArgs,
    profile: PathBuf,
}

impl SettingsBuilder {
    pub fn profile(mut self, dir: &Path) -> Self {
        self.profile = dir.to_path_buf();
        self
    }

    pub fn build(self, config: Config) -> Settings {
        let args = self.args;

        let logging = Logging {
            level: args.log_level,
            format: args.log_type,
        };

        // command line network wins over the configured default
        let network = args.network.unwrap_or(config.network);

        Settings {
            network,
            mainnet: config.mainnet,
            testnet: config.testnet,
            profile: self.profile,
            wif: args.wif,
            logging,
        }
    }
}

impl Settings {
    pub fn args(args: WalletArgs) -> SettingsBuilder {
        SettingsBuilder {
            args,
            profile: PathBuf::new(),
        }
    }

    /// Endpoints for the given network
    pub fn network(&self, network: Network) -> &NetworkConfig {
        match network {
            Network::MainNet => &self.mainnet,
            Network::TestNet => &self.testnet,
        }
    }

    /// Endpoints for the network currently selected
    pub fn current(&self) -> &NetworkConfig {
        self.network(self.network)
    }
}

impl From<&LogLevel> for Level {
    fn from(level: &LogLevel) -> Level {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Coloured => "coloured",
            Self::Plain => "plain",
            Self::Json => "json",
        })
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        })
    }
}

impl fmt::Display for Logging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logging: {} and up, {}", self.level, self.format)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "─".repeat(14);
        let current = self.current();
        writeln!(f, "{separator}")?;
        writeln!(f, "Settings")?;
        writeln!(f, "{separator}")?;
        writeln!(f, "Network: {}", self.network)?;
        writeln!(f, "Wallet API: {}", current.api)?;
        writeln!(f, "Price ticker: {}", current.ticker)?;
        match current.explorer {
            Some(ref url) => writeln!(f, "Explorer: {}", url)?,
            None => writeln!(f, "Explorer: [Not set]")?,
        };
        writeln!(f, "Profile: {}", self.profile.display())?;
        writeln!(
            f,
            "WIF: {}",
            if self.wif.is_some() {
                "[Set]"
            } else {
                "[Not set]"
            }
        )?;
        writeln!(f, "{}", self.logging)?;
        writeln!(f, "{separator}")
    }
}
