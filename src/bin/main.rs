// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

mod args;
mod command;
mod config;
mod interactive;
mod io;
mod menu;
mod settings;

use clap::Parser;
use tracing::Level;

use crate::args::WalletArgs;
use crate::command::Command;
use crate::config::Config;
use crate::settings::{LogFormat, Settings};

use neo_wallet::ApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(err) = exec().await {
        // print the failure for the user
        println!("{err}");
        // never leave the cursor hidden
        io::prompt::show_cursor()?;
    }
    Ok(())
}

async fn exec() -> anyhow::Result<()> {
    let args = WalletArgs::parse();
    let cmd = args.command.clone();

    // the profile directory anchors config and saved wallets
    let profile = match args.profile.as_ref() {
        Some(p) => p.clone(),
        None => {
            // PANIC: without a resolvable home directory there is no
            // sane place for user data, so stopping here is fine
            let home = dirs::home_dir().expect("Cannot get home dir");
            home.join(".neon-cli")
        }
    };
    std::fs::create_dir_all(&profile)?;

    // static config first, command line on top
    let config = Config::load(&profile)?;
    let settings = Settings::args(args).profile(&profile).build(config);

    // generate a subscriber with the desired default log level
    let s = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::from(&settings.logging.level));
    // set the subscriber as global
    match settings.logging.format {
        LogFormat::Json => {
            let subscriber = s.json().flatten_event(true).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Plain => {
            let subscriber = s.with_ansi(false).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Coloured => {
            let subscriber = s.finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    };

    // no subcommand means a full interactive session
    match cmd.unwrap_or(Command::Interactive) {
        Command::Interactive => interactive::run_loop(&settings).await,
        cmd => {
            let sdk = ApiClient::new(settings.current().api.clone());
            let result = cmd.run(&sdk, &settings).await?;
            println!("{result}");
            Ok(())
        }
    }
}
