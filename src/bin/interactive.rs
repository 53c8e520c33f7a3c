// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

use requestty::Question;
use tokio::time::{sleep, Duration};

use crate::command::{from_entries, TransactionHistory};
use crate::io::store::SavedWallet;
use crate::io::{self, prompt, store};
use crate::menu::Menu;
use crate::settings::Settings;

use neo_wallet::format::{format_fiat, format_gas};
use neo_wallet::prices::PriceTicker;
use neo_wallet::sdk::{crypto, keys, Account, Asset};
use neo_wallet::state::dashboard::{DashboardAction, Pane};
use neo_wallet::state::metadata::{MetadataAction, Network};
use neo_wallet::state::notifications::{
    drain_notifications, show_error_notification, show_success_notification,
};
use neo_wallet::state::transactions::{self, SendEntry, TransactionsAction};
use neo_wallet::state::wallet::load_wallet_data;
use neo_wallet::state::{account, claim};
use neo_wallet::{ApiClient, Store};

/// How long to wait between availability polls during a claim, and how
/// many polls to run before giving up
const CLAIM_POLL_DELAY: Duration = Duration::from_millis(5000);
const CLAIM_POLL_ATTEMPTS: usize = 60;

/// Run the interactive UX loop
pub(crate) async fn run_loop(settings: &Settings) -> anyhow::Result<()> {
    println!("{}", settings);

    let store = Store::new();
    store.dispatch(MetadataAction::SetNetwork(settings.network));

    let mut network = settings.network;
    let mut sdk = ApiClient::new(settings.network(network).api.clone());
    let mut ticker = PriceTicker::new(settings.network(network).ticker.clone());

    loop {
        // let the user open (or create) a wallet
        let account = match menu_login(settings, network)? {
            LoginSelect::Wif => {
                let wif = prompt::request_wif()?;
                match account::login(&store, &sdk, &wif) {
                    Ok(account) => account,
                    Err(_) => {
                        flush_send_status(&store);
                        continue;
                    }
                }
            }
            LoginSelect::Saved(wallet) => {
                let passphrase = prompt::request_passphrase()?;
                match account::login_nep2(&store, &sdk, &passphrase, &wallet.key).await {
                    Ok(account) => account,
                    Err(_) => {
                        flush_send_status(&store);
                        continue;
                    }
                }
            }
            LoginSelect::Encrypted => {
                let encrypted = prompt::request_encrypted_key()?;
                let passphrase = prompt::request_passphrase()?;
                match account::login_nep2(&store, &sdk, &passphrase, &encrypted).await {
                    Ok(account) => account,
                    Err(_) => {
                        flush_send_status(&store);
                        continue;
                    }
                }
            }
            LoginSelect::Create => {
                create_wallet(settings)?;
                continue;
            }
            LoginSelect::Switch => {
                network = network.toggled();
                store.dispatch(MetadataAction::SetNetwork(network));
                sdk = ApiClient::new(settings.network(network).api.clone());
                ticker = PriceTicker::new(settings.network(network).ticker.clone());
                continue;
            }
            LoginSelect::Exit => std::process::exit(0),
        };

        // dashboard loop for the open session
        let mut refresh_feedback = false;
        loop {
            prompt::hide_cursor()?;
            io::status::update("Fetching wallet data...")?;
            let loaded = load_wallet_data(&store, &sdk, &ticker, &account.address).await;
            io::status::clear()?;
            prompt::show_cursor()?;

            // the user only gets told about refreshes they asked for
            if refresh_feedback {
                match loaded {
                    Ok(()) => show_success_notification(
                        &store,
                        "Received latest blockchain information.",
                    ),
                    Err(_) => show_error_notification(
                        &store,
                        "Failed to retrieve blockchain information",
                    ),
                }
                refresh_feedback = false;
            }

            print_dashboard(&store, &account);

            match menu_op(&store, network) {
                CommandMenuItem::Send => {
                    run_send(&store, &sdk, settings, network).await?;
                }
                CommandMenuItem::Claim => {
                    run_claim(&store, &sdk, &account).await?;
                }
                CommandMenuItem::History => print_history(&store),
                CommandMenuItem::Refresh => refresh_feedback = true,
                CommandMenuItem::Switch => {
                    network = network.toggled();
                    store.dispatch(MetadataAction::SetNetwork(network));
                    sdk = ApiClient::new(settings.network(network).api.clone());
                    ticker = PriceTicker::new(settings.network(network).ticker.clone());
                    refresh_feedback = true;
                }
                CommandMenuItem::Logout => {
                    account::logout(&store);
                    break;
                }
                CommandMenuItem::Exit => std::process::exit(0),
            }
        }
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Clone)]
enum LoginSelect {
    Wif,
    Saved(SavedWallet),
    Encrypted,
    Create,
    Switch,
    Exit,
}

/// Allows the user to open a wallet, paste a key or create a new one
fn menu_login(settings: &Settings, network: Network) -> anyhow::Result<LoginSelect> {
    let wallets = store::load_wallets(&settings.profile)?;
    let mut wallet_menu = if wallets.is_empty() {
        Menu::new()
    } else {
        Menu::title("Wallets")
    };
    for wallet in wallets {
        let label = wallet.label.clone();
        wallet_menu = wallet_menu.add(LoginSelect::Saved(wallet), label);
    }

    let action_menu = Menu::new()
        .separator()
        .add(LoginSelect::Wif, "Log in with a private key (WIF)")
        .add(LoginSelect::Encrypted, "Log in with an encrypted key")
        .add(LoginSelect::Create, "Create a new wallet")
        .separator()
        .add(
            LoginSelect::Switch,
            format!("Switch to {}", network.toggled()),
        )
        .add(LoginSelect::Exit, "Exit");

    let menu = wallet_menu.extend(action_menu);
    let questions = Question::select("theme")
        .message(format!("Welcome to NEO {}", network))
        .choices(menu.clone())
        .build();

    let answer = requestty::prompt_one(questions).expect("An answer");
    Ok(menu.answer(&answer).to_owned())
}

/// Create a key pair, encrypt it under a passphrase and save it
fn create_wallet(settings: &Settings) -> anyhow::Result<()> {
    let key = keys::generate_private_key();
    let wif = keys::wif_from_private_key(&key);
    let account = keys::account_from_wif(&wif)?;

    let passphrase = prompt::create_passphrase()?;
    let encrypted = crypto::encrypt_wif(&account.wif, &passphrase)?;

    let label = prompt::request_label()?;
    store::save_wallet(&settings.profile, &label, &encrypted)?;

    println!("> Your new wallet was saved as \"{}\"", label);
    println!("> Address: {}", account.address);
    println!("> Private key (WIF): {}", account.wif);
    println!("> Encrypted key: {}", encrypted);
    println!(
        "Back up the WIF somewhere safe; the saved copy only opens with\n\
         your passphrase."
    );
    Ok(())
}

/// Print everything the session knows right now
fn print_dashboard(store: &Store, account: &Account) {
    let state = store.snapshot();
    let wallet = &state.wallet;

    println!("\rAddress: {}", account.address);
    println!(
        "Network: {} (block {})",
        state.metadata.network, state.metadata.block_height
    );
    println!(
        "Balance:\n - NEO: {} ({} USD)\n - GAS: {} ({} USD)",
        wallet.neo as u64,
        format_fiat(wallet.neo_value()),
        format_gas(wallet.gas, true),
        format_fiat(wallet.gas_value()),
    );
    println!(" - Total: {} USD", format_fiat(wallet.total_value()));

    for token in wallet.tokens.iter().filter(|t| t.balance > 0.0) {
        match token.info {
            Some(ref info) => {
                println!(" - {} ({}): {}", token.symbol, info.name, token.balance)
            }
            None => println!(" - {}: {}", token.symbol, token.balance),
        }
    }

    println!(
        "Claim: {} GAS available, {} GAS once NEO transfers",
        format_gas(state.claim.available, true),
        format_gas(state.claim.unavailable, true),
    );

    for note in drain_notifications(store) {
        println!("[{}] {}", note.level, note.message);
    }

    if let Some(status) = state.transactions.status {
        println!("> {}", status.message);
    }
}

/// Print the synced transaction history
fn print_history(store: &Store) {
    let entries = store.select(|s| s.wallet.transactions.clone());
    if entries.is_empty() {
        println!("\r> No transactions yet");
        return;
    }
    println!("{}", TransactionHistory::header());
    for row in from_entries(entries) {
        println!("{}", row);
    }
}

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
enum CommandMenuItem {
    Send,
    Claim,
    History,
    Refresh,
    Switch,
    Logout,
    Exit,
}

/// Allows the user to choose the operation to perform on the open wallet
fn menu_op(store: &Store, network: Network) -> CommandMenuItem {
    use CommandMenuItem as CMI;

    let (claim_total, claim_parked) =
        store.select(|s| (s.claim.total(), s.claim.disable_claim));

    let mut cmd_menu = Menu::new().add(CMI::Send, "Send NEO or GAS");
    if claim_total > 0.0 && !claim_parked {
        cmd_menu = cmd_menu.add(
            CMI::Claim,
            format!("Claim {} GAS", format_gas(claim_total, true)),
        );
    }
    let cmd_menu = cmd_menu
        .add(CMI::History, "Transaction history")
        .add(CMI::Refresh, "Refresh")
        .add(CMI::Switch, format!("Switch to {}", network.toggled()))
        .separator()
        .add(CMI::Logout, "Log out")
        .add(CMI::Exit, "Exit");

    let q = Question::select("theme")
        .message("What would you like to do?")
        .choices(cmd_menu.clone())
        .build();

    let answer = requestty::prompt_one(q).expect("An answer");
    cmd_menu.answer(&answer).to_owned()
}

/// Allows the user to choose the asset to send
fn menu_asset() -> Asset {
    let menu = Menu::new().add(Asset::Neo, "Neo").add(Asset::Gas, "Gas");

    let q = Question::select("theme")
        .message("Which asset would you like to send?")
        .choices(menu.clone())
        .build();

    let answer = requestty::prompt_one(q).expect("An answer");
    *menu.answer(&answer)
}

/// The send flow: pick an asset, fill the form, confirm, submit
async fn run_send(
    store: &Store,
    sdk: &ApiClient,
    settings: &Settings,
    network: Network,
) -> anyhow::Result<()> {
    let asset = menu_asset();
    if store.select(|s| s.transactions.selected_asset) != asset {
        store.dispatch(TransactionsAction::ToggleAsset);
    }

    let entry = SendEntry {
        address: prompt::request_address("recipient")?,
        amount: prompt::request_amount(asset.symbol())?,
    };

    // the form only opens the confirmation pane when it validates
    if !transactions::submit_send(store, sdk, &entry) {
        flush_send_status(store);
        return Ok(());
    }

    println!("   > Recipient = {}", entry.address);
    println!("   > Amount to send = {} {}", entry.amount, asset.symbol());

    if prompt::ask_confirm() {
        prompt::hide_cursor()?;
        let result = transactions::confirm_send(store, sdk, &entry).await;
        prompt::show_cursor()?;

        flush_send_status(store);
        if let Ok(receipt) = result {
            if let Some(txid) = receipt.txid {
                if let Some(explorer) = &settings.network(network).explorer {
                    let url = format!("{}{}", explorer, txid);
                    println!("> URL: {}", url);
                    prompt::launch_explorer(url)?;
                }
            }
        }
    } else {
        // close the pane without sending
        store.dispatch(DashboardAction::TogglePane(Pane::Confirm));
    }
    Ok(())
}

/// The claim flow: self-send, wait for availability, then collect
async fn run_claim(
    store: &Store,
    sdk: &ApiClient,
    account: &Account,
) -> anyhow::Result<()> {
    if claim::begin_claim(store, sdk).await.is_err() {
        flush_send_status(store);
        return Ok(());
    }
    flush_send_status(store);

    // wait for the chain to pick the self-send up
    prompt::hide_cursor()?;
    let mut attempt = 1;
    let ready = loop {
        if attempt > CLAIM_POLL_ATTEMPTS {
            break false;
        }
        io::status::update(
            format!(
                "Waiting for the claim... ({}/{})",
                attempt, CLAIM_POLL_ATTEMPTS
            )
            .as_str(),
        )?;
        sleep(CLAIM_POLL_DELAY).await;
        claim::sync_available_claim(store, sdk, &account.address).await;
        if store.select(|s| s.claim.claim_was_updated) {
            break true;
        }
        attempt += 1;
    };
    io::status::clear()?;
    prompt::show_cursor()?;

    if !ready {
        println!("\r> The claim did not become available in time. Refresh and try again later.");
        return Ok(());
    }

    let _ = claim::finish_claim(store, sdk).await;
    flush_send_status(store);
    Ok(())
}

/// Print whatever the send flow just flashed
fn flush_send_status(store: &Store) {
    if let Some(status) = store.select(|s| s.transactions.status.clone()) {
        println!("\r> {}", status.message);
    }
}
