// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

use std::io::stdout;

use crossterm::{
    cursor::{Hide, Show},
    ExecutableCommand,
};

use anyhow::Result;
use requestty::{OnEsc, Question};

use neo_wallet::sdk::keys;

/// Request a WIF private key
pub(crate) fn request_wif() -> Result<String> {
    let q = Question::password("wif")
        .message("Please enter your private key (WIF):")
        .mask('*')
        .validate(|wif, _| {
            if keys::account_from_wif(wif).is_ok() {
                Ok(())
            } else {
                Err("That is not a valid private key".to_string())
            }
        })
        .build();

    let a = requestty::prompt_one(q)?;
    Ok(a.as_string().unwrap_or_default().to_string())
}

/// Request a passphrase-encrypted key
pub(crate) fn request_encrypted_key() -> Result<String> {
    let q = Question::password("encrypted")
        .message("Please enter your encrypted key:")
        .mask('*')
        .build();

    let a = requestty::prompt_one(q)?;
    Ok(a.as_string().unwrap_or_default().to_string())
}

/// Request the passphrase protecting an encrypted key
pub(crate) fn request_passphrase() -> Result<String> {
    let q = Question::password("passphrase")
        .message("Please enter your passphrase:")
        .mask('*')
        .build();

    let a = requestty::prompt_one(q)?;
    Ok(a.as_string().unwrap_or_default().to_string())
}

/// Request the user to create a passphrase for a new encrypted key
pub(crate) fn create_passphrase() -> Result<String> {
    let mut passphrase = String::from("");

    let mut passphrases_match = false;
    while !passphrases_match {
        // enter passphrase
        let q = Question::password("passphrase")
            .message("Enter a passphrase for the encrypted key:")
            .mask('*')
            .build();
        let a = requestty::prompt_one(q)?;
        let p1 = a.as_string().unwrap_or("").to_string();

        // confirm passphrase
        let q = Question::password("passphrase")
            .message("Please confirm the passphrase:")
            .mask('*')
            .build();
        let a = requestty::prompt_one(q)?;
        let p2 = a.as_string().unwrap_or("").to_string();

        // both entries must agree
        passphrases_match = p1 == p2;
        if passphrases_match {
            passphrase = p1;
        } else {
            println!("Passphrases don't match, please try again.");
        }
    }
    Ok(passphrase)
}

/// Ask for an address, validating while the user types
pub(crate) fn request_address(addr_for: &str) -> Result<String> {
    let q = Question::input("addr")
        .message(format!("Please enter the {} address:", addr_for))
        .on_esc(OnEsc::Terminate)
        .validate_on_key(|addr, _| keys::verify_address(addr))
        .validate(|addr, _| {
            if keys::verify_address(addr) {
                Ok(())
            } else {
                Err("The address you entered was not valid.".to_string())
            }
        })
        .build();

    let a = requestty::prompt_one(q)?;
    Ok(a.as_string().unwrap_or_default().to_string())
}

/// Request an amount of an asset
///
/// The full validation chain runs on submit; here only non-numbers are
/// kept out.
pub(crate) fn request_amount(symbol: &str) -> Result<f64> {
    let question = requestty::Question::float("amt")
        .message(format!("Introduce the amount of {} to send:", symbol))
        .on_esc(OnEsc::Terminate)
        .default(0.0)
        .validate_on_key(|f, _| f.is_finite())
        .validate(|f, _| {
            if f.is_finite() {
                Ok(())
            } else {
                Err("You must enter a valid amount.".to_string())
            }
        })
        .build();

    let a = requestty::prompt_one(question)?;
    Ok(a.as_float().unwrap_or_default())
}

/// Request a label to save a wallet under
pub(crate) fn request_label() -> Result<String> {
    let q = Question::input("label")
        .message("Please choose a name for this wallet:")
        .on_esc(OnEsc::Terminate)
        .validate(|label, _| {
            if label.trim().is_empty() {
                Err("A name cannot be empty".to_string())
            } else {
                Ok(())
            }
        })
        .build();

    let a = requestty::prompt_one(q)?;
    Ok(a.as_string().unwrap_or_default().trim().to_string())
}

/// Final yes/no before a transaction goes out
pub(crate) fn ask_confirm() -> bool {
    let question = requestty::Question::confirm("confirm")
        .message("Transaction ready. Proceed?")
        .on_esc(OnEsc::Terminate)
        .build();

    requestty::prompt_one(question)
        .map(|answer| answer.as_bool())
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Request block explorer open
pub(crate) fn launch_explorer(url: String) -> Result<()> {
    let q = requestty::Question::confirm("launch")
        .message("Launch block explorer?")
        .on_esc(OnEsc::Terminate)
        .default(false)
        .build();

    let a = requestty::prompt_one(q)?;
    let open = a.as_bool().unwrap_or_default();
    if open {
        open::that(url)?;
    }
    Ok(())
}

/// Shows the terminal cursor
pub(crate) fn show_cursor() -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(Show)?;
    Ok(())
}

/// Hides the terminal cursor
pub(crate) fn hide_cursor() -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(Hide)?;
    Ok(())
}
