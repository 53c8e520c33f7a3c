// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! Passphrase encryption for keys at rest.

use aes::Aes256;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use rand::rngs::OsRng;
use rand_core::RngCore;

use crate::error::Error;
use crate::sdk::keys;

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

const IV_LEN: usize = 16;

/// Encrypt a WIF under a passphrase
///
/// The passphrase is hashed into the cipher key; a fresh random IV is
/// prepended to the ciphertext and the whole blob is base58 encoded so it
/// can be pasted back like any other key string.
pub fn encrypt_wif(wif: &str, passphrase: &str) -> Result<String, Error> {
    let key = blake3::hash(passphrase.as_bytes());
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);

    let cipher = Aes256Cbc::new_from_slices(key.as_bytes(), &iv)?;
    let mut data = iv.to_vec();
    data.extend(cipher.encrypt_vec(wif.as_bytes()));
    Ok(bs58::encode(data).into_string())
}

/// Decrypt an encrypted WIF with the passphrase it was created under
///
/// The decrypted string must itself decode as a WIF; a wrong passphrase
/// that happens to survive the padding check is still caught there.
pub fn decrypt_wif(encrypted: &str, passphrase: &str) -> Result<String, Error> {
    let data = bs58::decode(encrypted)
        .into_vec()
        .map_err(|_| Error::BadPassphrase)?;
    if data.len() <= IV_LEN {
        return Err(Error::BadPassphrase);
    }

    let key = blake3::hash(passphrase.as_bytes());
    let (iv, ciphertext) = data.split_at(IV_LEN);
    let cipher =
        Aes256Cbc::new_from_slices(key.as_bytes(), iv).map_err(|_| Error::BadPassphrase)?;
    let plain = cipher
        .decrypt_vec(ciphertext)
        .map_err(|_| Error::BadPassphrase)?;

    let wif = String::from_utf8(plain).map_err(|_| Error::BadPassphrase)?;
    keys::private_key_from_wif(&wif).map_err(|_| Error::BadPassphrase)?;
    Ok(wif)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let wif = keys::wif_from_private_key(&keys::generate_private_key());
        let encrypted = encrypt_wif(&wif, "hunter2").unwrap();
        assert_ne!(encrypted, wif);
        assert_eq!(decrypt_wif(&encrypted, "hunter2").unwrap(), wif);
    }

    #[test]
    fn fresh_iv_every_time() {
        let wif = keys::wif_from_private_key(&keys::generate_private_key());
        let a = encrypt_wif(&wif, "hunter2").unwrap();
        let b = encrypt_wif(&wif, "hunter2").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn wrong_passphrase() {
        let wif = keys::wif_from_private_key(&keys::generate_private_key());
        let encrypted = encrypt_wif(&wif, "hunter2").unwrap();
        assert!(matches!(
            decrypt_wif(&encrypted, "*******"),
            Err(Error::BadPassphrase)
        ));
    }

    #[test]
    fn garbage_input() {
        assert!(matches!(
            decrypt_wif("definitely not a key", "hunter2"),
            Err(Error::BadPassphrase)
        ));
        assert!(matches!(decrypt_wif("", "hunter2"), Err(Error::BadPassphrase)));
    }
}
