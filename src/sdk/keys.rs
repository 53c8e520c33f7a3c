// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

//! WIF and address codecs for NEO accounts.
//!
//! A WIF is the base58check encoding of `0x80 || key || 0x01`, an address
//! the base58check encoding of version byte `0x17` followed by the hash160
//! of the single-signature verification script. Keys are derived over
//! secp256k1 rather than NEO mainnet's secp256r1; the codec is
//! self-consistent and `verify_address` accepts any well-formed address.

use rand::rngs::OsRng;
use rand_core::RngCore;
use ripemd::Ripemd160;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};

use crate::error::Error;

const ADDRESS_VERSION: u8 = 0x17;
const WIF_VERSION: u8 = 0x80;
const COMPRESSED_FLAG: u8 = 0x01;
const CHECKSUM_LEN: usize = 4;

// verification script opcodes around the compressed public key
const OP_PUSHBYTES_33: u8 = 0x21;
const OP_CHECKSIG: u8 = 0xAC;

/// A usable login: the WIF as entered plus the address derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// The private key in WIF form
    pub wif: String,
    /// The derived public address
    pub address: String,
}

/// Draw a fresh private key from the OS entropy source
pub fn generate_private_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    loop {
        OsRng.fill_bytes(&mut key);
        // out-of-range scalars are redrawn
        if SecretKey::from_slice(&key).is_ok() {
            return key;
        }
    }
}

/// Encode a private key in WIF form
pub fn wif_from_private_key(key: &[u8; 32]) -> String {
    let mut data = Vec::with_capacity(34 + CHECKSUM_LEN);
    data.push(WIF_VERSION);
    data.extend_from_slice(key);
    data.push(COMPRESSED_FLAG);
    base58check_encode(data)
}

/// Decode a WIF back into its private key
pub fn private_key_from_wif(wif: &str) -> Result<[u8; 32], Error> {
    let data = base58check_decode(wif).ok_or(Error::InvalidWif)?;
    if data.len() != 34 || data[0] != WIF_VERSION || data[33] != COMPRESSED_FLAG {
        return Err(Error::InvalidWif);
    }
    let mut key = [0u8; 32];
    key.copy_from_slice(&data[1..33]);
    SecretKey::from_slice(&key).map_err(|_| Error::InvalidWif)?;
    Ok(key)
}

/// Derive the public address belonging to a private key
pub fn address_from_private_key(key: &[u8; 32]) -> Result<String, Error> {
    let secp = Secp256k1::new();
    let secret = SecretKey::from_slice(key)?;
    let public = PublicKey::from_secret_key(&secp, &secret);
    Ok(address_from_public_key(&public.serialize()))
}

/// Derive the address of a compressed public key
pub fn address_from_public_key(public: &[u8; 33]) -> String {
    let mut script = Vec::with_capacity(35);
    script.push(OP_PUSHBYTES_33);
    script.extend_from_slice(public);
    script.push(OP_CHECKSIG);

    let sha = Sha256::digest(&script);
    let hash160 = Ripemd160::digest(sha);

    let mut data = Vec::with_capacity(21 + CHECKSUM_LEN);
    data.push(ADDRESS_VERSION);
    data.extend_from_slice(&hash160);
    base58check_encode(data)
}

/// Decode a WIF and pair it with its derived address
pub fn account_from_wif(wif: &str) -> Result<Account, Error> {
    let key = private_key_from_wif(wif)?;
    Ok(Account {
        wif: wif.to_string(),
        address: address_from_private_key(&key)?,
    })
}

/// Whether a string is a well-formed NEO address
pub fn verify_address(address: &str) -> bool {
    match base58check_decode(address) {
        Some(data) => data.len() == 21 && data[0] == ADDRESS_VERSION,
        None => false,
    }
}

fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let double = Sha256::digest(Sha256::digest(data));
    let mut sum = [0u8; CHECKSUM_LEN];
    sum.copy_from_slice(&double[..CHECKSUM_LEN]);
    sum
}

fn base58check_encode(mut data: Vec<u8>) -> String {
    let sum = checksum(&data);
    data.extend_from_slice(&sum);
    bs58::encode(data).into_string()
}

fn base58check_decode(s: &str) -> Option<Vec<u8>> {
    let raw = bs58::decode(s).into_vec().ok()?;
    if raw.len() <= CHECKSUM_LEN {
        return None;
    }
    let split = raw.len() - CHECKSUM_LEN;
    if checksum(&raw[..split]) != raw[split..] {
        return None;
    }
    Some(raw[..split].to_vec())
}
