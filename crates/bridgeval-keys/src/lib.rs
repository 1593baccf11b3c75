// Copyright (c) Hetu Project
// SPDX-License-Identifier: Apache-2.0

//! # Bridgeval Keys
//!
//! Consensus key material for validators:
//!
//! - [`PublicKey`]: ed25519 / secp256k1 consensus public keys
//! - [`Address`]: the 20-byte identifier derived from a public key
//! - [`PrivValidator`] / [`MockPV`]: signing identities
//! - key file persistence for operator tooling

pub mod address;
pub mod error;
pub mod keyfile;
pub mod public_key;
pub mod signer;

pub use address::{Address, ADDRESS_SIZE};
pub use error::{KeyError, KeyResult};
pub use keyfile::{load_priv_validator, save_priv_validator};
pub use public_key::{
    KeyType, PublicKey, ED25519_PUBLIC_KEY_SIZE, SECP256K1_PUBLIC_KEY_SIZE,
};
pub use signer::{MockPV, PrivValidator};
