// Copyright (c) Hetu Project
// SPDX-License-Identifier: Apache-2.0

//! Private-validator signers.
//!
//! `MockPV` keeps its signing key in memory. It backs the random validator
//! fixtures and the CLI's key generation; production signers (remote signer,
//! HSM) live outside this crate and implement [`PrivValidator`] themselves.

use rand::rngs::OsRng;
use signature::Signer;
use std::fmt;
use zeroize::Zeroizing;

use crate::{KeyError, KeyResult, KeyType, PublicKey};

/// A validator's signing identity.
pub trait PrivValidator {
    /// The consensus public key of this signer.
    fn pub_key(&self) -> PublicKey;

    /// Sign an arbitrary message.
    fn sign(&self, msg: &[u8]) -> Vec<u8>;
}

#[derive(Clone)]
enum SigningKey {
    Ed25519(ed25519_dalek::SigningKey),
    Secp256k1(k256::ecdsa::SigningKey),
}

/// In-memory private validator.
#[derive(Clone)]
pub struct MockPV {
    key: SigningKey,
}

impl MockPV {
    /// Create a new ed25519 signer with a fresh random key.
    pub fn new() -> Self {
        Self::generate(KeyType::Ed25519)
    }

    /// Create a signer of the given algorithm with a fresh random key.
    pub fn generate(key_type: KeyType) -> Self {
        let key = match key_type {
            KeyType::Ed25519 => SigningKey::Ed25519(ed25519_dalek::SigningKey::generate(&mut OsRng)),
            KeyType::Secp256k1 => {
                SigningKey::Secp256k1(k256::ecdsa::SigningKey::random(&mut OsRng))
            }
        };
        Self { key }
    }

    /// Restore a signer from its 32-byte secret.
    pub fn from_secret(key_type: KeyType, secret: &[u8]) -> KeyResult<Self> {
        let key = match key_type {
            KeyType::Ed25519 => {
                let arr: [u8; 32] = secret.try_into().map_err(|_| {
                    KeyError::KeyFile(format!(
                        "ed25519 secret must be 32 bytes, got {}",
                        secret.len()
                    ))
                })?;
                SigningKey::Ed25519(ed25519_dalek::SigningKey::from_bytes(&arr))
            }
            KeyType::Secp256k1 => {
                let key = k256::ecdsa::SigningKey::from_slice(secret)
                    .map_err(|e| KeyError::KeyFile(format!("invalid secp256k1 secret: {}", e)))?;
                SigningKey::Secp256k1(key)
            }
        };
        Ok(Self { key })
    }

    pub fn key_type(&self) -> KeyType {
        match &self.key {
            SigningKey::Ed25519(_) => KeyType::Ed25519,
            SigningKey::Secp256k1(_) => KeyType::Secp256k1,
        }
    }

    /// Secret key bytes, wiped on drop.
    pub fn secret_bytes(&self) -> Zeroizing<Vec<u8>> {
        match &self.key {
            SigningKey::Ed25519(key) => Zeroizing::new(key.to_bytes().to_vec()),
            SigningKey::Secp256k1(key) => Zeroizing::new(key.to_bytes().to_vec()),
        }
    }
}

impl Default for MockPV {
    fn default() -> Self {
        Self::new()
    }
}

impl PrivValidator for MockPV {
    fn pub_key(&self) -> PublicKey {
        match &self.key {
            SigningKey::Ed25519(key) => PublicKey::Ed25519(key.verifying_key()),
            SigningKey::Secp256k1(key) => {
                PublicKey::Secp256k1(k256::PublicKey::from(key.verifying_key()))
            }
        }
    }

    fn sign(&self, msg: &[u8]) -> Vec<u8> {
        match &self.key {
            SigningKey::Ed25519(key) => key.sign(msg).to_bytes().to_vec(),
            SigningKey::Secp256k1(key) => {
                let sig: k256::ecdsa::Signature = key.sign(msg);
                sig.to_bytes().to_vec()
            }
        }
    }
}

impl fmt::Debug for MockPV {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MockPV({})", self.pub_key())
    }
}
