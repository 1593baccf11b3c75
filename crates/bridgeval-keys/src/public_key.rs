// Copyright (c) Hetu Project
// SPDX-License-Identifier: Apache-2.0

//! Consensus public keys.
//!
//! A validator's consensus key is one of the supported algorithms. The raw
//! encoding of each variant is what goes on the wire and what the address is
//! derived from:
//!
//! | Algorithm | Raw encoding                  | Size |
//! |-----------|-------------------------------|------|
//! | ed25519   | compressed Edwards point      | 32   |
//! | secp256k1 | compressed SEC1 point         | 33   |

use k256::elliptic_curve::sec1::ToEncodedPoint;
use serde::{Deserialize, Serialize};
use signature::Verifier;
use std::fmt;
use std::str::FromStr;

use crate::{Address, KeyError, KeyResult};

pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;
pub const SECP256K1_PUBLIC_KEY_SIZE: usize = 33;

/// Supported consensus key algorithms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    #[default]
    Ed25519,
    Secp256k1,
}

impl KeyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Ed25519 => "ed25519",
            KeyType::Secp256k1 => "secp256k1",
        }
    }

    /// Size of the raw public key encoding for this algorithm
    pub fn public_key_size(&self) -> usize {
        match self {
            KeyType::Ed25519 => ED25519_PUBLIC_KEY_SIZE,
            KeyType::Secp256k1 => SECP256K1_PUBLIC_KEY_SIZE,
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ed25519" => Ok(KeyType::Ed25519),
            "secp256k1" => Ok(KeyType::Secp256k1),
            other => Err(KeyError::UnknownKeyType(other.to_string())),
        }
    }
}

/// A consensus public key.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PublicKeyRepr", into = "PublicKeyRepr")]
pub enum PublicKey {
    Ed25519(ed25519_dalek::VerifyingKey),
    Secp256k1(k256::PublicKey),
}

impl PublicKey {
    /// Parse a public key from its raw encoding.
    pub fn from_bytes(key_type: KeyType, bytes: &[u8]) -> KeyResult<Self> {
        let expected = key_type.public_key_size();
        if bytes.len() != expected {
            return Err(KeyError::InvalidLength {
                key_type,
                expected,
                got: bytes.len(),
            });
        }

        match key_type {
            KeyType::Ed25519 => {
                let mut arr = [0u8; ED25519_PUBLIC_KEY_SIZE];
                arr.copy_from_slice(bytes);
                ed25519_dalek::VerifyingKey::from_bytes(&arr)
                    .map(PublicKey::Ed25519)
                    .map_err(|e| KeyError::Malformed {
                        key_type,
                        reason: e.to_string(),
                    })
            }
            KeyType::Secp256k1 => k256::PublicKey::from_sec1_bytes(bytes)
                .map(PublicKey::Secp256k1)
                .map_err(|e| KeyError::Malformed {
                    key_type,
                    reason: e.to_string(),
                }),
        }
    }

    /// Parse a public key from hex.
    pub fn from_hex(key_type: KeyType, hex_str: &str) -> KeyResult<Self> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        Self::from_bytes(key_type, &hex::decode(hex_str)?)
    }

    pub fn key_type(&self) -> KeyType {
        match self {
            PublicKey::Ed25519(_) => KeyType::Ed25519,
            PublicKey::Secp256k1(_) => KeyType::Secp256k1,
        }
    }

    /// Raw encoding of the key.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            PublicKey::Ed25519(key) => key.to_bytes().to_vec(),
            PublicKey::Secp256k1(key) => key.to_encoded_point(true).as_bytes().to_vec(),
        }
    }

    /// The address this key controls.
    pub fn address(&self) -> Address {
        Address::derive(&self.to_bytes())
    }

    /// Verify a signature over `msg`.
    ///
    /// ed25519 expects a 64-byte signature, secp256k1 a 64-byte `r || s`
    /// ECDSA signature over SHA-256(msg). Malformed signatures verify as false.
    pub fn verify(&self, msg: &[u8], sig: &[u8]) -> bool {
        match self {
            PublicKey::Ed25519(key) => match ed25519_dalek::Signature::from_slice(sig) {
                Ok(sig) => key.verify(msg, &sig).is_ok(),
                Err(_) => false,
            },
            PublicKey::Secp256k1(key) => {
                let vk = k256::ecdsa::VerifyingKey::from(key);
                match k256::ecdsa::Signature::from_slice(sig) {
                    Ok(sig) => vk.verify(msg, &sig).is_ok(),
                    Err(_) => false,
                }
            }
        }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key_type(), hex::encode_upper(self.to_bytes()))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

impl From<ed25519_dalek::VerifyingKey> for PublicKey {
    fn from(key: ed25519_dalek::VerifyingKey) -> Self {
        PublicKey::Ed25519(key)
    }
}

impl From<k256::PublicKey> for PublicKey {
    fn from(key: k256::PublicKey) -> Self {
        PublicKey::Secp256k1(key)
    }
}

/// JSON shape of a public key: `{ "type": "ed25519", "value": "<hex>" }`
#[derive(Clone, Serialize, Deserialize)]
struct PublicKeyRepr {
    #[serde(rename = "type")]
    key_type: KeyType,
    value: String,
}

impl From<PublicKey> for PublicKeyRepr {
    fn from(key: PublicKey) -> Self {
        Self {
            key_type: key.key_type(),
            value: hex::encode(key.to_bytes()),
        }
    }
}

impl TryFrom<PublicKeyRepr> for PublicKey {
    type Error = KeyError;

    fn try_from(repr: PublicKeyRepr) -> Result<Self, Self::Error> {
        PublicKey::from_hex(repr.key_type, &repr.value)
    }
}
