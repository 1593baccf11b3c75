// Copyright (c) Hetu Project
// SPDX-License-Identifier: Apache-2.0

//! Validator address type and derivation.
//!
//! An address is the first [`ADDRESS_SIZE`] bytes of the SHA-256 digest of the
//! validator's public key bytes. The type itself holds any number of bytes so
//! that records carrying a corrupted address can still be represented and
//! rejected by validation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::KeyResult;

/// Size of a validator address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Validator address, rendered as upper-case hex.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(Vec<u8>);

impl Address {
    /// Create from raw bytes (no length check).
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The empty (absent) address.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Parse from a hex string, with or without a `0x` prefix.
    pub fn from_hex(hex_str: &str) -> KeyResult<Self> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        Ok(Self(hex::decode(hex_str)?))
    }

    /// Derive an address from raw public key bytes.
    pub fn derive(key_bytes: &[u8]) -> Self {
        let digest = Sha256::digest(key_bytes);
        Self(digest[..ADDRESS_SIZE].to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if the address has exactly [`ADDRESS_SIZE`] bytes.
    pub fn has_valid_size(&self) -> bool {
        self.0.len() == ADDRESS_SIZE
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(&self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Address {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
