// Copyright (c) Hetu Project
// SPDX-License-Identifier: Apache-2.0

//! Key error types

use thiserror::Error;

use crate::KeyType;

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid {key_type} public key length: expected {expected}, got {got}")]
    InvalidLength {
        key_type: KeyType,
        expected: usize,
        got: usize,
    },

    #[error("malformed {key_type} public key: {reason}")]
    Malformed { key_type: KeyType, reason: String },

    #[error("unknown key type: {0}")]
    UnknownKeyType(String),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("key file error: {0}")]
    KeyFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type KeyResult<T> = std::result::Result<T, KeyError>;
