//! Protocol error types

use bridgeval_keys::KeyError;
use thiserror::Error;

pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[derive(Debug, Error)]
pub enum ProtocolError {
    // ===== Encoding =====
    #[error("nil validator")]
    NilValidator,

    #[error("validator does not have a public key")]
    MissingPublicKey,

    #[error("protobuf encode error: {0}")]
    Encode(#[from] prost::EncodeError),

    // ===== Decoding =====
    #[error("nil ValidatorProto")]
    NilProto,

    #[error("public key is empty or of an unknown type")]
    EmptyPublicKey,

    #[error("invalid public key: {0}")]
    InvalidPublicKey(#[from] KeyError),

    #[error("empty wire payload")]
    EmptyPayload,

    #[error("unsupported wire version: {0}")]
    UnsupportedVersion(u8),

    #[error("protobuf decode error: {0}")]
    Decode(#[from] prost::DecodeError),
}

/// Which side of the wire translation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encoding,
    Decoding,
}

impl ProtocolError {
    pub fn direction(&self) -> Direction {
        match self {
            ProtocolError::NilValidator
            | ProtocolError::MissingPublicKey
            | ProtocolError::Encode(_) => Direction::Encoding,
            _ => Direction::Decoding,
        }
    }

    pub fn is_encoding(&self) -> bool {
        self.direction() == Direction::Encoding
    }

    pub fn is_decoding(&self) -> bool {
        self.direction() == Direction::Decoding
    }
}
