//! Validator admission errors.
//!
//! The messages are part of the external contract: operators and peers match
//! on them, so the address is rendered through its hex form while the raw
//! byte fields are rendered as a space-separated decimal byte list (`[171 1]`).

use std::fmt;
use thiserror::Error;

use crate::Address;

pub type ValidatorResult<T> = Result<T, ValidatorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    #[error("nil validator")]
    NilValidator,

    #[error("validator does not have a public key")]
    MissingPublicKey,

    #[error("validator has negative voting power: {0}")]
    NegativeVotingPower(i64),

    #[error("validator address is the wrong size: {0}")]
    WrongAddressSize(Address),

    #[error("validator relayer bls key is the wrong size: {}", ByteList(.0))]
    WrongBlsKeySize(Vec<u8>),

    #[error("validator relayer address is the wrong size: {}", ByteList(.0))]
    WrongRelayerAddressSize(Vec<u8>),

    #[error("validator challenger address is the wrong size: {}", ByteList(.0))]
    WrongChallengerAddressSize(Vec<u8>),
}

/// Decimal byte list in square brackets, separated by single spaces
struct ByteList<'a>(&'a [u8]);

impl fmt::Display for ByteList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", b)?;
        }
        f.write_str("]")
    }
}

/// Failure class of a [`ValidatorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing validator or missing required field
    StructuralAbsence,
    /// Value outside its allowed range
    RangeViolation,
    /// Fixed-size field present with the wrong length
    SizeViolation,
}

/// The validator field a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorField {
    /// The record as a whole
    Record,
    PubKey,
    VotingPower,
    Address,
    BlsKey,
    RelayerAddress,
    ChallengerAddress,
}

impl ValidatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidatorError::NilValidator | ValidatorError::MissingPublicKey => {
                ErrorKind::StructuralAbsence
            }
            ValidatorError::NegativeVotingPower(_) => ErrorKind::RangeViolation,
            // An empty address is a missing required field
            ValidatorError::WrongAddressSize(addr) if addr.is_empty() => {
                ErrorKind::StructuralAbsence
            }
            ValidatorError::WrongAddressSize(_)
            | ValidatorError::WrongBlsKeySize(_)
            | ValidatorError::WrongRelayerAddressSize(_)
            | ValidatorError::WrongChallengerAddressSize(_) => ErrorKind::SizeViolation,
        }
    }

    pub fn field(&self) -> ValidatorField {
        match self {
            ValidatorError::NilValidator => ValidatorField::Record,
            ValidatorError::MissingPublicKey => ValidatorField::PubKey,
            ValidatorError::NegativeVotingPower(_) => ValidatorField::VotingPower,
            ValidatorError::WrongAddressSize(_) => ValidatorField::Address,
            ValidatorError::WrongBlsKeySize(_) => ValidatorField::BlsKey,
            ValidatorError::WrongRelayerAddressSize(_) => ValidatorField::RelayerAddress,
            ValidatorError::WrongChallengerAddressSize(_) => ValidatorField::ChallengerAddress,
        }
    }
}

impl fmt::Display for ValidatorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValidatorField::Record => "validator",
            ValidatorField::PubKey => "pub_key",
            ValidatorField::VotingPower => "voting_power",
            ValidatorField::Address => "address",
            ValidatorField::BlsKey => "bls_key",
            ValidatorField::RelayerAddress => "relayer_address",
            ValidatorField::ChallengerAddress => "challenger_address",
        };
        f.write_str(name)
    }
}
