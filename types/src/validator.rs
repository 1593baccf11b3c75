//! Validator record
//!
//! A validator binds a consensus public key and voting power to the address
//! derived from that key. Validators taking part in the cross-chain bridge
//! additionally carry a BLS public key and relayer/challenger addresses.
//!
//! Records are assembled in two phases:
//!
//! ```text
//! Validator::new(pub_key, power)        derive address, no checks
//!     └─ set_bls_key / set_relayer_address / set_challenger_address
//!            attach bridge material, no checks
//!     └─ validate_basic()               admission gate, pure and repeatable
//! ```
//!
//! Only records that pass [`Validator::validate_basic`] may be admitted into a
//! validator set, gossiped or persisted.

use bridgeval_keys::{Address, PublicKey, ADDRESS_SIZE};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::{ValidatorError, ValidatorResult};

/// Size of a compressed BLS12-381 public key in bytes.
pub const BLS_PUB_KEY_SIZE: usize = 48;

/// A consensus participant's identity record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Validator {
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub pub_key: Option<PublicKey>,
    pub voting_power: i64,
    #[serde(default)]
    pub proposer_priority: i64,

    /// BLS key used for cross-chain attestation aggregation (empty if unset)
    #[serde(default, with = "hex_bytes")]
    pub bls_key: Vec<u8>,
    /// Bridge relayer address (empty if unset)
    #[serde(default, with = "hex_bytes")]
    pub relayer_address: Vec<u8>,
    /// Bridge challenger address (empty if unset)
    #[serde(default, with = "hex_bytes")]
    pub challenger_address: Vec<u8>,
}

impl Validator {
    /// Create a validator for `pub_key` with the given voting power.
    ///
    /// The address is derived from the key. Nothing is validated here; call
    /// [`validate_basic`](Self::validate_basic) before admitting the record.
    pub fn new(pub_key: PublicKey, voting_power: i64) -> Self {
        Self {
            address: pub_key.address(),
            pub_key: Some(pub_key),
            voting_power,
            proposer_priority: 0,
            bls_key: Vec::new(),
            relayer_address: Vec::new(),
            challenger_address: Vec::new(),
        }
    }

    pub fn set_bls_key(&mut self, bls_key: impl Into<Vec<u8>>) {
        self.bls_key = bls_key.into();
    }

    pub fn set_relayer_address(&mut self, relayer: impl Into<Vec<u8>>) {
        self.relayer_address = relayer.into();
    }

    pub fn set_challenger_address(&mut self, challenger: impl Into<Vec<u8>>) {
        self.challenger_address = challenger.into();
    }

    /// Run the admission checks, stopping at the first failure.
    ///
    /// Order is fixed: public key, voting power, address, BLS key, relayer
    /// address, challenger address. Optional bridge fields are either empty
    /// or exactly their fixed size.
    pub fn validate_basic(&self) -> ValidatorResult<()> {
        if self.pub_key.is_none() {
            return Err(ValidatorError::MissingPublicKey);
        }

        if self.voting_power < 0 {
            return Err(ValidatorError::NegativeVotingPower(self.voting_power));
        }

        if self.address.len() != ADDRESS_SIZE {
            return Err(ValidatorError::WrongAddressSize(self.address.clone()));
        }

        if !self.bls_key.is_empty() && self.bls_key.len() != BLS_PUB_KEY_SIZE {
            return Err(ValidatorError::WrongBlsKeySize(self.bls_key.clone()));
        }

        if !self.relayer_address.is_empty() && self.relayer_address.len() != ADDRESS_SIZE {
            return Err(ValidatorError::WrongRelayerAddressSize(
                self.relayer_address.clone(),
            ));
        }

        if !self.challenger_address.is_empty() && self.challenger_address.len() != ADDRESS_SIZE {
            return Err(ValidatorError::WrongChallengerAddressSize(
                self.challenger_address.clone(),
            ));
        }

        Ok(())
    }

    /// True if any bridge material is attached.
    pub fn has_bridge_material(&self) -> bool {
        !self.bls_key.is_empty()
            || !self.relayer_address.is_empty()
            || !self.challenger_address.is_empty()
    }

    /// Return the validator with the higher proposer priority.
    ///
    /// Ties go to the validator with the smaller address. A validator compared
    /// with itself (same priority and address) returns `self`.
    pub fn compare_proposer_priority<'a>(&'a self, other: &'a Validator) -> &'a Validator {
        match self.proposer_priority.cmp(&other.proposer_priority) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal => match self.address.cmp(&other.address) {
                Ordering::Greater => other,
                Ordering::Less | Ordering::Equal => self,
            },
        }
    }
}

/// Gate entry point for a possibly absent record.
pub fn validate_validator(val: Option<&Validator>) -> ValidatorResult<()> {
    match val {
        Some(val) => val.validate_basic(),
        None => Err(ValidatorError::NilValidator),
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pub_key = match &self.pub_key {
            Some(pk) => pk.to_string(),
            None => "nil-PubKey".to_string(),
        };
        write!(
            f,
            "Validator{{{} {} VP:{} A:{}}}",
            self.address, pub_key, self.voting_power, self.proposer_priority
        )
    }
}

/// Render a possibly absent validator.
pub fn validator_string(val: Option<&Validator>) -> String {
    match val {
        Some(val) => val.to_string(),
        None => "nil-Validator".to_string(),
    }
}

/// Short `address:power` listing, e.g. for log lines.
pub fn validator_list_string(vals: &[Validator]) -> String {
    vals.iter()
        .map(|v| format!("{}:{}", v.address, v.voting_power))
        .collect::<Vec<_>>()
        .join(",")
}

/// Hex encoding for raw byte fields in JSON
mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        let s = s.strip_prefix("0x").unwrap_or(&s);
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}
