//! Conversions between validator records and their wire messages.
//!
//! Decoding never runs the admission gate: a decoded validator may still fail
//! `validate_basic`, and callers that need the guarantee must check again.

use bridgeval_keys::{KeyType, PublicKey};
use bridgeval_types::Validator;

use crate::proto::{self, public_key::Sum};
use crate::{ProtocolError, ProtocolResult};

pub fn public_key_to_proto(pub_key: &PublicKey) -> proto::PublicKey {
    let bytes = pub_key.to_bytes();
    let sum = match pub_key.key_type() {
        KeyType::Ed25519 => Sum::Ed25519(bytes),
        KeyType::Secp256k1 => Sum::Secp256k1(bytes),
    };
    proto::PublicKey { sum: Some(sum) }
}

pub fn public_key_from_proto(pub_key: &proto::PublicKey) -> ProtocolResult<PublicKey> {
    let (key_type, bytes) = match &pub_key.sum {
        Some(Sum::Ed25519(bytes)) => (KeyType::Ed25519, bytes),
        Some(Sum::Secp256k1(bytes)) => (KeyType::Secp256k1, bytes),
        None => return Err(ProtocolError::EmptyPublicKey),
    };
    Ok(PublicKey::from_bytes(key_type, bytes)?)
}

impl TryFrom<&Validator> for proto::Validator {
    type Error = ProtocolError;

    fn try_from(val: &Validator) -> Result<Self, Self::Error> {
        let pub_key = val.pub_key.as_ref().ok_or(ProtocolError::MissingPublicKey)?;

        Ok(proto::Validator {
            address: val.address.to_vec(),
            pub_key: Some(public_key_to_proto(pub_key)),
            voting_power: val.voting_power,
            proposer_priority: val.proposer_priority,
            bls_key: val.bls_key.clone(),
            relayer_address: val.relayer_address.clone(),
            challenger_address: val.challenger_address.clone(),
        })
    }
}

impl TryFrom<proto::Validator> for Validator {
    type Error = ProtocolError;

    fn try_from(vp: proto::Validator) -> Result<Self, Self::Error> {
        let pub_key = vp
            .pub_key
            .as_ref()
            .ok_or(ProtocolError::EmptyPublicKey)
            .and_then(public_key_from_proto)?;

        Ok(Validator {
            address: vp.address.into(),
            pub_key: Some(pub_key),
            voting_power: vp.voting_power,
            proposer_priority: vp.proposer_priority,
            bls_key: vp.bls_key,
            relayer_address: vp.relayer_address,
            challenger_address: vp.challenger_address,
        })
    }
}

/// Convert a possibly absent validator into its wire message.
pub fn to_proto(val: Option<&Validator>) -> ProtocolResult<proto::Validator> {
    val.ok_or(ProtocolError::NilValidator)?.try_into()
}

/// Convert a possibly absent wire message into a validator.
pub fn from_proto(vp: Option<proto::Validator>) -> ProtocolResult<Validator> {
    vp.ok_or(ProtocolError::NilProto)?.try_into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgeval_keys::{Address, MockPV, PrivValidator};

    #[test]
    fn test_public_key_roundtrip() {
        for key_type in [KeyType::Ed25519, KeyType::Secp256k1] {
            let pk = MockPV::generate(key_type).pub_key();
            let proto = public_key_to_proto(&pk);
            assert_eq!(public_key_from_proto(&proto).unwrap(), pk);
        }
    }

    #[test]
    fn test_public_key_tagged_by_algorithm() {
        let pk = MockPV::generate(KeyType::Secp256k1).pub_key();
        assert!(matches!(
            public_key_to_proto(&pk).sum,
            Some(Sum::Secp256k1(ref b)) if b.len() == 33
        ));
    }

    #[test]
    fn test_public_key_empty_sum() {
        let err = public_key_from_proto(&proto::PublicKey { sum: None }).unwrap_err();
        assert!(matches!(err, ProtocolError::EmptyPublicKey));
        assert!(err.is_decoding());
    }

    #[test]
    fn test_public_key_bad_bytes() {
        let proto = proto::PublicKey {
            sum: Some(Sum::Ed25519(vec![1, 2, 3])),
        };
        assert!(matches!(
            public_key_from_proto(&proto),
            Err(ProtocolError::InvalidPublicKey(_))
        ));
    }

    #[test]
    fn test_to_proto_failures_are_encoding_errors() {
        let err = to_proto(None).unwrap_err();
        assert!(matches!(err, ProtocolError::NilValidator));
        assert!(err.is_encoding());

        let err = to_proto(Some(&Validator::default())).unwrap_err();
        assert!(matches!(err, ProtocolError::MissingPublicKey));
        assert!(err.is_encoding());
    }

    #[test]
    fn test_from_proto_failures_are_decoding_errors() {
        let err = from_proto(None).unwrap_err();
        assert!(matches!(err, ProtocolError::NilProto));
        assert!(err.is_decoding());

        let err = from_proto(Some(proto::Validator::default())).unwrap_err();
        assert!(matches!(err, ProtocolError::EmptyPublicKey));
    }

    #[test]
    fn test_unset_bridge_fields_encode_empty() {
        let val = Validator::new(MockPV::new().pub_key(), 1);
        let vp = to_proto(Some(&val)).unwrap();
        assert!(vp.bls_key.is_empty());
        assert!(vp.relayer_address.is_empty());
        assert!(vp.challenger_address.is_empty());
    }

    #[test]
    fn test_decode_does_not_validate() {
        let mut val = Validator::new(MockPV::new().pub_key(), -3);
        val.set_bls_key(vec![0x61]);
        val.address = Address::new(vec![0x61]);

        let decoded = from_proto(Some(to_proto(Some(&val)).unwrap())).unwrap();
        assert_eq!(decoded, val);
        assert!(decoded.validate_basic().is_err());
    }
}
