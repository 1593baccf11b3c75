//! Byte-level validator codec.
//!
//! Wire layout:
//!
//! ```text
//! ┌─────────┬──────────────────────────────┐
//! │ version │ protobuf `Validator` message │
//! │  1 byte │          variable            │
//! └─────────┴──────────────────────────────┘
//! ```

use bytes::{Buf, BufMut, BytesMut};
use prost::Message;

use bridgeval_types::Validator;

use crate::convert::public_key_to_proto;
use crate::proto;
use crate::{ProtocolError, ProtocolResult};

/// Current wire format version.
pub const WIRE_VERSION: u8 = 1;

/// Encode a validator with the version prefix.
pub fn encode_validator(val: &Validator) -> ProtocolResult<Vec<u8>> {
    let vp = proto::Validator::try_from(val)?;
    let mut buf = BytesMut::with_capacity(1 + vp.encoded_len());
    buf.put_u8(WIRE_VERSION);
    vp.encode(&mut buf)?;
    Ok(buf.to_vec())
}

/// Decode a validator written by [`encode_validator`].
///
/// The result is not validated.
pub fn decode_validator(mut bytes: &[u8]) -> ProtocolResult<Validator> {
    if !bytes.has_remaining() {
        return Err(ProtocolError::EmptyPayload);
    }
    let version = bytes.get_u8();
    if version != WIRE_VERSION {
        return Err(ProtocolError::UnsupportedVersion(version));
    }
    let vp = proto::Validator::decode(bytes)?;
    Validator::try_from(vp)
}

/// Bytes a validator-set hash commits to: public key and voting power.
pub fn validator_hash_bytes(val: &Validator) -> ProtocolResult<Vec<u8>> {
    let pub_key = val.pub_key.as_ref().ok_or(ProtocolError::MissingPublicKey)?;
    let simple = proto::SimpleValidator {
        pub_key: Some(public_key_to_proto(pub_key)),
        voting_power: val.voting_power,
    };
    Ok(simple.encode_to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgeval_types::test_utils::{attach_rand_bridge_material, rand_validator};

    #[test]
    fn test_encode_decode() {
        let (mut val, _) = rand_validator(true, 10);
        attach_rand_bridge_material(&mut val);
        val.proposer_priority = -17;

        let bytes = encode_validator(&val).unwrap();
        assert_eq!(bytes[0], WIRE_VERSION);
        assert_eq!(decode_validator(&bytes).unwrap(), val);
    }

    #[test]
    fn test_decode_empty() {
        assert!(matches!(
            decode_validator(&[]),
            Err(ProtocolError::EmptyPayload)
        ));
    }

    #[test]
    fn test_decode_unknown_version() {
        let (val, _) = rand_validator(false, 1);
        let mut bytes = encode_validator(&val).unwrap();
        bytes[0] = 9;
        assert!(matches!(
            decode_validator(&bytes),
            Err(ProtocolError::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn test_decode_truncated_body() {
        let (val, _) = rand_validator(false, 1);
        let bytes = encode_validator(&val).unwrap();
        let err = decode_validator(&bytes[..bytes.len() - 5]).unwrap_err();
        assert!(matches!(err, ProtocolError::Decode(_)));
        assert!(err.is_decoding());
    }

    #[test]
    fn test_decode_version_only_has_no_key() {
        assert!(matches!(
            decode_validator(&[WIRE_VERSION]),
            Err(ProtocolError::EmptyPublicKey)
        ));
    }

    #[test]
    fn test_hash_bytes_ignore_bridge_material() {
        let (mut val, _) = rand_validator(false, 5);
        let before = validator_hash_bytes(&val).unwrap();
        attach_rand_bridge_material(&mut val);
        val.proposer_priority = 100;
        assert_eq!(validator_hash_bytes(&val).unwrap(), before);

        val.voting_power = 6;
        assert_ne!(validator_hash_bytes(&val).unwrap(), before);
    }

    #[test]
    fn test_hash_bytes_require_key() {
        assert!(matches!(
            validator_hash_bytes(&Validator::default()),
            Err(ProtocolError::MissingPublicKey)
        ));
    }
}
