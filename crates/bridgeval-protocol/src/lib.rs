//! Bridgeval protocol utilities: wire messages, conversions, codec and errors.
//!
//! [`to_proto`] / [`from_proto`] are the only sanctioned path for a validator
//! record to leave or enter the process. For every validator with a public
//! key, `from_proto(Some(to_proto(Some(&v))?))? == v`.

pub mod codec;
pub mod convert;
pub mod error;
pub mod proto;

pub use codec::{decode_validator, encode_validator, validator_hash_bytes, WIRE_VERSION};
pub use convert::{from_proto, public_key_from_proto, public_key_to_proto, to_proto};
pub use error::{Direction, ProtocolError, ProtocolResult};
