//! Protobuf wire messages.
//!
//! ```proto
//! message PublicKey {
//!   oneof sum {
//!     bytes ed25519   = 1;
//!     bytes secp256k1 = 2;
//!   }
//! }
//!
//! message Validator {
//!   bytes     address            = 1;
//!   PublicKey pub_key            = 2;
//!   int64     voting_power       = 3;
//!   int64     proposer_priority  = 4;
//!   bytes     bls_key            = 5;
//!   bytes     relayer_address    = 6;
//!   bytes     challenger_address = 7;
//! }
//!
//! message SimpleValidator {
//!   PublicKey pub_key      = 1;
//!   int64     voting_power = 2;
//! }
//! ```
//!
//! Unset bridge fields travel as empty bytes.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PublicKey {
    #[prost(oneof = "public_key::Sum", tags = "1, 2")]
    pub sum: ::core::option::Option<public_key::Sum>,
}

/// Nested message and enum types in `PublicKey`.
pub mod public_key {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(bytes, tag = "1")]
        Ed25519(::prost::alloc::vec::Vec<u8>),
        #[prost(bytes, tag = "2")]
        Secp256k1(::prost::alloc::vec::Vec<u8>),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Validator {
    #[prost(bytes = "vec", tag = "1")]
    pub address: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub pub_key: ::core::option::Option<PublicKey>,
    #[prost(int64, tag = "3")]
    pub voting_power: i64,
    #[prost(int64, tag = "4")]
    pub proposer_priority: i64,
    #[prost(bytes = "vec", tag = "5")]
    pub bls_key: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "6")]
    pub relayer_address: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "7")]
    pub challenger_address: ::prost::alloc::vec::Vec<u8>,
}

/// The part of a validator a validator-set hash commits to.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SimpleValidator {
    #[prost(message, optional, tag = "1")]
    pub pub_key: ::core::option::Option<PublicKey>,
    #[prost(int64, tag = "2")]
    pub voting_power: i64,
}
