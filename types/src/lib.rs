// ========== Core Modules ==========
pub mod error;
pub mod validator;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export key types used in validator records
pub use bridgeval_keys::{Address, KeyType, PublicKey, ADDRESS_SIZE};

// Export from validator module
pub use validator::{
    validate_validator, validator_list_string, validator_string, Validator, BLS_PUB_KEY_SIZE,
};

// Error types
pub use error::{ErrorKind, ValidatorError, ValidatorField, ValidatorResult};
