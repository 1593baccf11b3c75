//! Random validator fixtures for tests and local tooling.

use bridgeval_keys::{KeyType, MockPV, PrivValidator, ADDRESS_SIZE};
use rand::{Rng, RngCore};

use crate::{Validator, BLS_PUB_KEY_SIZE};

/// Create a validator with a fresh ed25519 key.
///
/// With `rand_power` the voting power is `min_power` plus a random value in
/// `[0, 1000)`, saturating at `i64::MAX`; otherwise it is exactly `min_power`.
pub fn rand_validator(rand_power: bool, min_power: i64) -> (Validator, MockPV) {
    rand_validator_with_key_type(KeyType::Ed25519, rand_power, min_power)
}

/// Like [`rand_validator`] with a chosen key algorithm.
pub fn rand_validator_with_key_type(
    key_type: KeyType,
    rand_power: bool,
    min_power: i64,
) -> (Validator, MockPV) {
    let pv = MockPV::generate(key_type);
    let mut voting_power = min_power;
    if rand_power {
        voting_power = voting_power.saturating_add(rand::thread_rng().gen_range(0..1000));
    }
    (Validator::new(pv.pub_key(), voting_power), pv)
}

/// Random bytes of the given length.
pub fn rand_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes
}

/// Attach a random, correctly sized BLS key, relayer and challenger address.
pub fn attach_rand_bridge_material(val: &mut Validator) {
    val.set_bls_key(rand_bytes(BLS_PUB_KEY_SIZE));
    val.set_relayer_address(rand_bytes(ADDRESS_SIZE));
    val.set_challenger_address(rand_bytes(ADDRESS_SIZE));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rand_validator_fixed_power() {
        let (val, pv) = rand_validator(false, 100);
        assert_eq!(val.voting_power, 100);
        assert_eq!(val.pub_key, Some(pv.pub_key()));
        assert!(val.validate_basic().is_ok());
    }

    #[test]
    fn test_rand_validator_random_power_range() {
        for _ in 0..20 {
            let (val, _) = rand_validator(true, 100);
            assert!((100..1100).contains(&val.voting_power));
        }
    }

    #[test]
    fn test_rand_power_saturates_at_max() {
        for _ in 0..20 {
            let (val, _) = rand_validator(true, i64::MAX - 1);
            assert!(val.voting_power >= i64::MAX - 1);
            assert!(val.validate_basic().is_ok());
        }
    }

    #[test]
    fn test_bridge_material_is_valid() {
        let (mut val, _) = rand_validator_with_key_type(KeyType::Secp256k1, false, 1);
        attach_rand_bridge_material(&mut val);
        assert_eq!(val.bls_key.len(), BLS_PUB_KEY_SIZE);
        assert!(val.validate_basic().is_ok());
    }
}
