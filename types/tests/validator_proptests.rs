//! Property tests for the admission gate.

use bridgeval_keys::{MockPV, PrivValidator};
use bridgeval_types::{
    Address, Validator, ValidatorError, ValidatorField, ADDRESS_SIZE, BLS_PUB_KEY_SIZE,
};
use proptest::prelude::*;

fn valid_validator(power: i64) -> Validator {
    Validator::new(MockPV::new().pub_key(), power)
}

/// Non-empty byte vectors whose length differs from `size`.
fn wrong_size_bytes(size: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..(size * 2 + 2))
        .prop_filter("must not be the fixed size", move |b| b.len() != size)
}

#[test]
fn test_voting_power_boundaries() {
    for power in [-1, 0, 1, i64::MAX] {
        let result = valid_validator(power).validate_basic();
        assert_eq!(result.is_err(), power < 0, "power {}", power);
    }
    assert_eq!(
        valid_validator(i64::MIN).validate_basic(),
        Err(ValidatorError::NegativeVotingPower(i64::MIN))
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_power_fails_iff_negative(power in any::<i64>()) {
        let result = valid_validator(power).validate_basic();
        prop_assert_eq!(result.is_err(), power < 0);
    }

    #[test]
    fn prop_wrong_address_size_always_fails(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(bytes.len() != ADDRESS_SIZE);
        let mut val = valid_validator(1);
        val.address = Address::new(bytes);
        let err = val.validate_basic().unwrap_err();
        prop_assert_eq!(err.field(), ValidatorField::Address);
    }

    #[test]
    fn prop_absent_or_sized_optional_fields_pass(
        with_bls in any::<bool>(),
        with_relayer in any::<bool>(),
        with_challenger in any::<bool>(),
        power in 0..i64::MAX,
    ) {
        let mut val = valid_validator(power);
        if with_bls {
            val.set_bls_key(vec![1u8; BLS_PUB_KEY_SIZE]);
        }
        if with_relayer {
            val.set_relayer_address(vec![2u8; ADDRESS_SIZE]);
        }
        if with_challenger {
            val.set_challenger_address(vec![3u8; ADDRESS_SIZE]);
        }
        prop_assert!(val.validate_basic().is_ok());
    }

    #[test]
    fn prop_wrong_bls_key_attributed(bytes in wrong_size_bytes(BLS_PUB_KEY_SIZE)) {
        let mut val = valid_validator(1);
        val.set_bls_key(bytes.clone());
        prop_assert_eq!(val.validate_basic(), Err(ValidatorError::WrongBlsKeySize(bytes)));
    }

    #[test]
    fn prop_wrong_relayer_attributed(bytes in wrong_size_bytes(ADDRESS_SIZE)) {
        let mut val = valid_validator(1);
        val.set_relayer_address(bytes.clone());
        prop_assert_eq!(val.validate_basic(), Err(ValidatorError::WrongRelayerAddressSize(bytes)));
    }

    #[test]
    fn prop_wrong_challenger_attributed(bytes in wrong_size_bytes(ADDRESS_SIZE)) {
        let mut val = valid_validator(1);
        val.set_challenger_address(bytes.clone());
        prop_assert_eq!(val.validate_basic(), Err(ValidatorError::WrongChallengerAddressSize(bytes)));
    }
}
