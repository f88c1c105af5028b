//! Counterfactual address prediction scenarios

use ethers::types::Address;
use safe4337_contracts::predict_address;
use safe4337_primitives::SafeConfig;
use safe4337_signer::{EoaSigner, Signer};
use safe4337_tests::common::TEST_KEY;

#[test]
fn known_key_and_config_yield_fixed_address() {
    let signer = EoaSigner::from_private_key(TEST_KEY).unwrap();
    let address = predict_address(&signer.identity(), &SafeConfig::default(), 1);
    assert_eq!(
        address,
        "0x4DA3a846d67eB7B265238e44C81583F109e12b3A".parse::<Address>().unwrap()
    );
}

#[test]
fn rederiving_is_idempotent() {
    let signer = EoaSigner::from_private_key(TEST_KEY).unwrap();
    let config = SafeConfig::default();
    let first = predict_address(&signer.identity(), &config, 1);
    // a fresh signer from the same key carries the same identity
    let again = EoaSigner::from_private_key(TEST_KEY).unwrap();
    assert_eq!(first, predict_address(&again.identity(), &config, 1));
}

#[test]
fn chain_id_alone_changes_the_address() {
    let signer = EoaSigner::from_private_key(TEST_KEY).unwrap();
    let config = SafeConfig::default();
    assert_ne!(
        predict_address(&signer.identity(), &config, 1),
        predict_address(&signer.identity(), &config, 137)
    );
}
