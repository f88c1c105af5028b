//! Counterfactual address derivation
//!
//! Reproduces the CREATE2 computation the proxy factory performs on
//! deployment, so an account's address is known before any transaction is
//! sent. Pure: the only factory parameter involved is the embedded proxy
//! creation code.

use crate::encode::setup_call_data;
use ethers::{
    abi::{encode, Token},
    types::{Address, Bytes, U256},
    utils::keccak256,
};
use safe4337_primitives::{constants, SafeConfig, SignerIdentity};

/// Creation code the factory prepends to the singleton constructor argument
pub fn proxy_creation_code() -> Bytes {
    ethers::utils::hex::decode(constants::safe::PROXY_CREATION_CODE)
        .expect("well-known creation code constant")
        .into()
}

/// Salt nonce passed to `createProxyWithNonce`: a digest of the chain id and
/// the full contract configuration.
///
/// The factory accepts any nonce, and folding the whole configuration in
/// guarantees distinct deployments never collide: changing the chain or any
/// single infrastructure address yields a different account address.
pub fn account_salt_nonce(config: &SafeConfig, chain_id: u64) -> U256 {
    let encoded = encode(&[
        Token::Uint(chain_id.into()),
        Token::Address(config.safe_module_setup_address),
        Token::Address(config.safe_4337_module_address),
        Token::Address(config.safe_singleton_l2_address),
        Token::Address(config.safe_proxy_factory_address),
        Token::Address(config.safe_web_authn_shared_signer_address),
        Token::Address(config.safe_multi_send_address),
        Token::Address(config.safe_p256_verifier_address),
        Token::Address(config.safe_webauthn_signer_factory_address),
    ]);
    U256::from_big_endian(&keccak256(encoded))
}

/// Derives the deterministic address the proxy factory will deploy the
/// account at.
///
/// `salt = keccak256(keccak256(initializer) ‖ saltNonce)` with
/// [account_salt_nonce] as the nonce, then the standard CREATE2 formula over
/// the factory address and the proxy deployment code. Identical inputs always
/// produce the same address, whether or not the account is deployed yet.
pub fn predict_address(identity: &SignerIdentity, config: &SafeConfig, chain_id: u64) -> Address {
    let initializer = setup_call_data(identity, config);
    let mut nonce = [0u8; 32];
    account_salt_nonce(config, chain_id).to_big_endian(&mut nonce);
    let salt = keccak256([&keccak256(&initializer)[..], &nonce[..]].concat());

    let deployment_data = [
        proxy_creation_code().to_vec(),
        encode(&[Token::Address(config.safe_singleton_l2_address)]),
    ]
    .concat();
    let deployment_hash = keccak256(&deployment_data);

    let raw = keccak256(
        [
            &[0xff][..],
            config.safe_proxy_factory_address.as_bytes(),
            &salt[..],
            &deployment_hash[..],
        ]
        .concat(),
    );
    Address::from_slice(&raw[12..])
}
