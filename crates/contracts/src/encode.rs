//! Pure calldata encoders for the Safe contracts
//!
//! Everything here is deterministic byte assembly; nothing touches the
//! network. The encodings must match the deployed contracts bit-for-bit,
//! since they feed both the counterfactual address derivation and the user
//! operations the entry point executes.

use crate::gen::{
    AddOwnerWithThresholdCall, ConfigureCall, CreateProxyWithNonceCall, EnableModulesCall,
    ExecuteUserOpCall, MultiSendCall, SetupCall, SignerConfiguration,
};
use ethers::{
    abi::AbiEncode,
    types::{Address, Bytes, U256},
};
use safe4337_primitives::{SafeConfig, SignerIdentity};

/// Call (0) or delegatecall (1), as the Safe distinguishes executions
const OPERATION_CALL: u8 = 0;
const OPERATION_DELEGATECALL: u8 = 1;

/// One transaction inside a MultiSend batch
#[derive(Clone, Debug)]
pub struct MultiSendTx {
    pub operation: u8,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
}

/// Encodes `Safe4337Module.executeUserOp`, the callData every user operation
/// carries.
///
/// The delegatecall flag selects a different on-chain execution mode, so the
/// two encodings are never interchangeable.
pub fn execute_user_op_call_data(
    to: Address,
    value: U256,
    data: Bytes,
    delegate_call: bool,
) -> Bytes {
    ExecuteUserOpCall {
        to,
        value,
        data,
        operation: if delegate_call { OPERATION_DELEGATECALL } else { OPERATION_CALL },
    }
    .encode()
    .into()
}

/// Encodes `Safe.addOwnerWithThreshold(owner, threshold)`, a self-call
pub fn add_owner_call_data(owner: Address, threshold: U256) -> Bytes {
    AddOwnerWithThresholdCall { owner, threshold }.encode().into()
}

/// Encodes `SafeModuleSetup.enableModules(modules)`
pub fn enable_modules_call_data(modules: Vec<Address>) -> Bytes {
    EnableModulesCall { modules }.encode().into()
}

/// Encodes `SafeWebAuthnSharedSigner.configure({x, y, verifiers})`
pub fn shared_signer_configure_call_data(x: U256, y: U256, verifiers: U256) -> Bytes {
    ConfigureCall { signer: SignerConfiguration { x, y, verifiers } }.encode().into()
}

/// Encodes `MultiSend.multiSend` over the packed transaction batch.
///
/// Each transaction packs as operation (1 byte) ‖ to (20) ‖ value (32) ‖
/// data length (32) ‖ data.
pub fn multi_send_call_data(txs: &[MultiSendTx]) -> Bytes {
    let mut packed = Vec::new();
    for tx in txs {
        packed.push(tx.operation);
        packed.extend_from_slice(tx.to.as_bytes());
        let mut buf = [0u8; 32];
        tx.value.to_big_endian(&mut buf);
        packed.extend_from_slice(&buf);
        U256::from(tx.data.len()).to_big_endian(&mut buf);
        packed.extend_from_slice(&buf);
        packed.extend_from_slice(&tx.data);
    }
    MultiSendCall { transactions: packed.into() }.encode().into()
}

/// Encodes the `Safe.setup` initializer for a fresh account owned by the
/// given identity.
///
/// An EOA identity becomes the single owner directly. A passkey identity
/// installs the shared WebAuthn signer as owner and configures it with the
/// credential's public key in the same setup, batched through MultiSend so
/// the whole initialization is atomic.
pub fn setup_call_data(identity: &SignerIdentity, config: &SafeConfig) -> Bytes {
    let (owners, to, data) = match identity {
        SignerIdentity::Eoa { address } => (
            vec![*address],
            config.safe_module_setup_address,
            enable_modules_call_data(vec![config.safe_4337_module_address]),
        ),
        SignerIdentity::Passkey { x, y } => {
            let verifiers = U256::from_big_endian(config.safe_p256_verifier_address.as_bytes());
            let batch = [
                MultiSendTx {
                    operation: OPERATION_DELEGATECALL,
                    to: config.safe_module_setup_address,
                    value: U256::zero(),
                    data: enable_modules_call_data(vec![config.safe_4337_module_address]),
                },
                MultiSendTx {
                    operation: OPERATION_DELEGATECALL,
                    to: config.safe_web_authn_shared_signer_address,
                    value: U256::zero(),
                    data: shared_signer_configure_call_data(*x, *y, verifiers),
                },
            ];
            (
                vec![config.safe_web_authn_shared_signer_address],
                config.safe_multi_send_address,
                multi_send_call_data(&batch),
            )
        }
    };

    SetupCall {
        owners,
        threshold: U256::one(),
        to,
        data,
        fallback_handler: config.safe_4337_module_address,
        payment_token: Address::zero(),
        payment: U256::zero(),
        payment_receiver: Address::zero(),
    }
    .encode()
    .into()
}

/// Builds the `initCode` deploying the account atomically with its first
/// user operation: factory address followed by the `createProxyWithNonce`
/// calldata.
///
/// The salt nonce is [account_salt_nonce](crate::account_salt_nonce), the
/// same value [predict_address](crate::predict_address) hashes, so the
/// deployed address always matches the predicted one.
pub fn init_code(identity: &SignerIdentity, config: &SafeConfig, chain_id: u64) -> Bytes {
    let call = CreateProxyWithNonceCall {
        singleton: config.safe_singleton_l2_address,
        initializer: setup_call_data(identity, config),
        salt_nonce: crate::factory::account_salt_nonce(config, chain_id),
    };
    [config.safe_proxy_factory_address.as_bytes(), call.encode().as_slice()].concat().into()
}
