//! ERC-4337 user operation and the response records returned by bundlers

mod hash;
mod request;

use crate::utils::{as_checksum_addr, as_checksum_addr_opt};
use ethers::{
    abi::AbiEncode,
    contract::{EthAbiCodec, EthAbiType},
    types::{Address, Bytes, Log, TransactionReceipt, H256, U256, U64},
    utils::keccak256,
};
pub use hash::UserOperationHash;
pub use request::UserOperationRequest;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// ERC-4337 user operation (entry point v0.6 layout)
///
/// All numeric and byte fields serialize as hex strings, matching the wire
/// encoding bundlers expect. The signature stays empty until the operation is
/// explicitly signed.
#[derive(
    Default,
    Clone,
    Debug,
    PartialEq,
    Eq,
    EthAbiCodec,
    EthAbiType,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct UserOperation {
    /// Account the operation executes from
    #[serde(serialize_with = "as_checksum_addr")]
    pub sender: Address,

    /// Anti-replay nonce, as tracked by the entry point
    pub nonce: U256,

    /// Factory address and calldata deploying the account, empty once deployed
    pub init_code: Bytes,

    /// Data passed to the account for the main execution call
    pub call_data: Bytes,

    /// Gas allocated to the main execution call
    pub call_gas_limit: U256,

    /// Gas allocated to the verification step
    pub verification_gas_limit: U256,

    /// Gas compensating the bundler for pre-verification work and calldata
    pub pre_verification_gas: U256,

    /// Maximum fee per gas (EIP-1559 style)
    pub max_fee_per_gas: U256,

    /// Maximum priority fee per gas (EIP-1559 style)
    pub max_priority_fee_per_gas: U256,

    /// Paymaster address followed by its sponsorship data, empty if unsponsored
    pub paymaster_and_data: Bytes,

    /// Data passed to the account during verification
    pub signature: Bytes,
}

/// User operation without signature (helper for packing user operation)
#[derive(EthAbiCodec, EthAbiType)]
struct UserOperationUnsigned {
    pub sender: Address,
    pub nonce: U256,
    pub init_code: H256,
    pub call_data: H256,
    pub call_gas_limit: U256,
    pub verification_gas_limit: U256,
    pub pre_verification_gas: U256,
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
    pub paymaster_and_data: H256,
}

impl From<UserOperation> for UserOperationUnsigned {
    fn from(value: UserOperation) -> Self {
        Self {
            sender: value.sender,
            nonce: value.nonce,
            init_code: keccak256(value.init_code.deref()).into(),
            call_data: keccak256(value.call_data.deref()).into(),
            call_gas_limit: value.call_gas_limit,
            verification_gas_limit: value.verification_gas_limit,
            pre_verification_gas: value.pre_verification_gas,
            max_fee_per_gas: value.max_fee_per_gas,
            max_priority_fee_per_gas: value.max_priority_fee_per_gas,
            paymaster_and_data: keccak256(value.paymaster_and_data.deref()).into(),
        }
    }
}

impl UserOperation {
    /// Packs the user operation into bytes
    pub fn pack(&self) -> Bytes {
        self.clone().encode().into()
    }

    /// Packs the user operation without signature to bytes (used for
    /// calculating the hash)
    pub fn pack_without_signature(&self) -> Bytes {
        UserOperationUnsigned::from(self.clone()).encode().into()
    }

    /// Calculates the canonical hash of the user operation, domain-separated
    /// by entry point address and chain id.
    ///
    /// This is bit-identical to the entry point's `getUserOpHash`, so a
    /// signature over it verifies on-chain.
    pub fn hash(&self, entry_point: &Address, chain_id: u64) -> UserOperationHash {
        H256::from_slice(
            keccak256(
                [
                    keccak256(self.pack_without_signature().deref()).to_vec(),
                    entry_point.encode(),
                    U256::from(chain_id).encode(),
                ]
                .concat(),
            )
            .as_slice(),
        )
        .into()
    }

    // Builder pattern helpers

    /// Sets the sender of the user operation
    pub fn sender(mut self, sender: Address) -> Self {
        self.sender = sender;
        self
    }

    /// Sets the nonce of the user operation
    pub fn nonce(mut self, nonce: U256) -> Self {
        self.nonce = nonce;
        self
    }

    /// Sets the init code of the user operation
    pub fn init_code(mut self, init_code: Bytes) -> Self {
        self.init_code = init_code;
        self
    }

    /// Sets the call data of the user operation
    pub fn call_data(mut self, call_data: Bytes) -> Self {
        self.call_data = call_data;
        self
    }

    /// Sets the call gas limit of the user operation
    pub fn call_gas_limit(mut self, call_gas_limit: U256) -> Self {
        self.call_gas_limit = call_gas_limit;
        self
    }

    /// Sets the verification gas limit of the user operation
    pub fn verification_gas_limit(mut self, verification_gas_limit: U256) -> Self {
        self.verification_gas_limit = verification_gas_limit;
        self
    }

    /// Sets the pre-verification gas of the user operation
    pub fn pre_verification_gas(mut self, pre_verification_gas: U256) -> Self {
        self.pre_verification_gas = pre_verification_gas;
        self
    }

    /// Sets the max fee per gas of the user operation
    pub fn max_fee_per_gas(mut self, max_fee_per_gas: U256) -> Self {
        self.max_fee_per_gas = max_fee_per_gas;
        self
    }

    /// Sets the max priority fee per gas of the user operation
    pub fn max_priority_fee_per_gas(mut self, max_priority_fee_per_gas: U256) -> Self {
        self.max_priority_fee_per_gas = max_priority_fee_per_gas;
        self
    }

    /// Sets the paymaster and data of the user operation
    pub fn paymaster_and_data(mut self, paymaster_and_data: Bytes) -> Self {
        self.paymaster_and_data = paymaster_and_data;
        self
    }

    /// Sets the signature of the user operation
    pub fn signature(mut self, signature: Bytes) -> Self {
        self.signature = signature;
        self
    }
}

/// Receipt of the user operation (returned from the RPC endpoint
/// eth_getUserOperationReceipt)
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOperationReceipt {
    #[serde(rename = "userOpHash")]
    pub user_operation_hash: UserOperationHash,
    #[serde(serialize_with = "as_checksum_addr")]
    pub sender: Address,
    pub nonce: U256,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "as_checksum_addr_opt"
    )]
    pub paymaster: Option<Address>,
    pub actual_gas_cost: U256,
    pub actual_gas_used: U256,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub logs: Vec<Log>,
    #[serde(rename = "receipt")]
    pub tx_receipt: TransactionReceipt,
}

/// Struct that is returned from the RPC endpoint eth_getUserOperationByHash
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOperationByHash {
    pub user_operation: UserOperation,
    #[serde(serialize_with = "as_checksum_addr")]
    pub entry_point: Address,
    pub transaction_hash: H256,
    pub block_hash: H256,
    pub block_number: U64,
}

/// Gas estimations for user operation (returned from the RPC endpoint
/// eth_estimateUserOperationGas)
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOperationGasEstimation {
    pub pre_verification_gas: U256,
    pub verification_gas_limit: U256,
    pub call_gas_limit: U256,
}

/// Sponsorship data returned from the RPC endpoint pm_sponsorUserOperation
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorUserOperationResponse {
    pub paymaster_and_data: Bytes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_verification_gas: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_gas_limit: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_gas_limit: Option<U256>,
}
