//! User operation request (optional fields)

use super::UserOperation;
use crate::utils::as_checksum_addr;
use ethers::types::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// User operation with optional gas fields, the shape accepted by
/// eth_estimateUserOperationGas and pm_sponsorUserOperation before the gas
/// values are known.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOperationRequest {
    #[serde(default = "Address::zero", serialize_with = "as_checksum_addr")]
    pub sender: Address,
    #[serde(default)]
    pub nonce: U256,
    #[serde(default)]
    pub init_code: Bytes,
    #[serde(default)]
    pub call_data: Bytes,
    #[serde(default)]
    pub call_gas_limit: Option<U256>,
    #[serde(default)]
    pub verification_gas_limit: Option<U256>,
    #[serde(default)]
    pub pre_verification_gas: Option<U256>,
    #[serde(default)]
    pub max_fee_per_gas: Option<U256>,
    #[serde(default)]
    pub max_priority_fee_per_gas: Option<U256>,
    #[serde(default)]
    pub paymaster_and_data: Bytes,
    #[serde(default)]
    pub signature: Option<Bytes>,
}

impl From<UserOperationRequest> for UserOperation {
    fn from(request: UserOperationRequest) -> Self {
        Self {
            sender: request.sender,
            nonce: request.nonce,
            init_code: request.init_code,
            call_data: request.call_data,
            call_gas_limit: request.call_gas_limit.unwrap_or_default(),
            verification_gas_limit: request.verification_gas_limit.unwrap_or_default(),
            pre_verification_gas: request.pre_verification_gas.unwrap_or_default(),
            max_fee_per_gas: request.max_fee_per_gas.unwrap_or_default(),
            max_priority_fee_per_gas: request.max_priority_fee_per_gas.unwrap_or_default(),
            paymaster_and_data: request.paymaster_and_data,
            signature: request.signature.unwrap_or_default(),
        }
    }
}

impl From<UserOperation> for UserOperationRequest {
    fn from(user_operation: UserOperation) -> Self {
        Self {
            sender: user_operation.sender,
            nonce: user_operation.nonce,
            init_code: user_operation.init_code,
            call_data: user_operation.call_data,
            call_gas_limit: Some(user_operation.call_gas_limit),
            verification_gas_limit: Some(user_operation.verification_gas_limit),
            pre_verification_gas: Some(user_operation.pre_verification_gas),
            max_fee_per_gas: Some(user_operation.max_fee_per_gas),
            max_priority_fee_per_gas: Some(user_operation.max_priority_fee_per_gas),
            paymaster_and_data: user_operation.paymaster_and_data,
            signature: Some(user_operation.signature),
        }
    }
}
