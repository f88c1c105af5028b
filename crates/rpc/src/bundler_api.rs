use ethers::types::{Address, U64};
use jsonrpsee::{core::RpcResult, proc_macros::rpc};
use safe4337_primitives::{
    UserOperation, UserOperationByHash, UserOperationGasEstimation, UserOperationHash,
    UserOperationReceipt, UserOperationRequest,
};

/// The ERC-4337 `eth` namespace RPC methods a bundler exposes
#[rpc(client, namespace = "eth")]
pub trait BundlerApi {
    /// Retrieve the current [EIP-155](https://eips.ethereum.org/EIPS/eip-155) chain ID.
    ///
    /// # Returns
    /// * `RpcResult<U64>` - The chain ID as a U64.
    #[method(name = "chainId")]
    async fn chain_id(&self) -> RpcResult<U64>;

    /// Get the entry points the bundler supports.
    ///
    /// # Returns
    /// * `RpcResult<Vec<Address>>` - An array of the supported entry point addresses.
    #[method(name = "supportedEntryPoints")]
    async fn supported_entry_points(&self) -> RpcResult<Vec<Address>>;

    /// Send a [UserOperation](UserOperation) for inclusion.
    ///
    /// # Arguments
    /// * `user_operation: UserOperation` - The signed [UserOperation](UserOperation).
    /// * `entry_point: Address` - The address of the entry point.
    ///
    /// # Returns
    /// * `RpcResult<UserOperationHash>` - The hash of the accepted [UserOperation](UserOperation).
    #[method(name = "sendUserOperation")]
    async fn send_user_operation(
        &self,
        user_operation: UserOperation,
        entry_point: Address,
    ) -> RpcResult<UserOperationHash>;

    /// Estimate the gas required for a user operation.
    ///
    /// # Arguments
    /// * `user_operation: UserOperationRequest` - A [partial user operation](UserOperationRequest) for which to estimate the gas.
    /// * `entry_point: Address` - The address of the entry point.
    ///
    /// # Returns
    /// * `RpcResult<UserOperationGasEstimation>` - The estimated gas for the [UserOperation](UserOperation).
    #[method(name = "estimateUserOperationGas")]
    async fn estimate_user_operation_gas(
        &self,
        user_operation: UserOperationRequest,
        entry_point: Address,
    ) -> RpcResult<UserOperationGasEstimation>;

    /// Retrieve the receipt of a [UserOperation](UserOperation).
    ///
    /// # Arguments
    /// * `user_operation_hash: UserOperationHash` - The hash of a [UserOperation](UserOperation).
    ///
    /// # Returns
    /// * `RpcResult<Option<UserOperationReceipt>>` - The receipt, or None if the operation is not indexed yet.
    #[method(name = "getUserOperationReceipt")]
    async fn get_user_operation_receipt(
        &self,
        user_operation_hash: UserOperationHash,
    ) -> RpcResult<Option<UserOperationReceipt>>;

    /// Retrieve a [UserOperation](UserOperation) by its hash.
    ///
    /// # Arguments
    /// * `user_operation_hash: UserOperationHash` - The hash of the user operation.
    ///
    /// # Returns
    /// * `RpcResult<Option<UserOperationByHash>>` - The operation with its inclusion context, or None if it is not indexed yet.
    #[method(name = "getUserOperationByHash")]
    async fn get_user_operation_by_hash(
        &self,
        user_operation_hash: UserOperationHash,
    ) -> RpcResult<Option<UserOperationByHash>>;
}
