use ethers::types::Address;
use jsonrpsee::{core::RpcResult, proc_macros::rpc};
use safe4337_primitives::{SponsorUserOperationResponse, UserOperationRequest};

/// The `pm` namespace RPC methods a paymaster service exposes
#[rpc(client, namespace = "pm")]
pub trait PaymasterApi {
    /// Request gas sponsorship for a user operation.
    ///
    /// # Arguments
    /// * `user_operation: UserOperationRequest` - The operation to sponsor, gas fields optional.
    /// * `entry_point: Address` - The address of the entry point.
    ///
    /// # Returns
    /// * `RpcResult<SponsorUserOperationResponse>` - The paymaster data and optional gas overrides.
    #[method(name = "sponsorUserOperation")]
    async fn sponsor_user_operation(
        &self,
        user_operation: UserOperationRequest,
        entry_point: Address,
    ) -> RpcResult<SponsorUserOperationResponse>;
}
