//! User operation assembly

use crate::{error::AccountError, SafeAccount};
use ethers::{
    providers::Middleware,
    types::{Address, Bytes, U256},
};
use safe4337_contracts::{execute_user_op_call_data, init_code};
use safe4337_primitives::{UserOperation, UserOperationRequest};
use tracing::debug;

/// Assembles an unsigned user operation for the account.
///
/// Order matters: nonce and init code depend on deployment state, the gas
/// estimate needs the assembled fields, and sponsorship runs last so the
/// paymaster sees the final operation. The returned operation always carries
/// an empty signature.
pub(crate) async fn prepare<M: Middleware + 'static>(
    account: &SafeAccount<M>,
    to: Address,
    value: U256,
    data: Bytes,
    delegate_call: bool,
) -> Result<UserOperation, AccountError> {
    let deployed = account.is_deployed().await?;

    let nonce = if deployed {
        account.entry_point.get_nonce(&account.address, U256::zero()).await?
    } else {
        U256::zero()
    };

    // undeployed accounts deploy atomically with their first operation
    let init_code = if deployed {
        Bytes::default()
    } else {
        init_code(&account.signer.identity(), &account.config, account.chain_id)
    };

    let (max_fee_per_gas, max_priority_fee_per_gas) = account
        .eth_client
        .estimate_eip1559_fees(None)
        .await
        .map_err(|err| AccountError::Provider { inner: err.to_string() })?;

    let mut user_operation = UserOperation::default()
        .sender(account.address)
        .nonce(nonce)
        .init_code(init_code)
        .call_data(execute_user_op_call_data(to, value, data, delegate_call))
        .max_fee_per_gas(max_fee_per_gas)
        .max_priority_fee_per_gas(max_priority_fee_per_gas);

    let estimate = account
        .bundler
        .estimate_user_operation_gas(
            &estimation_request(account, &user_operation),
            &account.entry_point.address(),
        )
        .await?;
    user_operation = user_operation
        .call_gas_limit(estimate.call_gas_limit)
        .verification_gas_limit(estimate.verification_gas_limit)
        .pre_verification_gas(estimate.pre_verification_gas);

    if let Some(paymaster) = &account.paymaster {
        let sponsorship = paymaster
            .sponsor_user_operation(
                &estimation_request(account, &user_operation),
                &account.entry_point.address(),
            )
            .await?;
        debug!("paymaster sponsored operation for {:?}", account.address);
        user_operation.paymaster_and_data = sponsorship.paymaster_and_data;
        if let Some(call_gas_limit) = sponsorship.call_gas_limit {
            user_operation.call_gas_limit = call_gas_limit;
        }
        if let Some(verification_gas_limit) = sponsorship.verification_gas_limit {
            user_operation.verification_gas_limit = verification_gas_limit;
        }
        if let Some(pre_verification_gas) = sponsorship.pre_verification_gas {
            user_operation.pre_verification_gas = pre_verification_gas;
        }
    }

    Ok(user_operation)
}

/// Estimation variant of the operation: same fields, placeholder signature.
/// The placeholder never leaves the estimation path.
fn estimation_request<M: Middleware + 'static>(
    account: &SafeAccount<M>,
    user_operation: &UserOperation,
) -> UserOperationRequest {
    let mut request = UserOperationRequest::from(user_operation.clone());
    request.signature = Some(account.signer.dummy_signature());
    request
}
