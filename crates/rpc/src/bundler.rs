//! Bundler client

use crate::{bundler_api::BundlerApiClient, error::RpcClientError};
use ethers::types::{Address, U64};
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use safe4337_primitives::{
    UserOperation, UserOperationByHash, UserOperationGasEstimation, UserOperationHash,
    UserOperationReceipt, UserOperationRequest,
};
use tracing::trace;

/// Client for a bundler's `eth` namespace.
///
/// A thin typed wrapper: requests go out exactly once, `null` results come
/// back as `Ok(None)` for the caller to poll on, and RPC error objects are
/// surfaced unmodified as [RpcClientError::Rpc].
#[derive(Clone, Debug)]
pub struct BundlerClient {
    inner: HttpClient,
}

impl BundlerClient {
    /// Builds a client for the given endpoint; fails fast on a missing or
    /// malformed URL without touching the network
    pub fn new(bundler_url: &str) -> Result<Self, RpcClientError> {
        if bundler_url.trim().is_empty() {
            return Err(RpcClientError::Endpoint { inner: "bundler url is required".into() });
        }
        let inner = HttpClientBuilder::default()
            .build(bundler_url)
            .map_err(|err| RpcClientError::Endpoint { inner: err.to_string() })?;
        Ok(Self { inner })
    }

    /// Submits a signed user operation; the returned hash is the bundler's
    /// acknowledgement of receipt
    pub async fn send_user_operation(
        &self,
        user_operation: &UserOperation,
        entry_point: &Address,
    ) -> Result<UserOperationHash, RpcClientError> {
        trace!("sending user operation from {:?} to bundler", user_operation.sender);
        self.inner
            .send_user_operation(user_operation.clone(), *entry_point)
            .await
            .map_err(Into::into)
    }

    /// Asks the bundler to estimate the three gas fields of an operation
    pub async fn estimate_user_operation_gas(
        &self,
        user_operation: &UserOperationRequest,
        entry_point: &Address,
    ) -> Result<UserOperationGasEstimation, RpcClientError> {
        self.inner
            .estimate_user_operation_gas(user_operation.clone(), *entry_point)
            .await
            .map_err(Into::into)
    }

    /// Fetches the receipt of an operation; `Ok(None)` means not indexed yet
    pub async fn get_user_operation_receipt(
        &self,
        user_operation_hash: &UserOperationHash,
    ) -> Result<Option<UserOperationReceipt>, RpcClientError> {
        self.inner.get_user_operation_receipt(*user_operation_hash).await.map_err(Into::into)
    }

    /// Fetches an operation with its inclusion context; `Ok(None)` means not
    /// indexed yet
    pub async fn get_user_operation_by_hash(
        &self,
        user_operation_hash: &UserOperationHash,
    ) -> Result<Option<UserOperationByHash>, RpcClientError> {
        self.inner.get_user_operation_by_hash(*user_operation_hash).await.map_err(Into::into)
    }

    /// Entry points the bundler accepts operations for
    pub async fn supported_entry_points(&self) -> Result<Vec<Address>, RpcClientError> {
        self.inner.supported_entry_points().await.map_err(Into::into)
    }

    /// Chain id the bundler serves
    pub async fn chain_id(&self) -> Result<U64, RpcClientError> {
        self.inner.chain_id().await.map_err(Into::into)
    }
}
