//! Paymaster client

use crate::{error::RpcClientError, paymaster_api::PaymasterApiClient};
use ethers::types::Address;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use safe4337_primitives::{SponsorUserOperationResponse, UserOperationRequest};
use tracing::trace;

/// Client for a paymaster's `pm` namespace
#[derive(Clone, Debug)]
pub struct PaymasterClient {
    inner: HttpClient,
}

impl PaymasterClient {
    /// Builds a client for the given endpoint; fails fast on a missing or
    /// malformed URL without touching the network
    pub fn new(paymaster_url: &str) -> Result<Self, RpcClientError> {
        if paymaster_url.trim().is_empty() {
            return Err(RpcClientError::Endpoint { inner: "paymaster url is required".into() });
        }
        let inner = HttpClientBuilder::default()
            .build(paymaster_url)
            .map_err(|err| RpcClientError::Endpoint { inner: err.to_string() })?;
        Ok(Self { inner })
    }

    /// Requests sponsorship data for the operation; the response's
    /// `paymasterAndData` goes into the operation before signing
    pub async fn sponsor_user_operation(
        &self,
        user_operation: &UserOperationRequest,
        entry_point: &Address,
    ) -> Result<SponsorUserOperationResponse, RpcClientError> {
        trace!("requesting sponsorship for {:?}", user_operation.sender);
        self.inner
            .sponsor_user_operation(user_operation.clone(), *entry_point)
            .await
            .map_err(Into::into)
    }
}
