//! Account connection parameters

use crate::error::AccountError;
use serde::{Deserialize, Serialize};

/// External inputs wiring an account to its chain and services.
///
/// `rpc_url` and `bundler_url` are mandatory; their absence is a
/// configuration error raised before any network call. `address` is set for
/// an existing account and left out to derive a fresh counterfactual one.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountParams {
    pub chain_id: u64,
    pub rpc_url: String,
    pub bundler_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paymaster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl AccountParams {
    /// Fails fast when a mandatory field is missing
    pub fn verify(&self) -> Result<(), AccountError> {
        if self.chain_id == 0 {
            return Err(AccountError::Configuration { inner: "chainId is required".into() });
        }
        if self.rpc_url.trim().is_empty() {
            return Err(AccountError::Configuration { inner: "rpcUrl is required".into() });
        }
        if self.bundler_url.trim().is_empty() {
            return Err(AccountError::Configuration { inner: "bundlerUrl is required".into() });
        }
        if let Some(paymaster_url) = &self.paymaster_url {
            if paymaster_url.trim().is_empty() {
                return Err(AccountError::Configuration {
                    inner: "paymasterUrl must not be empty when set".into(),
                });
            }
        }
        Ok(())
    }
}
