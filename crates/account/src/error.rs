use safe4337_contracts::ContractsError;
use safe4337_rpc::RpcClientError;
use safe4337_signer::SignerError;
use thiserror::Error;

/// Account client errors
///
/// Every public operation either returns a fully-populated value or exactly
/// one of these; there is no partial success and no internal retry.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Missing or inconsistent construction inputs; raised before any
    /// network call
    #[error("configuration error: {inner}")]
    Configuration {
        /// The inner error message
        inner: String,
    },

    /// Malformed hex address at the input boundary
    #[error("invalid address: {inner}")]
    InvalidAddress {
        /// The inner error message
        inner: String,
    },

    /// Signing rejected or the device failed
    #[error(transparent)]
    Signer(#[from] SignerError),

    /// Contract read or encoding failure
    #[error(transparent)]
    Contracts(#[from] ContractsError),

    /// Bundler or paymaster RPC failure
    #[error(transparent)]
    Rpc(#[from] RpcClientError),

    /// Node provider failure
    #[error("provider error: {inner}")]
    Provider {
        /// The inner error message
        inner: String,
    },
}
