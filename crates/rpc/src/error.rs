use jsonrpsee::core::client::Error as JsonRpcClientError;
use thiserror::Error;

/// Errors surfaced by the bundler and paymaster clients
#[derive(Debug, Error, Clone)]
pub enum RpcClientError {
    /// The endpoint URL is missing or malformed; raised before any network
    /// call is made
    #[error("invalid endpoint: {inner}")]
    Endpoint {
        /// The inner error message
        inner: String,
    },

    /// Well-formed RPC error response from the service
    #[error("rpc error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i32,
        /// JSON-RPC error message
        message: String,
    },

    /// The transport timed out waiting for a response.
    ///
    /// Never retried here: the signed operation may still reach the chain,
    /// so resubmission is the caller's decision.
    #[error("request timed out")]
    Timeout,

    /// Any other transport failure
    #[error("transport error: {inner}")]
    Transport {
        /// The inner error message
        inner: String,
    },
}

impl From<JsonRpcClientError> for RpcClientError {
    fn from(err: JsonRpcClientError) -> Self {
        match err {
            JsonRpcClientError::Call(obj) => {
                Self::Rpc { code: obj.code(), message: obj.message().to_string() }
            }
            JsonRpcClientError::RequestTimeout => Self::Timeout,
            other => Self::Transport { inner: other.to_string() },
        }
    }
}
