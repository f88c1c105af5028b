use thiserror::Error;

/// Contract interaction errors
#[derive(Debug, Error, Clone)]
pub enum ContractsError {
    /// Provider error
    #[error("provider error: {inner}")]
    Provider {
        /// The inner error message
        inner: String,
    },

    /// ABI error
    #[error("abi error: {inner}")]
    ABI {
        /// The inner error message
        inner: String,
    },
}
