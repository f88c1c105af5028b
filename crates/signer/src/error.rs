use thiserror::Error;

/// Signer errors
#[derive(Debug, Error, Clone)]
pub enum SignerError {
    /// The user declined the signing prompt or biometric verification failed
    #[error("signing rejected")]
    SigningRejected,

    /// The signing device cannot serve the request
    #[error("signing device unavailable: {inner}")]
    DeviceUnavailable {
        /// The inner error message
        inner: String,
    },

    /// Passkey enrollment did not produce a credential
    #[error("passkey enrollment failed: {inner}")]
    EnrollmentFailed {
        /// The inner error message
        inner: String,
    },

    /// Key material could not be parsed or used
    #[error("invalid signing key: {inner}")]
    InvalidKey {
        /// The inner error message
        inner: String,
    },

    /// The device returned an assertion this crate cannot encode
    #[error("malformed webauthn assertion: {inner}")]
    InvalidAssertion {
        /// The inner error message
        inner: String,
    },
}
