//! Signer abstraction for Safe smart accounts
//!
//! Two signer kinds produce signatures over the canonical user operation
//! hash: [EoaSigner] (secp256k1 private key) and [PasskeySigner]
//! (device-bound P-256 credential verified on-chain through the shared
//! WebAuthn signer). Both implement the object-safe [Signer] trait; passkey
//! signing suspends until the platform authenticator returns an assertion.

mod device;
mod eoa;
mod error;
mod passkey;

use async_trait::async_trait;
use ethers::types::{Bytes, H256};
use safe4337_primitives::SignerIdentity;

pub use device::{PasskeyAssertion, PasskeyAuthenticator, PasskeyCredential};
#[cfg(feature = "test-utils")]
pub use device::SoftwareAuthenticator;
pub use eoa::EoaSigner;
pub use error::SignerError;
pub use passkey::PasskeySigner;

/// A capability to sign 32-byte digests on behalf of an account owner.
///
/// Signing is asynchronous because hardware-backed signers may require user
/// interaction. Implementations never mutate their public identity.
#[async_trait]
pub trait Signer: Send + Sync {
    /// Stable public identity of the signer
    fn identity(&self) -> SignerIdentity;

    /// Signs the given digest, returning the signature bytes in the encoding
    /// the account's on-chain verifier expects
    async fn sign(&self, hash: H256) -> Result<Bytes, SignerError>;

    /// A correctly-shaped placeholder signature for gas estimation.
    ///
    /// Never valid on-chain; must not be submitted outside the estimation
    /// path.
    fn dummy_signature(&self) -> Bytes;
}
