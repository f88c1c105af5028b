//! Platform authenticator interface for passkey operations
//!
//! The host platform (browser bridge, mobile enclave, security key) owns the
//! credential store and the user-verification UX; this crate only talks to it
//! through [PasskeyAuthenticator]. The handle is passed explicitly into
//! [PasskeySigner](crate::PasskeySigner) so its lifetime is scoped to the
//! session rather than the process.

use crate::error::SignerError;
use async_trait::async_trait;
use ethers::types::{Bytes, H256, U256};

/// A WebAuthn credential bound to a relying party
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasskeyCredential {
    /// Credential id assigned by the authenticator
    pub credential_id: Bytes,
    /// P-256 public key x coordinate
    pub x: U256,
    /// P-256 public key y coordinate
    pub y: U256,
}

/// A WebAuthn assertion produced for a 32-byte challenge
#[derive(Clone, Debug)]
pub struct PasskeyAssertion {
    /// Raw authenticator data (rpIdHash, flags, counter, extensions)
    pub authenticator_data: Bytes,
    /// Client data JSON whose challenge is the signed digest
    pub client_data_json: String,
    /// P-256 signature r component
    pub r: U256,
    /// P-256 signature s component
    pub s: U256,
}

/// Handle to the platform's passkey machinery.
///
/// One authenticator serves one physical device; both operations may suspend
/// on user interaction and must be cancellable by dropping the future.
#[async_trait]
pub trait PasskeyAuthenticator: Send + Sync {
    /// Creates a new credential bound to `rp_id` under a user-visible name
    async fn create_credential(
        &self,
        rp_id: &str,
        user_name: &str,
    ) -> Result<PasskeyCredential, SignerError>;

    /// Requests an assertion over `challenge` for an existing credential
    async fn get_assertion(
        &self,
        rp_id: &str,
        credential_id: &Bytes,
        challenge: H256,
    ) -> Result<PasskeyAssertion, SignerError>;
}

#[cfg(feature = "test-utils")]
pub use software::SoftwareAuthenticator;

#[cfg(feature = "test-utils")]
mod software {
    use super::{PasskeyAssertion, PasskeyAuthenticator, PasskeyCredential};
    use crate::error::SignerError;
    use async_trait::async_trait;
    use base64::Engine;
    use ethers::types::{Bytes, H256, U256};
    use p256::ecdsa::{signature::Signer as _, Signature, SigningKey, VerifyingKey};
    use sha2::{Digest, Sha256};

    /// In-process P-256 authenticator with no user verification.
    ///
    /// Produces real WebAuthn-shaped assertions from a software key; only for
    /// tests and local development.
    pub struct SoftwareAuthenticator {
        key: SigningKey,
    }

    impl SoftwareAuthenticator {
        pub fn new(key: SigningKey) -> Self {
            Self { key }
        }

        /// Builds an authenticator from 32 bytes of key material
        pub fn from_seed(seed: [u8; 32]) -> Result<Self, SignerError> {
            let key = SigningKey::from_slice(&seed)
                .map_err(|err| SignerError::InvalidKey { inner: err.to_string() })?;
            Ok(Self { key })
        }

        fn public_point(&self) -> (U256, U256) {
            let point = VerifyingKey::from(&self.key).to_encoded_point(false);
            let x = U256::from_big_endian(point.x().expect("uncompressed point"));
            let y = U256::from_big_endian(point.y().expect("uncompressed point"));
            (x, y)
        }
    }

    #[async_trait]
    impl PasskeyAuthenticator for SoftwareAuthenticator {
        async fn create_credential(
            &self,
            rp_id: &str,
            user_name: &str,
        ) -> Result<PasskeyCredential, SignerError> {
            let mut hasher = Sha256::new();
            hasher.update(rp_id.as_bytes());
            hasher.update(user_name.as_bytes());
            let credential_id = Bytes::from(hasher.finalize()[..16].to_vec());
            let (x, y) = self.public_point();
            Ok(PasskeyCredential { credential_id, x, y })
        }

        async fn get_assertion(
            &self,
            rp_id: &str,
            _credential_id: &Bytes,
            challenge: H256,
        ) -> Result<PasskeyAssertion, SignerError> {
            // rpIdHash ++ flags (UP | UV) ++ signature counter
            let mut authenticator_data = Sha256::digest(rp_id.as_bytes()).to_vec();
            authenticator_data.push(0x05);
            authenticator_data.extend_from_slice(&0u32.to_be_bytes());

            let challenge_b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD
                .encode(challenge.as_bytes());
            let client_data_json = format!(
                r#"{{"type":"webauthn.get","challenge":"{challenge_b64}","origin":"https://{rp_id}"}}"#
            );

            let mut message = authenticator_data.clone();
            message.extend_from_slice(&Sha256::digest(client_data_json.as_bytes()));
            let signature: Signature = self.key.sign(&message);
            let signature = signature.normalize_s().unwrap_or(signature);
            let bytes = signature.to_bytes();

            Ok(PasskeyAssertion {
                authenticator_data: authenticator_data.into(),
                client_data_json,
                r: U256::from_big_endian(&bytes[..32]),
                s: U256::from_big_endian(&bytes[32..]),
            })
        }
    }
}
