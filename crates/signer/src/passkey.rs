//! Passkey signer for the shared WebAuthn signer contract

use crate::{
    device::{PasskeyAuthenticator, PasskeyCredential},
    error::SignerError,
    Signer,
};
use async_trait::async_trait;
use ethers::{
    abi::Token,
    types::{Bytes, H256, U256},
};
use safe4337_primitives::SignerIdentity;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Signer backed by a device-bound P-256 credential.
///
/// The on-chain verifier is the shared WebAuthn signer configured with the
/// credential's public key point, so the signature bytes carry the full
/// WebAuthn assertion: `abi.encode(authenticatorData, clientDataFields, [r, s])`.
pub struct PasskeySigner {
    credential: PasskeyCredential,
    rp_id: String,
    authenticator: Arc<dyn PasskeyAuthenticator>,
    // a physical authenticator serves one prompt at a time
    device: Mutex<()>,
}

impl PasskeySigner {
    /// Enrolls a new credential with the relying party and returns the signer
    /// holding its public key coordinates.
    ///
    /// Suspends while the platform runs the registration ceremony.
    pub async fn enroll(
        authenticator: Arc<dyn PasskeyAuthenticator>,
        rp_id: &str,
        user_name: &str,
    ) -> Result<Self, SignerError> {
        let credential =
            authenticator.create_credential(rp_id, user_name).await.map_err(|err| match err {
                err @ SignerError::EnrollmentFailed { .. } => err,
                other => SignerError::EnrollmentFailed { inner: other.to_string() },
            })?;
        debug!("enrolled passkey credential {:?} for rp {rp_id}", credential.credential_id);
        Ok(Self::from_credential(credential, rp_id, authenticator))
    }

    /// Wraps an already-enrolled credential
    pub fn from_credential(
        credential: PasskeyCredential,
        rp_id: &str,
        authenticator: Arc<dyn PasskeyAuthenticator>,
    ) -> Self {
        Self { credential, rp_id: rp_id.into(), authenticator, device: Mutex::new(()) }
    }

    pub fn credential(&self) -> &PasskeyCredential {
        &self.credential
    }

    pub fn rp_id(&self) -> &str {
        &self.rp_id
    }
}

#[async_trait]
impl Signer for PasskeySigner {
    fn identity(&self) -> SignerIdentity {
        SignerIdentity::Passkey { x: self.credential.x, y: self.credential.y }
    }

    async fn sign(&self, hash: H256) -> Result<Bytes, SignerError> {
        let assertion = {
            let _device = self.device.lock().await;
            self.authenticator
                .get_assertion(&self.rp_id, &self.credential.credential_id, hash)
                .await?
        };
        let fields = client_data_fields(&assertion.client_data_json)?;
        Ok(encode_webauthn_signature(
            &assertion.authenticator_data,
            &fields,
            assertion.r,
            assertion.s,
        ))
    }

    fn dummy_signature(&self) -> Bytes {
        // worst-case-sized placeholder assertion, never valid on-chain
        let authenticator_data: Bytes =
            Bytes::from([vec![0xfe; 32], vec![0x05], vec![0x00; 4]].concat());
        let filler = U256::from_big_endian(&[0xec; 32]);
        encode_webauthn_signature(
            &authenticator_data,
            r#""origin":"https://safe.global","crossOrigin":false"#,
            filler,
            filler,
        )
    }
}

/// Encodes the shared-signer signature layout:
/// `abi.encode(bytes authenticatorData, string clientDataFields, uint256[2] rs)`
pub fn encode_webauthn_signature(
    authenticator_data: &Bytes,
    client_data_fields: &str,
    r: U256,
    s: U256,
) -> Bytes {
    ethers::abi::encode(&[
        Token::Bytes(authenticator_data.to_vec()),
        Token::String(client_data_fields.into()),
        Token::FixedArray(vec![Token::Uint(r), Token::Uint(s)]),
    ])
    .into()
}

/// Extracts the client data fields following the challenge, the part the
/// on-chain verifier splices back into the full clientDataJSON.
fn client_data_fields(client_data_json: &str) -> Result<String, SignerError> {
    const MARKER: &str = "\"challenge\":\"";
    let malformed = |inner: &str| SignerError::InvalidAssertion { inner: inner.into() };

    let start = client_data_json.find(MARKER).ok_or_else(|| malformed("missing challenge"))?;
    let value = &client_data_json[start + MARKER.len()..];
    let value_end = value.find('"').ok_or_else(|| malformed("unterminated challenge"))?;
    let rest = value[value_end + 1..]
        .strip_prefix(',')
        .ok_or_else(|| malformed("no fields after challenge"))?;
    let fields = rest.strip_suffix('}').ok_or_else(|| malformed("unterminated client data"))?;
    Ok(fields.to_string())
}
