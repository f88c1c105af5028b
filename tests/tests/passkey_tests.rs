//! Passkey enrollment and WebAuthn signing against the software authenticator

use base64::Engine;
use ethers::{
    abi::{decode, ParamType, Token},
    types::{H256, U256},
};
use p256::ecdsa::{signature::Verifier, Signature, VerifyingKey};
use safe4337_primitives::SignerIdentity;
use safe4337_signer::{PasskeySigner, Signer, SoftwareAuthenticator};
use sha2::{Digest, Sha256};
use std::sync::Arc;

const RP_ID: &str = "safe.global";

fn authenticator() -> Arc<SoftwareAuthenticator> {
    Arc::new(SoftwareAuthenticator::from_seed([7u8; 32]).unwrap())
}

#[tokio::test]
async fn enrollment_binds_identity_to_credential() {
    let signer = PasskeySigner::enroll(authenticator(), RP_ID, "alice").await.unwrap();
    let credential = signer.credential().clone();
    assert!(!credential.credential_id.is_empty());
    assert_eq!(
        signer.identity(),
        SignerIdentity::Passkey { x: credential.x, y: credential.y }
    );
    assert_eq!(signer.rp_id(), RP_ID);
}

#[tokio::test]
async fn signature_carries_a_verifiable_assertion() {
    let signer = PasskeySigner::enroll(authenticator(), RP_ID, "alice").await.unwrap();
    let challenge = H256::from_low_u64_be(0xdead_beef);
    let encoded = signer.sign(challenge).await.unwrap();

    let tokens = decode(
        &[
            ParamType::Bytes,
            ParamType::String,
            ParamType::FixedArray(Box::new(ParamType::Uint(256)), 2),
        ],
        &encoded,
    )
    .unwrap();
    let authenticator_data = match &tokens[0] {
        Token::Bytes(bytes) => bytes.clone(),
        other => panic!("unexpected token {other:?}"),
    };
    let fields = match &tokens[1] {
        Token::String(fields) => fields.clone(),
        other => panic!("unexpected token {other:?}"),
    };
    let (r, s) = match &tokens[2] {
        Token::FixedArray(rs) => match (&rs[0], &rs[1]) {
            (Token::Uint(r), Token::Uint(s)) => (*r, *s),
            other => panic!("unexpected rs {other:?}"),
        },
        other => panic!("unexpected token {other:?}"),
    };

    // authenticator data commits to the relying party
    assert_eq!(&authenticator_data[..32], Sha256::digest(RP_ID.as_bytes()).as_slice());

    // the client data splices back together around the signed challenge
    let challenge_b64 =
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(challenge.as_bytes());
    let client_data_json = format!(
        r#"{{"type":"webauthn.get","challenge":"{challenge_b64}",{fields}}}"#
    );

    // and the P-256 signature verifies against the credential's public key
    let mut message = authenticator_data.clone();
    message.extend_from_slice(&Sha256::digest(client_data_json.as_bytes()));

    let credential = signer.credential();
    let point = p256::EncodedPoint::from_affine_coordinates(
        &u256_bytes(credential.x).into(),
        &u256_bytes(credential.y).into(),
        false,
    );
    let key = VerifyingKey::from_encoded_point(&point).unwrap();
    let signature =
        Signature::from_scalars(u256_bytes(r), u256_bytes(s)).unwrap();
    key.verify(&message, &signature).unwrap();
}

#[tokio::test]
async fn concurrent_signing_requests_serialize_on_the_device() {
    let signer = Arc::new(
        PasskeySigner::enroll(authenticator(), RP_ID, "alice").await.unwrap(),
    );
    let tasks: Vec<_> = (0u64..4)
        .map(|i| {
            let signer = signer.clone();
            tokio::spawn(async move { signer.sign(H256::from_low_u64_be(i)).await })
        })
        .collect();
    for task in tasks {
        assert!(task.await.unwrap().is_ok());
    }
}

#[tokio::test]
async fn dummy_signature_decodes_like_a_real_one() {
    let signer = PasskeySigner::enroll(authenticator(), RP_ID, "alice").await.unwrap();
    let dummy = signer.dummy_signature();
    assert!(decode(
        &[
            ParamType::Bytes,
            ParamType::String,
            ParamType::FixedArray(Box::new(ParamType::Uint(256)), 2),
        ],
        &dummy,
    )
    .is_ok());
}

fn u256_bytes(value: U256) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    bytes
}
