//! Signer identity

use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};

/// Public identity of an account owner, the input to address derivation and
/// account setup encoding.
///
/// Identities are immutable once created: an EOA is identified by its
/// address, a passkey by the P-256 public key point registered with the
/// shared WebAuthn signer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SignerIdentity {
    /// Externally owned account (secp256k1 key)
    Eoa {
        /// Address recovered from the owner's public key
        address: Address,
    },
    /// Device-bound passkey verified through the shared WebAuthn signer
    Passkey {
        /// P-256 public key x coordinate
        x: U256,
        /// P-256 public key y coordinate
        y: U256,
    },
}
