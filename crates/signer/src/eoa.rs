//! EOA signer backed by a local secp256k1 key

use crate::{error::SignerError, Signer};
use async_trait::async_trait;
use ethers::{
    signers::{LocalWallet, Signer as _},
    types::{Bytes, H256},
};
use safe4337_primitives::SignerIdentity;

/// Signer wrapping an in-memory secp256k1 private key.
///
/// Produces 65-byte r‖s‖v recoverable signatures over the raw digest, the
/// format the account contract recovers the owner address from.
#[derive(Clone, Debug)]
pub struct EoaSigner {
    wallet: LocalWallet,
}

impl EoaSigner {
    pub fn new(wallet: LocalWallet) -> Self {
        Self { wallet }
    }

    /// Parses a hex private key, with or without the `0x` prefix
    pub fn from_private_key(private_key: &str) -> Result<Self, SignerError> {
        let key = private_key.trim_start_matches("0x");
        let wallet = key
            .parse::<LocalWallet>()
            .map_err(|err| SignerError::InvalidKey { inner: err.to_string() })?;
        Ok(Self { wallet })
    }

    /// Address recovered from the wallet's public key
    pub fn address(&self) -> ethers::types::Address {
        self.wallet.address()
    }
}

#[async_trait]
impl Signer for EoaSigner {
    fn identity(&self) -> SignerIdentity {
        SignerIdentity::Eoa { address: self.wallet.address() }
    }

    async fn sign(&self, hash: H256) -> Result<Bytes, SignerError> {
        let sig = self
            .wallet
            .sign_hash(hash)
            .map_err(|err| SignerError::InvalidKey { inner: err.to_string() })?;
        Ok(sig.to_vec().into())
    }

    fn dummy_signature(&self) -> Bytes {
        let mut sig = vec![0xec; 64];
        sig.push(0x1b);
        sig.into()
    }
}
