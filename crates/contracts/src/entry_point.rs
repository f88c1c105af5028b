//! Entry point read wrapper

use crate::{error::ContractsError, gen::EntryPointAPI};
use ethers::{
    providers::Middleware,
    types::{Address, U256},
};
use std::sync::Arc;

/// Read-only client for the entry point contract
#[derive(Clone)]
pub struct EntryPoint<M: Middleware + 'static> {
    eth_client: Arc<M>,
    address: Address,
    api: EntryPointAPI<M>,
}

impl<M: Middleware + 'static> EntryPoint<M> {
    pub fn new(eth_client: Arc<M>, address: Address) -> Self {
        let api = EntryPointAPI::new(address, eth_client.clone());
        Self { eth_client, address, api }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn eth_client(&self) -> Arc<M> {
        self.eth_client.clone()
    }

    /// Current nonce of the account under the given key, as tracked by the
    /// entry point's nonce sequencer
    pub async fn get_nonce(&self, sender: &Address, key: U256) -> Result<U256, ContractsError> {
        self.api
            .get_nonce(*sender, key)
            .call()
            .await
            .map_err(|err| ContractsError::Provider { inner: err.to_string() })
    }

    /// Entry point deposit balance of the given account
    pub async fn balance_of(&self, account: &Address) -> Result<U256, ContractsError> {
        self.api
            .balance_of(*account)
            .call()
            .await
            .map_err(|err| ContractsError::Provider { inner: err.to_string() })
    }
}
