//! Safe smart account client
//!
//! [SafeAccount] orchestrates the other safe4337 crates against one
//! chain/account instance: it derives the counterfactual address at
//! construction, assembles and signs user operations, submits them to the
//! bundler, and answers deployment and ownership queries. Every operation is
//! single-flight; a failure at any step aborts the whole call and nothing is
//! considered sent until the bundler acknowledges the operation.

mod builder;
mod config;
mod error;

use ethers::{
    providers::{Http, Middleware, Provider},
    types::{Address, Bytes, U256},
};
use parking_lot::RwLock;
use safe4337_contracts::{add_owner_call_data, gen::SafeAPI, predict_address, EntryPoint};
use safe4337_primitives::{constants, SafeConfig, UserOperation, UserOperationHash};
use safe4337_rpc::{BundlerClient, PaymasterClient, RpcClientError};
use safe4337_signer::Signer;
use std::sync::Arc;
use tracing::debug;

pub use config::AccountParams;
pub use error::AccountError;

/// Deployment state of the account, as observed so far.
///
/// The address is fixed at construction; state only ever moves forward from
/// [Predicted](DeploymentStatus::Predicted) to
/// [Deployed](DeploymentStatus::Deployed) once the code is seen on-chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeploymentStatus {
    /// Address derived, no code on-chain yet (as far as observed)
    Predicted,
    /// Code confirmed on-chain
    Deployed,
}

/// Client for a single Safe smart account on a single chain
pub struct SafeAccount<M: Middleware + 'static> {
    pub(crate) eth_client: Arc<M>,
    pub(crate) chain_id: u64,
    pub(crate) address: Address,
    pub(crate) signer: Arc<dyn Signer>,
    pub(crate) config: SafeConfig,
    pub(crate) bundler: BundlerClient,
    pub(crate) paymaster: Option<PaymasterClient>,
    pub(crate) entry_point: EntryPoint<M>,
    status: RwLock<DeploymentStatus>,
}

impl SafeAccount<Provider<Http>> {
    /// Builds an account client from external parameters, constructing the
    /// node provider and service clients.
    ///
    /// Mandatory URL absence is a configuration error raised here, before
    /// any network call.
    pub fn connect(
        params: &AccountParams,
        signer: Arc<dyn Signer>,
        config: SafeConfig,
    ) -> Result<Self, AccountError> {
        params.verify()?;

        let provider = Provider::<Http>::try_from(params.rpc_url.as_str())
            .map_err(|err| AccountError::Configuration { inner: err.to_string() })?;
        let bundler = BundlerClient::new(&params.bundler_url).map_err(as_configuration)?;
        let paymaster = params
            .paymaster_url
            .as_deref()
            .map(PaymasterClient::new)
            .transpose()
            .map_err(as_configuration)?;

        match &params.address {
            Some(address) => {
                let address = address
                    .parse::<Address>()
                    .map_err(|err| AccountError::InvalidAddress { inner: err.to_string() })?;
                Ok(Self::from_address(
                    address,
                    signer,
                    bundler,
                    params.chain_id,
                    Arc::new(provider),
                    paymaster,
                    config,
                ))
            }
            None => Ok(Self::create_new_account(
                signer,
                bundler,
                params.chain_id,
                Arc::new(provider),
                paymaster,
                config,
            )),
        }
    }
}

impl<M: Middleware + 'static> SafeAccount<M> {
    /// Creates a client for a fresh account, deriving its deterministic
    /// counterfactual address from the signer identity and configuration
    pub fn create_new_account(
        signer: Arc<dyn Signer>,
        bundler: BundlerClient,
        chain_id: u64,
        eth_client: Arc<M>,
        paymaster: Option<PaymasterClient>,
        config: SafeConfig,
    ) -> Self {
        let address = predict_address(&signer.identity(), &config, chain_id);
        debug!("predicted account address {address:?} on chain {chain_id}");
        Self::new(address, signer, bundler, chain_id, eth_client, paymaster, config)
    }

    /// Creates a client for an account whose address is already known
    pub fn from_address(
        address: Address,
        signer: Arc<dyn Signer>,
        bundler: BundlerClient,
        chain_id: u64,
        eth_client: Arc<M>,
        paymaster: Option<PaymasterClient>,
        config: SafeConfig,
    ) -> Self {
        Self::new(address, signer, bundler, chain_id, eth_client, paymaster, config)
    }

    fn new(
        address: Address,
        signer: Arc<dyn Signer>,
        bundler: BundlerClient,
        chain_id: u64,
        eth_client: Arc<M>,
        paymaster: Option<PaymasterClient>,
        config: SafeConfig,
    ) -> Self {
        let entry_point_address: Address =
            constants::entry_point::ADDRESS.parse().expect("well-known address constant");
        let entry_point = EntryPoint::new(eth_client.clone(), entry_point_address);
        Self {
            eth_client,
            chain_id,
            address,
            signer,
            config,
            bundler,
            paymaster,
            entry_point,
            status: RwLock::new(DeploymentStatus::Predicted),
        }
    }

    /// Fixed account address (counterfactual until deployed)
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn entry_point_address(&self) -> Address {
        self.entry_point.address()
    }

    /// Deployment state as currently cached, without a network query
    pub fn deployment_status(&self) -> DeploymentStatus {
        *self.status.read()
    }

    /// Whether the account has code on-chain.
    ///
    /// A positive answer is cached; the state never falls back to
    /// [DeploymentStatus::Predicted].
    pub async fn is_deployed(&self) -> Result<bool, AccountError> {
        if *self.status.read() == DeploymentStatus::Deployed {
            return Ok(true);
        }
        let code = self
            .eth_client
            .get_code(self.address, None)
            .await
            .map_err(|err| AccountError::Provider { inner: err.to_string() })?;
        let deployed = !code.is_empty();
        if deployed {
            *self.status.write() = DeploymentStatus::Deployed;
        }
        Ok(deployed)
    }

    /// Current owners of the account.
    ///
    /// An undeployed account has no owners on-chain yet; that is `Ok(None)`,
    /// not an error.
    pub async fn get_owners(&self) -> Result<Option<Vec<Address>>, AccountError> {
        if !self.is_deployed().await? {
            return Ok(None);
        }
        let safe = SafeAPI::new(self.address, self.eth_client.clone());
        let owners = safe
            .get_owners()
            .call()
            .await
            .map_err(|err| AccountError::Provider { inner: err.to_string() })?;
        Ok(Some(owners))
    }

    /// Account nonce as the entry point tracks it; zero before deployment
    pub async fn nonce(&self) -> Result<U256, AccountError> {
        if !self.is_deployed().await? {
            return Ok(U256::zero());
        }
        Ok(self.entry_point.get_nonce(&self.address, U256::zero()).await?)
    }

    /// Assembles an unsigned user operation calling `to` with `value` and
    /// `data`, as a delegatecall when `delegate_call` is set.
    ///
    /// Populates init code for undeployed accounts, fetches fees and gas
    /// estimates, and applies paymaster sponsorship when configured. The
    /// result carries an empty signature.
    pub async fn prepare_user_operation(
        &self,
        to: Address,
        value: U256,
        data: Bytes,
        delegate_call: bool,
    ) -> Result<UserOperation, AccountError> {
        builder::prepare(self, to, value, data, delegate_call).await
    }

    /// Signs the operation's canonical hash with the account's signer,
    /// returning the signature bytes
    pub async fn sign_user_operation(
        &self,
        user_operation: &UserOperation,
    ) -> Result<Bytes, AccountError> {
        let hash = user_operation.hash(&self.entry_point.address(), self.chain_id);
        Ok(self.signer.sign(hash.into()).await?)
    }

    /// Prepares, signs and submits a user operation, in that strict order.
    ///
    /// Any step failure aborts the whole call; the operation counts as sent
    /// only once the bundler returns its hash.
    pub async fn send_user_operation(
        &self,
        to: Address,
        value: U256,
        data: Bytes,
        delegate_call: bool,
    ) -> Result<UserOperationHash, AccountError> {
        let user_operation = self.prepare_user_operation(to, value, data, delegate_call).await?;
        let signature = self.sign_user_operation(&user_operation).await?;
        let signed = user_operation.signature(signature);
        debug!("submitting user operation for {:?}", self.address);
        Ok(self.bundler.send_user_operation(&signed, &self.entry_point.address()).await?)
    }

    /// Adds an owner to the account via a self-call.
    ///
    /// Composable with first deployment: on an undeployed account the
    /// operation carries the init code and the ownership change executes
    /// right after setup, atomically.
    pub async fn add_owner(&self, owner: Address) -> Result<UserOperationHash, AccountError> {
        let data = add_owner_call_data(owner, U256::one());
        self.send_user_operation(self.address, U256::zero(), data, false).await
    }
}

fn as_configuration(err: RpcClientError) -> AccountError {
    AccountError::Configuration { inner: err.to_string() }
}
