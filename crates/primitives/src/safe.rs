//! Safe deployment configuration

use crate::constants::safe;
use ethers::types::Address;
use serde::{Deserialize, Serialize};

/// Addresses of the deployed Safe infrastructure contracts an account is
/// wired to.
///
/// All fields are required and chain-specific; the values are configuration,
/// never computed. [SafeConfig::default] is the canonical v1.4.1 deployment,
/// which lives at the same addresses on every supported chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SafeConfig {
    /// Module setup contract, delegatecalled during `setup` to enable modules
    pub safe_module_setup_address: Address,
    /// ERC-4337 module, also installed as the fallback handler
    pub safe_4337_module_address: Address,
    /// Singleton every account proxy points to
    pub safe_singleton_l2_address: Address,
    /// Proxy factory performing the CREATE2 deployment
    pub safe_proxy_factory_address: Address,
    /// Shared WebAuthn signer for passkey-owned accounts
    pub safe_web_authn_shared_signer_address: Address,
    /// MultiSend used to batch the passkey setup calls
    pub safe_multi_send_address: Address,
    /// P-256 verifier the WebAuthn signers delegate to
    pub safe_p256_verifier_address: Address,
    /// Factory for standalone WebAuthn signer proxies
    pub safe_webauthn_signer_factory_address: Address,
}

impl Default for SafeConfig {
    fn default() -> Self {
        Self {
            safe_module_setup_address: parse(safe::MODULE_SETUP_ADDRESS),
            safe_4337_module_address: parse(safe::MODULE_4337_ADDRESS),
            safe_singleton_l2_address: parse(safe::SINGLETON_L2_ADDRESS),
            safe_proxy_factory_address: parse(safe::PROXY_FACTORY_ADDRESS),
            safe_web_authn_shared_signer_address: parse(safe::WEBAUTHN_SHARED_SIGNER_ADDRESS),
            safe_multi_send_address: parse(safe::MULTI_SEND_ADDRESS),
            safe_p256_verifier_address: parse(safe::P256_VERIFIER_ADDRESS),
            safe_webauthn_signer_factory_address: parse(safe::WEBAUTHN_SIGNER_FACTORY_ADDRESS),
        }
    }
}

fn parse(addr: &str) -> Address {
    addr.parse().expect("well-known address constant")
}
