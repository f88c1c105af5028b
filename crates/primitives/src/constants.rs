//! Safe smart account (ERC-4337)-related constants

/// Entry point smart contract
pub mod entry_point {
    /// Address of the entry point smart contract
    pub const ADDRESS: &str = "0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789";
    /// Version of the entry point smart contract
    pub const VERSION: &str = "0.6.0";
}

/// Safe infrastructure contracts (canonical v1.4.1 deployment)
pub mod safe {
    /// Safe module setup contract
    pub const MODULE_SETUP_ADDRESS: &str = "0x2dd68b007B46fBe91B9A7c3EDa5A7a1063cB5b47";
    /// Safe ERC-4337 module
    pub const MODULE_4337_ADDRESS: &str = "0x75cf11467937ce3F2f357CE24ffc3DBF8fD5c226";
    /// Safe singleton (L2 variant)
    pub const SINGLETON_L2_ADDRESS: &str = "0x29fcB43b46531BcA003ddC8FCB67FFE91900C762";
    /// Safe proxy factory
    pub const PROXY_FACTORY_ADDRESS: &str = "0x4e1DCf7AD4e460CfD30791CCC4F9c8a4f820ec67";
    /// Shared WebAuthn signer
    pub const WEBAUTHN_SHARED_SIGNER_ADDRESS: &str =
        "0x94a4F6affBd8975951142c3999aEAB7ecee555c2";
    /// MultiSend contract
    pub const MULTI_SEND_ADDRESS: &str = "0x38869bf66a61cF6bDB996A6aE40D5853Fd43B526";
    /// P-256 signature verifier used by the WebAuthn signers
    pub const P256_VERIFIER_ADDRESS: &str = "0xcA89CBa4813D5B40AeC6E57A30d0Eeb500d6531b";
    /// WebAuthn signer proxy factory
    pub const WEBAUTHN_SIGNER_FACTORY_ADDRESS: &str =
        "0xF7488fFbe67327ac9f37D5F722d83Fc900852Fbf";

    /// Creation code returned by the proxy factory's `proxyCreationCode()`.
    /// The factory appends the singleton address as the only constructor
    /// argument, so counterfactual addresses can be derived without any
    /// network call.
    pub const PROXY_CREATION_CODE: &str = "608060405234801561001057600080fd5b506040516101e63803806101e68339818101604052602081101561003357600080fd5b8101908080519060200190929190505050600073ffffffffffffffffffffffffffffffffffffffff168173ffffffffffffffffffffffffffffffffffffffff1614156100ca576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260228152602001806101c46022913960400191505060405180910390fd5b806000806101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff1602179055505060ab806101196000396000f3fe608060405273ffffffffffffffffffffffffffffffffffffffff600054167fa619486e0000000000000000000000000000000000000000000000000000000060003514156050578060005260206000f35b3660008037600080366000845af43d6000803e60008114156070573d6000fd5b3d6000f3fea2646970667358221220d1429297349653a4918076d650332de1a1068c5f3e07c5c82360c277770b955264736f6c63430007060033496e76616c69642073696e676c65746f6e20616464726573732070726f7669646564";
}
