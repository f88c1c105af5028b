use ethers::contract::abigen;

abigen!(
    SafeAPI,
    r#"[
        function setup(address[] owners,uint256 threshold,address to,bytes data,address fallbackHandler,address paymentToken,uint256 payment,address paymentReceiver) external
        function getOwners() external view returns (address[] memory)
        function getThreshold() external view returns (uint256)
        function isOwner(address owner) external view returns (bool)
        function addOwnerWithThreshold(address owner,uint256 threshold) external
        event AddedOwner(address indexed owner)
        event SafeSetup(address indexed initiator,address[] owners,uint256 threshold,address initializer,address fallbackHandler)
    ]"#
);

abigen!(
    SafeProxyFactoryAPI,
    r#"[
        function createProxyWithNonce(address singleton,bytes initializer,uint256 saltNonce) external returns (address proxy)
        function proxyCreationCode() external pure returns (bytes memory)
        event ProxyCreation(address indexed proxy,address singleton)
    ]"#
);

abigen!(
    Safe4337ModuleAPI,
    r#"[
        function executeUserOp(address to,uint256 value,bytes data,uint8 operation) external
    ]"#
);

abigen!(
    SafeModuleSetupAPI,
    r#"[
        function enableModules(address[] modules) external
    ]"#
);

abigen!(
    SafeWebAuthnSharedSignerAPI,
    r#"[
        struct SignerConfiguration {uint256 x;uint256 y;uint176 verifiers;}
        function configure(SignerConfiguration signer) external
    ]"#
);

abigen!(
    MultiSendAPI,
    r#"[
        function multiSend(bytes transactions) external payable
    ]"#
);

abigen!(
    EntryPointAPI,
    r#"[
        function getNonce(address sender,uint192 key) external view returns (uint256 nonce)
        function balanceOf(address account) external view returns (uint256)
    ]"#
);
