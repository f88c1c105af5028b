//! End-to-end account flow against mocked node and services

use ethers::{
    providers::{MockProvider, Provider},
    types::{Address, Block, Bytes, FeeHistory, H256, U256},
};
use safe4337_account::SafeAccount;
use safe4337_primitives::{get_address, SafeConfig};
use safe4337_rpc::{BundlerClient, PaymasterClient};
use safe4337_signer::EoaSigner;
use safe4337_tests::common::{
    spawn_server, MockBundlerImpl, MockBundlerServer, MockPaymasterImpl, MockPaymasterServer,
    TEST_KEY,
};
use std::sync::Arc;

/// Queues the node responses one `prepare` pass consumes, in call order:
/// eth_getCode, entry point getNonce (deployed accounts only),
/// eth_getBlockByNumber, eth_feeHistory (mock stack is LIFO)
fn queue_prepare_responses(mock: &MockProvider, code: Bytes, nonce: Option<U256>) {
    let fee_history = FeeHistory {
        base_fee_per_gas: vec![U256::from(20_000_000_000u64); 2],
        gas_used_ratio: vec![0.5],
        oldest_block: U256::zero(),
        reward: vec![vec![U256::from(1_000_000_000u64)]],
    };
    let latest_block = Block::<H256> {
        base_fee_per_gas: Some(U256::from(20_000_000_000u64)),
        ..Default::default()
    };
    mock.push(fee_history).unwrap();
    mock.push(latest_block).unwrap();
    if let Some(nonce) = nonce {
        let mut word = [0u8; 32];
        nonce.to_big_endian(&mut word);
        mock.push::<String, String>(format!("0x{}", ethers::utils::hex::encode(word))).unwrap();
    }
    mock.push::<ethers::types::Bytes, ethers::types::Bytes>(code).unwrap();
}

fn account_with(
    bundler: BundlerClient,
    paymaster: Option<PaymasterClient>,
) -> (SafeAccount<Provider<MockProvider>>, MockProvider) {
    let (provider, mock) = Provider::mocked();
    let signer = Arc::new(EoaSigner::from_private_key(TEST_KEY).unwrap());
    let account = SafeAccount::create_new_account(
        signer,
        bundler,
        1,
        Arc::new(provider),
        paymaster,
        SafeConfig::default(),
    );
    (account, mock)
}

#[tokio::test]
async fn first_operation_deploys_and_submits() -> eyre::Result<()> {
    let mock_bundler = MockBundlerImpl { chain_id: 1, ..Default::default() };
    let seen = mock_bundler.seen_operations.clone();
    let addr = spawn_server(mock_bundler.into_rpc()).await?;
    let bundler = BundlerClient::new(&format!("http://{addr}"))?;

    let (account, mock) = account_with(bundler, None);
    queue_prepare_responses(&mock, Bytes::default(), None);

    let to: Address = "0x1111111111111111111111111111111111111111".parse()?;
    let hash = account
        .send_user_operation(to, U256::from(1_000_000_000_000_000u64), Bytes::default(), false)
        .await?;

    let submitted = seen.lock().unwrap().pop().expect("operation submitted");
    // prepared for an undeployed account: init code present, nonce zero
    assert_eq!(submitted.sender, account.address());
    assert_eq!(submitted.nonce, U256::zero());
    assert_eq!(
        get_address(&submitted.init_code),
        Some(SafeConfig::default().safe_proxy_factory_address)
    );
    // signed before submission, gas fields taken from the estimate
    assert_eq!(submitted.signature.len(), 65);
    assert_eq!(submitted.call_gas_limit, U256::from(150_000));
    assert_eq!(submitted.verification_gas_limit, U256::from(500_000));
    assert_eq!(submitted.pre_verification_gas, U256::from(60_000));
    // the bundler acknowledged exactly this operation
    assert_eq!(hash, submitted.hash(&account.entry_point_address(), 1));
    Ok(())
}

#[tokio::test]
async fn prepared_operation_is_unsigned() -> eyre::Result<()> {
    let mock_bundler = MockBundlerImpl { chain_id: 1, ..Default::default() };
    let addr = spawn_server(mock_bundler.into_rpc()).await?;
    let bundler = BundlerClient::new(&format!("http://{addr}"))?;

    let (account, mock) = account_with(bundler, None);
    queue_prepare_responses(&mock, Bytes::default(), None);

    let to: Address = "0x1111111111111111111111111111111111111111".parse()?;
    let prepared =
        account.prepare_user_operation(to, U256::zero(), Bytes::default(), false).await?;
    assert!(prepared.signature.is_empty());
    assert!(!prepared.call_data.is_empty());
    Ok(())
}

#[tokio::test]
async fn delegate_call_flag_changes_call_data() -> eyre::Result<()> {
    let mock_bundler = MockBundlerImpl { chain_id: 1, ..Default::default() };
    let addr = spawn_server(mock_bundler.into_rpc()).await?;
    let bundler = BundlerClient::new(&format!("http://{addr}"))?;

    let (account, mock) = account_with(bundler, None);
    let to: Address = "0x1111111111111111111111111111111111111111".parse()?;

    queue_prepare_responses(&mock, Bytes::default(), None);
    let call = account
        .prepare_user_operation(to, U256::zero(), "0xdeadbeef".parse()?, false)
        .await?;
    queue_prepare_responses(&mock, Bytes::default(), None);
    let delegate = account
        .prepare_user_operation(to, U256::zero(), "0xdeadbeef".parse()?, true)
        .await?;
    assert_ne!(call.call_data, delegate.call_data);
    Ok(())
}

#[tokio::test]
async fn deployed_account_skips_init_code_and_reads_nonce() -> eyre::Result<()> {
    let mock_bundler = MockBundlerImpl { chain_id: 1, ..Default::default() };
    let addr = spawn_server(mock_bundler.into_rpc()).await?;
    let bundler = BundlerClient::new(&format!("http://{addr}"))?;

    let (account, mock) = account_with(bundler, None);
    queue_prepare_responses(&mock, Bytes::from(vec![0x60, 0x80]), Some(U256::from(5)));

    let to: Address = "0x1111111111111111111111111111111111111111".parse()?;
    let prepared =
        account.prepare_user_operation(to, U256::zero(), Bytes::default(), false).await?;
    assert!(prepared.init_code.is_empty());
    assert_eq!(prepared.nonce, U256::from(5));
    Ok(())
}

#[tokio::test]
async fn paymaster_sponsorship_lands_in_the_operation() -> eyre::Result<()> {
    let mock_bundler = MockBundlerImpl { chain_id: 1, ..Default::default() };
    let bundler_addr = spawn_server(mock_bundler.into_rpc()).await?;
    let bundler = BundlerClient::new(&format!("http://{bundler_addr}"))?;

    let sponsorship: Bytes =
        "0xcA89CBa4813D5B40AeC6E57A30d0Eeb500d6531b00000000000000000000000000000000000000000000000000000000deadbeef"
            .parse()?;
    let mock_paymaster = MockPaymasterImpl { paymaster_and_data: sponsorship.clone() };
    let paymaster_addr = spawn_server(mock_paymaster.into_rpc()).await?;
    let paymaster = PaymasterClient::new(&format!("http://{paymaster_addr}"))?;

    let (account, mock) = account_with(bundler, Some(paymaster));
    queue_prepare_responses(&mock, Bytes::default(), None);

    let to: Address = "0x1111111111111111111111111111111111111111".parse()?;
    let prepared =
        account.prepare_user_operation(to, U256::zero(), Bytes::default(), false).await?;
    assert_eq!(prepared.paymaster_and_data, sponsorship);
    assert!(prepared.signature.is_empty());
    Ok(())
}

#[tokio::test]
async fn rejected_submission_aborts_the_operation() -> eyre::Result<()> {
    let mock_bundler =
        MockBundlerImpl { chain_id: 1, reject_sends: true, ..Default::default() };
    let addr = spawn_server(mock_bundler.into_rpc()).await?;
    let bundler = BundlerClient::new(&format!("http://{addr}"))?;

    let (account, mock) = account_with(bundler, None);
    queue_prepare_responses(&mock, Bytes::default(), None);

    let to: Address = "0x1111111111111111111111111111111111111111".parse()?;
    let result =
        account.send_user_operation(to, U256::zero(), Bytes::default(), false).await;
    assert!(result.is_err());
    Ok(())
}
