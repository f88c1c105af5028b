//! Bundler client against a local JSON-RPC server

use ethers::types::U64;
use safe4337_primitives::{UserOperation, UserOperationReceipt};
use safe4337_rpc::{BundlerClient, RpcClientError};
use safe4337_tests::common::{entry_point, spawn_server, MockBundlerImpl, MockBundlerServer};

fn stored_receipt() -> UserOperationReceipt {
    serde_json::from_value(serde_json::json!({
        "userOpHash": "0x7c1b8c9df49a9e09ecef0f0fe6841d895850d29820f9a4b494097764085dcd7e",
        "sender": "0x4DA3a846d67eB7B265238e44C81583F109e12b3A",
        "nonce": "0x1",
        "actualGasCost": "0x2386f26fc10000",
        "actualGasUsed": "0x27100",
        "success": true,
        "logs": [],
        "receipt": {
            "transactionHash": "0x6a67ca9d717dd08e7ae2f2dd8d9c1e81c07ff0e58a0adbfa44e769ab4db40f49",
            "transactionIndex": "0x1",
            "blockHash": "0x8243343df08b9751f5ca0c5f8c9c0460d8a9b6351066fae0acbd4d3e776de8bb",
            "blockNumber": "0x112a880",
            "from": "0x92f35178b2bfae46c03a6f3e1dd23c0c9f673e62",
            "to": "0x5ff137d4b0fdcd49dca30c7cf57e578a026d2789",
            "cumulativeGasUsed": "0x59f42",
            "gasUsed": "0x27100",
            "status": "0x1",
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "logs": []
        }
    }))
    .unwrap()
}

async fn client_for(mock: MockBundlerImpl) -> eyre::Result<BundlerClient> {
    let addr = spawn_server(mock.into_rpc()).await?;
    Ok(BundlerClient::new(&format!("http://{addr}"))?)
}

#[tokio::test]
async fn missing_receipt_is_none_not_an_error() -> eyre::Result<()> {
    let client = client_for(MockBundlerImpl { chain_id: 1, ..Default::default() }).await?;
    let receipt = client
        .get_user_operation_receipt(
            &"0x7c1b8c9df49a9e09ecef0f0fe6841d895850d29820f9a4b494097764085dcd7e".parse()?,
        )
        .await?;
    assert!(receipt.is_none());

    let by_hash = client
        .get_user_operation_by_hash(
            &"0x7c1b8c9df49a9e09ecef0f0fe6841d895850d29820f9a4b494097764085dcd7e".parse()?,
        )
        .await?;
    assert!(by_hash.is_none());
    Ok(())
}

#[tokio::test]
async fn stored_receipt_comes_back_typed() -> eyre::Result<()> {
    let stored = stored_receipt();
    let client =
        client_for(MockBundlerImpl { chain_id: 1, receipt: Some(stored.clone()), ..Default::default() })
            .await?;
    let fetched = client
        .get_user_operation_receipt(&stored.user_operation_hash)
        .await?
        .expect("receipt stored");
    assert_eq!(serde_json::to_value(&fetched)?, serde_json::to_value(&stored)?);
    Ok(())
}

#[tokio::test]
async fn rpc_error_surfaces_code_and_message() -> eyre::Result<()> {
    let client =
        client_for(MockBundlerImpl { chain_id: 1, reject_sends: true, ..Default::default() })
            .await?;
    let result =
        client.send_user_operation(&UserOperation::default(), &entry_point()).await;
    match result {
        Err(RpcClientError::Rpc { code, message }) => {
            assert_eq!(code, -32500);
            assert!(message.contains("AA21"));
        }
        other => panic!("expected rpc error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn accepted_operation_returns_its_hash() -> eyre::Result<()> {
    let mock = MockBundlerImpl { chain_id: 1, ..Default::default() };
    let seen = mock.seen_operations.clone();
    let client = client_for(mock).await?;

    let user_operation = UserOperation::default()
        .sender("0x4DA3a846d67eB7B265238e44C81583F109e12b3A".parse()?)
        .signature(vec![0x01; 65].into());
    let hash = client.send_user_operation(&user_operation, &entry_point()).await?;
    assert_eq!(hash, user_operation.hash(&entry_point(), 1));
    assert_eq!(seen.lock().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn chain_metadata_queries() -> eyre::Result<()> {
    let client = client_for(MockBundlerImpl { chain_id: 137, ..Default::default() }).await?;
    assert_eq!(client.chain_id().await?, U64::from(137));
    assert_eq!(client.supported_entry_points().await?, vec![entry_point()]);
    Ok(())
}

#[tokio::test]
async fn unreachable_bundler_is_a_transport_error() {
    // nothing listens here; the port is from the reserved TEST-NET range
    let client = BundlerClient::new("http://127.0.0.1:9").unwrap();
    let result = client.chain_id().await;
    assert!(matches!(
        result,
        Err(RpcClientError::Transport { .. }) | Err(RpcClientError::Timeout)
    ));
}
