//! End-to-end tests of `HttpTransport` against a local mock node.
//!
//! Each test starts an axum server on a random port that serves canned
//! blocks and leasing responses, then drives the real client over HTTP.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use waves_node_api::{
    Error, HttpConfig, LARGE_SIGNIFICAND_ACCEPT, Long, NodeClient, RequestOptions,
};

fn block(height: u32) -> Value {
    json!({
        "version": 4,
        "timestamp": 1_600_000_000_000u64 + u64::from(height) * 60_000,
        "reference": format!("ref-{}", height - 1),
        "nxt-consensus": {
            "base-target": 70,
            "generation-signature": format!("gen-{height}")
        },
        "features": [15],
        "desiredReward": 600_000_000,
        "generator": "3PEFQiFMLm1gTVjPdfCErG8mTHRcH2ATaWa",
        "signature": format!("sig-{height}"),
        "blocksize": 226,
        "transactionCount": 0,
        "totalFee": 0,
        "reward": 600_000_000,
        "height": height,
        "fee": 0,
        "transactions": []
    })
}

/// `block` with every `Long` field encoded as a decimal string.
fn block_with_string_longs(height: u32) -> Value {
    let mut block = block(height);
    for key in ["desiredReward", "totalFee", "reward", "fee"] {
        let value = block[key].as_i64().expect("numeric field");
        block[key] = json!(value.to_string());
    }
    block
}

fn wants_string_longs(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("large-significand-format=string"))
}

async fn height() -> Json<Value> {
    Json(json!({ "height": 12345 }))
}

async fn seq(Path((from, to)): Path<(u32, u32)>, headers: HeaderMap) -> Json<Value> {
    let render = if wants_string_longs(&headers) { block_with_string_longs } else { block };
    Json(Value::Array((from..=to).map(render).collect()))
}

async fn missing_block(Path(_height): Path<u32>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": 199, "message": "block does not exist" })),
    )
        .into_response()
}

async fn broken_last() -> Response {
    ([(header::CONTENT_TYPE, "text/html")], "<html>maintenance</html>").into_response()
}

async fn slow_first() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(block(1))
}

/// Echoes back whether the API key header arrived.
async fn guarded_header(headers: HeaderMap) -> Response {
    match headers.get("x-api-key").and_then(|v| v.to_str().ok()) {
        Some("secret") => Json(json!({ "height": 1 })).into_response(),
        _ => (StatusCode::UNAUTHORIZED, "missing api key").into_response(),
    }
}

/// Amounts switch to strings when the large-significand format is requested.
async fn active_leases(Path(address): Path<String>, headers: HeaderMap) -> Json<Value> {
    let amount = if wants_string_longs(&headers) {
        json!("9007199254740993")
    } else {
        json!(5_000_000)
    };
    Json(json!([{
        "type": 8,
        "id": "lease-1",
        "sender": address,
        "senderPublicKey": "pk",
        "recipient": "3P23fi1qfVw6RVDn4CH2a5nNouEtWNQ4THs",
        "amount": amount,
        "fee": 100_000,
        "feeAssetId": null,
        "timestamp": 1_600_000_000_000u64,
        "proofs": [],
        "version": 2,
        "height": 10
    }]))
}

fn mock_node() -> Router {
    Router::new()
        .route("/blocks/height", get(height))
        .route("/blocks/height/{id}", get(guarded_header))
        .route("/blocks/seq/{from}/{to}", get(seq))
        .route("/blocks/at/{height}", get(missing_block))
        .route("/blocks/last", get(broken_last))
        .route("/blocks/first", get(slow_first))
        .route("/leasing/active/{address}", get(active_leases))
}

async fn start_node() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, mock_node()).await.unwrap() });
    addr
}

#[tokio::test]
async fn fetch_height_over_http() {
    let addr = start_node().await;
    let client = NodeClient::new(format!("http://{addr}"));
    let height = client.fetch_height(&RequestOptions::default()).await.unwrap();
    assert_eq!(height.height, 12345);
}

#[tokio::test]
async fn fetch_seq_decodes_block_range() {
    let addr = start_node().await;
    let client = NodeClient::new(format!("http://{addr}/"));
    let blocks = client.fetch_seq(10, 20, &RequestOptions::default()).await.unwrap();

    assert_eq!(blocks.len(), 11);
    assert_eq!(blocks[0].header.height, 10);
    assert_eq!(blocks[10].header.signature, "sig-20");
    assert_eq!(blocks[0].header.features, vec![Long::Number(15)]);
    assert_eq!(serde_json::to_value(&blocks[3]).unwrap(), block(13));
}

#[tokio::test]
async fn error_status_carries_node_body() {
    let addr = start_node().await;
    let client = NodeClient::new(format!("http://{addr}"));
    let err = client.block_at(99, &RequestOptions::default()).await.unwrap_err();

    assert!(err.is_not_found());
    let node = err.node_error().expect("structured error body");
    assert_eq!(node.code, 199);
    assert_eq!(node.message, "block does not exist");
}

#[tokio::test]
async fn non_json_success_body_is_a_json_error() {
    let addr = start_node().await;
    let client = NodeClient::new(format!("http://{addr}"));
    let err = client.fetch_last(&RequestOptions::default()).await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn unreachable_node_is_an_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = NodeClient::new(format!("http://{addr}"));
    let err = client.fetch_height(&RequestOptions::default()).await.unwrap_err();
    match err {
        Error::Http(e) => assert!(e.is_connect()),
        other => panic!("expected HTTP error, got {other}"),
    }
}

#[tokio::test]
async fn request_timeout_is_forwarded() {
    let addr = start_node().await;
    let client = NodeClient::new(format!("http://{addr}"));
    let options = RequestOptions::new().with_timeout(Duration::from_millis(100));
    let err = client.fetch_first(&options).await.unwrap_err();
    match err {
        Error::Http(e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other}"),
    }
}

#[tokio::test]
async fn config_timeout_applies_to_every_request() {
    let addr = start_node().await;
    let client = NodeClient::with_config(
        format!("http://{addr}"),
        HttpConfig::with_timeout(Duration::from_millis(100)),
    )
    .unwrap();
    let err = client.fetch_first(&RequestOptions::default()).await.unwrap_err();
    assert!(matches!(err, Error::Http(ref e) if e.is_timeout()));
}

#[tokio::test]
async fn custom_headers_are_forwarded() {
    let addr = start_node().await;
    let client = NodeClient::new(format!("http://{addr}"));

    let err = client
        .fetch_height_by_id("abc", &RequestOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));

    let options = RequestOptions::new().with_header("x-api-key", "secret");
    let height = client.fetch_height_by_id("abc", &options).await.unwrap();
    assert_eq!(height.height, 1);
}

#[tokio::test]
async fn large_significand_format_yields_string_longs() {
    let addr = start_node().await;
    let client = NodeClient::new(format!("http://{addr}"));
    let address = "3PMj3yGPBEa1Sx9X4TSBFeJCMMaE3wvKR4N";

    let leases = client
        .fetch_active_leases(address, &RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(leases[0].amount, Long::Number(5_000_000));
    assert_eq!(leases[0].sender, address);
    assert!(leases[0].fee_asset_id.is_none());

    let options = RequestOptions::new().large_significand_format();
    assert_eq!(options.headers[0].1, LARGE_SIGNIFICAND_ACCEPT);
    let leases = client.fetch_active_leases(address, &options).await.unwrap();
    assert_eq!(leases[0].amount, Long::String("9007199254740993".to_string()));
    assert_eq!(leases[0].amount.as_i64(), Some(9_007_199_254_740_993));

    let blocks = client.fetch_seq(5, 6, &options).await.unwrap();
    assert_eq!(blocks.len(), 2);
    let header = &blocks[0].header;
    assert_eq!(header.desired_reward, Some(Long::String("600000000".to_string())));
    assert_eq!(header.total_fee.as_i64(), Some(0));
    assert_eq!(blocks[0].fee, Long::String("0".to_string()));
    assert_eq!(serde_json::to_value(&blocks[1]).unwrap(), block_with_string_longs(6));
}
