use mockito::Matcher;
use reqwest::StatusCode;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use t212_client::config::{Config, Credentials, RateLimiterConfig};
use t212_client::error::AppError;
use t212_client::model::requests::{
    CreateOrderRequest, EndpointCategory, PieRequest, RequestDescriptor,
};
use t212_client::model::retry::RetryConfig;
use t212_client::presentation::account::Cash;
use t212_client::presentation::order::{Order, TimeValidity};
use t212_client::presentation::pie::DividendCashAction;
use t212_client::transport::http_client::{T212HttpClient, T212HttpClientImpl};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

const CASH_BODY: &str =
    r#"{"free":10.0,"total":110.0,"invested":100.0,"result":5.0,"ppl":2.0,"pieCash":0.0}"#;

/// Transport wired for tests: wide-open rate limits and fast retries
fn test_transport(base_url: &str) -> T212HttpClientImpl {
    let mut config = Config::with_credentials(Credentials::new("id", "secret"), base_url);
    config.rate_limiter = RateLimiterConfig {
        max_requests: 1000,
        period_seconds: 1,
        burst_size: 1000,
    };
    config.retry = RetryConfig {
        max_attempts: 3,
        base_delay_ms: 10,
        max_delay_ms: 40,
    };
    T212HttpClientImpl::new(Arc::new(config)).expect("transport should build")
}

fn cash_descriptor() -> RequestDescriptor {
    RequestDescriptor::get(EndpointCategory::Account, "equity/account/cash")
}

#[tokio::test]
async fn success_attaches_basic_auth_and_deserializes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/equity/account/cash")
        .match_header("authorization", "Basic aWQ6c2VjcmV0")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CASH_BODY)
        .expect(1)
        .create_async()
        .await;

    let transport = test_transport(&server.url());
    let cash: Cash = transport.execute(&cash_descriptor()).await.unwrap();

    assert_eq!(cash.free, 10.0);
    assert_eq!(cash.total, 110.0);
    mock.assert_async().await;
}

#[tokio::test]
async fn not_found_is_rejected_immediately_without_retry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/equity/orders/999")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"clarification":"Order not found"}"#)
        .expect(1)
        .create_async()
        .await;

    let transport = test_transport(&server.url());
    let descriptor = RequestDescriptor::get(EndpointCategory::Orders, "equity/orders/999");
    let error = transport.execute::<Order>(&descriptor).await.unwrap_err();

    match error {
        AppError::Rejected { status, message } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(message, "Order not found");
        }
        other => panic!("expected Rejected, got {other}"),
    }
    // Exactly one dispatch: permanent failures are never retried
    mock.assert_async().await;
}

#[tokio::test]
async fn rejection_surfaces_remote_error_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/equity/orders/market")
        .with_status(400)
        .with_body(r#"{"errorMessage":"Insufficient funds"}"#)
        .expect(1)
        .create_async()
        .await;

    let transport = test_transport(&server.url());
    let descriptor = CreateOrderRequest::market("AAPL_US_EQ", 1.0, false)
        .descriptor()
        .unwrap();
    let error = transport.execute::<Order>(&descriptor).await.unwrap_err();

    let rendered = error.to_string();
    assert!(rendered.contains("Insufficient funds"));
    // Credentials never appear in error values
    assert!(!rendered.contains("secret"));
    assert!(!rendered.contains("aWQ6c2VjcmV0"));
}

#[tokio::test]
async fn server_errors_exhaust_after_exactly_three_attempts() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/equity/account/cash")
        .with_status(500)
        .with_body("boom")
        .expect(3)
        .create_async()
        .await;

    let transport = test_transport(&server.url());
    let error = transport
        .execute::<Cash>(&cash_descriptor())
        .await
        .unwrap_err();

    match error {
        AppError::TransientExhausted {
            last_status,
            attempts,
        } => {
            assert_eq!(last_status, Some(StatusCode::INTERNAL_SERVER_ERROR));
            assert_eq!(attempts, 3);
        }
        other => panic!("expected TransientExhausted, got {other}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn transient_failures_recover_on_a_later_attempt() {
    // mockito cannot vary the response per request, so script the
    // 500, 500, 200 sequence on a raw socket
    let (base_url, handle) = scripted_server(vec![
        (500, "boom".to_string()),
        (500, "boom".to_string()),
        (200, CASH_BODY.to_string()),
    ])
    .await;

    let transport = test_transport(&base_url);
    let cash: Cash = transport.execute(&cash_descriptor()).await.unwrap();

    assert_eq!(cash.invested, 100.0);
    assert_eq!(handle.await.unwrap(), 3, "expected exactly 3 dispatches");
}

#[tokio::test]
async fn malformed_success_body_is_a_deserialization_error_not_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/equity/account/cash")
        .with_status(200)
        .with_body(r#"["not","a","cash","object"]"#)
        .expect(1)
        .create_async()
        .await;

    let transport = test_transport(&server.url());
    let error = transport
        .execute::<Cash>(&cash_descriptor())
        .await
        .unwrap_err();

    match error {
        AppError::Deserialization(msg) => assert!(msg.contains("equity/account/cash")),
        other => panic!("expected Deserialization, got {other}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn remote_429_throttles_the_local_bucket() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/equity/account/cash")
        .with_status(429)
        .expect(3)
        .create_async()
        .await;

    let transport = test_transport(&server.url());
    let limiter = transport.rate_limiter();
    let before = limiter
        .read()
        .await
        .effective_rate(EndpointCategory::Account);

    let error = transport
        .execute::<Cash>(&cash_descriptor())
        .await
        .unwrap_err();

    match error {
        AppError::TransientExhausted { last_status, .. } => {
            assert_eq!(last_status, Some(StatusCode::TOO_MANY_REQUESTS));
        }
        other => panic!("expected TransientExhausted, got {other}"),
    }

    let after = limiter
        .read()
        .await
        .effective_rate(EndpointCategory::Account);
    assert!(
        after < before,
        "429 should shrink the bucket: {before} -> {after}"
    );
    // Other categories keep their configured rate
    assert_eq!(
        limiter
            .read()
            .await
            .effective_rate(EndpointCategory::Trading),
        before
    );
}

#[tokio::test]
async fn empty_success_bodies_work_through_execute_empty() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/equity/orders/17")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let transport = test_transport(&server.url());
    let descriptor = RequestDescriptor::delete(EndpointCategory::Trading, "equity/orders/17");
    transport.execute_empty(&descriptor).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn pie_payload_reaches_the_wire_unchanged() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/equity/pies")
        .match_body(Matcher::Json(json!({
            "name": "Tech",
            "goal": null,
            "endDate": null,
            "dividendCashAction": "REINVEST",
            "instrumentShares": {"AAPL_US_EQ": 0.6, "MSFT_US_EQ": 0.4},
        })))
        .with_status(200)
        .with_body(
            r#"{"instruments":[],"settings":{"id":1,"name":"Tech","dividendCashAction":"REINVEST"}}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let shares: HashMap<String, f64> = HashMap::from([
        ("AAPL_US_EQ".to_string(), 0.6),
        ("MSFT_US_EQ".to_string(), 0.4),
    ]);
    let descriptor = PieRequest::new("Tech", DividendCashAction::Reinvest, shares)
        .create_descriptor()
        .unwrap();

    let transport = test_transport(&server.url());
    let pie: t212_client::presentation::pie::Pie = transport.execute(&descriptor).await.unwrap();

    assert_eq!(pie.settings.name, "Tech");
    mock.assert_async().await;
}

#[tokio::test]
async fn order_placement_carries_the_time_validity_literal() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/equity/orders/limit")
        .match_body(Matcher::Json(json!({
            "limitPrice": 180.0,
            "quantity": 0.5,
            "ticker": "AAPL_US_EQ",
            "timeValidity": "GOOD_TILL_CANCEL",
        })))
        .with_status(200)
        .with_body(r#"{"id":1,"ticker":"AAPL_US_EQ","type":"LIMIT","status":"NEW"}"#)
        .expect(1)
        .create_async()
        .await;

    let descriptor =
        CreateOrderRequest::limit("AAPL_US_EQ", 0.5, 180.0, TimeValidity::GoodTillCancel)
            .descriptor()
            .unwrap();

    let transport = test_transport(&server.url());
    let order: Order = transport.execute(&descriptor).await.unwrap();

    assert_eq!(order.id, 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn depleted_bucket_suspends_the_next_call_until_refill() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/equity/account/cash")
        .with_status(200)
        .with_body(CASH_BODY)
        .expect(3)
        .create_async()
        .await;

    let mut config =
        Config::with_credentials(Credentials::new("id", "secret"), server.url());
    // 4 tokens per second, burst of 2: the third call must wait ~250ms
    config.rate_limiter = RateLimiterConfig {
        max_requests: 4,
        period_seconds: 1,
        burst_size: 2,
    };
    config.retry = RetryConfig::none();
    let transport = T212HttpClientImpl::new(Arc::new(config)).unwrap();

    let start = Instant::now();
    for _ in 0..3 {
        let _: Cash = transport.execute(&cash_descriptor()).await.unwrap();
    }
    let elapsed = start.elapsed();

    assert!(
        elapsed >= Duration::from_millis(200),
        "third call should have suspended for a refill, took {elapsed:?}"
    );
}

/// Minimal scripted HTTP server: serves the given (status, body) responses
/// one connection at a time, then reports how many requests it answered.
async fn scripted_server(
    responses: Vec<(u16, String)>,
) -> (String, tokio::task::JoinHandle<usize>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let mut served = 0;
        for (status, body) in responses {
            let (mut socket, _) = match listener.accept().await {
                Ok(pair) => pair,
                Err(_) => break,
            };
            // Drain the request head before answering
            let mut buffer = [0u8; 4096];
            let mut head = Vec::new();
            loop {
                match socket.read(&mut buffer).await {
                    Ok(0) => break,
                    Ok(n) => {
                        head.extend_from_slice(&buffer[..n]);
                        if head.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
            served += 1;
        }
        served
    });

    (format!("http://{addr}"), handle)
}
