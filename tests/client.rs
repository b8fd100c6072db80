//! End-to-end client tests against a local mock server.

use std::time::Duration;

use exchangerates_sdk::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LATEST_BODY: &str = r#"{"rates":{"JPY":110.5,"GBP":0.76},"base":"USD","date":"2020-01-02"}"#;

const HISTORY_BODY: &str = r#"{
    "rates": {
        "2020-01-01": {"USD": 1.0, "JPY": 110.2},
        "2020-01-02": {"USD": 1.0, "JPY": 110.5},
        "2020-01-03": {"USD": 1.0, "JPY": 110.7}
    },
    "base": "USD",
    "start_at": "2020-01-01",
    "end_at": "2020-01-03"
}"#;

fn client_for(server: &MockServer) -> ExchangeRatesClient {
    ExchangeRatesClient::builder()
        .api_url(&server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_latest_decodes_rates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .and(query_param("base", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(LATEST_BODY, "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    let response = client.latest(&cancel, &[]).await.unwrap();

    assert_eq!(response.meta.status.as_u16(), 200);
    assert_eq!(response.data.base, "USD");
    assert_eq!(response.data.date, "2020-01-02");
    assert_eq!(response.data.rates.jpy, 110.5);
    assert_eq!(response.data.rates.gbp, 0.76);
    assert_eq!(response.data.rates.sek, 0.0);
}

#[tokio::test]
async fn test_latest_sends_symbols_in_caller_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .and(query_param("base", "USD"))
        .and(query_param("symbols", "JPY,GBP"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(LATEST_BODY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    client.latest(&cancel, &["JPY", "GBP"]).await.unwrap();
}

#[tokio::test]
async fn test_latest_without_symbols_omits_the_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(LATEST_BODY, "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    client.latest(&cancel, &[]).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let query = requests[0].url.query().unwrap_or("");
    assert!(!query.contains("symbols"), "unexpected query: {query}");
}

#[tokio::test]
async fn test_set_base_currency_changes_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .and(query_param("base", "EUR"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(LATEST_BODY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.set_base_currency("EUR");
    let cancel = CancellationToken::new();
    client.latest(&cancel, &[]).await.unwrap();
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(LATEST_BODY, "application/json"))
        .mount(&server)
        .await;

    let client = ExchangeRatesClient::builder()
        .api_url(&format!("{}/", server.uri()))
        .build()
        .unwrap();
    let cancel = CancellationToken::new();
    assert!(client.latest(&cancel, &[]).await.is_ok());
}

#[tokio::test]
async fn test_history_decodes_date_keyed_rates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .and(query_param("base", "USD"))
        .and(query_param("start_at", "2020-01-01"))
        .and(query_param("end_at", "2020-01-03"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(HISTORY_BODY, "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    let response = client
        .history(&cancel, "2020-01-01", "2020-01-03", &["USD", "JPY"])
        .await
        .unwrap();

    let history = response.data;
    assert_eq!(history.base, "USD");
    let dates: Vec<_> = history.rates.keys().cloned().collect();
    assert_eq!(dates, ["2020-01-01", "2020-01-02", "2020-01-03"]);
    // Base currency quoted against itself is always 1.
    assert_eq!(history.rates["2020-01-02"].usd, 1.0);
}

#[tokio::test]
async fn test_structured_server_error_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(
            ResponseTemplate::new(404).set_body_raw(r#"{"error":"not found"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    let err = client.latest(&cancel, &[]).await.unwrap_err();

    assert!(matches!(err, Error::Api { .. }));
    assert_eq!(err.to_string(), "not found");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
}

#[tokio::test]
async fn test_unparseable_server_error_keeps_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(500).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    let err = client.latest(&cancel, &[]).await.unwrap_err();

    assert!(matches!(err, Error::Server { .. }));
    assert_eq!(err.to_string(), "not json");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
}

#[tokio::test]
async fn test_empty_success_body_decodes_to_zero_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    let response = client.latest(&cancel, &[]).await.unwrap();
    assert_eq!(response.data, LatestRates::default());
}

#[tokio::test]
async fn test_mismatched_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[1,2,3]", "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    let err = client.latest(&cancel, &[]).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(200));
}

#[tokio::test]
async fn test_transport_failure_surfaces_verbatim() {
    // Nothing listens here; the connection is refused.
    let client = ExchangeRatesClient::builder()
        .api_url("http://127.0.0.1:1")
        .build()
        .unwrap();
    let cancel = CancellationToken::new();
    let err = client.latest(&cancel, &[]).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn test_cancellation_wins_over_transport_failure() {
    // Same refused connection, but the token is already cancelled.
    let client = ExchangeRatesClient::builder()
        .api_url("http://127.0.0.1:1")
        .build()
        .unwrap();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client.latest(&cancel, &[]).await.unwrap_err();
    assert!(err.is_cancelled(), "expected Cancelled, got {err:?}");
}

#[tokio::test]
async fn test_cancelling_an_in_flight_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(LATEST_BODY, "application/json")
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            cancel.cancel();
        }
    });

    let err = client.latest(&cancel, &[]).await.unwrap_err();
    assert!(err.is_cancelled(), "expected Cancelled, got {err:?}");
}
