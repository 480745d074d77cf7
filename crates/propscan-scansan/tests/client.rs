//! Integration tests for `ScansanClient` using wiremock HTTP mocks.

use propscan_core::SearchQuery;
use propscan_scansan::{parse_search_response, PostcodeKey, ScansanClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn area(name: &str) -> SearchQuery {
    SearchQuery::by_area_name(name).expect("non-blank area name")
}

fn test_client(base_url: &str) -> ScansanClient {
    ScansanClient::with_base_url("test-key", 5, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn search_by_area_name_sends_credential_and_params() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "search_query": "Brixton",
        "search_found": "ward",
        "data": [[{ "area_code": { "area_code_list": ["SW2 1"] } }]]
    });

    Mock::given(method("GET"))
        .and(path("/v1/area_codes/search"))
        .and(query_param("area_name", "Brixton"))
        .and(header("X-Auth-Token", "test-key"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/v1", server.uri()));
    let payload = client
        .search(&area("Brixton"))
        .await
        .expect("search should return a payload");

    assert_eq!(payload, body);
    assert_eq!(parse_search_response(&payload).area_codes, vec!["SW2 1"]);
}

#[tokio::test]
async fn search_by_district_and_street_sends_both_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/area_codes/search"))
        .and(query_param("gbr_district", "SW1A"))
        .and(query_param("gbr_street", "Downing Street"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = client
        .search(
            &SearchQuery::by_district_and_street("sw1a", "Downing Street")
                .expect("district and street"),
        )
        .await;

    assert!(payload.is_some());
}

#[tokio::test]
async fn blank_search_identifier_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client
        .search(&SearchQuery::ByAreaName {
            name: "   ".to_string()
        })
        .await
        .is_none());
    assert!(client
        .current_valuations(&PostcodeKey::AreaCode(String::new()))
        .await
        .is_none());
    assert!(client.summary(" ", None).await.is_none());
}

#[tokio::test]
async fn non_success_status_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client.search(&area("Leeds")).await.is_none());
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client
        .sale_history(&PostcodeKey::AreaCode("SE255NF".to_string()))
        .await
        .is_none());
}

#[tokio::test]
async fn non_json_body_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client.search(&area("York")).await.is_none());
}

#[tokio::test]
async fn unreachable_host_returns_none() {
    let client = test_client("http://127.0.0.1:1");
    assert!(client.search(&area("York")).await.is_none());
}

#[tokio::test]
async fn summary_sends_code_and_optional_district() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/area_codes/NG8/summary"))
        .and(query_param("area_code", "NG8"))
        .and(query_param("area_code_district", "NG8 1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "total_properties": 12 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let summary = client.summary("NG8", Some("NG8 1")).await.expect("summary");
    assert_eq!(summary["total_properties"], 12);
}

#[tokio::test]
async fn current_valuations_by_area_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/postcode/SE255NF/valuations/current"))
        .and(query_param("area_code", "SE255NF"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{ "property_address": "1 Test Road", "bounded_valuation": [1, 3] }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = client
        .current_valuations(&PostcodeKey::AreaCode("SE255NF".to_string()))
        .await
        .expect("valuations");
    let entries = propscan_scansan::current_valuations_from_payload(&payload);
    assert_eq!(entries.len(), 1);
    assert_eq!(
        propscan_scansan::derive_current_price(&entries[0].bounded_valuation, None),
        Some(2)
    );
}

#[tokio::test]
async fn historical_valuations_by_postal_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/postcode/NW1%200BH/valuations/historical"))
        .and(query_param("area_code_postal", "NW1 0BH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{
                "property_address": "221B Baker Street",
                "valuations": [
                    { "date": "2025-01-31", "valuation": 1_250_000 },
                    { "date": "2024-01-31", "valuation": 1_200_000 }
                ]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = client
        .historical_valuations(&PostcodeKey::Postal("NW1 0BH".to_string()))
        .await
        .expect("history");
    let series = propscan_scansan::valuation_series(&payload, Some("221B Baker Street"));
    let prices: Vec<i64> = series.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![1_200_000, 1_250_000]);
}
