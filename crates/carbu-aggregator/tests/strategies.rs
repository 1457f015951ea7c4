//! End-to-end tests for both aggregation strategies against a wiremock
//! catalog.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use carbu_aggregator::{AggregateError, FullScan, LowestPriceStrategy, Targeted};
use carbu_catalog::CatalogClient;
use carbu_core::FuelType;

const ALL_FUELS: [FuelType; 3] = FuelType::ALL;

fn test_client(server: &MockServer) -> CatalogClient {
    CatalogClient::new(&format!("{}/records", server.uri()), 5, "carbu-test/0.1")
        .expect("failed to build test CatalogClient")
}

fn records_body(total: u64, rows: serde_json::Value) -> serde_json::Value {
    json!({ "total_count": total, "results": rows })
}

async fn mount_where(server: &MockServer, where_clause: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("where", where_clause))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn bretagne_rows() -> serde_json::Value {
    json!([
        { "region": "Bretagne", "gazole_prix": "1.85", "sp95_prix": null, "sp98_prix": "abc",
          "adresse": "A", "cp": "35000", "ville": "Rennes" },
        { "region": "Bretagne", "gazole_prix": null, "sp95_prix": null, "sp98_prix": 1.99,
          "adresse": "B", "cp": "29200", "ville": "Brest" },
        { "region": "Bretagne", "gazole_prix": "1.79", "sp95_prix": null, "sp98_prix": null,
          "adresse": "C", "cp": "56000", "ville": "Vannes" }
    ])
}

// ---------------------------------------------------------------------------
// Full scan
// ---------------------------------------------------------------------------

async fn mount_full_scan(server: &MockServer, total: u64, page_rows: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("limit", "1"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_body(total, json!([]))))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("limit", total.to_string().as_str()))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_body(total, page_rows)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn full_scan_computes_bretagne_minima() {
    let server = MockServer::start().await;
    mount_full_scan(&server, 3, bretagne_rows()).await;

    let client = test_client(&server);
    let strategy = FullScan::new(&client, &ALL_FUELS, 100, 0);
    let results = strategy.lowest_prices().await.expect("full scan should succeed");

    assert_eq!(results.len(), 1);
    let bretagne = &results[0];
    assert_eq!(bretagne.region_name, "Bretagne");

    let gazole = bretagne.offer(FuelType::Gazole).expect("gazole offer");
    assert_eq!(gazole.price, 1.79);
    assert_eq!(gazole.address, "C");
    assert_eq!(gazole.postal_code, "56000");
    assert_eq!(gazole.city, "Vannes");

    assert!(bretagne.offer(FuelType::Sp95).is_none());

    // "abc" is skipped, the numeric 1.99 wins.
    let sp98 = bretagne.offer(FuelType::Sp98).expect("sp98 offer");
    assert_eq!(sp98.price, 1.99);
    assert_eq!(sp98.address, "B");
}

#[tokio::test]
async fn full_scan_fails_with_consistency_error_on_truncated_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_body(5, json!([]))))
        .mount(&server)
        .await;

    // Claims five records but only ever serves three, then nothing.
    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_body(5, bretagne_rows())))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("offset", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_body(5, json!([]))))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = FullScan::new(&client, &ALL_FUELS, 100, 0).lowest_prices().await;

    assert!(
        matches!(
            result,
            Err(AggregateError::Consistency {
                expected: 5,
                actual: 3
            })
        ),
        "expected Consistency error, got: {result:?}"
    );
}

#[tokio::test]
async fn full_scan_with_zero_total_count_yields_empty_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_body(0, json!([]))))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let results = FullScan::new(&client, &ALL_FUELS, 100, 0)
        .lowest_prices()
        .await
        .expect("an empty dataset is not an error");

    assert!(results.is_empty());
}

#[tokio::test]
async fn full_scan_propagates_fetch_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = FullScan::new(&client, &ALL_FUELS, 100, 0).lowest_prices().await;

    assert!(
        matches!(result, Err(AggregateError::Fetch(_))),
        "expected Fetch error, got: {result:?}"
    );
}

#[tokio::test]
async fn full_scan_is_idempotent_over_unchanged_dataset() {
    let server = MockServer::start().await;
    mount_full_scan(&server, 3, bretagne_rows()).await;

    let client = test_client(&server);
    let strategy = FullScan::new(&client, &ALL_FUELS, 100, 0);
    let first = strategy.lowest_prices().await.expect("first run");
    let second = strategy.lowest_prices().await.expect("second run");

    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Targeted
// ---------------------------------------------------------------------------

async fn mount_bretagne_targeted(server: &MockServer) {
    mount_where(
        server,
        "code_region=53",
        records_body(412, json!([{ "region": "Bretagne" }])),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("where", "code_region=53 and gazole_prix is not null"))
        .and(query_param("order_by", "gazole_prix"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_body(
            398,
            json!([{ "prix": 1.729, "adresse": "ZA de Kerlann", "cp": "35170", "ville": "Bruz" }]),
        )))
        .mount(server)
        .await;

    mount_where(
        server,
        "code_region=53 and sp95_prix is not null",
        records_body(0, json!([])),
    )
    .await;

    mount_where(
        server,
        "code_region=53 and sp98_prix is not null",
        records_body(
            250,
            json!([{ "prix": "abc", "adresse": "Quai", "cp": "29200", "ville": "Brest" }]),
        ),
    )
    .await;
}

#[tokio::test]
async fn targeted_assembles_region_from_server_sorted_rows() {
    let server = MockServer::start().await;
    mount_bretagne_targeted(&server).await;

    let client = test_client(&server);
    let codes = [53];
    let results = Targeted::new(&client, &codes, &ALL_FUELS, 1)
        .lowest_prices()
        .await
        .expect("targeted run should succeed");

    assert_eq!(results.len(), 1);
    let bretagne = &results[0];
    assert_eq!(bretagne.region_name, "Bretagne");

    let gazole = bretagne.offer(FuelType::Gazole).expect("gazole offer");
    assert_eq!(gazole.price, 1.729);
    assert_eq!(gazole.city, "Bruz");

    // Zero rows and a malformed price both mean "no offer".
    assert!(bretagne.offer(FuelType::Sp95).is_none());
    assert!(bretagne.offer(FuelType::Sp98).is_none());
    assert_eq!(bretagne.offers.len(), 3);
}

#[tokio::test]
async fn targeted_skips_unknown_region_but_keeps_others() {
    let server = MockServer::start().await;
    mount_bretagne_targeted(&server).await;
    mount_where(&server, "code_region=99", records_body(0, json!([]))).await;

    let client = test_client(&server);
    let codes = [99, 53];
    let strategy = Targeted::new(&client, &codes, &ALL_FUELS, 1);

    let outcomes = strategy.region_outcomes().await;
    assert!(matches!(
        outcomes[0],
        (99, Err(AggregateError::UnknownRegion { code: 99 }))
    ));
    assert!(outcomes[1].1.is_ok());

    let results = strategy.lowest_prices().await.expect("one region succeeded");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].region_name, "Bretagne");
}

#[tokio::test]
async fn targeted_fails_when_every_region_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let codes = [11, 53];
    let result = Targeted::new(&client, &codes, &ALL_FUELS, 1)
        .lowest_prices()
        .await;

    assert!(
        matches!(result, Err(AggregateError::Fetch(_))),
        "expected Fetch error, got: {result:?}"
    );
}

#[tokio::test]
async fn targeted_with_no_region_codes_is_empty() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let results = Targeted::new(&client, &[], &ALL_FUELS, 1)
        .lowest_prices()
        .await
        .expect("nothing to query is not an error");

    assert!(results.is_empty());
}

#[tokio::test]
async fn targeted_concurrent_regions_keep_configured_order() {
    let server = MockServer::start().await;

    // The first configured region answers slowly.
    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("where", "code_region=53"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(records_body(1, json!([{ "region": "Bretagne" }])))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    mount_where(
        &server,
        "code_region=11",
        records_body(1, json!([{ "region": "Île-de-France" }])),
    )
    .await;
    mount_where(
        &server,
        "code_region=53 and gazole_prix is not null",
        records_body(1, json!([{ "prix": 1.8, "adresse": "A", "cp": "35000", "ville": "Rennes" }])),
    )
    .await;
    mount_where(
        &server,
        "code_region=11 and gazole_prix is not null",
        records_body(1, json!([{ "prix": 1.9, "adresse": "B", "cp": "75001", "ville": "Paris" }])),
    )
    .await;

    let client = test_client(&server);
    let codes = [53, 11];
    let fuels = [FuelType::Gazole];
    let results = Targeted::new(&client, &codes, &fuels, 2)
        .lowest_prices()
        .await
        .expect("both regions succeed");

    let names: Vec<&str> = results.iter().map(|r| r.region_name.as_str()).collect();
    assert_eq!(names, ["Bretagne", "Île-de-France"]);
    assert_eq!(results[1].offer(FuelType::Gazole).map(|o| o.price), Some(1.9));
}
