//! Integration tests driving the catalog router end to end.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use vitrina_rest::router::catalog_router;
use vitrina_rest::state::RestState;

fn app() -> Router {
    catalog_router(RestState::seeded())
}

async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request build failed"),
        )
        .await
        .expect("request failed");

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    let json = serde_json::from_slice(&body).expect("json parse failed");
    (status, json)
}

#[tokio::test]
async fn test_list_pagination_metadata() {
    let (status, json) = get("/products?page=2&limit=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["pagination"]["page"], 2);
    assert_eq!(json["pagination"]["limit"], 3);
    assert_eq!(json["pagination"]["total"], 10);
    assert_eq!(json["pagination"]["totalPages"], 4);
    assert_eq!(json["pagination"]["hasNext"], true);
    assert_eq!(json["pagination"]["hasPrev"], true);
}

#[tokio::test]
async fn test_list_with_search_narrows_total() {
    let (status, json) = get("/products?q=consola").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["pagination"]["total"], 2);
    assert_eq!(json["searchTerm"], "consola");
}

#[tokio::test]
async fn test_list_rejects_oversized_limit() {
    let (status, json) = get("/products?limit=101").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "LIMIT_TOO_LARGE");
    assert_eq!(json["error"]["details"][0]["field"], "limit");
}

#[tokio::test]
async fn test_get_product_by_id() {
    let (status, json) = get("/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["found"], true);
    assert_eq!(json["data"]["name"], "iPhone 15 Pro");
    assert_eq!(json["data"]["imageUrl"], "https://example.com/images/iphone15pro.jpg");
}

#[tokio::test]
async fn test_get_product_non_numeric_id_is_404() {
    let (status, json) = get("/products/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "PRODUCT_NOT_FOUND");
}

#[tokio::test]
async fn test_bulk_lookup_success() {
    let (status, json) = get("/products/bulk?ids=4,2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    assert_eq!(json["requestedIds"], serde_json::json!([4, 2]));
    assert_eq!(json["foundIds"], serde_json::json!([2, 4]));
}

#[tokio::test]
async fn test_bulk_lookup_partial_match_is_404() {
    let (status, json) = get("/products/bulk?ids=1,999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "PRODUCTS_NOT_FOUND");
    assert!(json["error"]["message"]
        .as_str()
        .expect("message")
        .contains("999999"));
}

#[tokio::test]
async fn test_bulk_lookup_twenty_one_ids_is_rejected() {
    let ids = (1..=21).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
    let (status, json) = get(&format!("/products/bulk?ids={ids}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "TOO_MANY_IDS");
}

#[tokio::test]
async fn test_bulk_lookup_missing_ids_param() {
    let (status, json) = get("/products/bulk").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "MISSING_IDS");
}

#[tokio::test]
async fn test_price_range_filter_with_analysis() {
    let (status, json) = get("/products/price-range?minPrice=300&maxPrice=500").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 4);
    assert_eq!(json["priceRange"]["min"], 300.0);
    assert_eq!(json["priceRange"]["max"], 500.0);
    assert!(json["analysis"]["bestValue"]["id"].is_number());
    assert!(json["analysis"]["averagePrice"].is_number());
}

#[tokio::test]
async fn test_price_range_inverted_bounds() {
    let (status, json) = get("/products/price-range?minPrice=500&maxPrice=100").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_PRICE_RANGE");
}

#[tokio::test]
async fn test_price_range_no_matches_returns_suggestions() {
    let (status, json) = get("/products/price-range?minPrice=1&maxPrice=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
    assert!(json["analysis"]["suggestions"].is_array());
    assert!(json["analysis"].get("bestValue").is_none());
}

#[tokio::test]
async fn test_top_rated_filter() {
    let (status, json) = get("/products/top-rated?minRating=4.8").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 4);
    assert_eq!(json["minRating"], 4.8);
    assert_eq!(json["analysis"]["topRated"][0]["name"], "Sony WH-1000XM5");
}

#[tokio::test]
async fn test_top_rated_rejects_rating_above_five() {
    let (status, json) = get("/products/top-rated?minRating=5.5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "RATING_TOO_HIGH");
}

#[tokio::test]
async fn test_spec_search() {
    let (status, json) = get("/products/search/specs?spec=bluetooth").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    assert_eq!(json["searchTerm"], "bluetooth");
    assert_eq!(
        json["analysis"]["commonSpecifications"][0]["specification"],
        "Conexión"
    );
}

#[tokio::test]
async fn test_spec_search_requires_term() {
    let (status, json) = get("/products/search/specs").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "MISSING_SPEC");
}

#[tokio::test]
async fn test_stats_endpoint() {
    let (status, json) = get("/products/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 10);
    assert_eq!(json["data"]["priceRange"]["min"], 249.99);
    assert_eq!(json["data"]["priceRange"]["max"], 1299.99);
    assert_eq!(json["data"]["categories"]["Gaming"]["count"], 2);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, json) = get("/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["info"]["title"], "Vitrina Products API");
    assert!(json["paths"].get("/products").is_some());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/products")
                .header("x-request-id", "test-req-1")
                .body(Body::empty())
                .expect("request build failed"),
        )
        .await
        .expect("request failed");

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("test-req-1")
    );
}

#[tokio::test]
async fn test_request_id_is_generated_when_absent() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/products")
                .body(Body::empty())
                .expect("request build failed"),
        )
        .await
        .expect("request failed");

    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("request id header");
    assert_eq!(request_id.len(), 26); // ULID
}
