//! End-to-end HTTP flow over the in-memory adapters.
//!
//! Requests pass through the same middleware, JSON configuration and route
//! registration as the server, with the store and cache replaced by the
//! `test-support` doubles.

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use car_api::Trace;
use car_api::domain::{CarService, CarServiceSettings, TRACE_ID_HEADER};
use car_api::inbound::http::cars::configure;
use car_api::inbound::http::error::json_error_handler;
use car_api::inbound::http::state::HttpState;
use car_api::test_support::{InMemoryCache, InMemoryCarRepository, MutableClock};
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

struct Harness {
    clock: Arc<MutableClock>,
    repository: Arc<InMemoryCarRepository>,
    state: HttpState,
}

#[fixture]
fn harness() -> Harness {
    let start = Utc
        .with_ymd_and_hms(2026, 5, 1, 8, 0, 0)
        .single()
        .expect("valid instant");
    let clock = Arc::new(MutableClock::new(start));
    let repository = Arc::new(InMemoryCarRepository::new());
    let cache = Arc::new(InMemoryCache::new(clock.clone()));
    let service = CarService::new(
        repository.clone(),
        cache,
        clock.clone(),
        CarServiceSettings::default(),
    );
    Harness {
        clock,
        repository,
        state: HttpState::from_service(Arc::new(service)),
    }
}

#[fixture]
fn corolla() -> Value {
    json!({
        "make": "Toyota",
        "model": "Corolla",
        "package": "LE",
        "color": "Blue",
        "year": 2020,
        "category": "Sedan",
        "mileage": 5000,
        "price": 18000,
        "identification": "VIN123"
    })
}

async fn init(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(Trace)
            .service(web::scope("/api/v1").configure(configure)),
    )
    .await
}

#[rstest]
#[actix_web::test]
async fn create_read_validate_and_delete(harness: Harness, corolla: Value) {
    let app = init(harness.state).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/cars")
            .set_json(&corolla)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"message": "car created"}));

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/v1/cars/1").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    for field in ["make", "model", "package", "color", "year", "category", "mileage", "price", "identification"] {
        assert_eq!(body["data"][field], corolla[field], "field {field}");
    }
    assert_eq!(body["data"]["created_at"], "2026-05-01T08:00:00Z");
    assert_eq!(body["data"]["updated_at"], body["data"]["created_at"]);

    let mut zero_year = corolla.clone();
    zero_year["year"] = json!(0);
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/cars")
            .set_json(&zero_year)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert!(body["details"]["fields"].get("year").is_some());
    assert!(body["traceId"].is_string());
    assert_eq!(harness.repository.len(), 1);

    for expected in [StatusCode::OK, StatusCode::NOT_FOUND] {
        let res = test::call_service(
            &app,
            test::TestRequest::delete().uri("/api/v1/cars/1").to_request(),
        )
        .await;
        assert_eq!(res.status(), expected);
    }
    assert!(harness.repository.is_empty());
}

#[rstest]
#[actix_web::test]
async fn unknown_car_is_not_found(harness: Harness) {
    let app = init(harness.state).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/cars/999999").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "car not found");
}

#[rstest]
#[actix_web::test]
async fn update_replaces_fields_and_advances_updated_at(harness: Harness, corolla: Value) {
    let Harness { clock, state, .. } = harness;
    let app = init(state).await;
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/cars")
            .set_json(&corolla)
            .to_request(),
    )
    .await;

    clock.advance(Duration::from_secs(90));
    let mut repainted = corolla;
    repainted["color"] = json!("Red");
    repainted["mileage"] = json!(6200);
    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/v1/cars/1")
            .set_json(&repainted)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/v1/cars/1").to_request()).await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["color"], "Red");
    assert_eq!(body["data"]["mileage"], 6200);
    assert_eq!(body["data"]["created_at"], "2026-05-01T08:00:00Z");
    assert_eq!(body["data"]["updated_at"], "2026-05-01T08:01:30Z");
}

#[rstest]
#[actix_web::test]
async fn list_is_served_from_cache_until_ttl_lapses(harness: Harness, corolla: Value) {
    let Harness {
        clock,
        repository,
        state,
    } = harness;
    let app = init(state).await;
    let create = |body: &Value| {
        test::TestRequest::post()
            .uri("/api/v1/cars")
            .set_json(body)
            .to_request()
    };
    let list = || test::TestRequest::get().uri("/api/v1/cars").to_request();

    let body: Value = test::call_and_read_body_json(&app, list()).await;
    assert_eq!(body, json!({"data": []}));

    test::call_service(&app, create(&corolla)).await;
    let body: Value = test::call_and_read_body_json(&app, list()).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    assert_eq!(repository.fetch_calls(), 1);

    clock.advance(Duration::from_secs(30));
    let body: Value = test::call_and_read_body_json(&app, list()).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["make"], "Toyota");
    assert_eq!(repository.fetch_calls(), 2);

    let body: Value = test::call_and_read_body_json(&app, list()).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(repository.fetch_calls(), 2);
}

#[rstest]
#[actix_web::test]
async fn undecodable_body_is_unprocessable_with_trace_id(harness: Harness) {
    let app = init(harness.state).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/cars")
            .insert_header(("content-type", "application/json"))
            .insert_header((TRACE_ID_HEADER, "3f2504e0-4f89-41d3-9a0c-0305e82c3301"))
            .set_payload("{\"make\": 7}")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "unprocessable_entity");
    assert_eq!(body["traceId"], "3f2504e0-4f89-41d3-9a0c-0305e82c3301");
}
