//! Tests for asset HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::{TimeZone, Utc};
use rstest::rstest;
use serde_json::json;

use super::*;
use crate::domain::ports::{MockAssetsCommand, MockAssetsQuery};
use crate::domain::{AssetDescription, AssetId, Error, ImageUrl};
use crate::inbound::http::json_config;

fn sample_asset() -> Asset {
    Asset::new(
        AssetId::from_uuid(uuid::Uuid::nil()),
        AssetDescription::new("a paper plane icon").expect("description"),
        ImageUrl::new("https://img.example/plane.png").expect("url"),
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
            .single()
            .expect("valid time"),
    )
}

fn test_app(
    command: MockAssetsCommand,
    query: MockAssetsQuery,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(command), Arc::new(query));
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .service(
            web::scope("/api/assets")
                .service(generate_asset)
                .service(delete_asset)
                .route("", web::get().to(list_assets)),
        )
}

#[actix_web::test]
async fn generate_returns_created_asset() {
    let mut command = MockAssetsCommand::new();
    command
        .expect_generate_asset()
        .withf(|request| request.description.as_deref() == Some("a paper plane icon"))
        .times(1)
        .return_once(|_| Ok(sample_asset()));
    let app = actix_test::init_service(test_app(command, MockAssetsQuery::new())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/assets/generate")
        .set_json(json!({ "description": "a paper plane icon" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: AssetResponseBody = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        AssetResponseBody {
            id: "00000000-0000-0000-0000-000000000000".to_owned(),
            description: "a paper plane icon".to_owned(),
            image_url: "https://img.example/plane.png".to_owned(),
            created_at: "2024-05-01T09:30:00.000Z".to_owned(),
        }
    );
}

#[rstest]
#[case::empty_object(json!({}))]
#[case::null_description(json!({ "description": null }))]
#[actix_web::test]
async fn generate_passes_absent_description_to_the_service(#[case] payload: serde_json::Value) {
    let mut command = MockAssetsCommand::new();
    command
        .expect_generate_asset()
        .withf(|request| request.description.is_none())
        .times(1)
        .return_once(|_| Err(Error::invalid_request("Description is required")));
    let app = actix_test::init_service(test_app(command, MockAssetsQuery::new())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/assets/generate")
        .set_json(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = actix_test::read_body_json(res).await;
    assert_eq!(body.error, "Description is required");
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request_with_error_body() {
    let mut command = MockAssetsCommand::new();
    command.expect_generate_asset().times(0);
    let app = actix_test::init_service(test_app(command, MockAssetsQuery::new())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/assets/generate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"description\": ")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = actix_test::read_body_json(res).await;
    assert_eq!(body.error, "Invalid JSON body");
}

#[actix_web::test]
async fn generate_forwards_upstream_status() {
    let mut command = MockAssetsCommand::new();
    command
        .expect_generate_asset()
        .times(1)
        .return_once(|_| Err(Error::upstream_rejected(402, "Out of credits")));
    let app = actix_test::init_service(test_app(command, MockAssetsQuery::new())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/assets/generate")
        .set_json(json!({ "description": "x" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::PAYMENT_REQUIRED);
    let body: ErrorBody = actix_test::read_body_json(res).await;
    assert_eq!(body.error, "Out of credits");
}

#[actix_web::test]
async fn list_returns_service_order() {
    let mut query = MockAssetsQuery::new();
    query
        .expect_list_assets()
        .times(1)
        .return_once(|| Ok(vec![sample_asset()]));
    let app = actix_test::init_service(test_app(MockAssetsCommand::new(), query)).await;

    let req = actix_test::TestRequest::get().uri("/api/assets").to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Vec<AssetResponseBody> = actix_test::read_body_json(res).await;
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].image_url, "https://img.example/plane.png");
}

#[actix_web::test]
async fn list_failure_is_internal_error() {
    let mut query = MockAssetsQuery::new();
    query
        .expect_list_assets()
        .times(1)
        .return_once(|| Err(Error::storage_failure("Error fetching assets")));
    let app = actix_test::init_service(test_app(MockAssetsCommand::new(), query)).await;

    let req = actix_test::TestRequest::get().uri("/api/assets").to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = actix_test::read_body_json(res).await;
    assert_eq!(body.error, "Error fetching assets");
}

#[rstest]
#[case::removed(Ok(()), StatusCode::OK)]
#[case::missing(Err(Error::not_found("Asset not found")), StatusCode::NOT_FOUND)]
#[case::store_down(Err(Error::storage_failure("Error deleting asset")), StatusCode::INTERNAL_SERVER_ERROR)]
#[actix_web::test]
async fn delete_maps_service_outcome(
    #[case] outcome: Result<(), Error>,
    #[case] expected: StatusCode,
) {
    let mut command = MockAssetsCommand::new();
    command
        .expect_delete_asset()
        .withf(|request| request.asset_id == "abc")
        .times(1)
        .return_once(move |_| outcome);
    let app = actix_test::init_service(test_app(command, MockAssetsQuery::new())).await;

    let req = actix_test::TestRequest::delete()
        .uri("/api/assets/abc")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), expected);
    if expected == StatusCode::OK {
        let body: MessageResponseBody = actix_test::read_body_json(res).await;
        assert_eq!(body.message, "Asset removed");
    }
}
