//! End-to-end HTTP tests against a containerized MongoDB.
//!
//! Requires Docker; gated behind the `mongo_integration_tests` feature.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use bson::oid::ObjectId;
use mongodb::{Client, Database};
use serde_json::json;
use testcontainers::{core::WaitFor, runners::AsyncRunner, ContainerAsync, GenericImage};

use brand_service::handlers::brands::register_routes;

async fn start_mongo() -> (ContainerAsync<GenericImage>, Database) {
    let image = GenericImage::new("mongo", "7")
        .with_exposed_port(27017)
        .with_wait_for(WaitFor::message_on_stdout("Waiting for connections"));

    let container = image.start().await;
    let port = container.get_host_port_ipv4(27017).await;
    let url = format!("mongodb://127.0.0.1:{}/", port);

    let client = Client::with_uri_str(&url).await.expect("mongo client");
    let db = client.database("brand_service_test");
    (container, db)
}

#[actix_web::test]
async fn create_brand_applies_documented_defaults() {
    let (_mongo, db) = start_mongo().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db))
            .configure(register_routes),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/brands")
            .set_json(json!({
                "name": "Acme",
                "isBoycotted": true,
                "reason": "labor practices"
            }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["id"].is_string());
    assert_eq!(body["name"], json!("Acme"));
    assert_eq!(body["logoUrl"], json!(""));
    assert_eq!(body["isBoycotted"], json!(true));
    assert_eq!(body["reason"], json!("labor practices"));
    assert_eq!(body["visibility"], json!(true));
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[actix_web::test]
async fn created_brand_round_trips_by_id() {
    let (_mongo, db) = start_mongo().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db))
            .configure(register_routes),
    )
    .await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/brands")
            .set_json(json!({"name": "Acme", "logoUrl": "https://cdn.example.com/acme.png"}))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: serde_json::Value = test::read_body_json(created).await;
    let id = created["id"].as_str().expect("id present");

    let fetched = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/brands/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched: serde_json::Value = test::read_body_json(fetched).await;

    assert_eq!(created, fetched);
}

#[actix_web::test]
async fn get_unknown_brand_returns_404() {
    let (_mongo, db) = start_mongo().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db))
            .configure(register_routes),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/brands/{}", ObjectId::new().to_hex()))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Brand not found"}));
}

#[actix_web::test]
async fn update_merges_partial_fields_and_is_idempotent() {
    let (_mongo, db) = start_mongo().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db))
            .configure(register_routes),
    )
    .await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/brands")
            .set_json(json!({"name": "Acme", "isBoycotted": true, "reason": "labor practices"}))
            .to_request(),
    )
    .await;
    let created: serde_json::Value = test::read_body_json(created).await;
    let id = created["id"].as_str().unwrap().to_string();

    let first = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/brands/{}", id))
            .set_json(json!({"isBoycotted": false}))
            .to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);
    let first: serde_json::Value = test::read_body_json(first).await;

    assert_eq!(first["isBoycotted"], json!(false));
    assert_eq!(first["name"], json!("Acme"));
    assert_eq!(first["reason"], json!("labor practices"));
    assert_eq!(first["visibility"], json!(true));
    assert_eq!(first["createdAt"], created["createdAt"]);

    // Same partial update applied again yields the same field values.
    let second = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/brands/{}", id))
            .set_json(json!({"isBoycotted": false}))
            .to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::OK);
    let second: serde_json::Value = test::read_body_json(second).await;

    for field in ["id", "name", "logoUrl", "isBoycotted", "reason", "visibility", "createdAt"] {
        assert_eq!(first[field], second[field], "field {} diverged", field);
    }
}

#[actix_web::test]
async fn update_unknown_brand_returns_404() {
    let (_mongo, db) = start_mongo().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db))
            .configure(register_routes),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/brands/{}", ObjectId::new().to_hex()))
            .set_json(json!({"isBoycotted": true}))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_then_read_and_second_delete_return_404() {
    let (_mongo, db) = start_mongo().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db))
            .configure(register_routes),
    )
    .await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/brands")
            .set_json(json!({"name": "Acme"}))
            .to_request(),
    )
    .await;
    let created: serde_json::Value = test::read_body_json(created).await;
    let id = created["id"].as_str().unwrap().to_string();

    let deleted = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/brands/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    let deleted: serde_json::Value = test::read_body_json(deleted).await;
    assert_eq!(deleted, json!({"message": "Brand deleted"}));

    let read_back = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/brands/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(read_back.status(), StatusCode::NOT_FOUND);

    let second_delete = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/brands/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(second_delete.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn create_without_name_is_rejected_and_not_stored() {
    let (_mongo, db) = start_mongo().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db))
            .configure(register_routes),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/brands")
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let listed = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/brands").to_request(),
    )
    .await;
    let listed: serde_json::Value = test::read_body_json(listed).await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn list_reflects_creates_and_deletes() {
    let (_mongo, db) = start_mongo().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db))
            .configure(register_routes),
    )
    .await;

    let mut ids = Vec::new();
    for name in ["Acme", "Globex", "Initech"] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/brands")
                .set_json(json!({"name": name}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        ids.push(body["id"].as_str().unwrap().to_string());
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/brands/{}", ids[0]))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let listed = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/brands").to_request(),
    )
    .await;
    let listed: serde_json::Value = test::read_body_json(listed).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn malformed_id_is_surfaced_as_internal_error() {
    let (_mongo, db) = start_mongo().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db))
            .configure(register_routes),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/brands/not-a-hex-id")
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("invalid brand id"));
}
