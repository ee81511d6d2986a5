//! End-to-end coverage for the topic and user endpoints against the
//! in-memory adapters.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{Value, json};

use backend::server::build_app;
use backend::test_support::InMemoryStore;

#[actix_web::test]
async fn topics_list_with_slug_and_description() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;
    let request = actix_test::TestRequest::get().uri("/api/topics").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let topics = body["topics"].as_array().expect("topics array");
    assert_eq!(topics.len(), 3);
    for topic in topics {
        assert!(topic["slug"].is_string());
        assert!(topic["description"].is_string());
    }
}

#[actix_web::test]
async fn topics_paginate() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/topics?limit=2")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["topics"].as_array().expect("array").len(), 2);

    let request = actix_test::TestRequest::get()
        .uri("/api/topics?limit=2&p=2")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let body: Value = actix_test::read_body_json(response).await;
    let topics = body["topics"].as_array().expect("array");
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0]["slug"], json!("paper"));
}

#[actix_web::test]
async fn topics_reject_invalid_pagination() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;
    let request = actix_test::TestRequest::get()
        .uri("/api/topics?p=zero")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "msg": "Invalid p query" }));
}

#[actix_web::test]
async fn topic_lookup_by_slug() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/topics/mitch")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["topic"]["slug"], json!("mitch"));
    assert!(body["topic"]["description"].is_string());

    let request = actix_test::TestRequest::get()
        .uri("/api/topics/knitting")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "msg": "Non-existent slug" }));
}

#[actix_web::test]
async fn users_list_with_the_full_contract() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;
    let request = actix_test::TestRequest::get().uri("/api/users").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let users = body["users"].as_array().expect("users array");
    assert_eq!(users.len(), 4);
    for user in users {
        assert!(user["username"].is_string());
        assert!(user["name"].is_string());
        assert!(user["avatar_url"].is_string());
    }
}

#[actix_web::test]
async fn empty_tables_list_as_empty_arrays_under_their_keys() {
    let app = actix_test::init_service(build_app(InMemoryStore::empty().http_state())).await;

    let request = actix_test::TestRequest::get().uri("/api/users").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "users": [] }));

    let request = actix_test::TestRequest::get().uri("/api/topics").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "topics": [] }));
}
