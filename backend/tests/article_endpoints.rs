//! End-to-end coverage for the article endpoints against the in-memory
//! adapters.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{Value, json};

use backend::server::build_app;
use backend::test_support::InMemoryStore;

#[actix_web::test]
async fn listing_defaults_to_created_at_descending() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;
    let request = actix_test::TestRequest::get()
        .uri("/api/articles")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(response).await;
    let articles = body["articles"].as_array().expect("articles array");
    assert_eq!(articles.len(), 10, "default page size is 10");
    assert_eq!(body["total_count"], json!(12));
    // Article 12 is the most recent in the fixture.
    assert_eq!(articles[0]["article_id"], json!(12));
    let timestamps: Vec<&str> = articles
        .iter()
        .map(|article| article["created_at"].as_str().expect("timestamp"))
        .collect();
    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted, "ordered newest first");
}

#[actix_web::test]
async fn listing_returns_every_row_within_the_limit() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;
    let request = actix_test::TestRequest::get()
        .uri("/api/articles?limit=20")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let body: Value = actix_test::read_body_json(response).await;
    let articles = body["articles"].as_array().expect("articles array");
    assert_eq!(articles.len(), 12);
    for article in articles {
        assert!(article["article_id"].is_i64());
        assert!(article["author"].is_string());
        assert!(article["title"].is_string());
        assert!(article["body"].is_string());
        assert!(article["topic"].is_string());
        assert!(article["created_at"].is_string());
        assert!(article["votes"].is_i64());
        assert!(article["comment_count"].is_i64());
    }
}

#[actix_web::test]
async fn listing_sorts_by_whitelisted_columns() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;
    let request = actix_test::TestRequest::get()
        .uri("/api/articles?sort_by=votes&order=asc&limit=20")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let articles = body["articles"].as_array().expect("articles array");
    let last = articles.last().expect("non-empty listing");
    // Article 1 carries the only non-zero vote tally.
    assert_eq!(last["article_id"], json!(1));

    let request = actix_test::TestRequest::get()
        .uri("/api/articles?sort_by=comment_count&limit=20")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let body: Value = actix_test::read_body_json(response).await;
    let articles = body["articles"].as_array().expect("articles array");
    assert_eq!(articles[0]["article_id"], json!(1), "11 comments sorts first");
}

#[actix_web::test]
async fn listing_filters_by_topic() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;
    let request = actix_test::TestRequest::get()
        .uri("/api/articles?topic=cats")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["total_count"], json!(1));
    assert_eq!(body["articles"][0]["article_id"], json!(5));
}

#[actix_web::test]
async fn unknown_topics_yield_an_empty_list_not_an_error() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;
    for uri in [
        "/api/articles?topic=paper",
        "/api/articles?topic=not-a-topic",
    ] {
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["articles"], json!([]));
        assert_eq!(body["total_count"], json!(0));
    }
}

#[actix_web::test]
async fn listing_rejects_values_outside_the_whitelist() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;
    for (uri, msg) in [
        ("/api/articles?sort_by=droptable", "Invalid sort_by query"),
        ("/api/articles?order=sideways", "Invalid order query"),
        ("/api/articles?limit=nope", "Invalid limit query"),
        ("/api/articles?limit=0", "Invalid limit query"),
        ("/api/articles?p=-1", "Invalid p query"),
    ] {
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "msg": msg }), "{uri}");
    }
}

#[actix_web::test]
async fn empty_store_lists_as_an_empty_array_under_the_key() {
    let app = actix_test::init_service(build_app(InMemoryStore::empty().http_state())).await;
    let request = actix_test::TestRequest::get()
        .uri("/api/articles")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "articles": [], "total_count": 0 }));
}

#[actix_web::test]
async fn single_article_carries_a_numeric_comment_count() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/articles/3")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["article"]["comment_count"], json!(2));

    let request = actix_test::TestRequest::get()
        .uri("/api/articles/2")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let body: Value = actix_test::read_body_json(response).await;
    // Zero, a number, and present - never absent or a string.
    assert_eq!(body["article"]["comment_count"], json!(0));
}

#[actix_web::test]
async fn single_article_returns_the_full_representation() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;
    let request = actix_test::TestRequest::get()
        .uri("/api/articles/1")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let body: Value = actix_test::read_body_json(response).await;
    let article = &body["article"];
    assert_eq!(article["article_id"], json!(1));
    assert_eq!(article["author"], json!("butter_bridge"));
    assert_eq!(article["topic"], json!("mitch"));
    assert_eq!(article["votes"], json!(100));
    assert_eq!(article["comment_count"], json!(11));
}

#[actix_web::test]
async fn malformed_and_missing_identifiers_map_to_400_and_404() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/articles/abc")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "msg": "Invalid article_id" }));

    let request = actix_test::TestRequest::get()
        .uri("/api/articles/34567")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "msg": "Non-existent article_id" }));
}

#[actix_web::test]
async fn vote_deltas_accumulate_additively() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;

    let request = actix_test::TestRequest::patch()
        .uri("/api/articles/1")
        .set_json(json!({ "inc_votes": 10 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["article"]["votes"], json!(110));

    let request = actix_test::TestRequest::patch()
        .uri("/api/articles/1")
        .set_json(json!({ "inc_votes": -30 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["article"]["votes"], json!(80), "100 + 10 - 30");
}

#[actix_web::test]
async fn patched_votes_are_visible_to_subsequent_reads() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;

    let request = actix_test::TestRequest::patch()
        .uri("/api/articles/1")
        .set_json(json!({ "inc_votes": 1 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let patched: Value = actix_test::read_body_json(response).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/articles/1")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let fetched: Value = actix_test::read_body_json(response).await;

    assert_eq!(patched["article"]["votes"], fetched["article"]["votes"]);
}

#[actix_web::test]
async fn vote_delta_can_arrive_through_the_query_string() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;
    let request = actix_test::TestRequest::patch()
        .uri("/api/articles/1?inc_votes=10")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["article"]["votes"], json!(110));
}

#[actix_web::test]
async fn patch_rejects_missing_or_non_integer_deltas() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;

    let empty = actix_test::TestRequest::patch()
        .uri("/api/articles/1")
        .to_request();
    let with_fraction = actix_test::TestRequest::patch()
        .uri("/api/articles/1")
        .set_json(json!({ "inc_votes": 1.5 }))
        .to_request();
    let with_text = actix_test::TestRequest::patch()
        .uri("/api/articles/1?inc_votes=cat")
        .to_request();

    for request in [empty, with_fraction, with_text] {
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "msg": "Invalid PATCH body" }));
    }
}

#[actix_web::test]
async fn patch_on_a_missing_article_is_a_404() {
    let app = actix_test::init_service(build_app(InMemoryStore::seeded().http_state())).await;
    let request = actix_test::TestRequest::patch()
        .uri("/api/articles/4566")
        .set_json(json!({ "inc_votes": 1 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "msg": "Non-existent article_id" }));
}
