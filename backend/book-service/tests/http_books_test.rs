mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use book_service::handlers::{self, HealthState};
use book_service::models::Book;
use book_service::services::BookService;
use common::{in_memory_service, StaticHealthCheck, UnavailableBookRepository};
use grpc_health::HealthCheck;
use serde_json::json;
use std::sync::Arc;

fn health(healthy: bool) -> web::Data<HealthState> {
    let check: Arc<dyn HealthCheck> = Arc::new(StaticHealthCheck { healthy });
    web::Data::new(HealthState::new(vec![check]))
}

#[actix_web::test]
async fn book_lifecycle_over_http() {
    let (service, _repo) = in_memory_service();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(health(true))
            .configure(handlers::configure),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/books")
            .set_json(json!({"title": "Dune", "author": "Herbert", "year": 1965}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Book = test::read_body_json(resp).await;
    assert!(created.id > 0);
    assert_eq!(created.title, "Dune");

    let fetched: Book = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/books/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(fetched, created);

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/books/{}", created.id))
            .set_json(json!({"title": "Dune (rev)", "author": "Herbert", "year": 1965}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Book = test::read_body_json(resp).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Dune (rev)");

    let refetched: Book = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/books/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(refetched.title, "Dune (rev)");

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/books/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/books/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 404);
}

#[actix_web::test]
async fn list_returns_every_created_book() {
    let (service, _repo) = in_memory_service();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(health(true))
            .configure(handlers::configure),
    )
    .await;

    let empty: Vec<Book> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/books").to_request())
            .await;
    assert!(empty.is_empty());

    let titles = ["Dune", "Emma", "Ulysses"];
    for (i, title) in titles.iter().enumerate() {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/books")
                .set_json(json!({"title": title, "author": "Someone", "year": 1900 + i as i32}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let books: Vec<Book> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/books").to_request())
            .await;
    assert_eq!(books.len(), titles.len());
    for title in titles {
        assert!(books.iter().any(|b| b.title == title));
    }
}

#[actix_web::test]
async fn invalid_books_are_rejected_without_writing() {
    let (service, repo) = in_memory_service();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(health(true))
            .configure(handlers::configure),
    )
    .await;

    let payloads = [
        json!({"title": "", "author": "Herbert", "year": 1965}),
        json!({"title": "Dune", "author": "", "year": 1965}),
        json!({"title": "Dune", "author": "Herbert", "year": 0}),
        json!({"title": "Dune", "author": "Herbert", "year": -1}),
        json!({"title": "Dune", "author": "Herbert"}),
    ];

    for payload in payloads {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/books")
                .set_json(&payload)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
    }

    assert_eq!(repo.len().await, 0);
}

#[actix_web::test]
async fn invalid_updates_are_rejected_and_keep_the_stored_record() {
    let (service, _repo) = in_memory_service();
    let stored = service.add_book(common::dune()).await.unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(health(true))
            .configure(handlers::configure),
    )
    .await;

    let uri = format!("/books/{}", stored.id);
    let payloads = [
        json!({"title": "", "author": "Herbert", "year": 1965}),
        json!({"title": "Dune", "author": "", "year": 1965}),
        json!({"title": "Dune", "author": "Herbert", "year": 0}),
    ];

    for payload in payloads {
        let resp = test::call_service(
            &app,
            test::TestRequest::put().uri(&uri).set_json(&payload).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert!(body["error"].is_string());
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&uri)
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\": ")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
    assert!(body["error"].is_string());

    let current: Book =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(current, stored);
}

#[actix_web::test]
async fn malformed_requests_return_400() {
    let (service, _repo) = in_memory_service();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(health(true))
            .configure(handlers::configure),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/books")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);

    for req in [
        test::TestRequest::get().uri("/books/abc").to_request(),
        test::TestRequest::delete().uri("/books/1.5").to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn missing_ids_return_404_and_leave_table_unchanged() {
    let (service, repo) = in_memory_service();
    service.add_book(common::dune()).await.unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(health(true))
            .configure(handlers::configure),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/books/999")
            .set_json(json!({"title": "Ghost", "author": "Nobody", "year": 2000}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete().uri("/books/999").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert_eq!(repo.len().await, 1);
}

#[actix_web::test]
async fn storage_failures_return_500_without_details() {
    let service = BookService::new(Arc::new(UnavailableBookRepository));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(health(true))
            .configure(handlers::configure),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/books").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 500);
    assert_eq!(body["error"], "Internal server error");
}

#[actix_web::test]
async fn health_endpoints_follow_dependency_checks() {
    let (service, _repo) = in_memory_service();
    let data = web::Data::new(service);

    let healthy = test::init_service(
        App::new()
            .app_data(data.clone())
            .app_data(health(true))
            .configure(handlers::configure),
    )
    .await;
    let resp = test::call_service(&healthy, test::TestRequest::get().uri("/health").to_request())
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");

    let unhealthy = test::init_service(
        App::new()
            .app_data(data.clone())
            .app_data(health(false))
            .configure(handlers::configure),
    )
    .await;
    let resp =
        test::call_service(&unhealthy, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let resp = test::call_service(
        &unhealthy,
        test::TestRequest::get().uri("/health/live").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn metrics_endpoint_exposes_book_operations() {
    let (service, _repo) = in_memory_service();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(health(true))
            .configure(handlers::configure),
    )
    .await;

    test::call_service(&app, test::TestRequest::get().uri("/books").to_request()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("book_operations_total"));
    assert!(text.contains("book_operation_duration_seconds"));
}
