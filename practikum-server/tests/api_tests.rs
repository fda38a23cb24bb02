//! Integration tests for the Practikum Server API

use axum::http::StatusCode;
use axum_test::TestServer;
use practikum_core::Database;
use practikum_server::routes::{cors_layer, create_router};
use practikum_server::state::AppState;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Create a test server backed by a fresh database file
async fn create_test_server() -> (TestServer, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::init(temp_dir.path().join("app.db"))
        .await
        .expect("Failed to init database");
    let app = create_router(AppState::new(db), cors_layer(None));
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, temp_dir)
}

async fn create_author(server: &TestServer, name: &str) -> Value {
    let response = server.post("/authors").json(&json!({ "name": name })).await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

async fn create_library(server: &TestServer, name: &str) -> Value {
    let response = server
        .post("/libraries")
        .json(&json!({ "name": name, "address": "1 Main St" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

async fn create_book(server: &TestServer, body: Value) -> Value {
    let response = server.post("/books").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let (server, _temp_dir) = create_test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_openapi_document() {
    let (server, _temp_dir) = create_test_server().await;

    let response = server.get("/openapi.json").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["info"]["title"], "Practikum REST API");
    assert!(body["paths"]["/v1/contact/{id}"]["put"].is_object());
}

#[tokio::test]
async fn test_example_walkthrough() {
    let (server, _temp_dir) = create_test_server().await;

    assert_eq!(
        create_author(&server, "Orwell").await,
        json!({ "id": 1, "name": "Orwell" })
    );
    assert_eq!(
        create_library(&server, "Central").await,
        json!({ "id": 1, "name": "Central", "address": "1 Main St" })
    );
    let book = json!({ "title": "1984", "author_id": 1, "library_id": 1, "year": 1949 });
    let mut expected = book.clone();
    expected["id"] = json!(1);
    assert_eq!(create_book(&server, book).await, expected);

    let response = server
        .get("/books")
        .add_query_param("author_id", "1")
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([expected]));

    let response = server.delete("/authors/1").await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    server.get("/books/1").await.assert_status_not_found();
}

#[tokio::test]
async fn test_author_list_and_get() {
    let (server, _temp_dir) = create_test_server().await;
    create_author(&server, "George Orwell").await;
    create_author(&server, "Aldous Huxley").await;

    let response = server.get("/authors").await;
    response.assert_status_ok();
    assert_eq!(ids(&response.json()), vec![1, 2]);

    let response = server.get("/authors").add_query_param("q", "hux").await;
    assert_eq!(ids(&response.json()), vec![2]);

    let response = server.get("/authors/2").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Aldous Huxley");

    let response = server.get("/authors/3").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["kind"], "not_found");
    assert_eq!(body["message"], "Author not found");
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_author_validation() {
    let (server, _temp_dir) = create_test_server().await;

    for body in [
        json!({ "name": "" }),
        json!({ "name": "a".repeat(201) }),
        json!({ "name": 5 }),
        json!({}),
    ] {
        let response = server.post("/authors").json(&body).await;
        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["kind"], "invalid_input");
    }

    let response = server.get("/authors").await;
    assert!(response.json::<Value>().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_author_not_found() {
    let (server, _temp_dir) = create_test_server().await;

    server.delete("/authors/1").await.assert_status_not_found();
}

#[tokio::test]
async fn test_non_numeric_id_is_invalid_input() {
    let (server, _temp_dir) = create_test_server().await;

    let response = server.get("/books/abc").await;
    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["kind"], "invalid_input");
}

#[tokio::test]
async fn test_libraries() {
    let (server, _temp_dir) = create_test_server().await;
    create_library(&server, "Central").await;
    create_library(&server, "Branch").await;

    let response = server.get("/libraries").await;
    response.assert_status_ok();
    assert_eq!(ids(&response.json()), vec![1, 2]);

    server.get("/libraries/2").await.assert_status_ok();
    server.get("/libraries/9").await.assert_status_not_found();

    let response = server
        .post("/libraries")
        .json(&json!({ "name": "No address" }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_libraries_cannot_be_deleted() {
    let (server, _temp_dir) = create_test_server().await;
    create_library(&server, "Central").await;

    let response = server.delete("/libraries/1").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    server.get("/libraries/1").await.assert_status_ok();
}

#[tokio::test]
async fn test_book_with_missing_author() {
    let (server, _temp_dir) = create_test_server().await;
    create_library(&server, "Central").await;

    let response = server
        .post("/books")
        .json(&json!({ "title": "Orphan", "author_id": 7, "library_id": 7 }))
        .await;
    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "author_id does not exist"
    );

    create_author(&server, "Orwell").await;
    let response = server
        .post("/books")
        .json(&json!({ "title": "Orphan", "author_id": 1, "library_id": 7 }))
        .await;
    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "library_id does not exist"
    );

    let response = server.get("/books").await;
    assert!(response.json::<Value>().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_book_list_filters_and_sort() {
    let (server, _temp_dir) = create_test_server().await;
    create_author(&server, "Orwell").await;
    create_author(&server, "Huxley").await;
    create_library(&server, "Central").await;
    create_library(&server, "Branch").await;

    create_book(
        &server,
        json!({ "title": "Brave New World", "author_id": 2, "library_id": 1, "year": 1932 }),
    )
    .await;
    create_book(
        &server,
        json!({ "title": "Animal Farm", "author_id": 1, "library_id": 2, "year": 1945 }),
    )
    .await;
    create_book(
        &server,
        json!({ "title": "1984", "author_id": 1, "library_id": 1, "year": 1949 }),
    )
    .await;

    let response = server
        .get("/books")
        .add_query_param("author_id", "1")
        .add_query_param("library_id", "1")
        .await;
    assert_eq!(ids(&response.json()), vec![3]);

    let response = server.get("/books").add_query_param("sort", "title").await;
    assert_eq!(ids(&response.json()), vec![3, 2, 1]);

    let response = server.get("/books").add_query_param("_sort", "year").await;
    assert_eq!(ids(&response.json()), vec![1, 2, 3]);

    // Unknown sort keys are not an error
    let response = server
        .get("/books")
        .add_query_param("sort", "title desc; DROP TABLE books")
        .await;
    response.assert_status_ok();
    assert_eq!(ids(&response.json()), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_book_sort_repeated_or_aliased() {
    let (server, _temp_dir) = create_test_server().await;
    create_author(&server, "Orwell").await;
    create_library(&server, "Central").await;
    create_book(
        &server,
        json!({ "title": "Animal Farm", "author_id": 1, "library_id": 1, "year": 1945 }),
    )
    .await;
    create_book(
        &server,
        json!({ "title": "1984", "author_id": 1, "library_id": 1, "year": 1949 }),
    )
    .await;
    create_book(
        &server,
        json!({ "title": "Burmese Days", "author_id": 1, "library_id": 1, "year": 1934 }),
    )
    .await;

    // The last of sort/_sort decides
    let response = server.get("/books?sort=title&_sort=year").await;
    response.assert_status_ok();
    assert_eq!(ids(&response.json()), vec![3, 1, 2]);

    let response = server.get("/books?_sort=year&sort=title").await;
    response.assert_status_ok();
    assert_eq!(ids(&response.json()), vec![2, 1, 3]);

    let response = server.get("/books?sort=a&sort=b").await;
    response.assert_status_ok();
    assert_eq!(ids(&response.json()), vec![1, 2, 3]);

    let response = server.get("/books?author_id=x").await;
    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["kind"], "invalid_input");
}

#[tokio::test]
async fn test_book_update_and_delete() {
    let (server, _temp_dir) = create_test_server().await;
    create_author(&server, "Orwell").await;
    create_library(&server, "Central").await;
    create_book(
        &server,
        json!({ "title": "Draft", "author_id": 1, "library_id": 1, "year": 1948 }),
    )
    .await;

    let response = server
        .put("/books/1")
        .json(&json!({ "title": "1984", "author_id": 1, "library_id": 1 }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": 1, "title": "1984", "author_id": 1, "library_id": 1, "year": null })
    );

    let response = server
        .put("/books/2")
        .json(&json!({ "title": "1984", "author_id": 1, "library_id": 1 }))
        .await;
    response.assert_status_not_found();

    let response = server
        .put("/books/1")
        .json(&json!({ "title": "1984", "author_id": 1, "library_id": 5 }))
        .await;
    response.assert_status_bad_request();

    server
        .delete("/books/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server.delete("/books/1").await.assert_status_not_found();
}

#[tokio::test]
async fn test_contact_lifecycle() {
    let (server, _temp_dir) = create_test_server().await;

    let response = server
        .post("/v1/contact")
        .json(&json!({ "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["id"], 1);

    server
        .post("/v1/contact")
        .json(&json!({ "first_name": "Alan", "last_name": "Turing", "email": "alan@example.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .get("/v1/contact")
        .add_query_param("email", "alan@example.com")
        .await;
    assert_eq!(ids(&response.json()), vec![2]);

    let response = server
        .put("/v1/contact/1")
        .json(&json!({ "first_name": "Augusta", "last_name": "King", "email": "ada@example.com" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["first_name"], "Augusta");

    server.get("/v1/contact/1").await.assert_status_ok();
    server
        .delete("/v1/contact/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server.get("/v1/contact/1").await.assert_status_not_found();
    server.delete("/v1/contact/1").await.assert_status_not_found();
}

#[tokio::test]
async fn test_contact_invalid_email() {
    let (server, _temp_dir) = create_test_server().await;

    let response = server
        .post("/v1/contact")
        .json(&json!({ "first_name": "Ada", "last_name": "Lovelace", "email": "not-an-email" }))
        .await;
    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["kind"], "invalid_input");
}

#[tokio::test]
async fn test_update_missing_contact_creates_nothing() {
    let (server, _temp_dir) = create_test_server().await;

    let response = server
        .put("/v1/contact/5")
        .json(&json!({ "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com" }))
        .await;
    response.assert_status_not_found();

    let response = server.get("/v1/contact").await;
    assert!(response.json::<Value>().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_all_contacts() {
    let (server, _temp_dir) = create_test_server().await;

    // Empty table is still a success
    server
        .delete("/v1/contact")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    for email in ["a@example.com", "b@example.com"] {
        server
            .post("/v1/contact")
            .json(&json!({ "first_name": "A", "last_name": "B", "email": email }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    server
        .delete("/v1/contact")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    let response = server.get("/v1/contact").await;
    assert!(response.json::<Value>().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unavailable_storage() {
    let (server, temp_dir) = create_test_server().await;
    drop(temp_dir);

    let response = server.get("/authors").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json::<Value>()["kind"], "unavailable");
}
