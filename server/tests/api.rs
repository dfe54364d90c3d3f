use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use todo_server::{app, TodoDto};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

/// Send one request through a shared router, keeping its state between calls.
async fn send(app: &Router, request: Request<String>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/todos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<TodoDto> = body_json(resp).await;
    assert!(todos.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201_with_assigned_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/todos",
            r#"{"title":"Buy milk","completed":false}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: TodoDto = body_json(resp).await;
    assert_eq!(todo.id, Some(1));
    assert_eq!(todo.title, "Buy milk");
    assert!(!todo.completed);
}

#[tokio::test]
async fn create_todo_ignores_client_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/todos",
            r#"{"id":77,"title":"Pick my own id","description":"nope"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: TodoDto = body_json(resp).await;
    assert_eq!(todo.id, Some(1));
    assert_eq!(todo.description.as_deref(), Some("nope"));
}

#[tokio::test]
async fn create_todo_missing_title_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todos", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn create_todo_invalid_json_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todos", "{title"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_todo_without_content_type_returns_400() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/todos")
                .body(r#"{"title":"x"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_todo_empty_title_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todos", r#"{"title":""}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_todo_whitespace_title_returns_201() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todos", r#"{"title":" "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: TodoDto = body_json(resp).await;
    assert_eq!(todo.title, " ");
}

// --- get ---

#[tokio::test]
async fn get_todo_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/todos/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn get_todo_non_integer_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/todos/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_todo_not_found_creates_nothing() {
    let app = app();
    let resp = send(
        &app,
        json_request("PUT", "/api/todos/5", r#"{"title":"Nope"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&app, empty_request("GET", "/api/todos")).await;
    let todos: Vec<TodoDto> = body_json(resp).await;
    assert!(todos.is_empty());
}

#[tokio::test]
async fn update_unknown_id_with_empty_title_returns_404() {
    let resp = app()
        .oneshot(json_request("PUT", "/api/todos/999", r#"{"title":""}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_todo_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/api/todos/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_twice_is_204_then_404() {
    let app = app();
    send(&app, json_request("POST", "/api/todos", r#"{"title":"Once"}"#)).await;

    let first = send(&app, empty_request("DELETE", "/api/todos/1")).await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    let second = send(&app, empty_request("DELETE", "/api/todos/1")).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

// --- list bookkeeping ---

#[tokio::test]
async fn list_length_is_created_minus_deleted() {
    let app = app();
    for title in ["a", "b", "c", "d"] {
        let body = format!(r#"{{"title":"{title}"}}"#);
        let resp = send(&app, json_request("POST", "/api/todos", &body)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }
    send(&app, empty_request("DELETE", "/api/todos/2")).await;
    send(&app, empty_request("DELETE", "/api/todos/4")).await;

    let resp = send(&app, empty_request("GET", "/api/todos")).await;
    let todos: Vec<TodoDto> = body_json(resp).await;
    let ids: Vec<Option<i64>> = todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![Some(1), Some(3)]);
}

// --- api docs ---

#[tokio::test]
async fn openapi_document_is_served() {
    let resp = app()
        .oneshot(empty_request("GET", "/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = body_json(resp).await;
    assert!(doc["paths"]["/api/todos"].is_object());
    assert!(doc["paths"]["/api/todos/{id}"]["delete"].is_object());
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    let app = app();

    // create
    let resp = send(
        &app,
        json_request(
            "POST",
            "/api/todos",
            r#"{"title":"Buy milk","completed":false}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: TodoDto = body_json(resp).await;
    assert_eq!(created.id, Some(1));

    // get
    let resp = send(&app, empty_request("GET", "/api/todos/1")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: TodoDto = body_json(resp).await;
    assert_eq!(fetched, created);

    // update both fields
    let resp = send(
        &app,
        json_request(
            "PUT",
            "/api/todos/1",
            r#"{"title":"Buy milk and eggs","completed":true}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: TodoDto = body_json(resp).await;
    assert_eq!(updated.id, Some(1));

    let resp = send(&app, empty_request("GET", "/api/todos/1")).await;
    let fetched: TodoDto = body_json(resp).await;
    assert_eq!(fetched.title, "Buy milk and eggs");
    assert!(fetched.completed);

    // delete
    let resp = send(&app, empty_request("DELETE", "/api/todos/1")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    // get after delete: 404
    let resp = send(&app, empty_request("GET", "/api/todos/1")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete: empty
    let resp = send(&app, empty_request("GET", "/api/todos")).await;
    let todos: Vec<TodoDto> = body_json(resp).await;
    assert!(todos.is_empty());
}
