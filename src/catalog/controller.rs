use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;
use tracing::debug;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::lookup_isbn_cmd::{LookupIsbnCommand, LookupIsbnCommandRequest, LookupIsbnCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/{isbn}", get(find_book_by_isbn).delete(remove_book))
        .route("/lookup/{isbn}", get(lookup_isbn))
        .with_state(state)
}

pub async fn list_books(
    State(state): State<AppState>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let res = ListBooksCommand::new(state.catalog_service).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res.books))
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<BookDto>), ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    debug!(isbn = req.isbn.as_str(), manual = req.title.is_some(), "add book request");
    let res = AddBookCommand::new(state.catalog_service).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res.book)))
}

pub async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<BookDto>, ServerError> {
    let req = GetBookCommandRequest { isbn };
    let res = GetBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res.book))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest { isbn };
    let _ = RemoveBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn lookup_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<LookupIsbnCommandResponse>, ServerError> {
    let req = LookupIsbnCommandRequest { isbn };
    let res = LookupIsbnCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use reqwest::StatusCode;
    use serde_json::{json, Value};
    use crate::catalog::controller::router;
    use crate::catalog::factory::create_test_catalog_service;
    use crate::core::controller::AppState;
    use crate::gateway::bibliographic::EditionRecord;
    use crate::gateway::stub::StubGateway;

    async fn start_server(dir: &tempfile::TempDir) -> String {
        let gateway = StubGateway::new()
            .with_edition("9780441172719", EditionRecord::new("Dune", &["/authors/OL2162288A"]))
            .with_author("/authors/OL2162288A", "Frank Herbert")
            .with_edition("9780000000001", EditionRecord::new("Dune Messiah", &[]))
            .with_failing_edition("9780000000009");
        let path = dir.path().join("library.json");
        let svc = create_test_catalog_service(&path, Arc::new(gateway)).await;
        let state = AppState::new(svc);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("should bind");
        let addr = listener.local_addr().expect("should have address");
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.expect("should serve");
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_should_list_empty_catalog() {
        let dir = tempfile::tempdir().expect("should create dir");
        let base = start_server(&dir).await;

        let resp = reqwest::get(format!("{}/books", base)).await.expect("should get");
        assert_eq!(StatusCode::OK, resp.status());
        assert_eq!(json!([]), resp.json::<Value>().await.expect("should parse"));
    }

    #[tokio::test]
    async fn test_should_create_book_from_isbn() {
        let dir = tempfile::tempdir().expect("should create dir");
        let base = start_server(&dir).await;
        let client = reqwest::Client::new();

        let resp = client.post(format!("{}/books", base)).json(&json!({"isbn": "9780441172719"}))
            .send().await.expect("should post");
        assert_eq!(StatusCode::CREATED, resp.status());
        assert_eq!(json!({"title": "Dune", "author": "Frank Herbert", "isbn": "9780441172719"}),
                   resp.json::<Value>().await.expect("should parse"));

        let resp = client.get(format!("{}/books/9780441172719", base)).send().await.expect("should get");
        assert_eq!(StatusCode::OK, resp.status());
        let resp = client.get(format!("{}/books", base)).send().await.expect("should get");
        assert_eq!(1, resp.json::<Vec<Value>>().await.expect("should parse").len());
    }

    #[tokio::test]
    async fn test_should_conflict_on_duplicate() {
        let dir = tempfile::tempdir().expect("should create dir");
        let base = start_server(&dir).await;
        let client = reqwest::Client::new();

        let resp = client.post(format!("{}/books", base)).json(&json!({"isbn": "9780000000001"}))
            .send().await.expect("should post");
        assert_eq!(StatusCode::CREATED, resp.status());
        let resp = client.post(format!("{}/books", base))
            .json(&json!({"isbn": "9780000000001", "title": "Other", "author": "Other"}))
            .send().await.expect("should post");
        assert_eq!(StatusCode::CONFLICT, resp.status());
    }

    #[tokio::test]
    async fn test_should_map_lookup_failures() {
        let dir = tempfile::tempdir().expect("should create dir");
        let base = start_server(&dir).await;
        let client = reqwest::Client::new();

        let cases = vec![
            (json!({"isbn": "9789999999999"}), StatusCode::NOT_FOUND),
            (json!({"isbn": "9780000000009"}), StatusCode::BAD_GATEWAY),
            (json!({"isbn": "123"}), StatusCode::BAD_REQUEST),
            (json!({"isbn": "  "}), StatusCode::BAD_REQUEST),
            (json!({"title": "no isbn"}), StatusCode::BAD_REQUEST),
        ];
        for (body, status) in cases {
            let resp = client.post(format!("{}/books", base)).json(&body).send().await.expect("should post");
            assert_eq!(status, resp.status(), "body {}", body);
        }
        let resp = client.get(format!("{}/books", base)).send().await.expect("should get");
        assert!(resp.json::<Vec<Value>>().await.expect("should parse").is_empty());
    }

    #[tokio::test]
    async fn test_should_delete_book() {
        let dir = tempfile::tempdir().expect("should create dir");
        let base = start_server(&dir).await;
        let client = reqwest::Client::new();

        let resp = client.post(format!("{}/books", base))
            .json(&json!({"isbn": "978-1234567890", "title": "Test Title", "author": "Test Author"}))
            .send().await.expect("should post");
        assert_eq!(StatusCode::CREATED, resp.status());

        let resp = client.delete(format!("{}/books/978-1234567890", base)).send().await.expect("should delete");
        assert_eq!(StatusCode::NO_CONTENT, resp.status());
        let resp = client.delete(format!("{}/books/978-1234567890", base)).send().await.expect("should delete");
        assert_eq!(StatusCode::NOT_FOUND, resp.status());
    }

    #[tokio::test]
    async fn test_should_lookup_without_storing() {
        let dir = tempfile::tempdir().expect("should create dir");
        let base = start_server(&dir).await;
        let client = reqwest::Client::new();

        let resp = client.get(format!("{}/lookup/9780441172719", base)).send().await.expect("should get");
        assert_eq!(StatusCode::OK, resp.status());
        assert_eq!(json!({"title": "Dune", "author": "Frank Herbert"}), resp.json::<Value>().await.expect("should parse"));

        let resp = client.get(format!("{}/lookup/9780000000009", base)).send().await.expect("should get");
        assert_eq!(StatusCode::BAD_GATEWAY, resp.status());
        let resp = client.get(format!("{}/books", base)).send().await.expect("should get");
        assert!(resp.json::<Vec<Value>>().await.expect("should parse").is_empty());
    }
}
