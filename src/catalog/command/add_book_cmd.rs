use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::command::clean_isbn_input;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Without a title the isbn is resolved against the bibliographic service,
// with one the record is stored as given.
#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub isbn: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: None,
            author: None,
        }
    }

    pub fn with_details(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: Some(title.to_string()),
            author: Some(author.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let isbn = clean_isbn_input(&req.isbn)?;
        let res = match req.title.as_deref() {
            Some(title) => {
                let book = BookDto::new(title, req.author.as_deref().unwrap_or_default(), isbn);
                self.catalog_service.add_book(&book).await
            }
            None => self.catalog_service.add_book_by_isbn(isbn).await,
        };
        res.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory::create_test_catalog_service;
    use crate::core::command::{Command, CommandError};
    use crate::gateway::bibliographic::EditionRecord;
    use crate::gateway::stub::StubGateway;

    async fn build_command(dir: &tempfile::TempDir) -> AddBookCommand {
        let gateway = StubGateway::new()
            .with_edition("9780441172719", EditionRecord::new("Dune", &["/authors/OL2162288A"]))
            .with_author("/authors/OL2162288A", "Frank Herbert");
        let svc = create_test_catalog_service(&dir.path().join("library.json"), Arc::new(gateway)).await;
        AddBookCommand::new(svc)
    }

    #[tokio::test]
    async fn test_should_run_add_book_by_isbn() {
        let dir = tempfile::tempdir().expect("should create dir");
        let cmd = build_command(&dir).await;

        let res = cmd.execute(AddBookCommandRequest::new(" 9780441172719 ")).await.expect("should add book");
        assert_eq!("Dune", res.book.title.as_str());
        assert_eq!("Frank Herbert", res.book.author.as_str());
        assert_eq!("9780441172719", res.book.isbn.as_str());
    }

    #[tokio::test]
    async fn test_should_run_add_book_with_details() {
        let dir = tempfile::tempdir().expect("should create dir");
        let cmd = build_command(&dir).await;

        let res = cmd.execute(AddBookCommandRequest::with_details("978-1234567890", "Test Title", "Test Author"))
            .await.expect("should add book");
        assert_eq!("Test Title", res.book.title.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_blank_isbn() {
        let dir = tempfile::tempdir().expect("should create dir");
        let cmd = build_command(&dir).await;

        let res = cmd.execute(AddBookCommandRequest::new("   ")).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_second_add() {
        let dir = tempfile::tempdir().expect("should create dir");
        let cmd = build_command(&dir).await;

        let _ = cmd.execute(AddBookCommandRequest::new("9780441172719")).await.expect("should add book");
        let res = cmd.execute(AddBookCommandRequest::with_details("9780441172719", "Other", "")).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }
}
