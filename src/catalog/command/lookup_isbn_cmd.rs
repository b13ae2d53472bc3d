use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::command::clean_isbn_input;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

// LookupIsbnCommand resolves an isbn against the bibliographic service without
// touching the catalog.
pub struct LookupIsbnCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl LookupIsbnCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LookupIsbnCommandRequest {
    pub isbn: String,
}

impl LookupIsbnCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LookupIsbnCommandResponse {
    pub title: String,
    pub author: String,
}

#[async_trait]
impl Command<LookupIsbnCommandRequest, LookupIsbnCommandResponse> for LookupIsbnCommand {
    async fn execute(&self, req: LookupIsbnCommandRequest) -> Result<LookupIsbnCommandResponse, CommandError> {
        let isbn = clean_isbn_input(&req.isbn)?;
        self.catalog_service.lookup_isbn(isbn).await
            .map_err(CommandError::from)
            .map(|book| LookupIsbnCommandResponse { title: book.title, author: book.author })
    }
}
