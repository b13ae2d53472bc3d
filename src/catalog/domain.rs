pub mod resolver;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// CatalogService is the single writer of the catalog store. Isbn validation and
// duplicate checks run before any lookup or mutation.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_book(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn add_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn remove_book(&self, isbn: &str) -> LibraryResult<()>;
    async fn lookup_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
}
