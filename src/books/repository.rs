pub mod file_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

// BookRepository owns the catalog records. Implementations serialize their own
// mutations; callers only need to hold one repository per backing store.
#[async_trait]
pub trait BookRepository: Sync + Send {
    // all records in insertion order
    async fn list(&self) -> LibraryResult<Vec<BookEntity>>;

    // exact, case-sensitive match on the stored isbn
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>>;

    // appends a record, fails with DuplicateKey if the isbn is already stored
    async fn insert(&self, entity: &BookEntity) -> LibraryResult<()>;

    // returns false when nothing matched
    async fn remove_by_isbn(&self, isbn: &str) -> LibraryResult<bool>;
}
