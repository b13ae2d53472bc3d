use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::isbn::validate_isbn;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::resolver::{CatalogResolver, Resolution};
use crate::core::library::{LibraryError, LibraryResult};

pub struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
    resolver: CatalogResolver,
}

impl CatalogServiceImpl {
    pub fn new(book_repository: Arc<dyn BookRepository>, resolver: CatalogResolver) -> Self {
        Self {
            book_repository,
            resolver,
        }
    }

    async fn check_new_isbn(&self, isbn: &str) -> LibraryResult<()> {
        if !validate_isbn(isbn) {
            return Err(LibraryError::malformed_identifier(isbn));
        }
        if self.book_repository.find_by_isbn(isbn).await?.is_some() {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {:?} already exists", isbn).as_str()));
        }
        Ok(())
    }

    async fn resolve(&self, isbn: &str) -> LibraryResult<(String, String)> {
        match self.resolver.resolve(isbn).await {
            Resolution::Found { title, author } => Ok((title, author)),
            Resolution::NotFound => Err(LibraryError::not_found(
                format!("no such record upstream for isbn {:?}", isbn).as_str())),
            Resolution::Unavailable => Err(LibraryError::unavailable(
                format!("bibliographic service unavailable for isbn {:?}", isbn).as_str(), None)),
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn find_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        match self.book_repository.find_by_isbn(isbn).await? {
            Some(book) => Ok(BookDto::from(&book)),
            None => Err(LibraryError::not_found(format!("no book with isbn {:?}", isbn).as_str())),
        }
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.check_new_isbn(&book.isbn).await?;
        let entity = book.to_entity()?;
        self.book_repository.insert(&entity).await?;
        Ok(BookDto::from(&entity))
    }

    async fn add_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.check_new_isbn(isbn).await?;
        let (title, author) = self.resolve(isbn).await?;
        let entity = BookEntity::new(&title, &author, isbn)?;
        self.book_repository.insert(&entity).await?;
        info!(isbn, title = title.as_str(), author = author.as_str(), "added resolved book");
        Ok(BookDto::from(&entity))
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        if self.book_repository.remove_by_isbn(isbn).await? {
            Ok(())
        } else {
            Err(LibraryError::not_found(format!("no book with isbn {:?}", isbn).as_str()))
        }
    }

    async fn lookup_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        if !validate_isbn(isbn) {
            return Err(LibraryError::malformed_identifier(isbn));
        }
        let (title, author) = self.resolve(isbn).await?;
        Ok(BookDto::new(&title, &author, isbn))
    }
}
