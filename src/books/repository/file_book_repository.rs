use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};

// FileBookRepository keeps the whole catalog in memory and rewrites the json
// file after every mutation. The write lock is held until the file is replaced,
// so there is never more than one writer.
#[derive(Debug)]
pub struct FileBookRepository {
    path: PathBuf,
    books: RwLock<Vec<BookEntity>>,
}

impl FileBookRepository {
    pub async fn open(path: &Path) -> LibraryResult<Self> {
        let books = load_books(path).await?;
        info!(path = %path.display(), count = books.len(), "loaded catalog");
        Ok(Self {
            path: path.to_path_buf(),
            books: RwLock::new(books),
        })
    }

    async fn save(&self, books: &[BookEntity]) -> LibraryResult<()> {
        let json = serde_json::to_string_pretty(books)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let tmp = tmp_path(&self.path);
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), count = books.len(), "saved catalog");
        Ok(())
    }
}

#[async_trait]
impl BookRepository for FileBookRepository {
    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }

    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|b| b.isbn() == isbn).cloned())
    }

    async fn insert(&self, entity: &BookEntity) -> LibraryResult<()> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.isbn() == entity.isbn()) {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {:?} already exists", entity.isbn()).as_str()));
        }
        books.push(entity.clone());
        if let Err(err) = self.save(&books).await {
            books.pop();
            return Err(err);
        }
        info!(isbn = entity.isbn(), title = entity.title(), "inserted book");
        Ok(())
    }

    async fn remove_by_isbn(&self, isbn: &str) -> LibraryResult<bool> {
        let mut books = self.books.write().await;
        let ndx = match books.iter().position(|b| b.isbn() == isbn) {
            Some(ndx) => ndx,
            None => return Ok(false),
        };
        let removed = books.remove(ndx);
        if let Err(err) = self.save(&books).await {
            books.insert(ndx, removed);
            return Err(err);
        }
        info!(isbn, "removed book");
        Ok(true)
    }
}

// A missing or blank file is an empty catalog. Anything else must parse.
async fn load_books(path: &Path) -> LibraryResult<Vec<BookEntity>> {
    let json = match tokio::fs::read_to_string(path).await {
        Ok(json) => json,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(vec![]),
        Err(err) => return Err(LibraryError::from(err)),
    };
    if json.trim().is_empty() {
        return Ok(vec![]);
    }
    let loaded: Vec<BookEntity> = serde_json::from_str(&json).map_err(|err| {
        LibraryError::serialization(format!("failed to parse {}: {}", path.display(), err).as_str())
    })?;

    let mut books: Vec<BookEntity> = Vec::with_capacity(loaded.len());
    for book in loaded {
        if books.iter().any(|b| b.isbn() == book.isbn()) {
            warn!(isbn = book.isbn(), "skipping duplicate isbn in catalog file");
            continue;
        }
        books.push(book);
    }
    Ok(books)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = OsString::from(path.as_os_str());
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
