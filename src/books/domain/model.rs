use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::isbn::validate_isbn;
use crate::core::library::{EMPTY_TITLE, LibraryError, LibraryResult};

// BookEntity is a single catalog record as it is persisted in the data file.
// Fields are private so that every instance went through the isbn check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookEntity {
    title: String,
    author: String,
    isbn: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> LibraryResult<Self> {
        if !validate_isbn(isbn) {
            return Err(LibraryError::malformed_identifier(isbn));
        }
        if title.trim().is_empty() {
            return Err(LibraryError::validation(
                format!("empty title for isbn {:?}", isbn).as_str(), Some(EMPTY_TITLE.to_string())));
        }
        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
        })
    }
}

#[derive(Deserialize)]
struct RawBookEntity {
    title: String,
    author: String,
    isbn: String,
}

impl<'de> Deserialize<'de> for BookEntity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBookEntity::deserialize(deserializer)?;
        BookEntity::new(&raw.title, &raw.author, &raw.isbn).map_err(serde::de::Error::custom)
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn isbn(&self) -> &str {
        &self.isbn
    }
}
