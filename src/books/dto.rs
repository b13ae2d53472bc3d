use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
        }
    }

    pub fn to_entity(&self) -> LibraryResult<BookEntity> {
        BookEntity::new(&self.title, &self.author, &self.isbn)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        BookDto::new(other.title(), other.author(), other.isbn())
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {})", self.title, self.author, self.isbn)
    }
}


#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("title", "author", "9780441172719");
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert_eq!("9780441172719", book.isbn.as_str());
        let entity = book.to_entity().expect("should build entity");
        assert_eq!(book, BookDto::from(&entity));
    }

    #[tokio::test]
    async fn test_should_not_build_entity_from_bad_isbn() {
        let book = BookDto::new("title", "author", "isbn");
        assert!(book.to_entity().is_err());
        let entity = BookEntity::new("title", "", "0-7475-3269-X").expect("should build entity");
        assert_eq!("", BookDto::from(&entity).author.as_str());
    }

    #[tokio::test]
    async fn test_should_format_book() {
        let book = BookDto::new("Ulysses", "James Joyce", "978-0199535675");
        assert_eq!("Ulysses by James Joyce (ISBN: 978-0199535675)", book.to_string());
    }
}
