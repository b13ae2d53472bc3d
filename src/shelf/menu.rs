//! Interactive text menu over the catalog service.
//!
//! Reads one choice per line and prints the outcome of each operation. Input
//! and output are generic so the loop can be driven from tests.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryError;

const MENU: &str = "\n=== BOOK CATALOG ===\n\
1. Add book (by ISBN)\n\
2. Remove book\n\
3. List books\n\
4. Find book\n\
5. Quit\n";

pub struct Menu<R, W> {
    catalog_service: Arc<dyn CatalogService>,
    input: R,
    output: W,
}

impl<R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin> Menu<R, W> {
    pub fn new(catalog_service: Arc<dyn CatalogService>, input: R, output: W) -> Self {
        Self {
            catalog_service,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // Runs until the user quits or input is exhausted.
    pub async fn run(&mut self) -> std::io::Result<()> {
        loop {
            self.write(MENU).await?;
            let choice = match self.prompt("\nChoose an option (1-5): ").await? {
                Some(choice) => choice,
                None => return Ok(()),
            };
            match choice.as_str() {
                "1" => self.add_book().await?,
                "2" => self.remove_book().await?,
                "3" => self.list_books().await?,
                "4" => self.find_book().await?,
                "5" => {
                    self.write("Goodbye.\n").await?;
                    return Ok(());
                }
                _ => self.write("Invalid choice, enter a number between 1 and 5.\n").await?,
            }
        }
    }

    async fn add_book(&mut self) -> std::io::Result<()> {
        self.write("\n--- ADD BOOK (ISBN) ---\n").await?;
        let isbn = self.prompt("ISBN: ").await?.unwrap_or_default();
        if isbn.is_empty() {
            return self.write("ISBN must not be empty.\n").await;
        }
        let line = match self.catalog_service.add_book_by_isbn(&isbn).await {
            Ok(book) => format!("Added: {}\n", book),
            Err(LibraryError::DuplicateKey { .. }) => "A book with this ISBN already exists.\n".to_string(),
            Err(LibraryError::Validation { .. }) => "Invalid ISBN format.\n".to_string(),
            Err(LibraryError::NotFound { .. }) => "No book found for this ISBN.\n".to_string(),
            Err(LibraryError::CurrentlyUnavailable { .. }) => {
                "The catalog service could not be reached, try again later.\n".to_string()
            }
            Err(err) => format!("Could not add book: {}\n", err),
        };
        self.write(&line).await
    }

    async fn remove_book(&mut self) -> std::io::Result<()> {
        self.write("\n--- REMOVE BOOK ---\n").await?;
        let isbn = self.prompt("ISBN of the book to remove: ").await?.unwrap_or_default();
        let line = match self.catalog_service.remove_book(&isbn).await {
            Ok(()) => "Book removed.\n".to_string(),
            Err(LibraryError::NotFound { .. }) => "No book with this ISBN.\n".to_string(),
            Err(err) => format!("Could not remove book: {}\n", err),
        };
        self.write(&line).await
    }

    async fn list_books(&mut self) -> std::io::Result<()> {
        self.write("\n--- BOOKS ---\n").await?;
        let books = match self.catalog_service.list_books().await {
            Ok(books) => books,
            Err(err) => return self.write(&format!("Could not list books: {}\n", err)).await,
        };
        if books.is_empty() {
            return self.write("The catalog is empty.\n").await;
        }
        for (i, book) in books.iter().enumerate() {
            let line = format!("{}. {}\n", i + 1, book);
            self.write(&line).await?;
        }
        Ok(())
    }

    async fn find_book(&mut self) -> std::io::Result<()> {
        self.write("\n--- FIND BOOK ---\n").await?;
        let isbn = self.prompt("ISBN to search for: ").await?.unwrap_or_default();
        let line = match self.catalog_service.find_book(&isbn).await {
            Ok(book) => format!("Found: {}\n", book),
            Err(LibraryError::NotFound { .. }) => "No book with this ISBN.\n".to_string(),
            Err(err) => format!("Could not search: {}\n", err),
        };
        self.write(&line).await
    }

    // None at end of input
    async fn prompt(&mut self, text: &str) -> std::io::Result<Option<String>> {
        self.write(text).await?;
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }
}
