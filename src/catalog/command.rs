pub mod add_book_cmd;
pub mod get_book_cmd;
pub mod list_books_cmd;
pub mod lookup_isbn_cmd;
pub mod remove_book_cmd;

use crate::core::command::CommandError;

// isbn input is trimmed before use; blank input is rejected up front
pub(crate) fn clean_isbn_input(isbn: &str) -> Result<&str, CommandError> {
    let isbn = isbn.trim();
    if isbn.is_empty() {
        return Err(CommandError::Validation {
            message: "isbn must not be blank".to_string(),
            reason_code: None,
        });
    }
    Ok(isbn)
}
