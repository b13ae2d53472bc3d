use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::books::repository::file_book_repository::FileBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub async fn create_book_repository(config: &Configuration) -> LibraryResult<Arc<dyn BookRepository>> {
    let repo = FileBookRepository::open(&config.data_file).await?;
    Ok(Arc::new(repo))
}
