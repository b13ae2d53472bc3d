use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::bibliographic::{AuthorRecord, BibliographicGateway, EditionRecord};

// canned reply for a single key
pub enum StubReply<T> {
    Found(T),
    Fail,
}

// In-memory gateway for tests. Unknown keys answer "not found".
#[derive(Default)]
pub struct StubGateway {
    editions: HashMap<String, StubReply<EditionRecord>>,
    authors: HashMap<String, StubReply<AuthorRecord>>,
    calls: AtomicUsize,
}

impl StubGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edition(mut self, isbn: &str, edition: EditionRecord) -> Self {
        self.editions.insert(isbn.to_string(), StubReply::Found(edition));
        self
    }

    pub fn with_failing_edition(mut self, isbn: &str) -> Self {
        self.editions.insert(isbn.to_string(), StubReply::Fail);
        self
    }

    pub fn with_author(mut self, key: &str, name: &str) -> Self {
        self.authors.insert(key.to_string(), StubReply::Found(AuthorRecord::new(name)));
        self
    }

    pub fn with_author_record(mut self, key: &str, author: AuthorRecord) -> Self {
        self.authors.insert(key.to_string(), StubReply::Found(author));
        self
    }

    pub fn with_failing_author(mut self, key: &str) -> Self {
        self.authors.insert(key.to_string(), StubReply::Fail);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn reply<T: Clone>(replies: &HashMap<String, StubReply<T>>, key: &str) -> LibraryResult<Option<T>> {
    match replies.get(key) {
        Some(StubReply::Found(v)) => Ok(Some(v.clone())),
        Some(StubReply::Fail) => Err(LibraryError::unavailable(
            format!("connection refused for {}", key).as_str(), Some("Connect".to_string()))),
        None => Ok(None),
    }
}

#[async_trait]
impl BibliographicGateway for StubGateway {
    async fn fetch_edition(&self, isbn: &str) -> LibraryResult<Option<EditionRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        reply(&self.editions, isbn)
    }

    async fn fetch_author(&self, key: &str) -> LibraryResult<Option<AuthorRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        reply(&self.authors, key)
    }
}
