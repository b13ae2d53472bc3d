use std::sync::Arc;

use tracing::{debug, warn};

use crate::gateway::bibliographic::{AuthorRef, BibliographicGateway};

pub const AUTHOR_SEPARATOR: &str = ", ";

// Resolution is the outcome of turning a bare isbn into title and author.
// NotFound and Unavailable are kept apart: the first says the book does not
// exist upstream, the second that we could not find out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found { title: String, author: String },
    NotFound,
    Unavailable,
}

// CatalogResolver looks up the primary record of an isbn and then each of its
// authors. Only the primary record is required; an author that cannot be
// fetched is left out of the joined name.
#[derive(Clone)]
pub struct CatalogResolver {
    gateway: Arc<dyn BibliographicGateway>,
}

impl CatalogResolver {
    pub fn new(gateway: Arc<dyn BibliographicGateway>) -> Self {
        Self { gateway }
    }

    pub async fn resolve(&self, isbn: &str) -> Resolution {
        let edition = match self.gateway.fetch_edition(isbn).await {
            Ok(Some(edition)) => edition,
            Ok(None) => {
                debug!(isbn, "no upstream record");
                return Resolution::NotFound;
            }
            Err(err) if err.is_not_found() => return Resolution::NotFound,
            Err(err) => {
                warn!(isbn, error = %err, "primary lookup failed");
                return Resolution::Unavailable;
            }
        };

        // blank titles are rejected here as well as by BookEntity::new
        let title = match edition.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => {
                warn!(isbn, "upstream record has no title");
                return Resolution::Unavailable;
            }
        };

        let author = self.collect_author_names(isbn, &edition.authors).await.join(AUTHOR_SEPARATOR);
        Resolution::Found { title, author }
    }

    async fn collect_author_names(&self, isbn: &str, refs: &[AuthorRef]) -> Vec<String> {
        let mut names = Vec::with_capacity(refs.len());
        for key in refs.iter().filter_map(|r| r.key.as_deref()).filter(|k| !k.is_empty()) {
            match self.gateway.fetch_author(key).await {
                Ok(Some(author)) => match author.name {
                    Some(name) if !name.trim().is_empty() => names.push(name),
                    _ => debug!(isbn, key, "author record has no name"),
                },
                Ok(None) => debug!(isbn, key, "author not found upstream"),
                Err(err) => warn!(isbn, key, error = %err, "skipping author"),
            }
        }
        names
    }
}
