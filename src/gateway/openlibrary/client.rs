//! Open Library client.
//!
//! Editions are fetched from `{base}/isbn/{isbn}.json` and authors from
//! `{base}{key}.json`, where `key` is the `/authors/...` reference found on the
//! edition. Each request is a single attempt bounded by the client timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::books::isbn::strip_separators;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::bibliographic::{AuthorRecord, BibliographicGateway, EditionRecord};

pub struct OpenLibraryClient {
    client: Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> LibraryResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn edition_url(&self, isbn: &str) -> String {
        format!("{}/isbn/{}.json", self.base_url, strip_separators(isbn))
    }

    pub fn author_url(&self, key: &str) -> String {
        if key.starts_with('/') {
            format!("{}{}.json", self.base_url, key)
        } else {
            format!("{}/{}.json", self.base_url, key)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> LibraryResult<Option<T>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "open library response");

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(LibraryError::from_upstream_status(url, status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map(Some).map_err(|err| {
            LibraryError::unavailable(
                format!("unexpected body from {}: {}", url, err).as_str(), Some("Decode".to_string()))
        })
    }
}

#[async_trait]
impl BibliographicGateway for OpenLibraryClient {
    async fn fetch_edition(&self, isbn: &str) -> LibraryResult<Option<EditionRecord>> {
        self.get_json(&self.edition_url(isbn)).await
    }

    async fn fetch_author(&self, key: &str) -> LibraryResult<Option<AuthorRecord>> {
        self.get_json(&self.author_url(key)).await
    }
}
