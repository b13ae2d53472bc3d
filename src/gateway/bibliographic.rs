use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use crate::core::library::LibraryResult;

// EditionRecord is the primary record of a single isbn. Only the fields used
// for resolution are kept; everything else in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditionRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_author_refs")]
    pub authors: Vec<AuthorRef>,
}

// An entry without a string key becomes a keyless reference and anything but a
// list reads as no authors, so one bad reference never fails the edition.
fn lenient_author_refs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<AuthorRef>, D::Error> {
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        _ => return Ok(Vec::new()),
    };
    Ok(entries.iter()
        .map(|entry| AuthorRef { key: entry.get("key").and_then(Value::as_str).map(str::to_string) })
        .collect())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorRef {
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorRecord {
    #[serde(default)]
    pub name: Option<String>,
}

impl EditionRecord {
    pub fn new(title: &str, author_keys: &[&str]) -> Self {
        Self {
            title: Some(title.to_string()),
            authors: author_keys.iter().map(|k| AuthorRef { key: Some(k.to_string()) }).collect(),
        }
    }
}

impl AuthorRecord {
    pub fn new(name: &str) -> Self {
        Self { name: Some(name.to_string()) }
    }
}

// BibliographicGateway fetches records from a remote catalog. Ok(None) means
// the service answered that the record does not exist; every other failure
// (transport, timeout, status, body) is an error.
#[async_trait]
pub trait BibliographicGateway: Sync + Send {
    async fn fetch_edition(&self, isbn: &str) -> LibraryResult<Option<EditionRecord>>;
    async fn fetch_author(&self, key: &str) -> LibraryResult<Option<AuthorRecord>>;
}
