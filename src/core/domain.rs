use std::path::PathBuf;
use std::time::Duration;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_FILE: &str = "library.json";
pub const DEFAULT_CATALOG_URL: &str = "https://openlibrary.org";
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("bookshelf/", env!("CARGO_PKG_VERSION"));

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_file: PathBuf,
    pub catalog_url: String,
    pub lookup_timeout: Duration,
    pub user_agent: String,
}

impl Configuration {
    pub fn new(data_file: &str) -> Self {
        Configuration {
            data_file: PathBuf::from(data_file),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_catalog_url(mut self, catalog_url: &str) -> Self {
        self.catalog_url = catalog_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_DATA_FILE)
    }
}
