use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::bibliographic::BibliographicGateway;
use crate::gateway::openlibrary::client::OpenLibraryClient;

pub fn create_gateway(config: &Configuration) -> LibraryResult<Arc<dyn BibliographicGateway>> {
    let client = OpenLibraryClient::new(
        &config.catalog_url, config.lookup_timeout, &config.user_agent)?;
    Ok(Arc::new(client))
}
