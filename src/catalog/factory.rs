use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::resolver::CatalogResolver;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::factory::create_gateway;

pub async fn create_catalog_service(config: &Configuration) -> LibraryResult<Arc<dyn CatalogService>> {
    let book_repo = factory::create_book_repository(config).await?;
    let resolver = CatalogResolver::new(create_gateway(config)?);
    Ok(Arc::new(CatalogServiceImpl::new(book_repo, resolver)))
}

#[cfg(test)]
pub(crate) async fn create_test_catalog_service(
    path: &std::path::Path,
    gateway: Arc<crate::gateway::stub::StubGateway>) -> Arc<dyn CatalogService> {
    let repo = crate::books::repository::file_book_repository::FileBookRepository::open(path)
        .await.expect("should open repository");
    Arc::new(CatalogServiceImpl::new(Arc::new(repo), CatalogResolver::new(gateway)))
}
