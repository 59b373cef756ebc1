use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::catalog::CatalogClient;

pub(crate) fn create_catalog_service(config: &Configuration, catalog_client: Arc<dyn CatalogClient>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, catalog_client))
}
