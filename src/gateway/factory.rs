use std::sync::Arc;
use crate::core::library::LibraryResult;
use crate::gateway::catalog::CatalogClient;
use crate::gateway::http::client::ReqwestCatalogClient;

pub(crate) fn create_catalog_client() -> LibraryResult<Arc<dyn CatalogClient>> {
    Ok(Arc::new(ReqwestCatalogClient::new()?))
}
