use async_trait::async_trait;
use serde_json::Value;
use crate::core::library::LibraryError;

// CatalogClient is the outbound HTTP capability used to query the external book catalog
#[async_trait]
pub trait CatalogClient: Sync + Send {
    // issues a GET with the given query parameters and decodes the body as untyped JSON
    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, LibraryError>;
}
