use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use crate::core::library::LibraryError;
use crate::gateway::catalog::CatalogClient;

const USER_AGENT: &str = concat!("bookfinder/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ReqwestCatalogClient {
    client: Client,
}

impl ReqwestCatalogClient {
    pub(crate) fn new() -> Result<Self, LibraryError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CatalogClient for ReqwestCatalogClient {
    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, LibraryError> {
        let resp = self.client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        debug!("catalog responded {} for {}", resp.status(), resp.url());
        Ok(resp.json::<Value>().await?)
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        let reason = err.status().map(|status| status.as_u16().to_string());
        if err.is_timeout() || err.is_connect() {
            LibraryError::unavailable(
                format!("catalog unavailable {}", err).as_str(), reason, true)
        } else if err.is_decode() {
            LibraryError::serialization(
                format!("catalog response decoding {}", err).as_str())
        } else {
            LibraryError::runtime(
                format!("catalog request failed {}", err).as_str(), reason)
        }
    }
}
