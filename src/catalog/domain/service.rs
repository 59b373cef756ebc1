use std::sync::Arc;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::normalize::DocumentNormalizer;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::catalog::CatalogClient;

pub(crate) struct CatalogServiceImpl {
    search_url: String,
    probe_query: String,
    normalizer: DocumentNormalizer,
    catalog_client: Arc<dyn CatalogClient>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, catalog_client: Arc<dyn CatalogClient>) -> Self {
        Self {
            search_url: config.catalog_url.to_string(),
            probe_query: config.probe_query.to_string(),
            normalizer: DocumentNormalizer::new(config.covers_url.as_str()),
            catalog_client,
        }
    }

    async fn lookup(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        info!("searching catalog {} for title {:?}", self.search_url, title);
        let response = self.catalog_client.get_json(self.search_url.as_str(), &[("title", title)]).await?;
        debug!("catalog numFound: {:?}", response.get("numFound"));
        let docs = match response.get("docs") {
            Some(Value::Array(docs)) => docs,
            None | Some(Value::Null) => {
                warn!("no docs array in catalog response for {:?}", title);
                return Ok(vec![]);
            }
            Some(other) => {
                return Err(LibraryError::serialization(
                    format!("catalog docs is not an array {}", other).as_str()));
            }
        };
        debug!("catalog docs size: {}", docs.len());
        Ok(docs.iter().map(|doc| self.normalizer.normalize(doc)).collect())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn search_books(&self, title: &str) -> Vec<BookDto> {
        match self.lookup(title).await {
            Ok(books) => {
                info!("returning {} books for {:?}", books.len(), title);
                books
            }
            Err(err) => {
                // a failed lookup is reported to callers the same way as no matches
                warn!("error fetching books from catalog for {:?}: {}", title, err);
                vec![]
            }
        }
    }

    async fn probe(&self) -> Vec<BookDto> {
        info!("probing catalog with {:?}", self.probe_query);
        let books = self.search_books(self.probe_query.as_str()).await;
        info!("probe found {} books", books.len());
        if let Some(first) = books.first() {
            info!("first book: {} by {} (cover {:?})", first.title(), first.author(), first.cover_url());
        }
        books
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::domain::Configuration;
    use crate::core::library::{LibraryError, LibraryResult};
    use crate::core::repository::RepositoryStore;
    use crate::gateway::catalog::CatalogClient;

    // StubCatalogClient replays a canned response and records the requests it receives
    struct StubCatalogClient {
        response: fn() -> LibraryResult<Value>,
        requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    impl StubCatalogClient {
        fn new(response: fn() -> LibraryResult<Value>) -> Arc<Self> {
            Arc::new(Self { response, requests: Mutex::new(vec![]) })
        }
    }

    #[async_trait]
    impl CatalogClient for StubCatalogClient {
        async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, LibraryError> {
            let query = query.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
            self.requests.lock().expect("lock requests").push((url.to_string(), query));
            (self.response)()
        }
    }

    fn build_service(client: Arc<StubCatalogClient>) -> CatalogServiceImpl {
        CatalogServiceImpl::new(&Configuration::new(RepositoryStore::Memory), client)
    }

    #[tokio::test]
    async fn test_should_search_books() {
        let client = StubCatalogClient::new(|| Ok(json!({
            "numFound": 1,
            "docs": [{
                "title": "Harry Potter and the Sorcerer's Stone",
                "author_name": ["J.K. Rowling"],
                "cover_i": 555,
                "first_publish_year": 1997,
                "edition_count": 30,
            }],
        })));
        let svc = build_service(client.clone());
        let books = svc.search_books("harry potter").await;
        assert_eq!(vec![BookDto {
            id: None,
            title: "Harry Potter and the Sorcerer's Stone".to_string(),
            author: "J.K. Rowling".to_string(),
            cover_url: Some("https://covers.openlibrary.org/b/id/555-M.jpg".to_string()),
            first_publish_year: 1997,
            edition_count: 30,
        }], books);

        let requests = client.requests.lock().expect("lock requests");
        assert_eq!(1, requests.len());
        assert_eq!("https://openlibrary.org/search.json", requests[0].0);
        assert_eq!(vec![("title".to_string(), "harry potter".to_string())], requests[0].1);
    }

    #[tokio::test]
    async fn test_should_keep_order_and_partial_documents() {
        let client = StubCatalogClient::new(|| Ok(json!({
            "docs": [{"title": "first"}, {}, {"title": "third", "first_publish_year": "n/a"}],
        })));
        let books = build_service(client).search_books("x").await;
        assert_eq!(vec!["first", "Unknown Title", "third"],
                   books.iter().map(|b| b.title.as_str()).collect::<Vec<_>>());
        assert_eq!(0, books[2].first_publish_year);
    }

    #[tokio::test]
    async fn test_should_return_empty_for_empty_docs() {
        let books = build_service(StubCatalogClient::new(|| Ok(json!({"docs": []})))).search_books("x").await;
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_should_return_empty_for_missing_docs() {
        let books = build_service(StubCatalogClient::new(|| Ok(json!({})))).search_books("x").await;
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_should_return_empty_for_malformed_docs() {
        let books = build_service(StubCatalogClient::new(|| Ok(json!({"docs": {"title": "x"}})))).search_books("x").await;
        assert!(books.is_empty());
        let books = build_service(StubCatalogClient::new(|| Ok(json!([1, 2])))).search_books("x").await;
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_should_return_empty_on_client_failure() {
        let client = StubCatalogClient::new(|| Err(LibraryError::unavailable("connection refused", None, true)));
        let books = build_service(client).search_books("x").await;
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_should_probe_with_configured_query() {
        let client = StubCatalogClient::new(|| Ok(json!({"docs": [{"title": "a"}, {"title": "b"}]})));
        let books = build_service(client.clone()).probe().await;
        assert_eq!(2, books.len());
        let requests = client.requests.lock().expect("lock requests");
        assert_eq!(vec![("title".to_string(), "harry potter".to_string())], requests[0].1);
    }
}
