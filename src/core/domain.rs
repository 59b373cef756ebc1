use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    // store-assigned identifier, None until the object has been saved
    fn id(&self) -> Option<i64>;
}

pub const CONFIG_ENV_PREFIX: &str = "BOOKFINDER_";

// Configuration abstracts config options for the book finder, loaded from BOOKFINDER_* variables
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    #[serde(default)]
    pub store: RepositoryStore,
    #[serde(default = "default_table_name")]
    pub table_name: String,
    #[serde(default = "default_local_endpoint")]
    pub local_endpoint: String,
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
    #[serde(default = "default_covers_url")]
    pub covers_url: String,
    #[serde(default = "default_probe_query")]
    pub probe_query: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Configuration {
    pub fn new(store: RepositoryStore) -> Self {
        Configuration {
            store,
            table_name: default_table_name(),
            local_endpoint: default_local_endpoint(),
            catalog_url: default_catalog_url(),
            covers_url: default_covers_url(),
            probe_query: default_probe_query(),
            port: default_port(),
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> LibraryResult<Self>
        where I: IntoIterator<Item=(String, String)> {
        Ok(envy::prefixed(CONFIG_ENV_PREFIX).from_iter::<_, Configuration>(vars)?)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(RepositoryStore::default())
    }
}

fn default_table_name() -> String {
    "saved_books".to_string()
}

fn default_local_endpoint() -> String {
    "http://localhost:8000".to_string()
}

fn default_catalog_url() -> String {
    "https://openlibrary.org/search.json".to_string()
}

fn default_covers_url() -> String {
    "https://covers.openlibrary.org/b/id".to_string()
}

fn default_probe_query() -> String {
    "harry potter".to_string()
}

fn default_port() -> u16 {
    8080
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new(RepositoryStore::Memory);
        assert_eq!("saved_books", config.table_name);
        assert_eq!("https://openlibrary.org/search.json", config.catalog_url);
        assert_eq!("https://covers.openlibrary.org/b/id", config.covers_url);
        assert_eq!(8080, config.port);
    }

    #[tokio::test]
    async fn test_should_load_config_defaults() {
        let config = Configuration::from_vars(vec![]).expect("should load config");
        assert_eq!(Configuration::default(), config);
        assert_eq!(RepositoryStore::Memory, config.store);
    }

    #[tokio::test]
    async fn test_should_load_config_overrides() {
        let config = Configuration::from_vars(vec![
            ("BOOKFINDER_STORE".to_string(), "local-dynamodb".to_string()),
            ("BOOKFINDER_PORT".to_string(), "9090".to_string()),
            ("BOOKFINDER_CATALOG_URL".to_string(), "http://127.0.0.1:3000/search.json".to_string()),
            ("UNRELATED".to_string(), "ignored".to_string()),
        ]).expect("should load config");
        assert_eq!(RepositoryStore::LocalDynamoDB, config.store);
        assert_eq!(9090, config.port);
        assert_eq!("http://127.0.0.1:3000/search.json", config.catalog_url);
        assert_eq!("saved_books", config.table_name);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_config() {
        let res = Configuration::from_vars(vec![
            ("BOOKFINDER_PORT".to_string(), "not-a-port".to_string()),
        ]);
        assert!(res.is_err());
    }
}
