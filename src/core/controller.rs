use std::sync::Arc;
use axum::{
    body::HttpBody,
    http::StatusCode,
    BoxError,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use crate::books::factory::create_book_repository;
use crate::books::repository::BookRepository;
use crate::catalog::controller::{probe_catalog, search_books};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::catalog::CatalogClient;
use crate::gateway::factory::create_catalog_client;
use crate::shelf::controller::{list_books, remove_book, save_book};

#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) book_repository: Arc<dyn BookRepository>,
    pub(crate) catalog_client: Arc<dyn CatalogClient>,
}

impl AppState {
    pub fn new(config: Configuration, book_repository: Arc<dyn BookRepository>,
               catalog_client: Arc<dyn CatalogClient>) -> AppState {
        AppState {
            config,
            book_repository,
            catalog_client,
        }
    }

    // builds the repository and catalog client selected by the configuration
    pub async fn build(config: Configuration) -> LibraryResult<AppState> {
        let book_repository = create_book_repository(&config).await;
        let catalog_client = create_catalog_client()?;
        Ok(AppState::new(config, book_repository, catalog_client))
    }
}

pub fn build_router<B>(state: AppState) -> Router<(), B>
where
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/books/search", get(search_books))
        .route("/api/books/save", post(save_book))
        .route("/api/books/saved", get(list_books))
        .route("/api/books/delete/:id", delete(remove_book))
        .route("/api/books/test-api", get(probe_catalog))
        .layer(cors)
        .with_state(state)
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Database { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Unavailable { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_command_errors() {
        let (status, _) = ServerError::from(CommandError::Validation { message: "test".to_string(), reason_code: None });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = ServerError::from(CommandError::NotFound { message: "test".to_string() });
        assert_eq!(StatusCode::NOT_FOUND, status);
        let (status, _) = ServerError::from(CommandError::Unavailable { message: "test".to_string(), reason_code: None });
        assert_eq!(StatusCode::SERVICE_UNAVAILABLE, status);
        let (status, _) = ServerError::from(CommandError::Database { message: "test".to_string(), reason_code: None, retryable: false });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
    }
}
