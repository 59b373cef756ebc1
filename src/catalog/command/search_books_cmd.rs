use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SearchBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchBooksCommandRequest {
    pub(crate) title: String,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        Ok(SearchBooksCommandResponse::new(self.catalog_service.search_books(req.title.as_str()).await))
    }
}
