use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::shelf::domain::ShelfService;

pub(crate) struct ListBooksCommand {
    shelf_service: Box<dyn ShelfService>,
}

impl ListBooksCommand {
    pub(crate) fn new(shelf_service: Box<dyn ShelfService>) -> Self {
        Self {
            shelf_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.shelf_service.find_books().await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}
