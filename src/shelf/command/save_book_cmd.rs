use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::shelf::domain::ShelfService;

pub(crate) struct SaveBookCommand {
    shelf_service: Box<dyn ShelfService>,
}

impl SaveBookCommand {
    pub(crate) fn new(shelf_service: Box<dyn ShelfService>) -> Self {
        Self {
            shelf_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct SaveBookCommandRequest {
    pub(crate) book: BookDto,
}

impl SaveBookCommandRequest {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct SaveBookCommandResponse {
    pub book: BookDto,
}

impl SaveBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<SaveBookCommandRequest, SaveBookCommandResponse> for SaveBookCommand {
    async fn execute(&self, req: SaveBookCommandRequest) -> Result<SaveBookCommandResponse, CommandError> {
        self.shelf_service.save_book(&req.book).await.map_err(CommandError::from).map(SaveBookCommandResponse::new)
    }
}
