use async_trait::async_trait;
use crate::core::command::{Command, CommandError};
use crate::shelf::domain::ShelfService;

pub(crate) struct RemoveBookCommand {
    shelf_service: Box<dyn ShelfService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(shelf_service: Box<dyn ShelfService>) -> Self {
        Self {
            shelf_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: i64,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.shelf_service.remove_book(req.book_id).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}
