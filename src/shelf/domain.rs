pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// ShelfService keeps the books a user selected from the catalog
#[async_trait]
pub trait ShelfService: Sync + Send {
    async fn save_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn find_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn remove_book(&self, id: i64) -> LibraryResult<()>;
}
