pub mod normalize;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;

#[async_trait]
pub trait CatalogService: Sync + Send {
    // searches the external catalog by title, any failure yields an empty list
    async fn search_books(&self, title: &str) -> Vec<BookDto>;

    // runs the configured diagnostic query and logs what came back
    async fn probe(&self) -> Vec<BookDto>;
}
