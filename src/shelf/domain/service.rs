use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::shelf::domain::ShelfService;

pub(crate) struct ShelfServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl ShelfServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl ShelfService for ShelfServiceImpl {
    async fn save_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        debug!("saving book {:?} with id {:?}", book.title, book.id());
        let saved = self.book_repository.save(&BookEntity::from(book)).await?;
        info!("saved book {:?} as {:?}", saved.title, saved.book_id);
        Ok(BookDto::from(&saved))
    }

    async fn find_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<()> {
        let removed = self.book_repository.delete(id).await?;
        info!("removed {} book(s) for id {}", removed, id);
        Ok(())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            cover_url: other.cover_url.clone(),
            first_publish_year: other.first_publish_year,
            edition_count: other.edition_count,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            cover_url: other.cover_url.clone(),
            first_publish_year: other.first_publish_year,
            edition_count: other.edition_count,
        }
    }
}
