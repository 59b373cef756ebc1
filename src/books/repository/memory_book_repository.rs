use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::repository::validate_book_id;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug, Default)]
struct Shelf {
    last_id: i64,
    books: BTreeMap<i64, BookEntity>,
}

// MemoryBookRepository keeps saved books in process memory, ordered by identifier
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    shelf: RwLock<Shelf>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn save(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        validate_book_id(entity)?;
        let mut shelf = self.shelf.write().await;
        let book_id = match entity.book_id {
            Some(id) => id,
            None => shelf.last_id.checked_add(1).ok_or_else(|| LibraryError::runtime(
                format!("failed to allocate book id after {}", shelf.last_id).as_str(), None))?,
        };
        shelf.last_id = shelf.last_id.max(book_id);
        let saved = entity.with_id(book_id);
        shelf.books.insert(book_id, saved.clone());
        Ok(saved)
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.shelf.read().await.books.values().cloned().collect())
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        Ok(self.shelf.write().await.books.remove(&id).map_or(0, |_| 1))
    }
}
