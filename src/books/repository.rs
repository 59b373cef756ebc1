pub mod ddb_book_repository;
pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {}

impl<T: Repository<BookEntity>> BookRepository for T {}

// identifiers are positive, zero is reserved by stores for bookkeeping
pub(crate) fn validate_book_id(book: &BookEntity) -> LibraryResult<()> {
    match book.book_id {
        Some(id) if id <= 0 => {
            Err(LibraryError::validation(format!("invalid book id {}", id).as_str(), None))
        }
        _ => Ok(()),
    }
}
