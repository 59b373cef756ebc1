use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the persisted shape of a book the user saved to the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: Option<i64>,
    pub title: String,
    pub author: String,
    pub cover_url: Option<String>,
    pub first_publish_year: i32,
    pub edition_count: i32,
}

impl BookEntity {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            book_id: None,
            title: title.to_string(),
            author: author.to_string(),
            cover_url: None,
            first_publish_year: 0,
            edition_count: 0,
        }
    }

    pub fn with_id(&self, book_id: i64) -> Self {
        Self {
            book_id: Some(book_id),
            ..self.clone()
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> Option<i64> {
        self.book_id
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn cover_url(&self) -> Option<&str> {
        self.cover_url.as_deref()
    }
}
