use serde::{Deserialize, Deserializer, Serialize};
use crate::books::domain::{Book, UNKNOWN_AUTHOR, UNKNOWN_TITLE};
use crate::core::domain::Identifiable;

// BookDto is the wire representation returned by search and shelf operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default = "unknown_title", deserialize_with = "title_or_unknown")]
    pub title: String,
    #[serde(default = "unknown_author", deserialize_with = "author_or_unknown")]
    pub author: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub first_publish_year: i32,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub edition_count: i32,
}

impl BookDto {
    pub fn new(title: &str, author: &str) -> BookDto {
        BookDto {
            id: None,
            title: title.to_string(),
            author: author.to_string(),
            cover_url: None,
            first_publish_year: 0,
            edition_count: 0,
        }
    }
}

impl Default for BookDto {
    fn default() -> Self {
        BookDto::new(UNKNOWN_TITLE, UNKNOWN_AUTHOR)
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Book for BookDto {
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

fn unknown_title() -> String {
    UNKNOWN_TITLE.to_string()
}

fn unknown_author() -> String {
    UNKNOWN_AUTHOR.to_string()
}

fn title_or_unknown<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_title))
}

fn author_or_unknown<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_author))
}

fn zero_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or_default())
}
