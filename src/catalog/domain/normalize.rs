use serde_json::Value;
use tracing::warn;
use crate::books::domain::{UNKNOWN_AUTHOR, UNKNOWN_TITLE};
use crate::books::dto::BookDto;

// DocumentNormalizer converts one untyped catalog document into a fully defaulted book.
// Extraction is done field by field on the raw JSON since the catalog schema is not guaranteed.
#[derive(Debug, Clone)]
pub(crate) struct DocumentNormalizer {
    covers_url: String,
}

impl DocumentNormalizer {
    pub(crate) fn new(covers_url: &str) -> Self {
        Self {
            covers_url: covers_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn normalize(&self, doc: &Value) -> BookDto {
        BookDto {
            id: None,
            title: text_or(doc, "title", UNKNOWN_TITLE),
            author: first_text_or(doc, "author_name", UNKNOWN_AUTHOR),
            cover_url: self.cover_url(doc),
            first_publish_year: integer_or(doc, "first_publish_year", 0),
            edition_count: integer_or(doc, "edition_count", 0),
        }
    }

    fn cover_url(&self, doc: &Value) -> Option<String> {
        present(doc, "cover_i")
            .map(|cover_id| format!("{}/{}-M.jpg", self.covers_url, as_text(cover_id)))
    }
}

// null counts as absent
fn present<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    doc.get(key).filter(|value| !value.is_null())
}

// strings are used verbatim, other values by their JSON text
fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text_or(doc: &Value, key: &str, default: &str) -> String {
    present(doc, key).map(as_text).unwrap_or_else(|| default.to_string())
}

fn first_text_or(doc: &Value, key: &str, default: &str) -> String {
    match present(doc, key) {
        Some(Value::Array(values)) => values.first()
            .filter(|value| !value.is_null())
            .map(as_text)
            .unwrap_or_else(|| default.to_string()),
        _ => default.to_string(),
    }
}

fn integer_or(doc: &Value, key: &str, default: i32) -> i32 {
    let Some(value) = present(doc, key) else {
        return default;
    };
    let parsed = match value {
        // out of range values saturate at the i32 bounds
        Value::Number(n) => n.as_i64()
            .map(|i| i.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
            .or_else(|| n.as_f64().map(|f| f as i32)),
        Value::String(s) => s.parse::<i32>().ok(),
        _ => None,
    };
    parsed.unwrap_or_else(|| {
        warn!("error parsing integer value for key '{}': {}", key, value);
        default
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::normalize::DocumentNormalizer;

    fn normalizer() -> DocumentNormalizer {
        DocumentNormalizer::new("https://covers.openlibrary.org/b/id")
    }

    #[tokio::test]
    async fn test_should_normalize_complete_document() {
        let doc = json!({
            "title": "Harry Potter and the Sorcerer's Stone",
            "author_name": ["J.K. Rowling"],
            "cover_i": 555,
            "first_publish_year": 1997,
            "edition_count": 30,
        });
        let book = normalizer().normalize(&doc);
        assert_eq!(BookDto {
            id: None,
            title: "Harry Potter and the Sorcerer's Stone".to_string(),
            author: "J.K. Rowling".to_string(),
            cover_url: Some("https://covers.openlibrary.org/b/id/555-M.jpg".to_string()),
            first_publish_year: 1997,
            edition_count: 30,
        }, book);
    }

    #[tokio::test]
    async fn test_should_default_empty_document() {
        let book = normalizer().normalize(&json!({}));
        assert_eq!("Unknown Title", book.title);
        assert_eq!("Unknown Author", book.author);
        assert_eq!(None, book.cover_url);
        assert_eq!(0, book.first_publish_year);
        assert_eq!(0, book.edition_count);
        assert_eq!(None, book.id);
    }

    #[tokio::test]
    async fn test_should_default_null_fields() {
        let book = normalizer().normalize(&json!({
            "title": null,
            "author_name": null,
            "cover_i": null,
            "first_publish_year": null,
        }));
        assert_eq!("Unknown Title", book.title);
        assert_eq!("Unknown Author", book.author);
        assert_eq!(None, book.cover_url);
        assert_eq!(0, book.first_publish_year);
    }

    #[tokio::test]
    async fn test_should_keep_first_author() {
        let book = normalizer().normalize(&json!({"author_name": ["Rowling, J.K.", "Other"]}));
        assert_eq!("Rowling, J.K.", book.author);
    }

    #[tokio::test]
    async fn test_should_default_empty_or_invalid_authors() {
        assert_eq!("Unknown Author", normalizer().normalize(&json!({"author_name": []})).author);
        assert_eq!("Unknown Author", normalizer().normalize(&json!({"author_name": [null]})).author);
        assert_eq!("Unknown Author", normalizer().normalize(&json!({"author_name": "Jane Austen"})).author);
        assert_eq!("42", normalizer().normalize(&json!({"author_name": [42]})).author);
    }

    #[tokio::test]
    async fn test_should_stringify_non_text_title() {
        assert_eq!("1984", normalizer().normalize(&json!({"title": 1984})).title);
        assert_eq!("true", normalizer().normalize(&json!({"title": true})).title);
    }

    #[tokio::test]
    async fn test_should_build_cover_url() {
        assert_eq!(Some("https://covers.openlibrary.org/b/id/12345-M.jpg".to_string()),
                   normalizer().normalize(&json!({"cover_i": 12345})).cover_url);
        assert_eq!(Some("https://covers.openlibrary.org/b/id/abc-M.jpg".to_string()),
                   normalizer().normalize(&json!({"cover_i": "abc"})).cover_url);
        assert_eq!(Some("http://localhost/covers/7-M.jpg".to_string()),
                   DocumentNormalizer::new("http://localhost/covers/").normalize(&json!({"cover_i": 7})).cover_url);
    }

    #[tokio::test]
    async fn test_should_parse_numeric_text() {
        let book = normalizer().normalize(&json!({"first_publish_year": "1997", "edition_count": "12"}));
        assert_eq!(1997, book.first_publish_year);
        assert_eq!(12, book.edition_count);
    }

    #[tokio::test]
    async fn test_should_default_unparseable_numbers() {
        let book = normalizer().normalize(&json!({"first_publish_year": "n/a", "edition_count": [3]}));
        assert_eq!(0, book.first_publish_year);
        assert_eq!(0, book.edition_count);
        assert_eq!(0, normalizer().normalize(&json!({"edition_count": " 12"})).edition_count);
        assert_eq!(0, normalizer().normalize(&json!({"edition_count": false})).edition_count);
    }

    #[tokio::test]
    async fn test_should_truncate_fractional_numbers() {
        let book = normalizer().normalize(&json!({"first_publish_year": 1997.9, "edition_count": -2.5}));
        assert_eq!(1997, book.first_publish_year);
        assert_eq!(-2, book.edition_count);
    }

    #[tokio::test]
    async fn test_should_saturate_out_of_range_numbers() {
        let book = normalizer().normalize(&json!({"first_publish_year": 4294969293_i64, "edition_count": -4294969293_i64}));
        assert_eq!(i32::MAX, book.first_publish_year);
        assert_eq!(i32::MIN, book.edition_count);
        assert_eq!(i32::MAX, normalizer().normalize(&json!({"edition_count": 3000000000.0})).edition_count);
        assert_eq!(i32::MAX, normalizer().normalize(&json!({"edition_count": u64::MAX})).edition_count);
    }

    #[tokio::test]
    async fn test_should_default_non_object_document() {
        let book = normalizer().normalize(&json!("not a document"));
        assert_eq!(BookDto::default(), book);
    }
}
