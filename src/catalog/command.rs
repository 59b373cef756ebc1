pub mod probe_catalog_cmd;
pub mod search_books_cmd;
