use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};

use crate::books::domain::{UNKNOWN_AUTHOR, UNKNOWN_TITLE};
use crate::books::domain::model::BookEntity;
use crate::books::repository::validate_book_id;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{number, parse_item, parse_number_attribute, parse_string_attribute};

// book_id of the item holding the id sequence, never returned as a book
const SEQUENCE_ID: i64 = 0;

#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
}

impl DDBBookRepository {
    pub(crate) fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }

    async fn next_id(&self) -> LibraryResult<i64> {
        let table_name: &str = self.table_name.as_ref();
        let out = self.client
            .update_item()
            .table_name(table_name)
            .key("book_id", number(SEQUENCE_ID))
            .update_expression("ADD next_id :one")
            .expression_attribute_values(":one", number(1))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await?;
        let next_id = out.attributes()
            .map(|attrs| parse_number_attribute("next_id", attrs))
            .unwrap_or(SEQUENCE_ID);
        if next_id <= SEQUENCE_ID {
            return Err(LibraryError::runtime(
                format!("failed to allocate book id from {}", table_name).as_str(), None));
        }
        Ok(next_id)
    }

    // moves the sequence past an explicitly supplied id so it is never handed out again
    async fn advance_sequence(&self, book_id: i64) -> LibraryResult<()> {
        let table_name: &str = self.table_name.as_ref();
        let res = self.client
            .update_item()
            .table_name(table_name)
            .key("book_id", number(SEQUENCE_ID))
            .update_expression("SET next_id = :book_id")
            .condition_expression("attribute_not_exists(next_id) OR next_id < :book_id")
            .expression_attribute_values(":book_id", number(book_id))
            .send()
            .await;
        match res {
            Ok(_) => Ok(()),
            Err(SdkError::ServiceError(ctx)) if ctx.err().is_conditional_check_failed_exception() => Ok(()),
            Err(err) => Err(LibraryError::from(err)),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for DDBBookRepository {
    async fn save(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        validate_book_id(entity)?;
        let book_id = match entity.book_id {
            Some(id) => {
                self.advance_sequence(id).await?;
                id
            }
            None => self.next_id().await?,
        };
        let saved = entity.with_id(book_id);
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(&saved)?;
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(parse_item(val)?))
            .send()
            .await?;
        Ok(saved)
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut books = vec![];
        let mut exclusive_start_key = None;
        loop {
            let out = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .filter_expression("book_id > :sequence")
                .expression_attribute_values(":sequence", number(SEQUENCE_ID))
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await?;
            if let Some(items) = out.items() {
                books.extend(items.iter().map(map_to_book));
            }
            match out.last_evaluated_key() {
                Some(key) => exclusive_start_key = Some(key.clone()),
                None => break,
            }
        }
        books.sort_by_key(|b| b.book_id);
        Ok(books)
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        if id <= SEQUENCE_ID {
            return Ok(0);
        }
        let table_name: &str = self.table_name.as_ref();
        let out = self.client.delete_item()
            .table_name(table_name)
            .key("book_id", number(id))
            .return_values(ReturnValue::AllOld)
            .send()
            .await?;
        Ok(out.attributes().map_or(0, |_| 1))
    }
}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> BookEntity {
    BookEntity {
        book_id: Some(parse_number_attribute("book_id", map)),
        title: parse_string_attribute("title", map).unwrap_or(String::from(UNKNOWN_TITLE)),
        author: parse_string_attribute("author", map).unwrap_or(String::from(UNKNOWN_AUTHOR)),
        cover_url: parse_string_attribute("cover_url", map),
        first_publish_year: parse_number_attribute("first_publish_year", map) as i32,
        edition_count: parse_number_attribute("edition_count", map) as i32,
    }
}
