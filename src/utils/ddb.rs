use std::collections::HashMap;
use std::time::Duration;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::{Credentials, Region};
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeDefinition, AttributeValue, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType, TableStatus};
use serde_json::Value;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

pub(crate) async fn create_table(client: &Client, table_name: &str, pk: &str) -> LibraryResult<()> {
    match client
        .create_table()
        .table_name(table_name)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(pk)
                .key_type(KeyType::Hash)
                .build(),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(pk)
                .attribute_type(ScalarAttributeType::N)
                .build(),
        )
        .provisioned_throughput(
            ProvisionedThroughput::builder()
                .read_capacity_units(10)
                .write_capacity_units(10)
                .build(),
        )
        .send()
        .await
    {
        Ok(_k) => {
            wait_until_table_status_is_not(client, table_name, TableStatus::Creating).await;
            Ok(())
        }
        Err(err) => {
            Err(LibraryError::database_or_unavailable(format!("failed to create {} table due to {}",
                                                              table_name, err).as_str(), None, false))
        }
    }
}

#[cfg(test)]
pub(crate) async fn delete_table(client: &Client, table_name: &str) -> LibraryResult<()> {
    match client.delete_table().table_name(table_name).send().await {
        Ok(_k) => {
            wait_until_table_status_is_not(client, table_name, TableStatus::Deleting).await;
            Ok(())
        }
        Err(err) => {
            Err(LibraryError::database_or_unavailable(format!("failed to delete {} table due to {}",
                                                              table_name, err).as_str(), None, false))
        }
    }
}

async fn wait_until_table_status_is_not(client: &Client, table_name: &str, other_status: TableStatus) {
    for _i in 0..30 {
        if let Ok(status) = describe_table(client, table_name).await {
            if status != other_status {
                return;
            }
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

async fn describe_table(client: &Client, table_name: &str) -> LibraryResult<TableStatus> {
    match client
        .describe_table()
        .table_name(table_name)
        .send()
        .await
    {
        Ok(out) => {
            if let Some(table) = out.table() {
                if let Some(status) = table.table_status() {
                    return Ok(status.clone());
                }
            }
            Err(LibraryError::runtime(format!("failed to describe {} table",
                                              table_name).as_str(), None))
        }
        Err(err) => {
            Err(LibraryError::database_or_unavailable(format!("failed to describe {} table due to {}",
                                                              table_name, err).as_str(), None, false))
        }
    }
}

pub(crate) fn parse_item(value: Value) -> Result<HashMap<String, AttributeValue>, String> {
    match value_to_item(value) {
        AttributeValue::M(map) => Ok(map),
        other => Err(format!("failed to parse{:?}", other)),
    }
}

pub(crate) fn parse_string_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> Option<String> {
    if let Some(AttributeValue::S(str)) = map.get(name) {
        return Some(str.clone());
    }
    None
}

pub(crate) fn parse_number_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> i64 {
    if let Some(AttributeValue::N(str)) = map.get(name) {
        if let Ok(n) = str.parse::<i64>() {
            return n;
        }
    }
    0
}

pub(crate) fn number(n: i64) -> AttributeValue {
    AttributeValue::N(n.to_string())
}

fn value_to_item(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(a) => AttributeValue::L(a.into_iter().map(value_to_item).collect()),
        Value::Object(o) => {
            AttributeValue::M(o.into_iter().map(|(k, v)| (k, value_to_item(v))).collect())
        }
    }
}

// helper method to build db-client for the configured store
pub(crate) async fn build_db_client(config: &Configuration) -> Client {
    match config.store {
        RepositoryStore::LocalDynamoDB => {
            // See https://docs.aws.amazon.com/sdk-for-rust/latest/dg/dynamodb-local.html
            let dynamodb_local_config = aws_sdk_dynamodb::Config::builder()
                .region(Region::new("local"))
                .credentials_provider(
                    Credentials::new("AKIDLOCALSTACK", "localstacksecret", None, None, "faked"))
                .endpoint_url(config.local_endpoint.as_str())
                .build();
            Client::from_conf(dynamodb_local_config)
        }
        _ => {
            //Get config from environment.
            let sdk_config = aws_config::load_from_env().await;
            //Create the DynamoDB client.
            Client::new(&sdk_config)
        }
    }
}

impl From<SdkError<UpdateItemError>> for LibraryError {
    fn from(err: SdkError<UpdateItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        LibraryError::database_or_unavailable(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<PutItemError>> for LibraryError {
    fn from(err: SdkError<PutItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        LibraryError::database_or_unavailable(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<DeleteItemError>> for LibraryError {
    fn from(err: SdkError<DeleteItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        LibraryError::database_or_unavailable(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<ScanError>> for LibraryError {
    fn from(err: SdkError<ScanError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        LibraryError::database_or_unavailable(format!("{:?}", err).as_str(), reason, retryable)
    }
}

fn retryable_sdk_error<T>(err: &SdkError<T>) -> (bool, Option<String>) {
    match err {
        SdkError::ConstructionFailure(_) => { (false, Some("ConstructionFailure".to_string())) }
        SdkError::TimeoutError(_) => { (true, Some("TimeoutError".to_string())) }
        SdkError::DispatchFailure(_) => { (true, Some("DispatchFailure".to_string())) }
        SdkError::ResponseError { .. } => { (true, Some("ResponseError".to_string())) }
        SdkError::ServiceError(ctx) => {
            (ctx.raw().http().status().is_server_error() || has_exceeded_limit(ctx.raw().http().body().bytes()), Some(ctx.raw().http().status().to_string()))
        }
        _ => { (true, Some("Unknown".to_string())) }
    }
}

fn has_exceeded_limit(opts: Option<&[u8]>) -> bool {
    // matches "ProvisionedThroughputExceeded" and "LimitExceeded" error bodies
    opts.map_or(false, |b| b.windows(6).any(|w| w == b"ceeded"))
}
