use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // saves an entity, assigning an identifier if it has none; replaces the entity with the same id otherwise
    async fn save(&self, entity: &Entity) -> LibraryResult<Entity>;

    // returns all entities ordered by identifier
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;

    // deletes an entity and returns number of removed records, deleting a missing id is not an error
    async fn delete(&self, id: i64) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, Default)]
pub enum RepositoryStore {
    #[serde(rename = "dynamodb")]
    DynamoDB,
    #[serde(rename = "local-dynamodb")]
    LocalDynamoDB,
    #[default]
    #[serde(rename = "memory")]
    Memory,
}
