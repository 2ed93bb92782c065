use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// A single person record. `name` is the unique key and never changes after
/// creation; `age` stays textual to match the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub location: String,
    pub age: String,
}

/// Trait abstraction for person record storage.
/// Implementations can be in-memory, file-backed, or remote KV.
#[async_trait]
pub trait PeopleStore: Send + Sync {
    /// Insert a new record. Fails with `AlreadyExists` when the name is taken.
    async fn create(&self, person: Person) -> Result<(), ServiceError>;
    /// Fetch a record by name.
    async fn get(&self, name: &str) -> Option<Person>;
    /// Overwrite location and age of an existing record; the name is left alone.
    async fn update(&self, name: &str, location: String, age: String)
        -> Result<(), ServiceError>;
    /// Remove a record, returning whether it existed. Removing an absent name
    /// is not an error.
    async fn remove(&self, name: &str) -> bool;
    /// Snapshot of all records, in no particular order.
    async fn list(&self) -> Vec<Person>;
}
