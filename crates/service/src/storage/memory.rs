use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::people::{PeopleStore, Person};

/// In-memory people store.
///
/// Holds the name -> record map behind an async `RwLock`. Every mutation
/// takes the write lock for its whole check-then-act sequence, so create,
/// update and delete are atomic with respect to each other.
#[derive(Clone, Default)]
pub struct MemoryPeopleStore {
    inner: Arc<RwLock<HashMap<String, Person>>>,
}

impl MemoryPeopleStore {
    /// Create an empty store. The map lives for the life of the process;
    /// there is no eviction and no capacity bound.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl PeopleStore for MemoryPeopleStore {
    async fn create(&self, person: Person) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        if map.contains_key(&person.name) {
            return Err(ServiceError::already_exists(&person.name));
        }
        map.insert(person.name.clone(), person);
        Ok(())
    }

    async fn get(&self, name: &str) -> Option<Person> {
        let map = self.inner.read().await;
        map.get(name).cloned()
    }

    async fn update(
        &self,
        name: &str,
        location: String,
        age: String,
    ) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        match map.get_mut(name) {
            Some(person) => {
                person.location = location;
                person.age = age;
                Ok(())
            }
            None => Err(ServiceError::not_found(name)),
        }
    }

    async fn remove(&self, name: &str) -> bool {
        let mut map = self.inner.write().await;
        map.remove(name).is_some()
    }

    async fn list(&self) -> Vec<Person> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }
}
