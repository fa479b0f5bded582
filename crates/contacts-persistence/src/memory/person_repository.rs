//! In-Memory Person Repository Implementation

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use contacts_domain::{
    entities::Person, errors::DomainResult, repositories::PersonRepository,
    value_objects::PersonId,
};

/// Thread-safe in-memory implementation of PersonRepository
///
/// Insertion-ordered list of cloned Person records.
#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    persons: RwLock<Vec<Person>>,
}

impl InMemoryPersonRepository {
    /// Create a new empty in-memory person repository
    pub fn new() -> Self {
        Self {
            persons: RwLock::new(Vec::new()),
        }
    }

    /// Create with initial persons (useful for testing)
    pub fn with_persons(persons: Vec<Person>) -> Self {
        Self {
            persons: RwLock::new(persons),
        }
    }

    /// Get the current count of persons
    pub fn count(&self) -> usize {
        self.persons.read().len()
    }

    /// Clear all persons
    pub fn clear(&self) {
        self.persons.write().clear();
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn add(&self, person: &Person) -> DomainResult<()> {
        debug!(person_id = %person.id(), "storing person");
        self.persons.write().push(person.clone());
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Person>> {
        Ok(self.persons.read().clone())
    }

    async fn find_by_id(&self, id: &PersonId) -> DomainResult<Option<Person>> {
        let persons = self.persons.read();
        Ok(persons.iter().find(|p| p.id() == *id).cloned())
    }

    async fn update(&self, person: &Person) -> DomainResult<Option<Person>> {
        let mut persons = self.persons.write();
        match persons.iter_mut().find(|p| p.id() == person.id()) {
            Some(slot) => {
                *slot = person.clone();
                Ok(Some(slot.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &PersonId) -> DomainResult<bool> {
        let mut persons = self.persons.write();
        let before = persons.len();
        persons.retain(|p| p.id() != *id);
        Ok(persons.len() != before)
    }
}
