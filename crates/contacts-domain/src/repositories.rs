//! Repository interfaces for data persistence
//!
//! These traits are the storage collaborator of the services. Whether a
//! store keeps its records in a list, a file or a database is invisible to
//! callers; implementations live in infrastructure crates.
//!
//! Every list-returning method hands out an owned snapshot.

use async_trait::async_trait;

use crate::{
    entities::{Country, Person},
    errors::DomainResult,
    value_objects::{CountryId, PersonId},
};

/// Repository for country entities
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Store a new country
    async fn add(&self, country: &Country) -> DomainResult<()>;

    /// All countries in store order
    async fn find_all(&self) -> DomainResult<Vec<Country>>;

    /// Find country by ID
    async fn find_by_id(&self, id: &CountryId) -> DomainResult<Option<Country>>;

    /// Find country by exact (case-sensitive) name
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Country>>;
}

/// Repository for person entities
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Store a new person
    async fn add(&self, person: &Person) -> DomainResult<()>;

    /// All persons in store order
    async fn find_all(&self) -> DomainResult<Vec<Person>>;

    /// Find person by ID
    async fn find_by_id(&self, id: &PersonId) -> DomainResult<Option<Person>>;

    /// Replace the stored record with the same ID.
    ///
    /// Returns the stored record, or `None` when no record has that ID.
    async fn update(&self, person: &Person) -> DomainResult<Option<Person>>;

    /// Remove person by ID; `false` when nothing was removed
    async fn delete(&self, id: &PersonId) -> DomainResult<bool>;
}
