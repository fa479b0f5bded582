//! JSON-file snapshot store
//!
//! Keeps the whole contact book in memory and rewrites one JSON document
//! after every successful write. Writes go to a sibling temp file which is
//! then renamed over the target, so a crash never leaves a half-written
//! document behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use contacts_domain::{
    entities::{Country, Person, PersonDetails},
    errors::{DomainError, DomainResult},
    repositories::{CountryRepository, PersonRepository},
    value_objects::{CountryId, Gender, PersonId},
};

use crate::error::{PersistenceError, PersistenceResult};

/// On-disk document layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub persons: Vec<Person>,
}

impl StoreDocument {
    /// Rebuild each record through its validating constructor
    fn check(&self) -> PersistenceResult<()> {
        for country in &self.countries {
            Country::with_id(country.id(), country.name())
                .map_err(|e| invalid_record("country", &country.id(), e))?;
        }
        for person in &self.persons {
            let gender = person
                .gender()
                .map(str::parse::<Gender>)
                .transpose()
                .map_err(|e| invalid_record("person", &person.id(), e))?;
            let details = PersonDetails {
                name: Some(person.name().to_string()),
                date_of_birth: person.date_of_birth(),
                email: person.email().map(str::to_string),
                gender,
                address: person.address().map(str::to_string),
                country_id: person.country_id(),
                receive_news_letters: person.receive_news_letters(),
            };
            Person::with_id(person.id(), details)
                .map_err(|e| invalid_record("person", &person.id(), e))?;
        }
        Ok(())
    }
}

fn invalid_record(kind: &str, id: &dyn std::fmt::Display, err: DomainError) -> PersistenceError {
    PersistenceError::InvalidRecord(format!("{} {}: {}", kind, id, err))
}

/// File-backed implementation of both repository traits
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    document: RwLock<StoreDocument>,
}

impl JsonFileStore {
    /// Open the store at `path`; a missing file yields an empty store
    ///
    /// Every stored record is re-checked against the entity rules, so a
    /// hand-edited document with an invalid record fails with
    /// [`PersistenceError::InvalidRecord`].
    pub fn open(path: impl Into<PathBuf>) -> PersistenceResult<Self> {
        let path = path.into();
        let document = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                StoreDocument::default()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            StoreDocument::default()
        };
        document.check()?;
        info!(
            path = %path.display(),
            countries = document.countries.len(),
            persons = document.persons.len(),
            "opened contacts store"
        );
        Ok(Self {
            path,
            document: RwLock::new(document),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of the current document
    pub fn snapshot(&self) -> StoreDocument {
        self.document.read().clone()
    }

    fn persist(&self, document: &StoreDocument) -> PersistenceResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(document)?;
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, &self.path)?;

        debug!(path = %self.path.display(), "flushed contacts store");
        Ok(())
    }

    /// Apply `change` to a copy of the document and swap it in once flushed,
    /// so a failed write leaves the in-memory state untouched
    fn write_with<T>(&self, change: impl FnOnce(&mut StoreDocument) -> T) -> DomainResult<T> {
        let mut guard = self.document.write();
        let mut next = guard.clone();
        let outcome = change(&mut next);
        self.persist(&next)?;
        *guard = next;
        Ok(outcome)
    }
}

#[async_trait]
impl CountryRepository for JsonFileStore {
    async fn add(&self, country: &Country) -> DomainResult<()> {
        self.write_with(|doc| doc.countries.push(country.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Country>> {
        Ok(self.document.read().countries.clone())
    }

    async fn find_by_id(&self, id: &CountryId) -> DomainResult<Option<Country>> {
        let document = self.document.read();
        Ok(document.countries.iter().find(|c| c.id() == *id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Country>> {
        let document = self.document.read();
        Ok(document.countries.iter().find(|c| c.name() == name).cloned())
    }
}

#[async_trait]
impl PersonRepository for JsonFileStore {
    async fn add(&self, person: &Person) -> DomainResult<()> {
        self.write_with(|doc| doc.persons.push(person.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Person>> {
        Ok(self.document.read().persons.clone())
    }

    async fn find_by_id(&self, id: &PersonId) -> DomainResult<Option<Person>> {
        let document = self.document.read();
        Ok(document.persons.iter().find(|p| p.id() == *id).cloned())
    }

    async fn update(&self, person: &Person) -> DomainResult<Option<Person>> {
        let exists = self
            .document
            .read()
            .persons
            .iter()
            .any(|p| p.id() == person.id());
        if !exists {
            return Ok(None);
        }

        self.write_with(|doc| {
            doc.persons
                .iter_mut()
                .find(|p| p.id() == person.id())
                .map(|slot| {
                    *slot = person.clone();
                    slot.clone()
                })
        })
    }

    async fn delete(&self, id: &PersonId) -> DomainResult<bool> {
        let exists = self.document.read().persons.iter().any(|p| p.id() == *id);
        if !exists {
            return Ok(false);
        }

        self.write_with(|doc| {
            let before = doc.persons.len();
            doc.persons.retain(|p| p.id() != *id);
            doc.persons.len() != before
        })
    }
}
