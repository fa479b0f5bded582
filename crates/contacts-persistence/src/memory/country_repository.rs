//! In-Memory Country Repository Implementation

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use contacts_domain::{
    entities::Country, errors::DomainResult, repositories::CountryRepository,
    value_objects::CountryId,
};

/// Thread-safe in-memory implementation of CountryRepository
///
/// Keeps countries in insertion order behind an RwLock and hands out
/// cloned snapshots, so callers never observe later mutations.
///
/// # Example
///
/// ```ignore
/// use contacts_persistence::memory::InMemoryCountryRepository;
/// use std::sync::Arc;
///
/// let repo = Arc::new(InMemoryCountryRepository::new());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCountryRepository {
    countries: RwLock<Vec<Country>>,
}

impl InMemoryCountryRepository {
    /// Create a new empty in-memory country repository
    pub fn new() -> Self {
        Self {
            countries: RwLock::new(Vec::new()),
        }
    }

    /// Create with initial countries (useful for testing and seeding)
    pub fn with_countries(countries: Vec<Country>) -> Self {
        Self {
            countries: RwLock::new(countries),
        }
    }

    /// Get the current count of countries
    pub fn count(&self) -> usize {
        self.countries.read().len()
    }

    /// Clear all countries
    pub fn clear(&self) {
        self.countries.write().clear();
    }
}

#[async_trait]
impl CountryRepository for InMemoryCountryRepository {
    async fn add(&self, country: &Country) -> DomainResult<()> {
        debug!(country_id = %country.id(), "storing country");
        self.countries.write().push(country.clone());
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Country>> {
        Ok(self.countries.read().clone())
    }

    async fn find_by_id(&self, id: &CountryId) -> DomainResult<Option<Country>> {
        let countries = self.countries.read();
        Ok(countries.iter().find(|c| c.id() == *id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Country>> {
        let countries = self.countries.read();
        Ok(countries.iter().find(|c| c.name() == name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_find_by_id() {
        let repo = InMemoryCountryRepository::new();
        let country = Country::create("Egypt").unwrap();

        repo.add(&country).await.unwrap();

        let found = repo.find_by_id(&country.id()).await.unwrap();
        assert_eq!(found, Some(country));
    }

    #[tokio::test]
    async fn test_find_by_name_is_case_sensitive() {
        let repo = InMemoryCountryRepository::new();
        repo.add(&Country::create("Egypt").unwrap()).await.unwrap();

        assert!(repo.find_by_name("Egypt").await.unwrap().is_some());
        assert!(repo.find_by_name("egypt").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let repo = InMemoryCountryRepository::new();
        for name in ["Egypt", "China", "Brazil"] {
            repo.add(&Country::create(name).unwrap()).await.unwrap();
        }

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, ["Egypt", "China", "Brazil"]);
    }

    #[tokio::test]
    async fn test_count_and_clear() {
        let repo = InMemoryCountryRepository::with_countries(vec![
            Country::create("Egypt").unwrap(),
            Country::create("Peru").unwrap(),
        ]);
        assert_eq!(repo.count(), 2);

        repo.clear();
        assert_eq!(repo.count(), 0);
    }
}
