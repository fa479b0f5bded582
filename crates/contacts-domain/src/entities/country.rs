//! Country entity

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::CountryId;

/// A country a person can be linked to
///
/// Countries are only ever created; the name is unique across the store,
/// which the country service enforces before insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    id: CountryId,
    name: String,
}

impl Country {
    /// Create a new country with a freshly generated identifier
    pub fn create(name: impl Into<String>) -> DomainResult<Self> {
        Self::with_id(CountryId::new(), name)
    }

    /// Rebuild a country with a known identifier (seeding, storage)
    pub fn with_id(id: CountryId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Country name cannot be blank"));
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> CountryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_id() {
        let country = Country::create("Egypt").unwrap();
        assert!(!country.id().is_nil());
        assert_eq!(country.name(), "Egypt");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(Country::create("  ").is_err());
    }
}
