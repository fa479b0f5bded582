//! Country-related DTOs

use serde::{Deserialize, Serialize};

use contacts_domain::entities::Country;
use contacts_domain::validation::{FieldRules, Rule, Validatable};
use contacts_domain::value_objects::CountryId;

const COUNTRY_NAME_RULES: &[Rule] = &[Rule::Required("Country name cannot be blank")];

/// Request to add a country
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryAddRequest {
    pub country_name: Option<String>,
}

impl CountryAddRequest {
    pub fn new(country_name: impl Into<String>) -> Self {
        Self {
            country_name: Some(country_name.into()),
        }
    }
}

impl Validatable for CountryAddRequest {
    fn field_rules(&self) -> Vec<FieldRules<'_>> {
        vec![FieldRules::new(
            "CountryName",
            self.country_name.as_deref(),
            COUNTRY_NAME_RULES,
        )]
    }
}

/// Country view returned by the services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryResponse {
    pub country_id: CountryId,
    pub country_name: String,
}

impl CountryResponse {
    /// Create from domain entity
    pub fn from_domain(country: &Country) -> Self {
        Self {
            country_id: country.id(),
            country_name: country.name().to_string(),
        }
    }
}
