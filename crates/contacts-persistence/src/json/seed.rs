//! Country seed files
//!
//! A seed file is a JSON array of objects with a `CountryName` and an
//! optional `CountryID`:
//!
//! ```json
//! [
//!   { "CountryID": "14629847-905a-4a0e-9abe-80b61655c5cb", "CountryName": "Philippines" },
//!   { "CountryName": "Thailand" }
//! ]
//! ```
//!
//! Records without an identifier get a fresh one.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use contacts_domain::{entities::Country, value_objects::CountryId};

use crate::error::{PersistenceError, PersistenceResult};

/// One entry of a seed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCountry {
    #[serde(rename = "CountryID", alias = "country_id", default)]
    pub id: Option<uuid::Uuid>,
    #[serde(rename = "CountryName", alias = "country_name")]
    pub name: String,
}

impl SeedCountry {
    fn into_country(self) -> PersistenceResult<Country> {
        let id = self.id.map(CountryId::from_uuid).unwrap_or_default();
        Country::with_id(id, self.name).map_err(|e| PersistenceError::InvalidRecord(e.to_string()))
    }
}

/// Parse seed JSON text into countries
pub fn parse_country_seed(content: &str) -> PersistenceResult<Vec<Country>> {
    let entries: Vec<SeedCountry> = serde_json::from_str(content)?;
    entries.into_iter().map(SeedCountry::into_country).collect()
}

/// Load countries from a seed file
pub fn load_country_seed(path: impl AsRef<Path>) -> PersistenceResult<Vec<Country>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PersistenceError::NotFound {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let countries = parse_country_seed(&content)?;
    info!(path = %path.display(), count = countries.len(), "loaded country seed");
    Ok(countries)
}
