//! Country Application Service
//!
//! Registration, lookup and bulk import of countries. Country names are
//! unique by exact, case-sensitive comparison.

use std::sync::Arc;

use tracing::{debug, info, warn};

use contacts_domain::entities::Country;
use contacts_domain::repositories::CountryRepository;
use contacts_domain::validation::Validatable;
use contacts_domain::value_objects::CountryId;

use crate::dto::{CountryAddRequest, CountryResponse};
use crate::errors::{ApplicationError, ApplicationResult};

/// Country Application Service
pub struct CountryService<R>
where
    R: CountryRepository,
{
    repository: Arc<R>,
}

impl<R> CountryService<R>
where
    R: CountryRepository,
{
    /// Create a new CountryService with an injected repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Add a country with a fresh identifier
    ///
    /// Fails with `NullRequest` for an absent request, `Validation` for a
    /// missing or blank name and `DuplicateName` when the exact name is
    /// already registered.
    pub async fn add_country(
        &self,
        request: Option<CountryAddRequest>,
    ) -> ApplicationResult<CountryResponse> {
        let request =
            request.ok_or_else(|| ApplicationError::NullRequest("CountryAddRequest".into()))?;
        request.validate()?;

        let name = request.country_name.unwrap_or_default();
        if self.repository.find_by_name(&name).await?.is_some() {
            warn!(country_name = %name, "rejected duplicate country");
            return Err(ApplicationError::DuplicateName(name));
        }

        let country = Country::create(name)?;
        self.repository.add(&country).await?;

        info!(country_id = %country.id(), country_name = %country.name(), "country added");
        Ok(CountryResponse::from_domain(&country))
    }

    /// All countries in store order
    pub async fn get_all_countries(&self) -> ApplicationResult<Vec<CountryResponse>> {
        let countries = self.repository.find_all().await?;
        Ok(countries.iter().map(CountryResponse::from_domain).collect())
    }

    /// Country with the given identifier; an absent id yields `None`
    pub async fn get_country_by_id(
        &self,
        country_id: Option<CountryId>,
    ) -> ApplicationResult<Option<CountryResponse>> {
        let Some(country_id) = country_id else {
            return Ok(None);
        };
        let country = self.repository.find_by_id(&country_id).await?;
        Ok(country.as_ref().map(CountryResponse::from_domain))
    }

    /// Add every name that is non-blank and not yet registered
    ///
    /// Returns the number of countries inserted. Repeats within `names`
    /// are inserted once.
    pub async fn import_countries<I, S>(&self, names: I) -> ApplicationResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inserted = 0;
        for name in names {
            let name = name.as_ref();
            if name.trim().is_empty() {
                continue;
            }
            if self.repository.find_by_name(name).await?.is_some() {
                debug!(country_name = %name, "skipping existing country");
                continue;
            }
            self.add_country(Some(CountryAddRequest::new(name))).await?;
            inserted += 1;
        }

        info!(inserted, "country import finished");
        Ok(inserted)
    }

    /// Insert prebuilt countries, keeping their identifiers
    ///
    /// Countries whose name or identifier is already registered are
    /// skipped. Returns the number inserted.
    pub async fn seed(&self, countries: Vec<Country>) -> ApplicationResult<usize> {
        let mut inserted = 0;
        for country in countries {
            if self.repository.find_by_name(country.name()).await?.is_some()
                || self.repository.find_by_id(&country.id()).await?.is_some()
            {
                debug!(country_id = %country.id(), "skipping existing seed country");
                continue;
            }
            self.repository.add(&country).await?;
            inserted += 1;
        }

        debug!(inserted, "seeded countries");
        Ok(inserted)
    }
}
