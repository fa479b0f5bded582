//! Person Application Service
//!
//! CRUD over persons plus the text-driven search and ordering used by list
//! views. Country names are joined in at read time, so renaming or removing
//! a country is reflected immediately and a dangling `country_id` simply
//! yields no country name.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use contacts_domain::entities::Person;
use contacts_domain::repositories::{CountryRepository, PersonRepository};
use contacts_domain::validation::Validatable;
use contacts_domain::value_objects::{CountryId, PersonId};

use crate::dto::{PersonAddRequest, PersonResponse, PersonUpdateRequest, SortOrderOptions};
use crate::errors::{ApplicationError, ApplicationResult};
use crate::query;

/// Person Application Service
pub struct PersonService<P, C>
where
    P: PersonRepository,
    C: CountryRepository,
{
    persons: Arc<P>,
    countries: Arc<C>,
}

impl<P, C> PersonService<P, C>
where
    P: PersonRepository,
    C: CountryRepository,
{
    /// Create a new PersonService with injected repositories
    pub fn new(persons: Arc<P>, countries: Arc<C>) -> Self {
        Self { persons, countries }
    }

    /// Add a person with a fresh identifier
    pub async fn add_person(
        &self,
        request: Option<PersonAddRequest>,
    ) -> ApplicationResult<PersonResponse> {
        let request =
            request.ok_or_else(|| ApplicationError::NullRequest("PersonAddRequest".into()))?;

        let person = Person::create(request.to_details()).map_err(|e| {
            warn!(error = %e, "rejected person");
            ApplicationError::from(e)
        })?;
        self.persons.add(&person).await?;

        info!(person_id = %person.id(), "person added");
        self.to_response(&person).await
    }

    /// Person with the given identifier; an absent id yields `None`
    pub async fn get_person_by_id(
        &self,
        person_id: Option<PersonId>,
    ) -> ApplicationResult<Option<PersonResponse>> {
        let Some(person_id) = person_id else {
            return Ok(None);
        };
        match self.persons.find_by_id(&person_id).await? {
            Some(person) => Ok(Some(self.to_response(&person).await?)),
            None => Ok(None),
        }
    }

    /// All persons in store order
    pub async fn get_all_persons(&self) -> ApplicationResult<Vec<PersonResponse>> {
        let persons = self.persons.find_all().await?;
        let country_names = self.country_names().await?;

        Ok(persons
            .iter()
            .map(|person| {
                let country = person
                    .country_id()
                    .and_then(|id| country_names.get(&id).cloned());
                PersonResponse::from_domain(person, country)
            })
            .collect())
    }

    /// Persons whose `search_by` field contains `search_value`, ignoring case
    ///
    /// Falls back to every person when either argument is absent or empty,
    /// or when the field name is unknown.
    pub async fn get_filtered_persons(
        &self,
        search_by: Option<&str>,
        search_value: Option<&str>,
    ) -> ApplicationResult<Vec<PersonResponse>> {
        let all = self.get_all_persons().await?;
        let total = all.len();
        let filtered = query::filter_persons(all, search_by, search_value);

        debug!(
            search_by = search_by.unwrap_or_default(),
            matched = filtered.len(),
            total,
            "filtered persons"
        );
        Ok(filtered)
    }

    /// Stable ordering of `persons` by the `sort_by` field
    ///
    /// An absent, empty or unknown field name returns `persons` unchanged.
    pub fn get_sorted_persons(
        &self,
        persons: Vec<PersonResponse>,
        sort_by: Option<&str>,
        order: SortOrderOptions,
    ) -> Vec<PersonResponse> {
        query::sort_persons(persons, sort_by, order)
    }

    /// Replace every mutable field of an existing person
    ///
    /// Validation runs before the lookup, so an invalid request for an
    /// unknown id reports `Validation` rather than `NotFound`.
    pub async fn update_person(
        &self,
        request: Option<PersonUpdateRequest>,
    ) -> ApplicationResult<PersonResponse> {
        let request =
            request.ok_or_else(|| ApplicationError::NullRequest("PersonUpdateRequest".into()))?;
        let details = request.to_details();
        details.validate()?;

        let not_found = || ApplicationError::NotFound(format!("Person {}", request.person_id));

        let mut person = self
            .persons
            .find_by_id(&request.person_id)
            .await?
            .ok_or_else(not_found)?;
        person.apply(details)?;

        let updated = self.persons.update(&person).await?.ok_or_else(not_found)?;

        info!(person_id = %updated.id(), "person updated");
        self.to_response(&updated).await
    }

    /// Delete a person; `false` when no person has the id
    pub async fn delete_person(&self, person_id: Option<PersonId>) -> ApplicationResult<bool> {
        let person_id = person_id.ok_or_else(|| ApplicationError::NullId("PersonID".into()))?;
        let deleted = self.persons.delete(&person_id).await?;
        if deleted {
            info!(person_id = %person_id, "person deleted");
        }
        Ok(deleted)
    }

    async fn to_response(&self, person: &Person) -> ApplicationResult<PersonResponse> {
        let country = match person.country_id() {
            Some(id) => self
                .countries
                .find_by_id(&id)
                .await?
                .map(|c| c.name().to_string()),
            None => None,
        };
        Ok(PersonResponse::from_domain(person, country))
    }

    async fn country_names(&self) -> ApplicationResult<HashMap<CountryId, String>> {
        Ok(self
            .countries
            .find_all()
            .await?
            .into_iter()
            .map(|c| (c.id(), c.name().to_string()))
            .collect())
    }
}
