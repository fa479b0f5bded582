//! Persons command - list, show, add, update and delete persons

use async_trait::async_trait;
use chrono::NaiveDate;
use clap::Args;

use contacts_application::dto::{
    PersonAddRequest, PersonResponse, PersonUpdateRequest, SortOrderOptions,
};
use contacts_application::errors::ApplicationError;
use contacts_application::query;
use contacts_application::services::{CountryService, PersonService};
use contacts_domain::repositories::{CountryRepository, PersonRepository};
use contacts_domain::value_objects::{CountryId, Gender, PersonId};

use crate::commands::Command;
use crate::error::{CliError, CliResult};
use crate::output::{self, OutputStyle};

/// Search and ordering options for `persons list`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonQuery {
    /// Field to search in, e.g. PersonName or Email
    #[arg(long, value_name = "FIELD")]
    pub search_by: Option<String>,

    /// Text the field must contain, ignoring case
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Field to order by
    #[arg(long, value_name = "FIELD")]
    pub sort_by: Option<String>,

    /// Order descending
    #[arg(long)]
    pub desc: bool,
}

/// Person fields accepted by `persons add` and `persons update`
///
/// On update, omitted fields keep their current value and an empty string
/// clears an optional one.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFields {
    /// Person name
    #[arg(long)]
    pub name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub dob: Option<NaiveDate>,

    /// Male, Female or Other
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Country id or exact country name
    #[arg(long)]
    pub country: Option<String>,

    /// Postal address
    #[arg(long)]
    pub address: Option<String>,

    /// Receive newsletters
    #[arg(long, value_name = "BOOL")]
    pub newsletter: Option<bool>,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl PersonFields {
    fn to_add_request(&self, country_id: Option<CountryId>) -> PersonAddRequest {
        PersonAddRequest {
            person_name: self.name.clone(),
            email: self.email.as_deref().and_then(non_empty),
            date_of_birth: self.dob,
            gender: self.gender,
            country_id,
            address: self.address.as_deref().and_then(non_empty),
            receive_news_letters: self.newsletter.unwrap_or(false),
        }
    }

    fn merge_into(&self, request: &mut PersonUpdateRequest) {
        if let Some(name) = &self.name {
            request.person_name = Some(name.clone());
        }
        if let Some(email) = &self.email {
            request.email = non_empty(email);
        }
        if let Some(dob) = self.dob {
            request.date_of_birth = Some(dob);
        }
        if let Some(gender) = self.gender {
            request.gender = Some(gender);
        }
        if let Some(address) = &self.address {
            request.address = non_empty(address);
        }
        if let Some(newsletter) = self.newsletter {
            request.receive_news_letters = newsletter;
        }
    }
}

/// Persons command action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonsAction {
    /// List persons, optionally searched and ordered
    List(PersonQuery),
    /// Show one person
    Show { id: PersonId },
    /// Add a person
    Add(PersonFields),
    /// Change fields of a person
    Update { id: PersonId, fields: PersonFields },
    /// Delete a person
    Delete { id: PersonId },
}

/// Persons command handler
pub struct PersonsCommand<P, C>
where
    P: PersonRepository,
    C: CountryRepository,
{
    persons: PersonService<P, C>,
    countries: CountryService<C>,
    action: PersonsAction,
}

impl<P, C> PersonsCommand<P, C>
where
    P: PersonRepository,
    C: CountryRepository,
{
    /// Create a new persons command
    pub fn new(
        persons: PersonService<P, C>,
        countries: CountryService<C>,
        action: PersonsAction,
    ) -> Self {
        Self {
            persons,
            countries,
            action,
        }
    }

    /// Resolve `--country`: an id is taken as is, anything else must be an
    /// existing country name, and an empty value means no country
    async fn resolve_country(&self, value: &str) -> CliResult<Option<CountryId>> {
        if value.is_empty() {
            return Ok(None);
        }
        if let Ok(id) = value.parse::<CountryId>() {
            return Ok(Some(id));
        }
        self.countries
            .get_all_countries()
            .await?
            .into_iter()
            .find(|c| c.country_name == value)
            .map(|c| Some(c.country_id))
            .ok_or_else(|| CliError::invalid_argument(format!("unknown country '{}'", value)))
    }

    async fn list(&self, options: &PersonQuery) -> CliResult<()> {
        for field in [&options.search_by, &options.sort_by].into_iter().flatten() {
            if !field.is_empty() && query::resolve_field(field).is_none() {
                output::print_warning(&format!(
                    "Unknown field '{}' ignored; known fields: {}",
                    field,
                    query::field_names().collect::<Vec<_>>().join(", ")
                ));
            }
        }

        let filtered = self
            .persons
            .get_filtered_persons(options.search_by.as_deref(), options.search.as_deref())
            .await?;
        let order = if options.desc {
            SortOrderOptions::Desc
        } else {
            SortOrderOptions::Asc
        };
        let sorted = self
            .persons
            .get_sorted_persons(filtered, options.sort_by.as_deref(), order);

        let style = OutputStyle::default();
        println!("{}", style.table(&PERSON_HEADERS, &person_rows(&sorted)));
        Ok(())
    }

    async fn show(&self, id: PersonId) -> CliResult<()> {
        let person = self
            .persons
            .get_person_by_id(Some(id))
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("Person {}", id)))?;

        let style = OutputStyle::default();
        for (header, value) in PERSON_HEADERS.iter().zip(person_row(&person)) {
            println!("{}", style.key_value(header, &value));
        }
        Ok(())
    }

    async fn add(&self, fields: &PersonFields) -> CliResult<()> {
        let country_id = match fields.country.as_deref() {
            Some(value) => self.resolve_country(value).await?,
            None => None,
        };
        let added = self
            .persons
            .add_person(Some(fields.to_add_request(country_id)))
            .await?;
        output::print_success(&format!(
            "Added person {} ({})",
            added.person_name, added.person_id
        ));
        Ok(())
    }

    async fn update(&self, id: PersonId, fields: &PersonFields) -> CliResult<()> {
        let current = self
            .persons
            .get_person_by_id(Some(id))
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("Person {}", id)))?;

        let mut request = current.to_update_request();
        fields.merge_into(&mut request);
        if let Some(value) = fields.country.as_deref() {
            request.country_id = self.resolve_country(value).await?;
        }

        let updated = self.persons.update_person(Some(request)).await?;
        output::print_success(&format!(
            "Updated person {} ({})",
            updated.person_name, updated.person_id
        ));
        Ok(())
    }

    async fn delete(&self, id: PersonId) -> CliResult<()> {
        if self.persons.delete_person(Some(id)).await? {
            output::print_success(&format!("Deleted person {}", id));
        } else {
            output::print_warning(&format!("No person with id {}", id));
        }
        Ok(())
    }
}

#[async_trait]
impl<P, C> Command for PersonsCommand<P, C>
where
    P: PersonRepository + 'static,
    C: CountryRepository + 'static,
{
    async fn execute(&self) -> CliResult<()> {
        match &self.action {
            PersonsAction::List(options) => self.list(options).await,
            PersonsAction::Show { id } => self.show(*id).await,
            PersonsAction::Add(fields) => self.add(fields).await,
            PersonsAction::Update { id, fields } => self.update(*id, fields).await,
            PersonsAction::Delete { id } => self.delete(*id).await,
        }
    }
}

const PERSON_HEADERS: [&str; 9] = [
    "ID",
    "Name",
    "Email",
    "Date of Birth",
    "Age",
    "Gender",
    "Country",
    "Address",
    "Newsletters",
];

fn person_row(person: &PersonResponse) -> Vec<String> {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    vec![
        person.person_id.to_string(),
        person.person_name.clone(),
        text(&person.email),
        person
            .date_of_birth
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        person.age.map(|a| a.to_string()).unwrap_or_default(),
        text(&person.gender),
        text(&person.country),
        text(&person.address),
        if person.receive_news_letters { "yes" } else { "no" }.to_string(),
    ]
}

fn person_rows(persons: &[PersonResponse]) -> Vec<Vec<String>> {
    persons.iter().map(person_row).collect()
}
