//! Person-related DTOs

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use contacts_domain::entities::{Person, PersonDetails};
use contacts_domain::value_objects::{CountryId, Gender, PersonId};

/// Request to add a person
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAddRequest {
    pub person_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    #[serde(default)]
    pub receive_news_letters: bool,
}

impl PersonAddRequest {
    /// Convert into the domain's replaceable person fields
    pub fn to_details(&self) -> PersonDetails {
        PersonDetails {
            name: self.person_name.clone(),
            date_of_birth: self.date_of_birth,
            email: self.email.clone(),
            gender: self.gender,
            address: self.address.clone(),
            country_id: self.country_id,
            receive_news_letters: self.receive_news_letters,
        }
    }
}

/// Request to replace every mutable field of an existing person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonUpdateRequest {
    pub person_id: PersonId,
    pub person_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    #[serde(default)]
    pub receive_news_letters: bool,
}

impl PersonUpdateRequest {
    /// Convert into the domain's replaceable person fields
    pub fn to_details(&self) -> PersonDetails {
        PersonDetails {
            name: self.person_name.clone(),
            date_of_birth: self.date_of_birth,
            email: self.email.clone(),
            gender: self.gender,
            address: self.address.clone(),
            country_id: self.country_id,
            receive_news_letters: self.receive_news_letters,
        }
    }
}

/// Person view returned by the services, with derived fields resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonResponse {
    pub person_id: PersonId,
    pub person_name: String,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub country_id: Option<CountryId>,
    /// Name of the referenced country, if it exists
    pub country: Option<String>,
    pub address: Option<String>,
    pub receive_news_letters: bool,
    /// Whole years since the birth year, by calendar year only
    pub age: Option<i32>,
}

impl PersonResponse {
    /// Create from domain entity, computing age against the current year
    pub fn from_domain(person: &Person, country: Option<String>) -> Self {
        Self::from_domain_at(person, country, Utc::now().year())
    }

    /// Create from domain entity, computing age against `year`
    pub fn from_domain_at(person: &Person, country: Option<String>, year: i32) -> Self {
        Self {
            person_id: person.id(),
            person_name: person.name().to_string(),
            email: person.email().map(str::to_string),
            date_of_birth: person.date_of_birth(),
            gender: person.gender().map(str::to_string),
            country_id: person.country_id(),
            country,
            address: person.address().map(str::to_string),
            receive_news_letters: person.receive_news_letters(),
            age: person.age_in(year),
        }
    }

    /// Prefill an update request with the current field values
    ///
    /// A stored gender that no longer parses is dropped.
    pub fn to_update_request(&self) -> PersonUpdateRequest {
        PersonUpdateRequest {
            person_id: self.person_id,
            person_name: Some(self.person_name.clone()),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth,
            gender: self.gender.as_deref().and_then(|g| g.parse().ok()),
            country_id: self.country_id,
            address: self.address.clone(),
            receive_news_letters: self.receive_news_letters,
        }
    }
}

/// Sort direction for [`crate::services::PersonService::get_sorted_persons`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrderOptions {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortOrderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrderOptions::Asc => f.write_str("ASC"),
            SortOrderOptions::Desc => f.write_str("DESC"),
        }
    }
}

impl FromStr for SortOrderOptions {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrderOptions::Asc),
            "desc" | "descending" => Ok(SortOrderOptions::Desc),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}
