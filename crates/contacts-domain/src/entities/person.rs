//! Person entity

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::validation::{FieldRules, Rule, Validatable};
use crate::value_objects::{CountryId, Gender, PersonId};

/// Maximum length of a person's name
pub const PERSON_NAME_MAX_LEN: usize = 40;
/// Maximum length of an email address
pub const EMAIL_MAX_LEN: usize = 40;
/// Maximum length of a postal address
pub const ADDRESS_MAX_LEN: usize = 60;

const PERSON_NAME_RULES: &[Rule] = &[
    Rule::Required("Person name cannot be blank"),
    Rule::MaxLength(PERSON_NAME_MAX_LEN, "Person name cannot exceed 40 characters"),
];
const EMAIL_RULES: &[Rule] = &[
    Rule::Email("Invalid email address"),
    Rule::MaxLength(EMAIL_MAX_LEN, "Email cannot exceed 40 characters"),
];
const ADDRESS_RULES: &[Rule] = &[Rule::MaxLength(
    ADDRESS_MAX_LEN,
    "Address cannot exceed 60 characters",
)];

/// The replaceable part of a person: everything except the identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub country_id: Option<CountryId>,
    pub receive_news_letters: bool,
}

impl Validatable for PersonDetails {
    fn field_rules(&self) -> Vec<FieldRules<'_>> {
        vec![
            FieldRules::new("PersonName", self.name.as_deref(), PERSON_NAME_RULES),
            FieldRules::new("Email", self.email.as_deref(), EMAIL_RULES),
            FieldRules::new("Address", self.address.as_deref(), ADDRESS_RULES),
        ]
    }
}

/// A contact
///
/// `country_id` is a weak reference: it may point at a country that does
/// not exist, in which case lookups simply yield no country name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    name: String,
    date_of_birth: Option<NaiveDate>,
    email: Option<String>,
    gender: Option<String>,
    address: Option<String>,
    country_id: Option<CountryId>,
    receive_news_letters: bool,
}

impl Person {
    /// Validate the details and create a person with a fresh identifier
    pub fn create(details: PersonDetails) -> DomainResult<Self> {
        Self::with_id(PersonId::new(), details)
    }

    /// Validate the details and build a person with a known identifier
    pub fn with_id(id: PersonId, details: PersonDetails) -> DomainResult<Self> {
        details.validate()?;
        let name = details
            .name
            .ok_or_else(|| DomainError::validation("Person name cannot be blank"))?;

        Ok(Self {
            id,
            name,
            date_of_birth: details.date_of_birth,
            email: details.email,
            gender: details.gender.map(|g| g.to_string()),
            address: details.address,
            country_id: details.country_id,
            receive_news_letters: details.receive_news_letters,
        })
    }

    /// Replace every mutable field; the identifier is kept
    pub fn apply(&mut self, details: PersonDetails) -> DomainResult<()> {
        *self = Self::with_id(self.id, details)?;
        Ok(())
    }

    /// Age in whole years as of `year`, by calendar year only
    pub fn age_in(&self, year: i32) -> Option<i32> {
        self.date_of_birth.map(|dob| year - dob.year())
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Gender in its stored text form
    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn country_id(&self) -> Option<CountryId> {
        self.country_id
    }

    pub fn receive_news_letters(&self) -> bool {
        self.receive_news_letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str) -> PersonDetails {
        PersonDetails {
            name: Some(name.to_string()),
            email: Some("someone@example.com".into()),
            gender: Some(Gender::Female),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_stores_gender_as_text() {
        let person = Person::create(details("Mona")).unwrap();
        assert_eq!(person.gender(), Some("Female"));
        assert_eq!(person.name(), "Mona");
    }

    #[test]
    fn test_create_reports_every_violation() {
        let bad = PersonDetails {
            name: None,
            email: Some("not-an-email".into()),
            address: Some("x".repeat(61)),
            ..Default::default()
        };
        let err = Person::create(bad).unwrap_err();
        assert_eq!(err.messages().len(), 3);
    }

    #[test]
    fn test_apply_keeps_identifier() {
        let mut person = Person::create(details("Mona")).unwrap();
        let id = person.id();
        person.apply(details("Sara")).unwrap();
        assert_eq!(person.id(), id);
        assert_eq!(person.name(), "Sara");
    }

    #[test]
    fn test_apply_rejects_invalid_without_mutation() {
        let mut person = Person::create(details("Mona")).unwrap();
        let before = person.clone();
        assert!(person.apply(PersonDetails::default()).is_err());
        assert_eq!(person, before);
    }

    #[test]
    fn test_age_by_calendar_year() {
        let person = Person::create(details("Mona")).unwrap();
        assert_eq!(person.age_in(2024), Some(34));

        let no_dob = Person::create(PersonDetails {
            name: Some("Ali".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(no_dob.age_in(2024), None);
    }
}
