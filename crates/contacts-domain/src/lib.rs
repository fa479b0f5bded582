//! Contacts Domain Layer
//!
//! Entities, value objects, validation rules and repository contracts for
//! the contacts manager. This crate has no knowledge of storage engines or
//! presentation; infrastructure crates implement [`repositories`].
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      Domain Layer                         │
//! ├──────────────────────────────────────────────────────────┤
//! │  entities        │ value_objects  │ validation            │
//! │  Country, Person │ CountryId,     │ Rule, Validatable     │
//! │  PersonDetails   │ PersonId,      │                       │
//! │                  │ Gender         │                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  repositories: CountryRepository, PersonRepository        │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod validation;
pub mod value_objects;

pub use entities::{Country, Person, PersonDetails};
pub use errors::{DomainError, DomainResult};
pub use repositories::{CountryRepository, PersonRepository};
pub use validation::{FieldRules, Rule, Validatable, Violation};
pub use value_objects::{CountryId, Gender, PersonId};
