//! Domain entities

pub mod country;
pub mod person;

pub use country::Country;
pub use person::{Person, PersonDetails, ADDRESS_MAX_LEN, EMAIL_MAX_LEN, PERSON_NAME_MAX_LEN};
