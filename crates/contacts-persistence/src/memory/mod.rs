//! In-Memory Repository Implementations
//!
//! Thread-safe in-memory implementations of domain repository interfaces.
//! Suitable for testing and development.

mod country_repository;
mod person_repository;

pub use country_repository::InMemoryCountryRepository;
pub use person_repository::InMemoryPersonRepository;
