//! JSON-file backed storage
//!
//! A single-document store for the command-line collaborator plus the
//! country seed loader.

mod seed;
mod store;

pub use seed::{load_country_seed, parse_country_seed, SeedCountry};
pub use store::{JsonFileStore, StoreDocument};
