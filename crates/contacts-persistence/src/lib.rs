//! Contacts Persistence Layer
//!
//! Infrastructure layer providing repository implementations for the
//! contacts domain. This crate implements the repository interfaces defined
//! in `contacts-domain`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Infrastructure Layer                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  memory/                      │  json/                           │
//! │  ─────────                    │  ─────                           │
//! │  InMemoryCountryRepository    │  JsonFileStore                   │
//! │  InMemoryPersonRepository     │  load_country_seed               │
//! └─────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ implements
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Domain Layer                               │
//! │           CountryRepository, PersonRepository                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use contacts_persistence::memory::InMemoryPersonRepository;
//! use contacts_domain::repositories::PersonRepository;
//! use std::sync::Arc;
//!
//! let repo: Arc<dyn PersonRepository> = Arc::new(InMemoryPersonRepository::new());
//! ```

pub mod error;
pub mod json;
pub mod memory;

pub use error::{PersistenceError, PersistenceResult};

pub use json::{load_country_seed, JsonFileStore, StoreDocument};
pub use memory::{InMemoryCountryRepository, InMemoryPersonRepository};
