//! Application layer services
//!
//! These services orchestrate the domain entities and implement the contact
//! manager's use cases. All services are stateless and use constructor
//! injection for their repositories.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Services                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CountryService  - Country registration, lookup and import   │
//! │  PersonService   - Person CRUD, search and ordering          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Responsibilities
//!
//! - Reject absent requests and identifiers up front
//! - Run field validation before touching storage
//! - Map domain entities to response DTOs
//!
//! # Non-Goals
//!
//! - Field rules (belong in the Domain Layer)
//! - Direct I/O (belongs in the Persistence Layer)

mod country_service;
mod person_service;

pub use country_service::CountryService;
pub use person_service::PersonService;
