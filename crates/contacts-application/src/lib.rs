//! Contacts Application Layer
//!
//! Use-case services for the contact manager. Services depend only on the
//! repository traits of `contacts-domain`; storage engines are injected.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Presentation (CLI)                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Application Layer (this crate)                              │
//! │    services: CountryService, PersonService                   │
//! │    dto:      requests and responses                          │
//! │    query:    field-name filtering and sorting                │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   Domain Layer                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod errors;
pub mod query;
pub mod services;

pub use dto::{
    CountryAddRequest, CountryResponse, PersonAddRequest, PersonResponse, PersonUpdateRequest,
    SortOrderOptions,
};
pub use errors::{ApplicationError, ApplicationResult};
pub use services::{CountryService, PersonService};
