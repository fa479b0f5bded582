//! Data Transfer Objects (DTOs) for layer boundary crossing
//!
//! Requests carry every field as optional so that "absent" reaches the
//! validation rules instead of being rejected by deserialization. Responses
//! are flat, fully resolved views handed back to callers.

pub mod country;
pub mod person;

pub use country::*;
pub use person::*;
