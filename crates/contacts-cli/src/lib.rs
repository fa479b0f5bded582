//! Contacts command-line front end
//!
//! Parses arguments, loads configuration, wires the configured storage
//! backend into the application services and renders their results.

pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod router;
