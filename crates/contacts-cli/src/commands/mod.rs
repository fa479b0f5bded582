// Command handlers for the contacts CLI

pub mod countries;
pub mod persons;

pub use countries::{CountriesAction, CountriesCommand};
pub use persons::{PersonFields, PersonQuery, PersonsAction, PersonsCommand};

use crate::error::CliResult;

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<()>;
}
