//! Countries command - list, add and import countries

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use contacts_application::dto::{CountryAddRequest, CountryResponse};
use contacts_application::services::CountryService;
use contacts_domain::repositories::CountryRepository;

use crate::commands::Command;
use crate::error::CliResult;
use crate::output::{self, OutputStyle};

/// Countries command action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountriesAction {
    /// List all countries
    List,
    /// Add one country
    Add { name: String },
    /// Add every name in a file, one per line
    Import { file: PathBuf },
}

/// Countries command handler
pub struct CountriesCommand<C>
where
    C: CountryRepository,
{
    service: CountryService<C>,
    action: CountriesAction,
}

impl<C> CountriesCommand<C>
where
    C: CountryRepository,
{
    /// Create a new countries command
    pub fn new(service: CountryService<C>, action: CountriesAction) -> Self {
        Self { service, action }
    }

    async fn list(&self) -> CliResult<()> {
        let countries = self.service.get_all_countries().await?;
        let style = OutputStyle::default();
        println!("{}", style.table(&["ID", "Name"], &country_rows(&countries)));
        Ok(())
    }

    async fn add(&self, name: &str) -> CliResult<()> {
        let added = self
            .service
            .add_country(Some(CountryAddRequest::new(name)))
            .await?;
        output::print_success(&format!(
            "Added country {} ({})",
            added.country_name, added.country_id
        ));
        Ok(())
    }

    async fn import(&self, file: &Path) -> CliResult<()> {
        let content = std::fs::read_to_string(file)?;
        let inserted = self
            .service
            .import_countries(content.lines().map(str::trim))
            .await?;
        output::print_success(&format!("Imported {} countries", inserted));
        Ok(())
    }
}

#[async_trait]
impl<C> Command for CountriesCommand<C>
where
    C: CountryRepository + 'static,
{
    async fn execute(&self) -> CliResult<()> {
        match &self.action {
            CountriesAction::List => self.list().await,
            CountriesAction::Add { name } => self.add(name).await,
            CountriesAction::Import { file } => self.import(file).await,
        }
    }
}

fn country_rows(countries: &[CountryResponse]) -> Vec<Vec<String>> {
    countries
        .iter()
        .map(|c| vec![c.country_id.to_string(), c.country_name.clone()])
        .collect()
}
