// Command routing and dispatch

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;

use contacts_application::services::{CountryService, PersonService};
use contacts_config::{AppConfig, ConfigManager, ConfigManagerTrait, StorageBackend};
use contacts_domain::repositories::{CountryRepository, PersonRepository};
use contacts_domain::value_objects::PersonId;
use contacts_persistence::{
    load_country_seed, InMemoryCountryRepository, InMemoryPersonRepository, JsonFileStore,
};

use crate::commands::{
    Command, CountriesAction, CountriesCommand, PersonFields, PersonQuery, PersonsAction,
    PersonsCommand,
};
use crate::error::{CliError, CliResult};
use crate::{logging, output};

/// Contacts - manage persons and the countries they live in
#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(bin_name = "contacts")]
#[command(about = "Manage persons and the countries they live in")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (default: <config dir>/contacts/config.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage countries
    Countries {
        #[command(subcommand)]
        action: CountriesSubcommand,
    },

    /// Manage persons
    Persons {
        #[command(subcommand)]
        action: PersonsSubcommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CountriesSubcommand {
    /// List all countries
    List,

    /// Add a country
    Add {
        /// Country name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Add every country named in a file, one name per line
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum PersonsSubcommand {
    /// List persons
    List {
        #[command(flatten)]
        query: PersonQuery,
    },

    /// Show one person
    Show {
        #[arg(value_name = "ID")]
        id: PersonId,
    },

    /// Add a person
    Add {
        #[command(flatten)]
        fields: PersonFields,
    },

    /// Change fields of a person
    Update {
        #[arg(value_name = "ID")]
        id: PersonId,

        #[command(flatten)]
        fields: PersonFields,
    },

    /// Delete a person
    Delete {
        #[arg(value_name = "ID")]
        id: PersonId,
    },
}

impl Commands {
    /// Whether the command changes stored data
    pub fn is_write(&self) -> bool {
        match self {
            Commands::Countries { action } => !matches!(action, CountriesSubcommand::List),
            Commands::Persons { action } => !matches!(
                action,
                PersonsSubcommand::List { .. } | PersonsSubcommand::Show { .. }
            ),
        }
    }
}

impl From<&CountriesSubcommand> for CountriesAction {
    fn from(action: &CountriesSubcommand) -> Self {
        match action {
            CountriesSubcommand::List => CountriesAction::List,
            CountriesSubcommand::Add { name } => CountriesAction::Add { name: name.clone() },
            CountriesSubcommand::Import { file } => CountriesAction::Import { file: file.clone() },
        }
    }
}

impl From<&PersonsSubcommand> for PersonsAction {
    fn from(action: &PersonsSubcommand) -> Self {
        match action {
            PersonsSubcommand::List { query } => PersonsAction::List(query.clone()),
            PersonsSubcommand::Show { id } => PersonsAction::Show { id: *id },
            PersonsSubcommand::Add { fields } => PersonsAction::Add(fields.clone()),
            PersonsSubcommand::Update { id, fields } => PersonsAction::Update {
                id: *id,
                fields: fields.clone(),
            },
            PersonsSubcommand::Delete { id } => PersonsAction::Delete { id: *id },
        }
    }
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();
        Self::execute(&cli).await
    }

    /// Load configuration, install logging and run the command against the
    /// configured storage backend
    pub async fn execute(cli: &Cli) -> CliResult<()> {
        let config = Self::load_config(cli)?;
        logging::init_logging(&config.logging, cli.verbose);

        match config.storage.backend {
            StorageBackend::Memory => {
                if cli.command.is_write() {
                    output::print_warning(
                        "Using the memory backend; changes are discarded on exit",
                    );
                }
                let persons = Arc::new(InMemoryPersonRepository::new());
                let countries = Arc::new(InMemoryCountryRepository::new());
                Self::dispatch(cli, &config, persons, countries).await
            }
            StorageBackend::Json => {
                let path = config.storage.data_file.clone().ok_or_else(|| {
                    CliError::Config("storage.data_file is required by the json backend".into())
                })?;
                let store = Arc::new(JsonFileStore::open(path)?);
                Self::dispatch(cli, &config, Arc::clone(&store), store).await
            }
        }
    }

    fn load_config(cli: &Cli) -> CliResult<AppConfig> {
        let manager = match &cli.config {
            Some(path) => ConfigManager::with_path(path.clone()),
            None => ConfigManager::new(),
        };
        Ok(manager.load_config()?)
    }

    async fn dispatch<P, C>(
        cli: &Cli,
        config: &AppConfig,
        persons: Arc<P>,
        countries: Arc<C>,
    ) -> CliResult<()>
    where
        P: PersonRepository + 'static,
        C: CountryRepository + 'static,
    {
        if let Some(seed_file) = &config.storage.seed_file {
            let seeded = CountryService::new(Arc::clone(&countries))
                .seed(load_country_seed(seed_file)?)
                .await?;
            debug!(seeded, seed_file = %seed_file.display(), "applied country seed");
        }

        match &cli.command {
            Commands::Countries { action } => {
                let cmd = CountriesCommand::new(CountryService::new(countries), action.into());
                cmd.execute().await
            }
            Commands::Persons { action } => {
                let cmd = PersonsCommand::new(
                    PersonService::new(persons, Arc::clone(&countries)),
                    CountryService::new(countries),
                    action.into(),
                );
                cmd.execute().await
            }
        }
    }
}
