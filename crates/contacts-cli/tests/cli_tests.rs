//! Argument parsing and end-to-end command tests

use std::path::{Path, PathBuf};

use clap::Parser;
use proptest::prelude::*;

use contacts_cli::error::CliError;
use contacts_cli::router::{Cli, CommandRouter, Commands, CountriesSubcommand, PersonsSubcommand};
use contacts_domain::value_objects::{Gender, PersonId};
use contacts_persistence::JsonFileStore;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("contacts").chain(args.iter().copied())).unwrap()
}

fn write_config(dir: &Path, seed: Option<&Path>) -> (PathBuf, PathBuf) {
    let data_file = dir.join("contacts.json");
    let mut toml = format!(
        "[storage]\nbackend = \"json\"\ndata_file = {:?}\n",
        data_file.display().to_string()
    );
    if let Some(seed) = seed {
        toml.push_str(&format!("seed_file = {:?}\n", seed.display().to_string()));
    }
    let config_file = dir.join("config.toml");
    std::fs::write(&config_file, toml).unwrap();
    (config_file, data_file)
}

async fn run(config: &Path, args: &[&str]) -> Result<(), CliError> {
    let config = config.display().to_string();
    let mut full = vec!["--config", config.as_str()];
    full.extend_from_slice(args);
    CommandRouter::execute(&parse(&full)).await
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_countries_add() {
    let cli = parse(&["countries", "add", "Egypt"]);
    match cli.command {
        Commands::Countries {
            action: CountriesSubcommand::Add { name },
        } => assert_eq!(name, "Egypt"),
        other => panic!("unexpected command {:?}", other),
    }
    assert!(!cli.verbose);
    assert!(cli.config.is_none());
}

#[test]
fn test_parse_persons_list_query() {
    let cli = parse(&[
        "persons",
        "list",
        "--search-by",
        "PersonName",
        "--search",
        "ah",
        "--sort-by",
        "Age",
        "--desc",
        "-v",
    ]);
    assert!(cli.verbose);
    match cli.command {
        Commands::Persons {
            action: PersonsSubcommand::List { query },
        } => {
            assert_eq!(query.search_by.as_deref(), Some("PersonName"));
            assert_eq!(query.search.as_deref(), Some("ah"));
            assert_eq!(query.sort_by.as_deref(), Some("Age"));
            assert!(query.desc);
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_parse_persons_add_fields() {
    let cli = parse(&[
        "persons",
        "add",
        "--name",
        "Ahmed",
        "--gender",
        "male",
        "--dob",
        "1990-06-15",
        "--newsletter",
        "true",
    ]);
    match cli.command {
        Commands::Persons {
            action: PersonsSubcommand::Add { fields },
        } => {
            assert_eq!(fields.name.as_deref(), Some("Ahmed"));
            assert_eq!(fields.gender, Some(Gender::Male));
            assert_eq!(fields.dob.map(|d| d.to_string()), Some("1990-06-15".into()));
            assert_eq!(fields.newsletter, Some(true));
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_parse_rejects_bad_values() {
    assert!(Cli::try_parse_from(["contacts", "persons", "show", "not-a-uuid"]).is_err());
    assert!(Cli::try_parse_from(["contacts", "persons", "add", "--dob", "15/06/1990"]).is_err());
    assert!(Cli::try_parse_from(["contacts", "persons", "add", "--gender", "robot"]).is_err());
    assert!(Cli::try_parse_from(["contacts"]).is_err());
}

#[test]
fn test_write_commands_are_flagged() {
    assert!(parse(&["countries", "add", "Peru"]).command.is_write());
    assert!(!parse(&["countries", "list"]).command.is_write());
    let id = PersonId::new().to_string();
    assert!(!parse(&["persons", "show", &id]).command.is_write());
    assert!(parse(&["persons", "delete", &id]).command.is_write());
}

proptest! {
    /// Global flags are accepted before or after the subcommand
    #[test]
    fn prop_global_flags_anywhere(verbose in any::<bool>(), after in any::<bool>()) {
        let mut args = vec!["contacts"];
        if verbose && !after {
            args.push("--verbose");
        }
        args.extend(["countries", "list"]);
        if verbose && after {
            args.push("--verbose");
        }
        let cli = Cli::try_parse_from(args).unwrap();
        prop_assert_eq!(cli.verbose, verbose);
    }
}

// ============================================================================
// End to end against the JSON backend
// ============================================================================

#[tokio::test]
async fn test_country_and_person_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let (config, data_file) = write_config(dir.path(), None);

    run(&config, &["countries", "add", "Egypt"]).await.unwrap();
    run(
        &config,
        &[
            "persons",
            "add",
            "--name",
            "Ahmed",
            "--email",
            "someone@example.com",
            "--country",
            "Egypt",
        ],
    )
    .await
    .unwrap();

    let snapshot = JsonFileStore::open(&data_file).unwrap().snapshot();
    assert_eq!(snapshot.countries.len(), 1);
    assert_eq!(snapshot.persons.len(), 1);
    let ahmed = &snapshot.persons[0];
    assert_eq!(ahmed.country_id(), Some(snapshot.countries[0].id()));

    let id = ahmed.id().to_string();
    run(&config, &["persons", "update", &id, "--name", "Ahmad"])
        .await
        .unwrap();
    let snapshot = JsonFileStore::open(&data_file).unwrap().snapshot();
    assert_eq!(snapshot.persons[0].name(), "Ahmad");
    assert_eq!(snapshot.persons[0].email(), Some("someone@example.com"));

    run(&config, &["persons", "list", "--search-by", "Country", "--search", "egy"])
        .await
        .unwrap();
    run(&config, &["persons", "show", &id]).await.unwrap();

    run(&config, &["persons", "delete", &id]).await.unwrap();
    let snapshot = JsonFileStore::open(&data_file).unwrap().snapshot();
    assert!(snapshot.persons.is_empty());
}

#[tokio::test]
async fn test_duplicate_country_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _) = write_config(dir.path(), None);

    run(&config, &["countries", "add", "Peru"]).await.unwrap();
    let err = run(&config, &["countries", "add", "Peru"]).await.unwrap_err();
    assert_eq!(err.user_message(), "Name already exists: Peru");
}

#[tokio::test]
async fn test_invalid_person_lists_every_problem() {
    let dir = tempfile::tempdir().unwrap();
    let (config, data_file) = write_config(dir.path(), None);

    let err = run(&config, &["persons", "add", "--email", "nope"])
        .await
        .unwrap_err();
    let message = err.user_message();
    assert!(message.starts_with("Validation failed:"));
    assert!(message.contains("Person name cannot be blank"));
    assert!(message.contains("Invalid email address"));
    assert!(!data_file.exists());
}

#[tokio::test]
async fn test_unknown_country_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _) = write_config(dir.path(), None);

    let err = run(&config, &["persons", "add", "--name", "Sara", "--country", "Atlantis"])
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_import_and_seed() {
    let dir = tempfile::tempdir().unwrap();
    let seed = dir.path().join("countries.json");
    std::fs::write(&seed, r#"[{"CountryName": "Egypt"}, {"CountryName": "China"}]"#).unwrap();
    let (config, data_file) = write_config(dir.path(), Some(&seed));

    let names = dir.path().join("names.txt");
    std::fs::write(&names, "China\n\nBrazil\r\nBrazil\n").unwrap();
    run(&config, &["countries", "import", names.to_str().unwrap()])
        .await
        .unwrap();

    let names: Vec<String> = JsonFileStore::open(&data_file)
        .unwrap()
        .snapshot()
        .countries
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    assert_eq!(names, ["Egypt", "China", "Brazil"]);
}

#[tokio::test]
async fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(&dir.path().join("absent.toml"), &["countries", "list"])
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}
