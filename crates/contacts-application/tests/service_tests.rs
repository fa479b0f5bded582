//! Integration tests for application services
//!
//! These tests verify service behavior with mock repositories.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;

use contacts_application::dto::{
    CountryAddRequest, PersonAddRequest, PersonUpdateRequest, SortOrderOptions,
};
use contacts_application::errors::ApplicationError;
use contacts_application::services::{CountryService, PersonService};

use contacts_domain::entities::{Country, Person};
use contacts_domain::errors::{DomainError, DomainResult};
use contacts_domain::repositories::{CountryRepository, PersonRepository};
use contacts_domain::value_objects::{CountryId, Gender, PersonId};

// ============================================================================
// Mock Implementations
// ============================================================================

/// In-memory country repository for testing
#[derive(Default)]
struct MockCountryRepository {
    countries: RwLock<Vec<Country>>,
}

#[async_trait]
impl CountryRepository for MockCountryRepository {
    async fn add(&self, country: &Country) -> DomainResult<()> {
        self.countries.write().unwrap().push(country.clone());
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Country>> {
        Ok(self.countries.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: &CountryId) -> DomainResult<Option<Country>> {
        let countries = self.countries.read().unwrap();
        Ok(countries.iter().find(|c| c.id() == *id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Country>> {
        let countries = self.countries.read().unwrap();
        Ok(countries.iter().find(|c| c.name() == name).cloned())
    }
}

/// In-memory person repository for testing
#[derive(Default)]
struct MockPersonRepository {
    persons: RwLock<Vec<Person>>,
}

#[async_trait]
impl PersonRepository for MockPersonRepository {
    async fn add(&self, person: &Person) -> DomainResult<()> {
        self.persons.write().unwrap().push(person.clone());
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Person>> {
        Ok(self.persons.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: &PersonId) -> DomainResult<Option<Person>> {
        let persons = self.persons.read().unwrap();
        Ok(persons.iter().find(|p| p.id() == *id).cloned())
    }

    async fn update(&self, person: &Person) -> DomainResult<Option<Person>> {
        let mut persons = self.persons.write().unwrap();
        Ok(persons
            .iter_mut()
            .find(|p| p.id() == person.id())
            .map(|slot| {
                *slot = person.clone();
                slot.clone()
            }))
    }

    async fn delete(&self, id: &PersonId) -> DomainResult<bool> {
        let mut persons = self.persons.write().unwrap();
        let before = persons.len();
        persons.retain(|p| p.id() != *id);
        Ok(persons.len() != before)
    }
}

/// Repository whose every call fails, for error mapping checks
struct FailingPersonRepository;

#[async_trait]
impl PersonRepository for FailingPersonRepository {
    async fn add(&self, _person: &Person) -> DomainResult<()> {
        Err(DomainError::Storage {
            reason: "disk unavailable".into(),
        })
    }

    async fn find_all(&self) -> DomainResult<Vec<Person>> {
        Err(DomainError::Storage {
            reason: "disk unavailable".into(),
        })
    }

    async fn find_by_id(&self, _id: &PersonId) -> DomainResult<Option<Person>> {
        Err(DomainError::Storage {
            reason: "disk unavailable".into(),
        })
    }

    async fn update(&self, _person: &Person) -> DomainResult<Option<Person>> {
        Err(DomainError::Storage {
            reason: "disk unavailable".into(),
        })
    }

    async fn delete(&self, _id: &PersonId) -> DomainResult<bool> {
        Err(DomainError::Storage {
            reason: "disk unavailable".into(),
        })
    }
}

// ============================================================================
// Fixtures
// ============================================================================

struct Fixture {
    countries: CountryService<MockCountryRepository>,
    persons: PersonService<MockPersonRepository, MockCountryRepository>,
}

fn fixture() -> Fixture {
    let country_repo = Arc::new(MockCountryRepository::default());
    let person_repo = Arc::new(MockPersonRepository::default());
    Fixture {
        countries: CountryService::new(Arc::clone(&country_repo)),
        persons: PersonService::new(person_repo, country_repo),
    }
}

fn add_request(name: &str) -> PersonAddRequest {
    PersonAddRequest {
        person_name: Some(name.to_string()),
        email: Some("someone@example.com".into()),
        date_of_birth: NaiveDate::from_ymd_opt(1993, 1, 2),
        gender: Some(Gender::Male),
        address: Some("sample address".into()),
        receive_news_letters: true,
        ..Default::default()
    }
}

// ============================================================================
// CountryService Tests
// ============================================================================

#[tokio::test]
async fn test_add_country_then_get_by_id() {
    let fx = fixture();
    let added = fx
        .countries
        .add_country(Some(CountryAddRequest::new("Japan")))
        .await
        .unwrap();

    assert!(!added.country_id.is_nil());
    assert_eq!(added.country_name, "Japan");

    let found = fx.countries.get_country_by_id(Some(added.country_id)).await.unwrap();
    assert_eq!(found, Some(added));
}

#[tokio::test]
async fn test_get_all_countries_empty_store() {
    let fx = fixture();
    assert!(fx.countries.get_all_countries().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_country_rejected_regardless_of_order() {
    let fx = fixture();
    for name in ["USA", "UK"] {
        fx.countries
            .add_country(Some(CountryAddRequest::new(name)))
            .await
            .unwrap();
    }

    for name in ["UK", "USA"] {
        let err = fx
            .countries
            .add_country(Some(CountryAddRequest::new(name)))
            .await
            .unwrap_err();
        assert_eq!(err, ApplicationError::DuplicateName(name.to_string()));
    }
}

// ============================================================================
// PersonService Tests
// ============================================================================

#[tokio::test]
async fn test_add_person_null_request() {
    let fx = fixture();
    let err = fx.persons.add_person(None).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NullRequest(_)));
}

#[tokio::test]
async fn test_add_person_missing_name() {
    let fx = fixture();
    let request = PersonAddRequest {
        person_name: None,
        ..add_request("ignored")
    };

    let err = fx.persons.add_person(Some(request)).await.unwrap_err();
    assert_eq!(
        err,
        ApplicationError::Validation(vec!["Person name cannot be blank".into()])
    );
}

#[tokio::test]
async fn test_add_person_reports_every_violation() {
    let fx = fixture();
    let request = PersonAddRequest {
        person_name: Some(String::new()),
        email: Some("not-an-email".into()),
        address: Some("x".repeat(61)),
        ..Default::default()
    };

    let err = fx.persons.add_person(Some(request)).await.unwrap_err();
    let ApplicationError::Validation(messages) = &err else {
        panic!("expected validation error, got {:?}", err);
    };
    assert_eq!(messages.len(), 3);
    assert!(fx.persons.get_all_persons().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_person_enriches_country_and_age() {
    let fx = fixture();
    let egypt = fx
        .countries
        .add_country(Some(CountryAddRequest::new("Egypt")))
        .await
        .unwrap();

    let request = PersonAddRequest {
        country_id: Some(egypt.country_id),
        ..add_request("Ahmed")
    };
    let added = fx.persons.add_person(Some(request)).await.unwrap();

    assert_eq!(added.country.as_deref(), Some("Egypt"));
    assert!(added.age.is_some());
    assert_eq!(added.gender.as_deref(), Some("Male"));

    let found = fx.persons.get_person_by_id(Some(added.person_id)).await.unwrap();
    assert_eq!(found, Some(added));
}

#[tokio::test]
async fn test_dangling_country_yields_no_name() {
    let fx = fixture();
    let request = PersonAddRequest {
        country_id: Some(CountryId::new()),
        ..add_request("Ahmed")
    };

    let added = fx.persons.add_person(Some(request)).await.unwrap();
    assert!(added.country_id.is_some());
    assert_eq!(added.country, None);
}

#[tokio::test]
async fn test_person_ids_are_distinct() {
    let fx = fixture();
    let mut ids = HashSet::new();
    for name in ["Ahmed", "Mohamed", "Sara", "Mona"] {
        let added = fx.persons.add_person(Some(add_request(name))).await.unwrap();
        assert!(ids.insert(added.person_id));
    }
}

#[tokio::test]
async fn test_get_person_by_id_absent() {
    let fx = fixture();
    assert_eq!(fx.persons.get_person_by_id(None).await.unwrap(), None);
    assert_eq!(
        fx.persons.get_person_by_id(Some(PersonId::new())).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn test_get_all_persons_is_repeatable() {
    let fx = fixture();
    for name in ["Ahmed", "Mohamed"] {
        fx.persons.add_person(Some(add_request(name))).await.unwrap();
    }

    let first = fx.persons.get_all_persons().await.unwrap();
    let second = fx.persons.get_all_persons().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_filtered_persons_by_name() {
    let fx = fixture();
    for name in ["Ahmed", "Mohamed"] {
        fx.persons.add_person(Some(add_request(name))).await.unwrap();
    }

    let filtered = fx
        .persons
        .get_filtered_persons(Some("PersonName"), Some("ah"))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].person_name, "Ahmed");

    let everyone = fx.persons.get_filtered_persons(None, None).await.unwrap();
    assert_eq!(everyone, fx.persons.get_all_persons().await.unwrap());
}

#[tokio::test]
async fn test_filtered_persons_by_joined_country() {
    let fx = fixture();
    let india = fx
        .countries
        .add_country(Some(CountryAddRequest::new("India")))
        .await
        .unwrap();
    fx.persons
        .add_person(Some(PersonAddRequest {
            country_id: Some(india.country_id),
            ..add_request("Ravi")
        }))
        .await
        .unwrap();
    fx.persons.add_person(Some(add_request("Sara"))).await.unwrap();

    let filtered = fx
        .persons
        .get_filtered_persons(Some("country"), Some("IND"))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].person_name, "Ravi");
}

#[tokio::test]
async fn test_sorted_persons_by_name() {
    let fx = fixture();
    for name in ["Sara", "Ahmed", "Mohamed"] {
        fx.persons.add_person(Some(add_request(name))).await.unwrap();
    }
    let all = fx.persons.get_all_persons().await.unwrap();

    let sorted = fx
        .persons
        .get_sorted_persons(all.clone(), Some("PersonName"), SortOrderOptions::Asc);
    let names: Vec<&str> = sorted.iter().map(|p| p.person_name.as_str()).collect();
    assert_eq!(names, ["Ahmed", "Mohamed", "Sara"]);

    let unchanged = fx
        .persons
        .get_sorted_persons(all.clone(), Some(""), SortOrderOptions::Desc);
    assert_eq!(unchanged, all);
}

#[tokio::test]
async fn test_update_person_replaces_fields_keeps_id() {
    let fx = fixture();
    let added = fx.persons.add_person(Some(add_request("John"))).await.unwrap();

    let mut request = added.to_update_request();
    request.person_name = Some("William".into());
    request.email = Some("william@example.com".into());
    let updated = fx.persons.update_person(Some(request)).await.unwrap();

    assert_eq!(updated.person_id, added.person_id);
    assert_eq!(updated.person_name, "William");

    let found = fx
        .persons
        .get_person_by_id(Some(added.person_id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.person_name, "William");
    assert_eq!(found.email.as_deref(), Some("william@example.com"));
    assert_eq!(found.person_id, added.person_id);
}

#[tokio::test]
async fn test_update_person_null_request() {
    let fx = fixture();
    let err = fx.persons.update_person(None).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NullRequest(_)));
}

#[tokio::test]
async fn test_update_person_unknown_id() {
    let fx = fixture();
    let request = PersonUpdateRequest {
        person_id: PersonId::new(),
        person_name: Some("Ghost".into()),
        email: None,
        date_of_birth: None,
        gender: None,
        country_id: None,
        address: None,
        receive_news_letters: false,
    };

    let err = fx.persons.update_person(Some(request)).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn test_update_person_validates_before_lookup() {
    let fx = fixture();
    let added = fx.persons.add_person(Some(add_request("John"))).await.unwrap();

    let mut request = added.to_update_request();
    request.person_name = None;
    let err = fx.persons.update_person(Some(request)).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let found = fx
        .persons
        .get_person_by_id(Some(added.person_id))
        .await
        .unwrap();
    assert_eq!(found.map(|p| p.person_name), Some("John".to_string()));
}

#[tokio::test]
async fn test_delete_person() {
    let fx = fixture();
    let added = fx.persons.add_person(Some(add_request("Ahmed"))).await.unwrap();

    assert!(fx.persons.delete_person(Some(added.person_id)).await.unwrap());
    assert_eq!(
        fx.persons.get_person_by_id(Some(added.person_id)).await.unwrap(),
        None
    );
    assert!(fx.persons.get_all_persons().await.unwrap().is_empty());

    assert!(!fx.persons.delete_person(Some(PersonId::new())).await.unwrap());
}

#[tokio::test]
async fn test_delete_person_null_id() {
    let fx = fixture();
    let err = fx.persons.delete_person(None).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NullId(_)));
}

#[tokio::test]
async fn test_storage_failure_maps_to_repository_error() {
    let service = PersonService::new(
        Arc::new(FailingPersonRepository),
        Arc::new(MockCountryRepository::default()),
    );

    let err = service.add_person(Some(add_request("Ahmed"))).await.unwrap_err();
    assert_eq!(err, ApplicationError::Repository("disk unavailable".into()));

    let err = service.get_all_persons().await.unwrap_err();
    assert!(matches!(err, ApplicationError::Repository(_)));
}
