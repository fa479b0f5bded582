//! Field-name driven filtering and sorting over person views
//!
//! Callers name a field of [`PersonResponse`] as text (for example
//! `"PersonName"` or `"person_name"`). Names resolve against a fixed
//! accessor table, ignoring case and underscores. Unknown or empty field
//! names are not errors: the input is returned unchanged.
//!
//! Filtering keeps persons whose value, rendered as text, contains the
//! search text ignoring case. Absent values never match. Sorting is
//! stable, orders text ignoring case, and places absent values before
//! present ones in ascending order.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::dto::{PersonResponse, SortOrderOptions};

/// Comparable value of one person field
///
/// Text orders by [`compare_text`]; every other kind uses its natural order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    Number(i64),
    Flag(bool),
    Id(Uuid),
}

impl FieldValue {
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Text(_) => 0,
            FieldValue::Date(_) => 1,
            FieldValue::Number(_) => 2,
            FieldValue::Flag(_) => 3,
            FieldValue::Id(_) => 4,
        }
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => compare_text(a, b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
            (FieldValue::Flag(a), FieldValue::Flag(b)) => a.cmp(b),
            (FieldValue::Id(a), FieldValue::Id(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dictionary order for text: case-folded first, then lowercase before
/// uppercase where the folded forms tie
///
/// Sorts `alice`, `Alice`, `bob`, `Zed`. Equal only for identical strings.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Flag(flag) => write!(f, "{}", flag),
            FieldValue::Id(id) => write!(f, "{}", id),
        }
    }
}

type Accessor = fn(&PersonResponse) -> Option<FieldValue>;

/// A queryable field of [`PersonResponse`]
#[derive(Clone, Copy)]
pub struct PersonField {
    name: &'static str,
    accessor: Accessor,
}

impl PersonField {
    /// Canonical field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Value of this field on `person`, `None` when absent
    pub fn value_of(&self, person: &PersonResponse) -> Option<FieldValue> {
        (self.accessor)(person)
    }
}

impl fmt::Debug for PersonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PersonField").field(&self.name).finish()
    }
}

fn text(value: &Option<String>) -> Option<FieldValue> {
    value.clone().map(FieldValue::Text)
}

const PERSON_FIELDS: &[PersonField] = &[
    PersonField {
        name: "PersonID",
        accessor: |p| Some(FieldValue::Id(p.person_id.as_uuid())),
    },
    PersonField {
        name: "PersonName",
        accessor: |p| Some(FieldValue::Text(p.person_name.clone())),
    },
    PersonField {
        name: "Email",
        accessor: |p| text(&p.email),
    },
    PersonField {
        name: "DateOfBirth",
        accessor: |p| p.date_of_birth.map(FieldValue::Date),
    },
    PersonField {
        name: "Gender",
        accessor: |p| text(&p.gender),
    },
    PersonField {
        name: "CountryID",
        accessor: |p| p.country_id.map(|id| FieldValue::Id(id.as_uuid())),
    },
    PersonField {
        name: "Country",
        accessor: |p| text(&p.country),
    },
    PersonField {
        name: "Address",
        accessor: |p| text(&p.address),
    },
    PersonField {
        name: "ReceiveNewsLetters",
        accessor: |p| Some(FieldValue::Flag(p.receive_news_letters)),
    },
    PersonField {
        name: "Age",
        accessor: |p| p.age.map(|age| FieldValue::Number(i64::from(age))),
    },
];

/// Canonical names of every queryable field
pub fn field_names() -> impl Iterator<Item = &'static str> {
    PERSON_FIELDS.iter().map(|field| field.name)
}

/// Resolve a caller-supplied field name
pub fn resolve_field(name: &str) -> Option<PersonField> {
    let wanted: String = name.trim().chars().filter(|c| *c != '_').collect();
    if wanted.is_empty() {
        return None;
    }
    PERSON_FIELDS
        .iter()
        .find(|field| field.name.eq_ignore_ascii_case(&wanted))
        .copied()
}

/// Keep persons whose `search_by` field contains `search_value`, ignoring case
///
/// Returns `persons` unchanged when either argument is absent or empty, or
/// when the field name does not resolve.
pub fn filter_persons(
    persons: Vec<PersonResponse>,
    search_by: Option<&str>,
    search_value: Option<&str>,
) -> Vec<PersonResponse> {
    let (Some(search_by), Some(search_value)) = (search_by, search_value) else {
        return persons;
    };
    if search_value.is_empty() {
        return persons;
    }
    let Some(field) = resolve_field(search_by) else {
        return persons;
    };

    let needle = search_value.to_lowercase();
    persons
        .into_iter()
        .filter(|person| {
            field
                .value_of(person)
                .map(|value| value.to_string().to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .collect()
}

/// Stable sort of `persons` by the `sort_by` field
///
/// Returns `persons` unchanged when the field name is absent, empty or
/// does not resolve.
pub fn sort_persons(
    persons: Vec<PersonResponse>,
    sort_by: Option<&str>,
    order: SortOrderOptions,
) -> Vec<PersonResponse> {
    let Some(field) = sort_by.and_then(resolve_field) else {
        return persons;
    };

    let mut keyed: Vec<(Option<FieldValue>, PersonResponse)> = persons
        .into_iter()
        .map(|person| (field.value_of(&person), person))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare(a, b, order));
    keyed.into_iter().map(|(_, person)| person).collect()
}

fn compare(a: &Option<FieldValue>, b: &Option<FieldValue>, order: SortOrderOptions) -> Ordering {
    match order {
        SortOrderOptions::Asc => a.cmp(b),
        SortOrderOptions::Desc => b.cmp(a),
    }
}
