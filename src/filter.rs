//! List filters.
//!
//! An `EntityFilter` is a conjunction of independently optional predicates.
//! An inactive predicate (field `None`, empty text, or no countries) accepts
//! every entity, so `EntityFilter::default()` lists the whole store.
//!
//! Absent sequences are deliberately lenient for the date and country
//! predicates: an entity whose `dates` is `None` passes any date bound, and
//! one whose `addresses` is `None` passes any country set. A present but
//! empty sequence never passes. Free-text search does not get the same
//! leniency: absent names or addresses simply contribute no match.

use chrono::NaiveDate;

use crate::entity::Entity;
use crate::error::ValidationError;
use crate::time::parse_calendar_date;

/// Query-string keys understood by [`EntityFilter::from_query_pairs`].
pub mod keys {
    /// Free-text search over names and addresses.
    pub const SEARCH: &str = "search";
    /// Exact deceased flag.
    pub const DECEASED: &str = "deceased";
    /// Case-insensitive gender.
    pub const GENDER: &str = "gender";
    /// Inclusive lower calendar bound.
    pub const START_DATE: &str = "startDate";
    /// Inclusive upper calendar bound.
    pub const END_DATE: &str = "endDate";
    /// Repeatable country.
    pub const COUNTRIES: &str = "countries";
}

/// Predicates applied by a list operation.
///
/// # Examples
///
/// ```
/// use entity_registry::EntityFilter;
///
/// let filter = EntityFilter::new().gender("male").deceased(false);
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityFilter {
    /// Case-insensitive substring over name and address parts.
    pub search: Option<String>,
    /// Exact match on the deceased flag.
    pub deceased: Option<bool>,
    /// Case-insensitive exact match on gender.
    pub gender: Option<String>,
    /// Some date on or after this day.
    pub start_date: Option<NaiveDate>,
    /// Some date on or before this day.
    pub end_date: Option<NaiveDate>,
    /// Some address country in this set (case-insensitive).
    pub countries: Vec<String>,
}

impl EntityFilter {
    /// Creates a filter that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search.
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Sets the deceased predicate.
    #[must_use]
    pub fn deceased(mut self, deceased: bool) -> Self {
        self.deceased = Some(deceased);
        self
    }

    /// Sets the gender predicate.
    #[must_use]
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Sets the inclusive lower date bound.
    #[must_use]
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the inclusive upper date bound.
    #[must_use]
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Adds one country to the accepted set.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.countries.push(country.into());
        self
    }

    /// Returns true when no predicate is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        active_text(self.search.as_ref()).is_none()
            && self.deceased.is_none()
            && active_text(self.gender.as_ref()).is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.countries.is_empty()
    }

    /// Decodes a filter from raw query pairs.
    ///
    /// Keys are matched case-insensitively and unknown keys are ignored.
    /// `countries` may repeat; every other key keeps its first non-empty
    /// value. Empty values leave the predicate inactive. Text values are kept
    /// as given; only booleans and dates are trimmed before parsing.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for a malformed boolean or date.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Self::default();

        for (key, value) in pairs {
            let key = key.as_ref();
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }

            if key.eq_ignore_ascii_case(keys::SEARCH) {
                if filter.search.is_none() {
                    filter.search = Some(value.to_string());
                }
            } else if key.eq_ignore_ascii_case(keys::DECEASED) {
                if filter.deceased.is_none() {
                    filter.deceased = Some(parse_bool(keys::DECEASED, value.trim())?);
                }
            } else if key.eq_ignore_ascii_case(keys::GENDER) {
                if filter.gender.is_none() {
                    filter.gender = Some(value.to_string());
                }
            } else if key.eq_ignore_ascii_case(keys::START_DATE) {
                if filter.start_date.is_none() {
                    filter.start_date = Some(parse_calendar_date(value)?);
                }
            } else if key.eq_ignore_ascii_case(keys::END_DATE) {
                if filter.end_date.is_none() {
                    filter.end_date = Some(parse_calendar_date(value)?);
                }
            } else if key.eq_ignore_ascii_case(keys::COUNTRIES) {
                filter.countries.push(value.to_string());
            }
        }

        Ok(filter)
    }

    /// Returns true if the entity satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, entity: &Entity) -> bool {
        if let Some(needle) = active_text(self.search.as_ref()) {
            if !matches_search(entity, &needle.to_lowercase()) {
                return false;
            }
        }

        if let Some(deceased) = self.deceased {
            if entity.deceased != deceased {
                return false;
            }
        }

        if let Some(gender) = active_text(self.gender.as_ref()) {
            let matched = entity
                .gender
                .as_deref()
                .is_some_and(|g| eq_ignore_case(g, gender));
            if !matched {
                return false;
            }
        }

        if let Some(start) = self.start_date {
            if !any_calendar_date(entity, |date| date >= start) {
                return false;
            }
        }

        if let Some(end) = self.end_date {
            if !any_calendar_date(entity, |date| date <= end) {
                return false;
            }
        }

        if !self.countries.is_empty() && !matches_countries(entity, &self.countries) {
            return false;
        }

        true
    }
}

fn active_text(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ValidationError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ValidationError::InvalidBool {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}

fn matches_search(entity: &Entity, folded_needle: &str) -> bool {
    let by_name = entity
        .names
        .iter()
        .flatten()
        .flat_map(|name| name.parts())
        .any(|part| contains_folded(part, folded_needle));

    by_name
        || entity
            .addresses
            .iter()
            .flatten()
            .flat_map(|address| address.parts())
            .any(|part| contains_folded(part, folded_needle))
}

fn any_calendar_date(entity: &Entity, accept: impl Fn(NaiveDate) -> bool) -> bool {
    match &entity.dates {
        None => true,
        Some(dates) => dates
            .iter()
            .filter_map(|d| d.calendar_date())
            .any(accept),
    }
}

fn matches_countries(entity: &Entity, countries: &[String]) -> bool {
    match &entity.addresses {
        None => true,
        Some(addresses) => addresses
            .iter()
            .filter_map(|a| a.country.as_deref())
            .any(|country| countries.iter().any(|c| eq_ignore_case(country, c))),
    }
}
