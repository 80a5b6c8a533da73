//! Nested records carried by an entity.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A personal name. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Middle name(s).
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub surname: Option<String>,
}

impl Name {
    /// Creates a name with first name and surname, and an optional middle name.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        middle_name: Option<impl Into<String>>,
        surname: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            middle_name: middle_name.map(Into::into),
            surname: Some(surname.into()),
        }
    }

    /// Iterates over the parts that are present.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        [&self.first_name, &self.middle_name, &self.surname]
            .into_iter()
            .filter_map(Option::as_deref)
    }
}

/// A postal address. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street line.
    #[serde(default)]
    pub address_line: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// Country.
    #[serde(default)]
    pub country: Option<String>,
}

impl Address {
    /// Creates a fully populated address.
    #[must_use]
    pub fn new(
        address_line: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            address_line: Some(address_line.into()),
            city: Some(city.into()),
            country: Some(country.into()),
        }
    }

    /// Iterates over the parts that free-text search looks at.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        [&self.country, &self.address_line, &self.city]
            .into_iter()
            .filter_map(Option::as_deref)
    }
}

/// A labelled point in time, e.g. `Birth` on 1980-01-01.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDate {
    /// Label such as `Birth` or `Death`.
    #[serde(default)]
    pub date_type: String,
    /// When it happened, if known.
    #[serde(default, with = "crate::time::optional_date_time")]
    pub date_value: Option<NaiveDateTime>,
}

impl EntityDate {
    /// Creates a dated event at midnight of the given day.
    #[must_use]
    pub fn on(date_type: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            date_type: date_type.into(),
            date_value: Some(date.and_time(NaiveTime::MIN)),
        }
    }

    /// Creates a dated event with an unknown value.
    #[must_use]
    pub fn unknown(date_type: impl Into<String>) -> Self {
        Self {
            date_type: date_type.into(),
            date_value: None,
        }
    }

    /// Returns the calendar day of the value, if known.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.date_value.map(|dt| dt.date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_parts_skip_missing() {
        let name = Name::new("Jane", None::<String>, "Smith");
        assert_eq!(name.parts().collect::<Vec<_>>(), vec!["Jane", "Smith"]);
    }

    #[test]
    fn test_address_parts_order() {
        let address = Address::new("456 Oak St", "Another City", "Canada");
        assert_eq!(
            address.parts().collect::<Vec<_>>(),
            vec!["Canada", "456 Oak St", "Another City"]
        );
    }

    #[test]
    fn test_date_value_accepts_bare_date_and_null() {
        let date: EntityDate =
            serde_json::from_value(json!({ "dateType": "Birth", "dateValue": "1975-05-10" }))
                .unwrap();
        assert_eq!(date.calendar_date(), NaiveDate::from_ymd_opt(1975, 5, 10));

        let unknown: EntityDate =
            serde_json::from_value(json!({ "dateType": "Death", "dateValue": null })).unwrap();
        assert_eq!(unknown, EntityDate::unknown("Death"));

        let missing: EntityDate = serde_json::from_value(json!({ "dateType": "Death" })).unwrap();
        assert!(missing.date_value.is_none());
    }

    #[test]
    fn test_date_value_keeps_fractional_seconds_on_the_wire() {
        let date: EntityDate = serde_json::from_value(
            json!({ "dateType": "Birth", "dateValue": "1980-01-01T13:45:00.250" }),
        )
        .unwrap();

        let wire = serde_json::to_value(&date).unwrap();
        assert_eq!(wire["dateValue"], "1980-01-01T13:45:00.250");

        let back: EntityDate = serde_json::from_value(wire).unwrap();
        assert_eq!(back, date);

        let whole = serde_json::to_value(EntityDate::on(
            "Birth",
            NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
        ))
        .unwrap();
        assert_eq!(whole["dateValue"], "1980-01-01T00:00:00");
    }

    #[test]
    fn test_date_value_rejects_garbage() {
        let result: Result<EntityDate, _> =
            serde_json::from_value(json!({ "dateType": "Birth", "dateValue": "soon" }));
        assert!(result.is_err());
    }
}
