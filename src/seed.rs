//! Example records loaded at startup for manual testing.

use chrono::NaiveDate;

use crate::entity::{Address, Entity, EntityDate, EntityDraft, EntityId, Name};

fn birth(year: i32, month: u32, day: u32) -> EntityDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => EntityDate::on("Birth", date),
        None => EntityDate::unknown("Birth"),
    }
}

/// Returns the two example entities, ids `"1"` and `"2"`.
#[must_use]
pub fn seed_entities() -> Vec<Entity> {
    vec![
        Entity::from_draft(
            EntityId::from("1"),
            EntityDraft::new()
                .with_name(Name::new("John", Some("Doe"), "Smith"))
                .with_address(Address::new("123 Main St", "Example City", "USA"))
                .with_date(birth(1980, 1, 1))
                .with_deceased(false)
                .with_gender("Male"),
        ),
        Entity::from_draft(
            EntityId::from("2"),
            EntityDraft::new()
                .with_name(Name::new("Jane", Some("Doe"), "Smith"))
                .with_address(Address::new("456 Oak St", "Another City", "Canada"))
                .with_date(birth(1975, 5, 10))
                .with_deceased(true)
                .with_gender("Female"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_two_distinct_dated_records() {
        let seed = seed_entities();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].id.as_str(), "1");
        assert_eq!(seed[1].id.as_str(), "2");
        assert!(seed
            .iter()
            .all(|e| e.dates.iter().flatten().all(|d| d.date_value.is_some())));
    }
}
