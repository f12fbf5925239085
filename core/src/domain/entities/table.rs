//! Restaurant table entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A physical table in the restaurant, identified to staff by its number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Unique identifier assigned on creation
    pub id: Uuid,

    /// Positive number, unique across live tables
    pub table_number: u32,

    /// Guests currently booked at the table
    pub number_of_people: u32,

    /// Booking time; defaults to the creation time
    pub date_time: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A table about to be inserted as part of an allocation batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTable {
    pub table_number: u32,
    pub created_at: DateTime<Utc>,
}

impl NewTable {
    pub fn new(table_number: u32, created_at: DateTime<Utc>) -> Self {
        Self {
            table_number,
            created_at,
        }
    }

    /// Materialize the stored record with a fresh id and default fields
    pub fn into_table(self) -> Table {
        Table {
            id: Uuid::new_v4(),
            table_number: self.table_number,
            number_of_people: 0,
            date_time: self.created_at,
            customer_name: None,
            phone_number: None,
            note: None,
        }
    }
}

/// Field-by-field update of a table
///
/// Omitted, empty-string and zero values leave the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePatch {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub number_of_people: Option<u32>,
    #[serde(default, deserialize_with = "blank_date_time")]
    pub date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub note: Option<String>,
}

impl TablePatch {
    /// Apply the non-empty fields of this patch to `table`
    pub fn apply(self, table: &mut Table) {
        if let Some(name) = non_empty(self.customer_name) {
            table.customer_name = Some(name);
        }
        if let Some(phone) = non_empty(self.phone_number) {
            table.phone_number = Some(phone);
        }
        if let Some(people) = self.number_of_people.filter(|n| *n > 0) {
            table.number_of_people = people;
        }
        if let Some(date_time) = self.date_time {
            table.date_time = date_time;
        }
        if let Some(note) = non_empty(self.note) {
            table.note = Some(note);
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Deserialize an optional timestamp that treats `""` like null
fn blank_date_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .parse::<DateTime<Utc>>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_table() -> Table {
        NewTable::new(3, Utc::now()).into_table()
    }

    #[test]
    fn test_new_table_defaults() {
        let now = Utc::now();
        let table = NewTable::new(7, now).into_table();
        assert_eq!(table.table_number, 7);
        assert_eq!(table.number_of_people, 0);
        assert_eq!(table.date_time, now);
        assert!(table.customer_name.is_none());
        assert!(table.note.is_none());
    }

    #[test]
    fn test_patch_applies_present_fields() {
        let mut table = sample_table();
        TablePatch {
            customer_name: Some("Lan".to_string()),
            number_of_people: Some(4),
            note: Some("window seat".to_string()),
            ..Default::default()
        }
        .apply(&mut table);

        assert_eq!(table.customer_name.as_deref(), Some("Lan"));
        assert_eq!(table.number_of_people, 4);
        assert_eq!(table.note.as_deref(), Some("window seat"));
        assert!(table.phone_number.is_none());
    }

    #[test]
    fn test_patch_skips_empty_and_zero_values() {
        let mut table = sample_table();
        table.customer_name = Some("Lan".to_string());
        table.number_of_people = 2;

        TablePatch {
            customer_name: Some(String::new()),
            number_of_people: Some(0),
            ..Default::default()
        }
        .apply(&mut table);

        assert_eq!(table.customer_name.as_deref(), Some("Lan"));
        assert_eq!(table.number_of_people, 2);
    }

    #[test]
    fn test_patch_treats_blank_date_time_as_absent() {
        let patch: TablePatch =
            serde_json::from_str(r#"{"customerName":"Lan","dateTime":""}"#).unwrap();
        assert_eq!(patch.customer_name.as_deref(), Some("Lan"));
        assert!(patch.date_time.is_none());

        let patch: TablePatch = serde_json::from_str(r#"{"dateTime":null}"#).unwrap();
        assert!(patch.date_time.is_none());

        let patch: TablePatch =
            serde_json::from_str(r#"{"dateTime":"2025-03-08T19:30:00Z"}"#).unwrap();
        assert_eq!(
            patch.date_time,
            Some(Utc.with_ymd_and_hms(2025, 3, 8, 19, 30, 0).unwrap())
        );

        assert!(serde_json::from_str::<TablePatch>(r#"{"dateTime":"tonight"}"#).is_err());
    }

    #[test]
    fn test_blank_date_time_keeps_stored_value() {
        let mut table = sample_table();
        let booked = table.date_time;
        let patch: TablePatch = serde_json::from_str(r#"{"dateTime":"  "}"#).unwrap();
        patch.apply(&mut table);
        assert_eq!(table.date_time, booked);
    }

    #[test]
    fn test_table_serializes_camel_case_without_empty_optionals() {
        let json = serde_json::to_value(sample_table()).unwrap();
        assert_eq!(json["tableNumber"], 3);
        assert_eq!(json["numberOfPeople"], 0);
        assert!(json.get("dateTime").is_some());
        assert!(json.get("customerName").is_none());
        assert!(json.get("note").is_none());
    }
}
