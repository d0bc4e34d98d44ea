use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The 17 exported columns, in output order. Every `Row` carries exactly
/// these fields; the CSV header line and the console table both use them.
pub const EXPORT_HEADERS: [&str; 17] = [
    "initiatorName",
    "initiatorUid",
    "eventName",
    "eventClass",
    "eventStatus",
    "createdAt",
    "eventDate",
    "eventDescription",
    "otherReasonToClose",
    "id",
    "questionnaires",
    "updatedAt",
    "shareCloseMessage",
    "howManyPeople",
    "viewCount",
    "numberRemainingSpots",
    "numberAttending",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

/// One projected output row: one text value per entry of `EXPORT_HEADERS`,
/// stored in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    values: Vec<String>,
}

impl Row {
    pub fn new(values: Vec<String>) -> Self {
        debug_assert_eq!(values.len(), EXPORT_HEADERS.len());
        Self { values }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        EXPORT_HEADERS
            .iter()
            .position(|h| *h == header)
            .map(|i| self.values[i].as_str())
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub rows: Vec<Row>,
    pub csv_output: String,
}
