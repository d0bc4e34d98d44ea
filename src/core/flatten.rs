use crate::domain::model::Record;
use serde_json::Value;
use std::collections::HashMap;

/// One field promotion applied during flattening: the value at
/// `source_path` (a dotted path into a nested sub-object) is copied to a
/// top-level `target_field`. When `default` is set the target is written
/// even if the source is absent.
pub struct HoistRule {
    pub source_path: &'static str,
    pub target_field: &'static str,
    pub default: Option<&'static str>,
}

/// Promotions for the known nested sub-objects. Only `viewCount` carries
/// a default, so it ends up on every record.
pub const HOIST_RULES: [HoistRule; 3] = [
    HoistRule {
        source_path: "timing.eventDate",
        target_field: "eventDate",
        default: None,
    },
    HoistRule {
        source_path: "timing.eventStartTime",
        target_field: "eventStartTime",
        default: None,
    },
    HoistRule {
        source_path: "subscribeEvent.viewCount",
        target_field: "viewCount",
        default: Some(""),
    },
];

/// Walks `byDate -> {date -> {events: [...]}}` and returns the events as
/// one flat sequence. Order follows the document: dates as they appear in
/// `byDate`, then events within each date. Dates without an `events` list
/// contribute nothing, as does a document without `byDate`.
pub fn flatten_document(document: &Value) -> Vec<Record> {
    let mut records = Vec::new();

    let by_date = match document.get("byDate").and_then(Value::as_object) {
        Some(map) => map,
        None => return records,
    };

    for date_entry in by_date.values() {
        let events = match date_entry.get("events").and_then(Value::as_array) {
            Some(list) => list,
            None => continue,
        };
        for event in events {
            if let Some(fields) = event.as_object() {
                records.push(hoist(fields));
            }
        }
    }

    records
}

/// Builds a fresh record from the event's own fields with the
/// [`HOIST_RULES`] applied on top. The input is never mutated.
fn hoist(event: &serde_json::Map<String, Value>) -> Record {
    let mut data: HashMap<String, Value> = event
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    for rule in &HOIST_RULES {
        match resolve_path(event, rule.source_path) {
            Some(value) => {
                data.insert(rule.target_field.to_string(), value.clone());
            }
            None => {
                if let Some(default) = rule.default {
                    data.insert(
                        rule.target_field.to_string(),
                        Value::String(default.to_string()),
                    );
                }
            }
        }
    }

    Record { data }
}

fn resolve_path<'a>(event: &'a serde_json::Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = event.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
