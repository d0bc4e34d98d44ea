use serde_json::Value;

/// Total number of events across all dates, without flattening anything.
/// Dates missing an `events` list contribute zero, as does a document
/// without `byDate`.
pub fn count_events(document: &Value) -> usize {
    let by_date = match document.get("byDate").and_then(Value::as_object) {
        Some(map) => map,
        None => return 0,
    };

    by_date
        .values()
        .filter_map(|date_entry| date_entry.get("events").and_then(Value::as_array))
        .map(Vec::len)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flatten::flatten_document;
    use serde_json::json;

    #[test]
    fn test_counts_events_across_dates() {
        let document = json!({
            "byDate": {
                "2024-04-01": {"events": [{"id": 1}, {"id": 2}]},
                "2024-04-02": {"note": "no events key"},
                "2024-04-03": {"events": []},
                "2024-04-04": {"events": [{"id": 3}]}
            }
        });

        assert_eq!(count_events(&document), 3);
    }

    #[test]
    fn test_empty_document_counts_zero() {
        assert_eq!(count_events(&json!({})), 0);
        assert_eq!(count_events(&json!({"byDate": {}})), 0);
    }

    #[test]
    fn test_count_matches_flattened_record_count() {
        let document = json!({
            "byDate": {
                "2024-04-01": {"events": [{"id": 1}, {"id": 2}, {"id": 3}]},
                "2024-05-20": {"events": [{"id": 4}]},
                "2024-06-02": {"events": []}
            }
        });

        assert_eq!(count_events(&document), flatten_document(&document).len());
    }
}
