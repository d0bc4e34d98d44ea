use crate::core::dates::{format_date, DATE_FIELDS};
use crate::domain::model::{Record, Row, EXPORT_HEADERS};
use serde_json::Value;

/// Selection index for the multi-valued attendance field: when
/// `howManyPeople` holds more than one option, only the option at this
/// index is exported. Single-valued answers are kept whole.
pub const ATTENDANCE_CHOICE_INDEX: usize = 1;

const ATTENDANCE_FIELD: &str = "howManyPeople";

/// Projects one flattened record onto the fixed export columns, in header
/// order. Missing fields become empty strings, date columns go through
/// [`format_date`], and the attendance rule above is applied.
pub fn project(record: &Record) -> Row {
    let mut values = Vec::with_capacity(EXPORT_HEADERS.len());
    for header in EXPORT_HEADERS {
        values.push(project_field(record, header));
    }
    Row::new(values)
}

fn project_field(record: &Record, header: &str) -> String {
    let value = match record.data.get(header) {
        Some(value) => value,
        None => return String::new(),
    };

    if header == ATTENDANCE_FIELD {
        if let Value::Array(options) = value {
            if options.len() > ATTENDANCE_CHOICE_INDEX {
                return value_to_string(&options[ATTENDANCE_CHOICE_INDEX]);
            }
        }
    }

    if DATE_FIELDS.contains(&header) {
        if let Value::String(raw) = value {
            return format_date(raw, header).into_inner();
        }
    }

    value_to_string(value)
}

/// Text rendering for cell values: strings stay bare, null becomes empty,
/// everything else uses its compact JSON form.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
