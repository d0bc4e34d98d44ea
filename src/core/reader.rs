use crate::utils::error::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Loads an arbitrary JSON file shaped as either a list of objects or a
/// single object, and exposes its values column-wise. This is a
/// general-purpose inspection tool, not part of the export pipeline.
pub struct JsonReader {
    data: Value,
    headers: Vec<String>,
}

impl JsonReader {
    /// Reads and parses the file at `path`. Headers come from the first
    /// element for list input, or from the object's own keys. A missing
    /// file or invalid JSON is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let data: Value = serde_json::from_str(&content)?;
        let headers = discover_headers(&data);
        Ok(Self { data, headers })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All values under `header`: one per element for list input, a single
    /// value for object input. Elements missing the field yield `null`.
    pub fn column(&self, header: &str) -> Vec<Value> {
        match &self.data {
            Value::Array(items) => items
                .iter()
                .map(|item| item.get(header).cloned().unwrap_or(Value::Null))
                .collect(),
            Value::Object(fields) => {
                vec![fields.get(header).cloned().unwrap_or(Value::Null)]
            }
            _ => Vec::new(),
        }
    }

    /// The whole document as header -> column.
    pub fn table(&self) -> HashMap<String, Vec<Value>> {
        self.headers
            .iter()
            .map(|header| (header.clone(), self.column(header)))
            .collect()
    }
}

fn discover_headers(data: &Value) -> Vec<String> {
    match data {
        Value::Array(items) => items
            .first()
            .and_then(Value::as_object)
            .map(|fields| fields.keys().cloned().collect())
            .unwrap_or_default(),
        Value::Object(fields) => fields.keys().cloned().collect(),
        _ => Vec::new(),
    }
}
