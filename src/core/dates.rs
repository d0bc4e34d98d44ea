use chrono::NaiveDateTime;

/// Timestamp layout used by the source documents, e.g.
/// `2024-04-01T10:30:00.000000Z`. The literal dot and `%6f` demand the
/// six-digit fraction; `%.6f` would treat it as optional and let
/// fraction-less timestamps slip past the raw fallback.
const SOURCE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%6fZ";

const DATE_ONLY_FORMAT: &str = "%d/%m/%Y";
const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Columns whose string values are reformatted on export.
pub const DATE_FIELDS: [&str; 3] = ["createdAt", "eventDate", "updatedAt"];

/// Result of reformatting a timestamp. `Raw` carries the input verbatim
/// when it does not match [`SOURCE_FORMAT`], so callers can tell a real
/// reformat from a passthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedDate {
    Formatted(String),
    Raw(String),
}

impl FormattedDate {
    pub fn as_str(&self) -> &str {
        match self {
            FormattedDate::Formatted(text) | FormattedDate::Raw(text) => text,
        }
    }

    pub fn into_inner(self) -> String {
        match self {
            FormattedDate::Formatted(text) | FormattedDate::Raw(text) => text,
        }
    }
}

/// Reformats `raw` for the given column. `createdAt` keeps only the date,
/// the other date columns keep their time component.
pub fn format_date(raw: &str, field: &str) -> FormattedDate {
    match NaiveDateTime::parse_from_str(raw, SOURCE_FORMAT) {
        Ok(timestamp) => {
            let pattern = if field == "createdAt" {
                DATE_ONLY_FORMAT
            } else {
                DATE_TIME_FORMAT
            };
            FormattedDate::Formatted(timestamp.format(pattern).to_string())
        }
        Err(_) => FormattedDate::Raw(raw.to_string()),
    }
}
