use crate::domain::model::{Row, EXPORT_HEADERS};
use crate::utils::error::{EtlError, Result};

/// Renders the fixed header line plus one line per row as CSV. Fields
/// containing the delimiter, quotes or line breaks are quoted with
/// embedded quotes doubled.
pub fn render_csv(rows: &[Row]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(EXPORT_HEADERS)?;
    for row in rows {
        writer.write_record(row.values())?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with(header: &str, value: &str) -> Row {
        let values = EXPORT_HEADERS
            .iter()
            .map(|h| if *h == header { value.to_string() } else { String::new() })
            .collect();
        Row::new(values)
    }

    #[test]
    fn test_empty_input_renders_header_only() {
        let output = render_csv(&[]).unwrap();

        assert_eq!(output, format!("{}\n", EXPORT_HEADERS.join(",")));
    }

    #[test]
    fn test_rows_round_trip_through_a_csv_reader() {
        let rows = vec![
            row_with("eventName", "Picnic"),
            row_with("eventDescription", "Tea, cake and rain"),
        ];

        let output = render_csv(&rows).unwrap();

        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(|h| h.to_string())
            .collect();
        assert_eq!(headers, EXPORT_HEADERS);

        let parsed: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(&parsed[0][2], "Picnic");
        assert_eq!(&parsed[1][7], "Tea, cake and rain");
    }

    #[test]
    fn test_embedded_quotes_and_newlines_are_escaped() {
        let rows = vec![row_with("eventDescription", "line one\nsaid \"hi\"")];

        let output = render_csv(&rows).unwrap();

        assert!(output.contains(r#""line one"#));
        assert!(output.contains(r#"said ""hi""""#));

        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[7], "line one\nsaid \"hi\"");
    }
}
