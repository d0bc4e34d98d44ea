use crate::domain::model::{Row, EXPORT_HEADERS};

/// Renders rows as a pipe-delimited console table: a blank line, a rule of
/// `=` characters sized to the header line, the header line, the rule
/// again, then one line per row. With no rows the table collapses to a
/// plain `No data available`.
pub fn render_table(rows: &[Row]) -> String {
    if rows.is_empty() {
        return "No data available".to_string();
    }

    let header_line = EXPORT_HEADERS.join(" | ");
    let separator = "=".repeat(header_line.len());

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(String::new());
    lines.push(separator.clone());
    lines.push(header_line);
    lines.push(separator);
    for row in rows {
        lines.push(row.values().join(" | "));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_row() -> Row {
        Row::new(vec![String::new(); EXPORT_HEADERS.len()])
    }

    #[test]
    fn test_no_rows_reports_no_data() {
        assert_eq!(render_table(&[]), "No data available");
    }

    #[test]
    fn test_table_layout() {
        let table = render_table(&[blank_row(), blank_row()]);
        let lines: Vec<&str> = table.split('\n').collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "");
        assert_eq!(lines[2], EXPORT_HEADERS.join(" | "));
        assert_eq!(lines[1], lines[3]);
        assert_eq!(lines[1].len(), lines[2].len());
        assert!(lines[1].chars().all(|c| c == '='));
    }

    #[test]
    fn test_row_values_are_pipe_delimited() {
        let mut values = vec![String::new(); EXPORT_HEADERS.len()];
        values[2] = "Picnic".to_string();
        values[4] = "open".to_string();

        let table = render_table(&[Row::new(values)]);
        let last_line = table.split('\n').next_back().unwrap();

        assert!(last_line.contains("Picnic |"));
        assert_eq!(last_line.matches(" | ").count(), EXPORT_HEADERS.len() - 1);
    }
}
