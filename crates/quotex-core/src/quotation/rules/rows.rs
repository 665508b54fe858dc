//! Single-line table rows: one item per line, columns split on whitespace gaps.

use tracing::{debug, trace};

use super::normalize::DocumentText;
use super::patterns::{COLUMN_GAP, SERIAL_NUMBER, TOTALS_LINE};
use crate::models::quotation::RawRow;

/// Maximum number of columns taken from a whitespace re-split.
const MAX_COLUMNS: usize = 9;

/// Split a row into columns.
///
/// Tabs or runs of two or more spaces separate columns. Lines that yield
/// fewer than three columns that way are re-split on any whitespace,
/// keeping at most nine tokens.
pub fn split_columns(line: &str) -> Vec<&str> {
    let parts: Vec<&str> = COLUMN_GAP.split(line).map(str::trim).collect();
    if parts.len() >= 3 {
        return parts;
    }

    line.split_whitespace().take(MAX_COLUMNS).collect()
}

/// Parse rows following the header at `header_index` until a totals line.
pub fn parse_single_line_rows(doc: &DocumentText, header_index: usize) -> Vec<RawRow> {
    let mut rows = Vec::new();

    for (i, line) in doc.after(header_index) {
        if TOTALS_LINE.is_match(line) {
            debug!("Table ends at line {} (totals)", i);
            break;
        }

        let parts = split_columns(line);
        if parts.len() < 2 {
            trace!("Skipping line {}: {} column(s)", i, parts.len());
            continue;
        }

        let row = row_from_columns(&parts);
        if !row.sr_no.is_empty() && !SERIAL_NUMBER.is_match(&row.sr_no) {
            trace!("Skipping line {}: non-numeric sr_no {:?}", i, row.sr_no);
            continue;
        }

        rows.push(row);
    }

    rows
}

fn row_from_columns(parts: &[&str]) -> RawRow {
    let col = |i: usize| parts.get(i).map(|s| s.trim().to_string()).unwrap_or_default();

    RawRow {
        sr_no: col(0),
        name: col(1),
        description: None,
        dimensions: col(2),
        area: col(3),
        material: col(4),
        finish: col(5),
        qty: col(6),
        unit_price: col(7),
        amount: col(8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_columns_on_gaps() {
        assert_eq!(
            split_columns("1  Sofa  1800 X 900  Living\tTeak"),
            vec!["1", "Sofa", "1800 X 900", "Living", "Teak"]
        );
    }

    #[test]
    fn test_split_columns_falls_back_to_whitespace() {
        assert_eq!(split_columns("2 Chair 4"), vec!["2", "Chair", "4"]);
        assert_eq!(
            split_columns("3 a b c d e f g h i j k"),
            vec!["3", "a", "b", "c", "d", "e", "f", "g", "h"]
        );
    }

    #[test]
    fn test_parse_rows_positionally() {
        let doc = DocumentText::from_raw(
            "S.No  Name  Size  Area  Material  Finish  Qty  Rate  Amount\n\
             1  Sofa  1800 X 900  Living  Fabric  Beige  1  25,000  25,000\n\
             2  Bed  1950 X 1800  Master  Teak  Matt  2  40,000  80,000\n\
             Sub Total  1,05,000\n\
             3  Ghost  1  1  1",
        );
        let rows = parse_single_line_rows(&doc, 0);

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            RawRow {
                sr_no: "2".to_string(),
                name: "Bed".to_string(),
                description: None,
                dimensions: "1950 X 1800".to_string(),
                area: "Master".to_string(),
                material: "Teak".to_string(),
                finish: "Matt".to_string(),
                qty: "2".to_string(),
                unit_price: "40,000".to_string(),
                amount: "80,000".to_string(),
            }
        );
    }

    #[test]
    fn test_rows_with_non_numeric_sr_no_are_dropped() {
        let doc = DocumentText::from_raw(
            "S.No  Product  Qty\n\
             Note: prices in INR\n\
             1.  Table  2\n\
             A1  Lamp  3\n\
             Lone",
        );
        let rows = parse_single_line_rows(&doc, 0);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sr_no, "1.");
        assert_eq!(rows[0].name, "Table");
        assert_eq!(rows[0].dimensions, "2");
    }

    #[test]
    fn test_missing_columns_default_to_empty() {
        let doc = DocumentText::from_raw("S.No  Product\n4  Side table");
        let rows = parse_single_line_rows(&doc, 0);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Side");
        assert_eq!(rows[0].dimensions, "table");
        assert!(rows[0].qty.is_empty());
        assert!(rows[0].amount.is_empty());
    }
}
