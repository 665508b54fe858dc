//! Item table header detection and row-format classification.

use serde::{Deserialize, Serialize};

use super::normalize::DocumentText;
use super::patterns::{PRODUCT_HEADER_KEYWORDS, SERIAL_HEADER};

/// Layout of item rows below the table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableFormat {
    /// One item per line, columns separated by whitespace gaps.
    SingleLine,
    /// Each item spans several lines: name, specs, then a price line.
    MultiLine,
}

impl TableFormat {
    /// Classify the row format from the header line keywords.
    pub fn classify(header_line: &str) -> Self {
        let lower = header_line.to_lowercase();
        let multi = lower.contains("specs")
            && (lower.contains("price") || lower.contains("qty"))
            && lower.contains("amount");

        if multi {
            TableFormat::MultiLine
        } else {
            TableFormat::SingleLine
        }
    }
}

/// The located table header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableHeader {
    /// Index of the header line in the document.
    pub index: usize,
    /// Row format of the table.
    pub format: TableFormat,
}

/// Find the line introducing the item table.
///
/// A serial-number header ("S.No", "Sr No") is preferred; otherwise the
/// first line mentioning "product" together with qty, amount or
/// description is used.
pub fn find_table_header(doc: &DocumentText) -> Option<TableHeader> {
    let index = doc
        .lines()
        .iter()
        .position(|l| SERIAL_HEADER.is_match(l))
        .or_else(|| doc.lines().iter().position(|l| is_product_header(l)))?;

    Some(TableHeader {
        index,
        format: TableFormat::classify(&doc[index]),
    })
}

fn is_product_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("product") && PRODUCT_HEADER_KEYWORDS.iter().any(|k| lower.contains(k))
}
