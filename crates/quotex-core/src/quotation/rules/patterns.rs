//! Regex patterns and keyword tables for quotation extraction.
//!
//! Built once per process and shared read-only by every parse.

use lazy_static::lazy_static;
use regex::Regex;

use super::classify::ProductType;
use crate::models::quotation::HeaderKey;

/// Glyphs treated as currency markers on price lines.
pub const CURRENCY_GLYPHS: [char; 4] = ['\u{20b9}', '$', '\u{20ac}', '\u{a3}'];

/// Header anchors, per key, in the order they are tried on each line.
///
/// Words are matched whole and may be separated by any whitespace.
pub const HEADER_ANCHORS: [(HeaderKey, &[&str]); 5] = [
    (HeaderKey::ProjectName, &["project name"]),
    (HeaderKey::ClientName, &["client name", "customer name"]),
    (HeaderKey::QuotationNo, &["quotation number", "quotation no"]),
    (HeaderKey::Date, &["date"]),
    (HeaderKey::PreparedBy, &["prepared by"]),
];

/// Leading punctuation stripped between an anchor and its value.
pub const ANCHOR_SEPARATORS: &[char] = &[':', '.', '-', '#', '\u{2013}', '='];

/// Companion keywords that make a "product" line a table header.
pub const PRODUCT_HEADER_KEYWORDS: [&str; 3] = ["qty", "amount", "description"];

/// Descriptive keywords that end the dimension part of a mixed line.
pub const DIMENSION_SUFFIX_KEYWORDS: [&str; 5] =
    [" Base ", " Top in ", " Finish ", " construction ", " Internal "];

/// Item name keywords, tried in order; the first one contained wins.
pub const PRODUCT_TYPE_KEYWORDS: [(&str, ProductType); 13] = [
    ("wardrobe", ProductType::Wardrobe),
    ("tv unit", ProductType::TvUnit),
    ("television", ProductType::TvUnit),
    ("kitchen", ProductType::KitchenCabinet),
    ("cabinet", ProductType::Cabinet),
    ("bed", ProductType::Bed),
    ("sofa", ProductType::Sofa),
    ("console", ProductType::Console),
    ("table", ProductType::Table),
    ("chair", ProductType::Chair),
    ("storage", ProductType::Storage),
    ("desk", ProductType::Desk),
    ("divider", ProductType::Other),
];

lazy_static! {
    // Line terminators: CRLF, lone CR/LF, VT, FF, file/group/record
    // separators, NEL and the Unicode line/paragraph separators
    pub static ref LINE_BREAK: Regex = Regex::new(
        r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]"
    ).unwrap();

    // One case-insensitive, whole-word pattern per header key
    pub static ref HEADER_ANCHOR_PATTERNS: Vec<(HeaderKey, Regex)> = HEADER_ANCHORS
        .iter()
        .map(|(key, anchors)| {
            let alternatives: Vec<String> = anchors
                .iter()
                .map(|a| a.split(' ').map(regex::escape).collect::<Vec<_>>().join(r"\s+"))
                .collect();
            let pattern = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
            (*key, Regex::new(&pattern).unwrap())
        })
        .collect();

    // Serial-number column header ("S.No", "Sr. No.", "SNo")
    pub static ref SERIAL_HEADER: Regex = Regex::new(
        r"(?i)\b(?:s|sr)\.?\s*no\b\.?"
    ).unwrap();

    // Line that starts the item table (used to guard header next-line values)
    pub static ref TABLE_START: Regex = Regex::new(
        r"(?i)^(?:s\.?\s*no|sr\.?\s*no|product)"
    ).unwrap();

    // Totals block: ends any table scan
    pub static ref TOTALS_LINE: Regex = Regex::new(
        r"(?i)^(?:sub\s*total|total|grand\s*total|tax)"
    ).unwrap();

    // Tax line in the totals block
    pub static ref TAX_LINE: Regex = Regex::new(
        r"(?i)^tax\b"
    ).unwrap();

    // First line of a multi-line item block: "<sr_no> <name>"
    pub static ref BLOCK_START: Regex = Regex::new(
        r"^(\d+)\s+(.+)$"
    ).unwrap();

    // Numeric token once separators and glyphs are gone
    pub static ref NUMBER_TOKEN: Regex = Regex::new(
        r"\d+(?:\.\d+)?"
    ).unwrap();

    // Numeric token that may still carry thousands separators
    pub static ref AMOUNT_TOKEN: Regex = Regex::new(
        r"\d[\d,]*(?:\.\d+)?"
    ).unwrap();

    // Multiplier marker between numbers, or a free-standing "x"
    pub static ref MULTIPLIER: Regex = Regex::new(
        r"(?i)\d\s*[x×]\s*\d|\s[x×]\s"
    ).unwrap();

    // Whole-line dimension form: "1300 X 650 X 350"
    pub static ref DIMENSION_LINE: Regex = Regex::new(
        r"^[\d\s]+[xX×]\s*[\d\s]+"
    ).unwrap();

    // Embedded dimension form: "900 Dia X 400 H", "600x600"
    pub static ref DIMENSION_TOKEN: Regex = Regex::new(
        r"\d+\s*(?:(?i:dia)\s*)?[xX×]\s*\d+"
    ).unwrap();

    // Single-line column separator: tab or a run of 2+ whitespace
    pub static ref COLUMN_GAP: Regex = Regex::new(
        r"\s{2,}|\t"
    ).unwrap();

    // Plain integer or decimal serial number
    pub static ref SERIAL_NUMBER: Regex = Regex::new(
        r"^\d+\.?\d*$"
    ).unwrap();
}
