//! Header anchor location ("Project Name: ...", "Date", ...).

use std::collections::HashSet;

use tracing::trace;

use super::normalize::DocumentText;
use super::patterns::{ANCHOR_SEPARATORS, HEADER_ANCHOR_PATTERNS, TABLE_START};
use crate::models::quotation::{HeaderFields, HeaderKey};

/// Locate every known header anchor and capture its value.
///
/// Anchors match whole words, case-insensitively. A line belongs to the
/// first anchor found on it, and the first line carrying an anchor decides
/// that key. The value is the text after the anchor on the same line; when
/// that is empty the next line is used, unless the next line already starts
/// the item table.
pub fn extract_header(doc: &DocumentText) -> HeaderFields {
    let mut header = HeaderFields::default();
    let mut decided: HashSet<HeaderKey> = HashSet::new();

    for (i, line) in doc.lines().iter().enumerate() {
        let Some((key, end)) = HEADER_ANCHOR_PATTERNS
            .iter()
            .find_map(|(key, pattern)| pattern.find(line).map(|m| (*key, m.end())))
        else {
            continue;
        };
        if !decided.insert(key) {
            continue;
        }

        if let Some(value) = anchor_value(doc, i, end) {
            trace!("header {} = {:?}", key.as_str(), value);
            *header.get_mut(key) = value;
        }
    }

    header
}

fn anchor_value(doc: &DocumentText, index: usize, anchor_end: usize) -> Option<String> {
    let rest = doc[index][anchor_end..]
        .trim_start_matches(|c: char| c.is_whitespace() || ANCHOR_SEPARATORS.contains(&c))
        .trim_end();
    if !rest.is_empty() {
        return Some(rest.to_string());
    }

    doc.get(index + 1)
        .filter(|next| !TABLE_START.is_match(next))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_same_line_values() {
        let doc = DocumentText::from_raw(
            "SALES QUOTATION\n\
             Project Name: Sea View Villa\n\
             Client Name - Mr. Rao\n\
             Quotation No. : SQ/24/118\n\
             Date : 12-03-2024\n\
             Prepared By: Anita",
        );

        let header = extract_header(&doc);
        assert_eq!(
            header,
            HeaderFields {
                project_name: "Sea View Villa".to_string(),
                client_name: "Mr. Rao".to_string(),
                quotation_no: "SQ/24/118".to_string(),
                date: "12-03-2024".to_string(),
                prepared_by: "Anita".to_string(),
            }
        );
    }

    #[test]
    fn test_value_on_next_line() {
        let doc = DocumentText::from_raw("Project Name\nLake House\nClient Name:\nS.No Product Qty Amount");
        let header = extract_header(&doc);

        assert_eq!(header.project_name, "Lake House");
        assert_eq!(header.client_name, "");
    }

    #[test]
    fn test_first_match_wins() {
        let doc = DocumentText::from_raw("Date: 01-01-2024\nDelivery Date: 15-02-2024");
        assert_eq!(extract_header(&doc).date, "01-01-2024");
    }

    #[test]
    fn test_no_anchors_yields_empty_header() {
        let doc = DocumentText::from_raw("Some vendor letterhead\n1 Sofa\n25000");
        let header = extract_header(&doc);

        assert!(header.is_empty());
        assert_eq!(header, HeaderFields::default());
    }

    #[test]
    fn test_anchor_matching_is_case_insensitive() {
        let doc = DocumentText::from_raw("PREPARED BY   Design Team");
        assert_eq!(extract_header(&doc).prepared_by, "Design Team");
    }

    #[test]
    fn test_anchor_inside_a_word_is_ignored() {
        let doc = DocumentText::from_raw(
            "Project Name: Mandate Towers\n\
             Update: revised layout\n\
             Date: 12-03-2024\n\
             S.No Product Specs Price Qty Amount",
        );
        let header = extract_header(&doc);

        assert_eq!(header.project_name, "Mandate Towers");
        assert_eq!(header.date, "12-03-2024");
    }

    #[test]
    fn test_line_belongs_to_its_first_anchor() {
        let doc = DocumentText::from_raw("Client Name: Mr. Rao  Date: 01-01-2024\nDate: 05-01-2024");
        let header = extract_header(&doc);

        assert_eq!(header.client_name, "Mr. Rao  Date: 01-01-2024");
        assert_eq!(header.date, "05-01-2024");
    }
}
