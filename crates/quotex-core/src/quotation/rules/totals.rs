//! Subtotal, tax and grand total extraction.

use tracing::trace;

use super::normalize::DocumentText;
use super::patterns::{AMOUNT_TOKEN, TAX_LINE};
use crate::models::quotation::{coerce_amount, TotalsRecord};

/// Scan every line for totals. The last matching line of each kind wins.
pub fn extract_totals(doc: &DocumentText) -> TotalsRecord {
    let mut totals = TotalsRecord::default();

    for line in doc.lines() {
        let lower = line.to_lowercase();

        if lower.contains("sub") && lower.contains("total") {
            if let Some(v) = last_amount(line) {
                totals.subtotal = v;
            }
        }
        if TAX_LINE.is_match(&lower) {
            if let Some(v) = last_amount(line) {
                totals.tax = v;
            }
        }
        if lower.contains("grand") && lower.contains("total") {
            if let Some(v) = last_amount(line) {
                totals.grand_total = v;
            }
        }
    }

    trace!("totals: {:?}", totals);
    totals
}

/// The last numeric token on a line, coerced to a float.
fn last_amount(line: &str) -> Option<f64> {
    AMOUNT_TOKEN
        .find_iter(line)
        .last()
        .map(|m| coerce_amount(m.as_str()))
}
