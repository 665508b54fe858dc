//! Non-blocking checks over an extracted quotation.

use serde::{Deserialize, Serialize};

use crate::models::quotation::{ItemRecord, StructuredDocument};

/// Default tolerance between `amount` and `qty * unit_price`.
pub const DEFAULT_AMOUNT_TOLERANCE: f64 = 0.01;

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Path of the offending field, e.g. `items[2].amount`.
    pub field: String,
    pub message: String,
    /// Observed value, as text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Validate with the default tolerance.
pub fn validate(doc: &StructuredDocument) -> Vec<ValidationError> {
    validate_with_tolerance(doc, DEFAULT_AMOUNT_TOLERANCE)
}

/// Check every item's amount against `qty * unit_price`.
///
/// Items where either side is zero are not checked, since a missing price
/// column coerces to zero.
pub fn validate_with_tolerance(doc: &StructuredDocument, tolerance: f64) -> Vec<ValidationError> {
    doc.items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| check_amount(item, i, tolerance))
        .collect()
}

fn check_amount(item: &ItemRecord, index: usize, tolerance: f64) -> Option<ValidationError> {
    let expected = f64::from(item.qty) * item.unit_price;
    if item.amount == 0.0 || expected == 0.0 || (item.amount - expected).abs() <= tolerance {
        return None;
    }

    Some(ValidationError {
        field: format!("items[{}].amount", index),
        message: format!("amount should equal qty * unit_price ({})", expected),
        value: Some(item.amount.to_string()),
    })
}
