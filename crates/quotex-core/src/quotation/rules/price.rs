//! Price line detection and (unit_price, qty, amount) extraction.

use super::patterns::{AMOUNT_TOKEN, CURRENCY_GLYPHS, MULTIPLIER, NUMBER_TOKEN};

/// Numeric tokens read from a price line, still as text.
///
/// Empty strings mean "not present"; coercion to numbers happens when the
/// row becomes an item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceTriple {
    pub unit_price: String,
    pub qty: String,
    pub amount: String,
}

impl PriceTriple {
    fn new(unit_price: &str, qty: &str, amount: &str) -> Self {
        Self {
            unit_price: unit_price.to_string(),
            qty: qty.to_string(),
            amount: amount.to_string(),
        }
    }
}

/// Parse a price line like `₹ 7,302 1 ₹7,302` or `7302 1 7302`.
///
/// With two tokens the amount repeats the qty token rather than
/// `unit_price * qty`. Callers relying on the amount should validate it.
pub fn parse_price_line(line: &str) -> PriceTriple {
    let cleaned: String = line
        .chars()
        .filter(|c| *c != ',' && !CURRENCY_GLYPHS.contains(c))
        .collect();
    let tokens: Vec<&str> = NUMBER_TOKEN.find_iter(&cleaned).map(|m| m.as_str()).collect();

    match tokens.as_slice() {
        [] => PriceTriple::default(),
        [amount] => PriceTriple::new(amount, "1", amount),
        [unit_price, qty] => PriceTriple::new(unit_price, qty, qty),
        [unit_price, qty, amount, ..] => PriceTriple::new(unit_price, qty, amount),
    }
}

/// Whether a line inside an item block is its price line.
///
/// Any currency glyph qualifies. Otherwise the line needs at least two
/// numeric tokens, no multiplier marker, and at most one stray character
/// (typically a currency glyph mangled by extraction).
pub fn is_price_line(line: &str) -> bool {
    if line.chars().any(|c| CURRENCY_GLYPHS.contains(&c)) {
        return true;
    }
    if MULTIPLIER.is_match(line) {
        return false;
    }

    let numeric_tokens = AMOUNT_TOKEN.find_iter(line).count();
    let stray = line
        .chars()
        .filter(|c| !(c.is_whitespace() || c.is_ascii_digit() || *c == ',' || *c == '.'))
        .count();

    numeric_tokens >= 2 && stray <= 1
}
