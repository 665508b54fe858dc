//! Dimension vs. description disambiguation inside item blocks.

use super::patterns::{DIMENSION_LINE, DIMENSION_SUFFIX_KEYWORDS, DIMENSION_TOKEN};

/// A line split into its dimension part and an optional trailing description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionSplit {
    pub dimensions: String,
    pub description: Option<String>,
}

/// Whether a line carries a dimension like `1300 X 650 X 350` or `900 Dia X 400 H`.
pub fn looks_like_dimensions(line: &str) -> bool {
    DIMENSION_LINE.is_match(line) || DIMENSION_TOKEN.is_match(line)
}

/// Split a dimension line at the earliest descriptive keyword.
///
/// `900 Dia X 400 H Base in HDMR ply` becomes dimensions `900 Dia X 400 H`
/// and description `Base in HDMR ply`. Without a keyword the whole line is
/// the dimension.
pub fn split_dimensions(line: &str) -> DimensionSplit {
    let line = line.trim();
    // ASCII upper-casing keeps byte offsets aligned with `line`
    let upper = line.to_ascii_uppercase();

    let split_at = DIMENSION_SUFFIX_KEYWORDS
        .iter()
        .filter_map(|k| upper.find(&k.to_ascii_uppercase()))
        .filter(|pos| *pos > 0)
        .min();

    match split_at {
        Some(pos) => {
            let suffix = line[pos..].trim();
            DimensionSplit {
                dimensions: line[..pos].trim().to_string(),
                description: (!suffix.is_empty()).then(|| suffix.to_string()),
            }
        }
        None => DimensionSplit {
            dimensions: line.to_string(),
            description: None,
        },
    }
}
