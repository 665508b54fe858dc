//! Rule-based extractors for sales quotation text.

pub mod normalize;
pub mod patterns;
pub mod header;
pub mod table;
pub mod price;
pub mod dimensions;
pub mod rows;
pub mod blocks;
pub mod totals;
pub mod images;
pub mod classify;

pub use normalize::DocumentText;
pub use header::extract_header;
pub use table::{find_table_header, TableFormat, TableHeader};
pub use price::{is_price_line, parse_price_line, PriceTriple};
pub use dimensions::{looks_like_dimensions, split_dimensions, DimensionSplit};
pub use rows::{parse_single_line_rows, split_columns};
pub use blocks::{parse_multiline_rows, BlockSegmenter, BlockState, LineKind};
pub use totals::extract_totals;
pub use images::{align_images, image_offset};
pub use classify::{classify_product, ProductClass, ProductType, ProductView};

use crate::models::quotation::RawRow;

/// Segment the item table, dispatching on its row format.
pub fn parse_table(doc: &DocumentText) -> Option<(TableHeader, Vec<RawRow>)> {
    let header = find_table_header(doc)?;
    let rows = match header.format {
        TableFormat::SingleLine => parse_single_line_rows(doc, header.index),
        TableFormat::MultiLine => parse_multiline_rows(doc, header.index),
    };
    Some((header, rows))
}
