//! Multi-line item blocks.
//!
//! Each item spans several lines: `<sr_no> <name>`, then any mix of
//! dimension and description lines, then a price line. The segmenter is a
//! two-state machine over an index into the immutable document lines.
//! Lines inside a block are classified by an ordered rule table; the first
//! matching rule decides how the line is handled.

use tracing::{debug, trace};

use super::dimensions::{looks_like_dimensions, split_dimensions};
use super::normalize::DocumentText;
use super::patterns::{BLOCK_START, TOTALS_LINE};
use super::price::{is_price_line, parse_price_line, PriceTriple};
use crate::models::quotation::RawRow;

/// How a line inside an open block is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Totals block reached: stop scanning, drop the open block.
    Totals,
    /// Price line: closes the block as an item.
    Price,
    /// First dimension line of the block.
    Dimensions,
    /// Anything else.
    Description,
}

type LinePredicate = fn(&str, &BlockAccumulator) -> bool;

/// Classification rules, evaluated in order.
const LINE_RULES: [(LineKind, LinePredicate); 4] = [
    (LineKind::Totals, matches_totals),
    (LineKind::Price, matches_price),
    (LineKind::Dimensions, matches_dimensions),
    (LineKind::Description, matches_any),
];

fn matches_totals(line: &str, _: &BlockAccumulator) -> bool {
    TOTALS_LINE.is_match(line)
}

fn matches_price(line: &str, _: &BlockAccumulator) -> bool {
    is_price_line(line)
}

fn matches_dimensions(line: &str, block: &BlockAccumulator) -> bool {
    block.dimensions.is_empty() && looks_like_dimensions(line)
}

fn matches_any(_: &str, _: &BlockAccumulator) -> bool {
    true
}

/// Classify a line inside an open block.
pub fn classify_line(line: &str, block: &BlockAccumulator) -> LineKind {
    LINE_RULES
        .iter()
        .find(|(_, matches)| matches(line, block))
        .map(|(kind, _)| *kind)
        .unwrap_or(LineKind::Description)
}

/// Fields gathered for the block currently being read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockAccumulator {
    pub sr_no: String,
    pub name: String,
    pub dimensions: String,
    pub description_parts: Vec<String>,
}

impl BlockAccumulator {
    fn open(sr_no: &str, name: &str) -> Self {
        Self {
            sr_no: sr_no.to_string(),
            name: name.trim().to_string(),
            ..Default::default()
        }
    }

    fn add_dimensions(&mut self, line: &str) {
        let split = split_dimensions(line);
        self.dimensions = split.dimensions;
        if let Some(description) = split.description {
            self.description_parts.push(description);
        }
    }

    fn finish(self, price: PriceTriple) -> RawRow {
        let qty = if price.qty.is_empty() {
            "1".to_string()
        } else {
            price.qty
        };

        RawRow {
            sr_no: self.sr_no,
            name: self.name,
            description: Some(self.description_parts.join(" ")),
            dimensions: self.dimensions,
            qty,
            unit_price: price.unit_price,
            amount: price.amount,
            ..Default::default()
        }
    }
}

/// Segmenter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockState {
    ScanningForStart,
    InBlock(BlockAccumulator),
}

/// Outcome of feeding one line to the segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(BlockState),
    Emit(RawRow),
    Stop,
}

/// State machine grouping multi-line item blocks into rows.
pub struct BlockSegmenter<'a> {
    doc: &'a DocumentText,
    cursor: usize,
    state: BlockState,
}

impl<'a> BlockSegmenter<'a> {
    /// Start scanning on the line after the table header.
    pub fn new(doc: &'a DocumentText, header_index: usize) -> Self {
        Self {
            doc,
            cursor: header_index + 1,
            state: BlockState::ScanningForStart,
        }
    }

    /// Run to the end of the document or the first totals line.
    pub fn run(mut self) -> Vec<RawRow> {
        let mut rows = Vec::new();

        while let Some(line) = self.doc.get(self.cursor) {
            let state = std::mem::replace(&mut self.state, BlockState::ScanningForStart);
            match step(state, line) {
                Step::Continue(next) => self.state = next,
                Step::Emit(row) => {
                    trace!("Block {} closed at line {}", row.sr_no, self.cursor);
                    rows.push(row);
                }
                Step::Stop => {
                    debug!("Table ends at line {} (totals)", self.cursor);
                    return rows;
                }
            }
            self.cursor += 1;
        }

        if let BlockState::InBlock(block) = &self.state {
            debug!("Dropping block {} without a price line", block.sr_no);
        }
        rows
    }
}

/// Apply one line to a state.
pub fn step(state: BlockState, line: &str) -> Step {
    match state {
        BlockState::ScanningForStart => {
            if TOTALS_LINE.is_match(line) {
                return Step::Stop;
            }
            match BLOCK_START.captures(line) {
                Some(caps) => Step::Continue(BlockState::InBlock(BlockAccumulator::open(
                    &caps[1], &caps[2],
                ))),
                None => Step::Continue(BlockState::ScanningForStart),
            }
        }
        BlockState::InBlock(mut block) => match classify_line(line, &block) {
            LineKind::Totals => {
                debug!("Dropping block {} at totals line", block.sr_no);
                Step::Stop
            }
            LineKind::Price => Step::Emit(block.finish(parse_price_line(line))),
            LineKind::Dimensions => {
                block.add_dimensions(line);
                Step::Continue(BlockState::InBlock(block))
            }
            LineKind::Description => {
                block.description_parts.push(line.trim().to_string());
                Step::Continue(BlockState::InBlock(block))
            }
        },
    }
}

/// Parse multi-line blocks following the header at `header_index`.
pub fn parse_multiline_rows(doc: &DocumentText, header_index: usize) -> Vec<RawRow> {
    BlockSegmenter::new(doc, header_index).run()
}
