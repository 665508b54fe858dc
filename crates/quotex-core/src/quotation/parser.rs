//! Heuristic quotation parser: raw text and images to a structured document.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::quotation::{ImageBlob, ItemRecord, StructuredDocument};
use crate::models::template::TemplateConfig;

use super::rules::{align_images, extract_header, extract_totals, parse_table, DocumentText, TableFormat};
use super::validation::{validate_with_tolerance, ValidationError, DEFAULT_AMOUNT_TOLERANCE};

/// Result of parsing one quotation.
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    /// Extracted quotation.
    pub document: StructuredDocument,
    /// Row format of the detected table, if one was found.
    pub table_format: Option<TableFormat>,
    /// Amount check findings (empty when validation is off).
    pub validation_errors: Vec<ValidationError>,
    /// Non-fatal extraction warnings.
    pub warnings: Vec<String>,
    /// Raw input text, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for quotation parsing.
pub trait QuotationParser {
    /// Parse already-extracted text and the document's images.
    ///
    /// Never fails on content: unrecognized input yields empty fields.
    fn parse(&self, text: &str, images: Vec<ImageBlob>) -> ParseReport;

    /// Parse text alone and return only the document.
    fn parse_text(&self, text: &str) -> StructuredDocument {
        self.parse(text, Vec::new()).document
    }
}

/// Line-heuristic parser for semi-structured quotations.
#[derive(Debug, Clone)]
pub struct HeuristicQuotationParser {
    /// Whether to run the amount check.
    validate: bool,
    /// Tolerance for the amount check.
    tolerance: f64,
    /// Keep the raw text in the report.
    keep_raw_text: bool,
    /// Layout override; accepted but not applied yet.
    template: Option<TemplateConfig>,
}

impl HeuristicQuotationParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            validate: true,
            tolerance: DEFAULT_AMOUNT_TOLERANCE,
            keep_raw_text: false,
            template: None,
        }
    }

    /// Build a parser from the extraction configuration.
    pub fn from_config(config: &crate::models::config::ExtractionConfig) -> Self {
        Self::new()
            .with_validation(config.validate_amounts)
            .with_tolerance(config.amount_tolerance)
            .with_raw_text(config.keep_raw_text)
    }

    /// Set amount validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Set the amount tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Keep the raw text in the report.
    pub fn with_raw_text(mut self, keep: bool) -> Self {
        self.keep_raw_text = keep;
        self
    }

    /// Attach a layout template.
    pub fn with_template(mut self, template: TemplateConfig) -> Self {
        self.template = Some(template);
        self
    }

    /// The attached template, if any.
    pub fn template(&self) -> Option<&TemplateConfig> {
        self.template.as_ref()
    }
}

impl Default for HeuristicQuotationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotationParser for HeuristicQuotationParser {
    fn parse(&self, text: &str, images: Vec<ImageBlob>) -> ParseReport {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!(
            "Parsing quotation from {} characters of text and {} images",
            text.len(),
            images.len()
        );

        if self.template.as_ref().is_some_and(|t| !t.is_empty()) {
            debug!("Template supplied; text heuristics do not apply it");
        }

        let doc = DocumentText::from_raw(text);
        if doc.is_empty() {
            warnings.push("Input text is empty".to_string());
        }

        let header = extract_header(&doc);
        if header.is_empty() {
            warnings.push("No header fields found".to_string());
        }

        let (table_format, rows) = match parse_table(&doc) {
            Some((table, rows)) => {
                debug!(
                    "Table header at line {} ({:?}), {} rows",
                    table.index,
                    table.format,
                    rows.len()
                );
                (Some(table.format), rows)
            }
            None => {
                warnings.push("Could not find item table header".to_string());
                (None, Vec::new())
            }
        };
        if table_format.is_some() && rows.is_empty() {
            warnings.push("Item table has no rows".to_string());
        }

        let mut items: Vec<ItemRecord> = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| ItemRecord::from_raw(row, i))
            .collect();
        align_images(&mut items, &images);

        let totals = extract_totals(&doc);

        let document = StructuredDocument {
            header,
            items,
            totals,
            images,
        };

        let validation_errors = if self.validate {
            validate_with_tolerance(&document, self.tolerance)
        } else {
            Vec::new()
        };

        debug!(
            "Extracted {} items, grand total {}, {} validation issues",
            document.items.len(),
            document.totals.grand_total,
            validation_errors.len()
        );

        ParseReport {
            document,
            table_format,
            validation_errors,
            warnings,
            raw_text: self.keep_raw_text.then(|| text.to_string()),
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_multiline_quotation() {
        let text = r#"
            SALES QUOTATION
            Project Name: Palm Residency
            Client Name: Mehta
            S.No   Product   Specs   Price   Qty   Amount
            1 Sofa
            1800 X 900 X 850
            ₹ 25,000 1 ₹25,000
            Grand Total 25000
        "#;

        let report = HeuristicQuotationParser::new().parse(text, Vec::new());
        let doc = report.document;

        assert_eq!(report.table_format, Some(TableFormat::MultiLine));
        assert_eq!(doc.header.project_name, "Palm Residency");
        assert_eq!(doc.items.len(), 1);
        assert_eq!(
            doc.items[0],
            ItemRecord {
                sr_no: 1,
                name: "Sofa".to_string(),
                dimensions: "1800 X 900 X 850".to_string(),
                qty: 1,
                unit_price: 25000.0,
                amount: 25000.0,
                ..Default::default()
            }
        );
        assert_eq!(doc.totals.grand_total, 25000.0);
        assert!(report.validation_errors.is_empty());
    }

    #[test]
    fn test_parse_without_table() {
        let report = HeuristicQuotationParser::new().parse("Project Name: Loft\nThank you", Vec::new());

        assert!(report.document.items.is_empty());
        assert_eq!(report.document.header.project_name, "Loft");
        assert_eq!(report.table_format, None);
        assert!(report.warnings.iter().any(|w| w.contains("table header")));
    }

    #[test]
    fn test_parse_empty_input() {
        let report = HeuristicQuotationParser::new().with_raw_text(true).parse("", Vec::new());

        assert_eq!(report.document, StructuredDocument::default());
        assert_eq!(report.raw_text.as_deref(), Some(""));
        assert!(report.warnings.iter().any(|w| w.contains("empty")));
    }

    #[test]
    fn test_validation_can_be_disabled() {
        let text = "S.No Product Specs Price Qty Amount\n1 Lamp\n₹ 4,500 3";
        let parser = HeuristicQuotationParser::new();

        assert_eq!(parser.parse(text, Vec::new()).validation_errors.len(), 1);
        assert!(parser
            .with_validation(false)
            .parse(text, Vec::new())
            .validation_errors
            .is_empty());
    }
}
