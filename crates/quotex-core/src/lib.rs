//! Core library for sales quotation extraction.
//!
//! This crate provides:
//! - Header anchor extraction (project, client, quotation number, date, author)
//! - Item table detection for single-line and multi-line block layouts
//! - Price, dimension and totals parsing
//! - Alignment of extracted images onto item rows
//! - Keyword-based product type classification of item names
//! - Amount validation of the extracted record
//! - PDF text and image acquisition (`pdf` feature)

pub mod error;
pub mod models;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod quotation;

pub use error::{PdfError, QuotexError, Result};
pub use models::config::QuotexConfig;
pub use models::quotation::{
    HeaderFields, HeaderKey, ImageBlob, ItemRecord, StructuredDocument, TotalsRecord,
};
pub use models::template::TemplateConfig;
pub use quotation::rules::{classify_product, ProductClass, ProductType, ProductView};
pub use quotation::{
    validate, HeuristicQuotationParser, ParseReport, QuotationParser, ValidationError,
};
#[cfg(feature = "pdf")]
pub use pdf::{PdfContent, PdfExtractor, PdfProcessor};

/// Parse already-extracted text and images with default settings.
pub fn parse_quotation(text: &str, images: Vec<ImageBlob>) -> StructuredDocument {
    HeuristicQuotationParser::new().parse(text, images).document
}

/// Parse and validate, returning the document and its validation findings.
pub fn parse_with_validation(
    text: &str,
    images: Vec<ImageBlob>,
) -> (StructuredDocument, Vec<ValidationError>) {
    let report = HeuristicQuotationParser::new().parse(text, images);
    (report.document, report.validation_errors)
}

/// Load a PDF and parse its text layer and images with `parser`.
///
/// Fails only when the document cannot be opened or read. A sparse text
/// layer is reported as a warning; OCR text, when available, should be
/// parsed directly instead.
#[cfg(feature = "pdf")]
pub fn parse_pdf(
    data: &[u8],
    parser: &HeuristicQuotationParser,
    config: &models::config::PdfConfig,
) -> Result<ParseReport> {
    let mut extractor = PdfExtractor::new();
    extractor.load(data)?;
    tracing::debug!("PDF has {} pages", extractor.page_count());

    let max_images = if config.extract_images {
        config.max_images
    } else {
        0
    };
    let content = extractor.extract_all(max_images)?;

    let sparse = content.is_sparse(config.min_text_length);
    let mut report = parser.parse(&content.text, content.images);
    if sparse {
        tracing::warn!(
            "PDF text layer is sparse ({} chars)",
            content.text.trim().chars().count()
        );
        report.warnings.push("Sparse PDF text layer".to_string());
    }
    Ok(report)
}
