//! PDF acquisition: text layer and embedded images.
//!
//! This is the boundary in front of the quotation parser. Opening or
//! reading the document is the only place extraction can fail.

mod extractor;

pub use extractor::{PdfContent, PdfExtractor};

use crate::error::PdfError;
use crate::models::quotation::ImageBlob;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;

    /// Extract embedded images from a page, in encounter order.
    fn extract_images(&self, page: u32) -> Result<Vec<ImageBlob>>;
}
