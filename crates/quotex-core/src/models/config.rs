//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::QuotexError;

/// Main configuration for quotex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotexConfig {
    /// PDF acquisition configuration.
    pub pdf: PdfConfig,

    /// Quotation extraction configuration.
    pub extraction: ExtractionConfig,
}

/// PDF acquisition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Extract embedded images for row alignment.
    pub extract_images: bool,

    /// Maximum number of images taken from one document.
    pub max_images: usize,

    /// Text layers shorter than this (after trimming) are reported as sparse.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            extract_images: true,
            max_images: 50,
            min_text_length: 200,
        }
    }
}

/// Quotation extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Run the amount check after parsing.
    pub validate_amounts: bool,

    /// Allowed difference between amount and qty * unit_price.
    pub amount_tolerance: f64,

    /// Keep the raw text in the parse report.
    pub keep_raw_text: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            validate_amounts: true,
            amount_tolerance: 0.01,
            keep_raw_text: false,
        }
    }
}

impl QuotexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| QuotexError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
