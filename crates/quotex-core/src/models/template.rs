//! Template configuration: header anchors and table column mapping.
//!
//! A template is accepted by the parser but not applied by the text
//! heuristics yet. It is carried so callers can pass spreadsheet-derived
//! layouts through one API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::quotation::HeaderKey;
use crate::error::QuotexError;

/// Header label and the cell holding its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderAnchor {
    /// Label as printed, e.g. "Project Name".
    pub label: String,
    /// Header field the value belongs to.
    pub key: HeaderKey,
    #[serde(default)]
    pub row: u32,
    #[serde(default)]
    pub col: u32,
    /// Column of the value cell (often `col + 1`).
    #[serde(default)]
    pub value_col: u32,
}

/// Product table column mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    /// Column header text.
    pub header: String,
    /// Item field name (sr_no, name, dimensions, qty, ...).
    pub key: String,
    #[serde(default)]
    pub col_index: u32,
}

/// Column/anchor override for a quotation layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub header_anchors: Vec<HeaderAnchor>,
    pub table_header_row: u32,
    pub table_columns: Vec<TableColumn>,
    pub data_start_row: u32,
    /// Label to (row, col) lookup for layouts that need it.
    pub raw_cells: HashMap<String, (u32, u32)>,
}

impl TemplateConfig {
    /// Load a template from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| QuotexError::Config(format!("template {}: {}", path.display(), e)))
    }

    /// True when the template carries no overrides.
    pub fn is_empty(&self) -> bool {
        self.header_anchors.is_empty() && self.table_columns.is_empty() && self.raw_cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_from_json() {
        let json = r#"{
            "header_anchors": [{"label": "Project Name", "key": "project_name", "row": 2, "col": 1, "value_col": 2}],
            "table_columns": [{"header": "S.No", "key": "sr_no"}],
            "data_start_row": 8
        }"#;

        let template: TemplateConfig = serde_json::from_str(json).unwrap();
        assert_eq!(template.header_anchors[0].key, HeaderKey::ProjectName);
        assert_eq!(template.table_columns[0].col_index, 0);
        assert_eq!(template.data_start_row, 8);
        assert!(!template.is_empty());
        assert!(TemplateConfig::default().is_empty());
    }

    #[test]
    fn test_template_with_unknown_header_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r#"{"header_anchors": [{"label": "GST", "key": "gst_no"}]}"#).unwrap();

        assert!(matches!(
            TemplateConfig::from_file(&path),
            Err(QuotexError::Config(_))
        ));
        assert!(matches!(
            TemplateConfig::from_file(&dir.path().join("missing.json")),
            Err(QuotexError::Io(_))
        ));
    }
}
