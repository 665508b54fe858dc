//! Sales quotation data models.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A complete structured quotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredDocument {
    /// Project header fields.
    pub header: HeaderFields,

    /// Line items in table order.
    pub items: Vec<ItemRecord>,

    /// Subtotal, tax and grand total.
    pub totals: TotalsRecord,

    /// Images extracted from the source document, passed through unchanged.
    #[serde(default)]
    pub images: Vec<ImageBlob>,
}

/// Keys of the quotation header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderKey {
    ProjectName,
    ClientName,
    QuotationNo,
    Date,
    PreparedBy,
}

impl HeaderKey {
    /// All header keys in display order.
    pub const ALL: [HeaderKey; 5] = [
        HeaderKey::ProjectName,
        HeaderKey::ClientName,
        HeaderKey::QuotationNo,
        HeaderKey::Date,
        HeaderKey::PreparedBy,
    ];

    /// Field name as used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderKey::ProjectName => "project_name",
            HeaderKey::ClientName => "client_name",
            HeaderKey::QuotationNo => "quotation_no",
            HeaderKey::Date => "date",
            HeaderKey::PreparedBy => "prepared_by",
        }
    }
}

/// Project header with the fixed key set. Missing values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderFields {
    pub project_name: String,
    pub client_name: String,
    pub quotation_no: String,
    pub date: String,
    pub prepared_by: String,
}

impl HeaderFields {
    /// Get the value for a header key.
    pub fn get(&self, key: HeaderKey) -> &str {
        match key {
            HeaderKey::ProjectName => &self.project_name,
            HeaderKey::ClientName => &self.client_name,
            HeaderKey::QuotationNo => &self.quotation_no,
            HeaderKey::Date => &self.date,
            HeaderKey::PreparedBy => &self.prepared_by,
        }
    }

    /// Mutable access to the value for a header key.
    pub fn get_mut(&mut self, key: HeaderKey) -> &mut String {
        match key {
            HeaderKey::ProjectName => &mut self.project_name,
            HeaderKey::ClientName => &mut self.client_name,
            HeaderKey::QuotationNo => &mut self.quotation_no,
            HeaderKey::Date => &mut self.date,
            HeaderKey::PreparedBy => &mut self.prepared_by,
        }
    }

    /// True when no header value was found.
    pub fn is_empty(&self) -> bool {
        HeaderKey::ALL.iter().all(|k| self.get(*k).is_empty())
    }
}

/// A single line item of the quotation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRecord {
    /// Serial number on the quotation (synthesized from position if missing).
    pub sr_no: u32,

    /// Product name.
    pub name: String,

    /// Free-text description / specification.
    pub description: String,

    /// Dimensions, e.g. "1800 X 900 X 850".
    pub dimensions: String,

    /// Area or room the item belongs to.
    pub area: String,

    /// Material.
    pub material: String,

    /// Finish.
    pub finish: String,

    /// Quantity (at least 1).
    pub qty: u32,

    /// Unit price.
    pub unit_price: f64,

    /// Line amount as printed.
    pub amount: f64,

    /// Images aligned to this row.
    pub images: Vec<ImageBlob>,
}

impl Default for ItemRecord {
    fn default() -> Self {
        Self {
            sr_no: 1,
            name: String::new(),
            description: String::new(),
            dimensions: String::new(),
            area: String::new(),
            material: String::new(),
            finish: String::new(),
            qty: 1,
            unit_price: 0.0,
            amount: 0.0,
            images: Vec::new(),
        }
    }
}

impl ItemRecord {
    /// Build an item from a segmented row at the given 0-based table position.
    pub fn from_raw(row: RawRow, position: usize) -> Self {
        let sr_no = match coerce_amount(&row.sr_no) as u32 {
            0 => position as u32 + 1,
            n => n,
        };
        let qty = (coerce_amount(&row.qty) as u32).max(1);
        let description = row.description.unwrap_or_else(|| row.name.clone());

        Self {
            sr_no,
            name: row.name,
            description,
            dimensions: row.dimensions,
            area: row.area,
            material: row.material,
            finish: row.finish,
            qty,
            unit_price: coerce_amount(&row.unit_price),
            amount: coerce_amount(&row.amount),
            images: Vec::new(),
        }
    }
}

/// String-typed row as produced by table segmentation, before coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub sr_no: String,
    pub name: String,
    /// `None` when the layout has no description column.
    pub description: Option<String>,
    pub dimensions: String,
    pub area: String,
    pub material: String,
    pub finish: String,
    pub qty: String,
    pub unit_price: String,
    pub amount: String,
}

/// Quotation totals block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalsRecord {
    pub subtotal: f64,
    pub tax: f64,
    pub grand_total: f64,
}

/// An opaque image extracted from the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlob {
    /// Encoded image bytes (base64 in serialized form).
    #[serde(serialize_with = "to_base64", deserialize_with = "from_base64")]
    pub data: Vec<u8>,

    /// Image format tag (png, jpeg, ...), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl ImageBlob {
    /// Wrap raw bytes with no format tag.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            format: None,
        }
    }

    /// Set the format tag.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

fn to_base64<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(data))
}

fn from_base64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let s = String::deserialize(deserializer)?;
    STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom)
}

/// Coerce a numeric token to a non-negative float.
///
/// Thousands separators, currency glyphs and surrounding whitespace are
/// removed first. Anything that still fails to parse, is not finite, or is
/// negative becomes `0.0`.
pub fn coerce_amount(token: &str) -> f64 {
    let cleaned: String = token
        .trim()
        .chars()
        .filter(|c| *c != ',' && !crate::quotation::rules::patterns::CURRENCY_GLYPHS.contains(c))
        .collect();

    match cleaned.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}
