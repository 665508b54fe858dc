//! Output formatting for extracted quotations.

use std::fmt::Write as _;

use quotex_core::{classify_product, HeaderKey, StructuredDocument};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV of the item table
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_document(doc: &StructuredDocument, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(doc)?),
        OutputFormat::Csv => format_csv(doc),
        OutputFormat::Text => Ok(format_text(doc)),
    }
}

fn format_csv(doc: &StructuredDocument) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "sr_no",
        "name",
        "description",
        "dimensions",
        "area",
        "material",
        "finish",
        "qty",
        "unit_price",
        "amount",
        "images",
        "product_type",
    ])?;

    for item in &doc.items {
        wtr.write_record([
            &item.sr_no.to_string(),
            &item.name,
            &item.description,
            &item.dimensions,
            &item.area,
            &item.material,
            &item.finish,
            &item.qty.to_string(),
            &item.unit_price.to_string(),
            &item.amount.to_string(),
            &item.images.len().to_string(),
            classify_product(&item.name).product_type.as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(doc: &StructuredDocument) -> String {
    let mut output = String::new();

    for key in HeaderKey::ALL {
        let value = doc.header.get(key);
        if !value.is_empty() {
            let _ = writeln!(output, "{}: {}", key.as_str(), value);
        }
    }
    output.push('\n');

    let _ = writeln!(output, "Items ({}):", doc.items.len());
    for item in &doc.items {
        let _ = writeln!(
            output,
            "  {:>3}. {} [{}] {} x {:.2} = {:.2}",
            item.sr_no, item.name, item.dimensions, item.qty, item.unit_price, item.amount
        );
        if !item.description.is_empty() && item.description != item.name {
            let _ = writeln!(output, "       {}", item.description);
        }
    }
    output.push('\n');

    output.push_str("Totals:\n");
    let _ = writeln!(output, "  Subtotal:    {:.2}", doc.totals.subtotal);
    let _ = writeln!(output, "  Tax:         {:.2}", doc.totals.tax);
    let _ = writeln!(output, "  Grand total: {:.2}", doc.totals.grand_total);

    output
}
