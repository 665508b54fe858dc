//! End-to-end tests for the quotation parse pipeline over plain text.

use pretty_assertions::assert_eq;

use quotex_core::quotation::rules::TableFormat;
use quotex_core::{
    parse_quotation, parse_with_validation, HeaderFields, HeuristicQuotationParser, ImageBlob,
    ItemRecord, QuotationParser, TemplateConfig, TotalsRecord,
};

fn blobs(n: u8) -> Vec<ImageBlob> {
    (0..n).map(|i| ImageBlob::new(vec![i]).with_format("png")).collect()
}

// ---------------------------------------------------------------------------
// Multi-line block layout
// ---------------------------------------------------------------------------
#[test]
fn single_block_with_grand_total() {
    let text = [
        "S.No Product Specs Price Qty Amount",
        "1 Sofa",
        "1800 X 900 X 850",
        "₹ 25,000 1 ₹25,000",
        "Grand Total 25000",
    ]
    .join("\n");

    let doc = parse_quotation(&text, Vec::new());

    assert_eq!(doc.items.len(), 1);
    let item = &doc.items[0];
    assert_eq!(item.sr_no, 1);
    assert_eq!(item.name, "Sofa");
    assert_eq!(item.dimensions, "1800 X 900 X 850");
    assert_eq!(item.qty, 1);
    assert_eq!(item.unit_price, 25000.0);
    assert_eq!(item.amount, 25000.0);
    assert_eq!(doc.totals.grand_total, 25000.0);
}

#[test]
fn vendor_quotation_with_blocks_logo_and_totals() {
    let text = r#"
        ACME INTERIORS PVT LTD
        SALES QUOTATION
        Project Name : Palm Grove Villa
        Client Name : Mr. K. Iyer
        Quotation No. : SQ/2024/031
        Date
        14-06-2024
        Prepared By : Studio Team

        S.No   Product   Specs   Price   Qty   Amount
        1 Side Table
        900 Dia X 400 H Base in HDMR ply
        Top in Italian marble
        ₹ 7,302 1 ₹7,302
        2 Wardrobe
        2100 X 600 X 2400
        Internal drawers with soft close
        36400 2 ?72,800
        3 Console
        1200 X 350 X 750
        Sub Total ₹ 80,102
        Tax 18% 14,418.36
        Grand Total ₹ 94,520.36
    "#;

    let report = HeuristicQuotationParser::new().parse(text, blobs(3));
    let doc = &report.document;

    assert_eq!(report.table_format, Some(TableFormat::MultiLine));
    assert_eq!(
        doc.header,
        HeaderFields {
            project_name: "Palm Grove Villa".to_string(),
            client_name: "Mr. K. Iyer".to_string(),
            quotation_no: "SQ/2024/031".to_string(),
            date: "14-06-2024".to_string(),
            prepared_by: "Studio Team".to_string(),
        }
    );

    // Block 3 never reaches a price line and is dropped
    assert_eq!(doc.items.len(), 2);
    assert_eq!(
        doc.items[0],
        ItemRecord {
            sr_no: 1,
            name: "Side Table".to_string(),
            description: "Base in HDMR ply Top in Italian marble".to_string(),
            dimensions: "900 Dia X 400 H".to_string(),
            qty: 1,
            unit_price: 7302.0,
            amount: 7302.0,
            images: vec![ImageBlob::new(vec![1]).with_format("png")],
            ..Default::default()
        }
    );
    assert_eq!(doc.items[1].name, "Wardrobe");
    assert_eq!(doc.items[1].description, "Internal drawers with soft close");
    assert_eq!(doc.items[1].qty, 2);
    assert_eq!(doc.items[1].amount, 72800.0);
    assert_eq!(doc.items[1].images, vec![ImageBlob::new(vec![2]).with_format("png")]);

    assert_eq!(
        doc.totals,
        TotalsRecord {
            subtotal: 80102.0,
            tax: 14418.36,
            grand_total: 94520.36,
        }
    );

    // Raw images pass through unchanged
    assert_eq!(doc.images, blobs(3));
    assert!(report.validation_errors.is_empty());
}

// ---------------------------------------------------------------------------
// Single-line layout
// ---------------------------------------------------------------------------
#[test]
fn single_line_table() {
    let text = "Quotation No: Q-77\n\
                Sr No  Item  Size  Area  Material  Finish  Qty  Rate  Amount\n\
                1  Bed  1950 X 1800  Master  Teak  Matt  1  45,000  45,000\n\
                2  Nightstand  450 X 400  Master  Teak  Matt  2  6,000  12,000\n\
                Terms: 50% advance\n\
                Subtotal  57,000\n\
                3  Lamp  -  -  -  -  1  900  900";

    let report = HeuristicQuotationParser::new().parse(text, blobs(1));
    let doc = &report.document;

    assert_eq!(report.table_format, Some(TableFormat::SingleLine));
    assert_eq!(doc.header.quotation_no, "Q-77");
    assert_eq!(doc.items.len(), 2);

    let bed = &doc.items[0];
    assert_eq!(bed.description, "Bed");
    assert_eq!(bed.dimensions, "1950 X 1800");
    assert_eq!(bed.area, "Master");
    assert_eq!(bed.material, "Teak");
    assert_eq!(bed.finish, "Matt");
    assert_eq!(bed.unit_price, 45000.0);
    assert!(bed.images.len() == 1 && doc.items[1].images.is_empty());

    assert_eq!(doc.items[1].sr_no, 2);
    assert_eq!(doc.items[1].qty, 2);
    assert_eq!(doc.totals.subtotal, 57000.0);
}

// ---------------------------------------------------------------------------
// Degenerate input
// ---------------------------------------------------------------------------
#[test]
fn no_table_and_no_anchors() {
    let doc = parse_quotation("Thank you for your business\nRegards", blobs(2));

    assert_eq!(doc.header, HeaderFields::default());
    assert!(doc.items.is_empty());
    assert_eq!(doc.totals, TotalsRecord::default());
    assert_eq!(doc.images.len(), 2);
}

#[test]
fn anchor_words_inside_values_do_not_capture_fields() {
    let text = "Project Name: Mandate Towers\n\
                Date: 12-03-2024\n\
                S.No Product Specs Price Qty Amount\n\
                1 Sofa\n\
                ₹ 100 1 ₹100";

    let doc = parse_quotation(text, Vec::new());

    assert_eq!(doc.header.project_name, "Mandate Towers");
    assert_eq!(doc.header.date, "12-03-2024");
    assert_eq!(doc.items.len(), 1);
}

#[test]
fn carriage_return_line_endings() {
    let text = "Project Name: Villa\r\
                S.No Product Specs Price Qty Amount\r\
                1 Sofa\r\
                1800 X 900 X 850\r\
                ₹ 25,000 1 ₹25,000\r\
                Grand Total 25000";

    let doc = parse_quotation(text, Vec::new());

    assert_eq!(doc.header.project_name, "Villa");
    assert_eq!(doc.items.len(), 1);
    assert_eq!(doc.items[0].dimensions, "1800 X 900 X 850");
    assert_eq!(doc.totals.grand_total, 25000.0);
}

#[test]
fn mirrored_amount_is_flagged_by_validation() {
    // Two numeric tokens: amount mirrors qty (3), validation reports it
    let text = "S.No Product Specs Qty Amount\n1 Chair\n₹ 4,500 3";
    let (doc, errors) = parse_with_validation(text, Vec::new());

    assert_eq!(doc.items[0].unit_price, 4500.0);
    assert_eq!(doc.items[0].qty, 3);
    assert_eq!(doc.items[0].amount, 3.0);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "items[0].amount");
}

#[test]
fn template_is_accepted_without_changing_output() {
    let text = "S.No Product Specs Price Qty Amount\n1 Sofa\n₹ 100 1 ₹100";
    let template: TemplateConfig =
        serde_json::from_str(r#"{"table_columns": [{"header": "S.No", "key": "sr_no"}]}"#).unwrap();

    let plain = HeuristicQuotationParser::new().parse_text(text);
    let with_template = HeuristicQuotationParser::new()
        .with_template(template)
        .parse_text(text);

    assert_eq!(plain, with_template);
}

#[test]
fn document_serializes_images_as_base64() {
    let doc = parse_quotation("", vec![ImageBlob::new(b"abc".to_vec())]);
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["images"][0]["data"], "YWJj");
    assert_eq!(json["header"]["project_name"], "");
    assert_eq!(json["totals"]["grand_total"], 0.0);
}
