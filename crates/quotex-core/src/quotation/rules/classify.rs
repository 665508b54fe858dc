//! Product type and view classification from an item name.

use serde::{Deserialize, Serialize};

use super::patterns::PRODUCT_TYPE_KEYWORDS;

/// Furniture category of a line item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Wardrobe,
    #[serde(rename = "TV Unit")]
    TvUnit,
    #[serde(rename = "Kitchen Cabinet")]
    KitchenCabinet,
    Bed,
    Sofa,
    Console,
    Table,
    Chair,
    Storage,
    Cabinet,
    Desk,
    #[default]
    Other,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Wardrobe => "Wardrobe",
            ProductType::TvUnit => "TV Unit",
            ProductType::KitchenCabinet => "Kitchen Cabinet",
            ProductType::Bed => "Bed",
            ProductType::Sofa => "Sofa",
            ProductType::Console => "Console",
            ProductType::Table => "Table",
            ProductType::Chair => "Chair",
            ProductType::Storage => "Storage",
            ProductType::Cabinet => "Cabinet",
            ProductType::Desk => "Desk",
            ProductType::Other => "Other",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Camera view of a product image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductView {
    #[default]
    #[serde(rename = "Front View")]
    Front,
    #[serde(rename = "Side View")]
    Side,
    #[serde(rename = "Top View")]
    Top,
    Isometric,
}

/// Classification of one item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductClass {
    pub product_type: ProductType,
    pub view: ProductView,
}

/// Classify an item by keywords in its name.
///
/// Keywords are matched as lowercase substrings, in table order. Names
/// carry no view information, so the view is always the front view.
pub fn classify_product(name: &str) -> ProductClass {
    ProductClass {
        product_type: classify_product_type(name),
        view: ProductView::Front,
    }
}

pub fn classify_product_type(name: &str) -> ProductType {
    let lower = name.trim().to_lowercase();
    if lower.is_empty() {
        return ProductType::Other;
    }

    PRODUCT_TYPE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, product_type)| *product_type)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keyword_types() {
        assert_eq!(classify_product_type("3 Door Wardrobe"), ProductType::Wardrobe);
        assert_eq!(classify_product_type("TV UNIT with back panel"), ProductType::TvUnit);
        assert_eq!(classify_product_type("Television console"), ProductType::TvUnit);
        assert_eq!(classify_product_type("Coffee Table"), ProductType::Table);
        assert_eq!(classify_product_type("Study Chair"), ProductType::Chair);
        assert_eq!(classify_product_type("Shoe storage"), ProductType::Storage);
    }

    #[test]
    fn test_first_keyword_in_table_order_wins() {
        // "kitchen" is tried before "cabinet"
        assert_eq!(classify_product_type("Kitchen Cabinet"), ProductType::KitchenCabinet);
        assert_eq!(classify_product_type("Wall cabinet"), ProductType::Cabinet);
        // "bed" is tried before "table"
        assert_eq!(classify_product_type("Bedside Table"), ProductType::Bed);
    }

    #[test]
    fn test_unknown_and_empty_names() {
        assert_eq!(classify_product_type(""), ProductType::Other);
        assert_eq!(classify_product_type("   "), ProductType::Other);
        assert_eq!(classify_product_type("Room Divider"), ProductType::Other);
        assert_eq!(classify_product_type("Mirror"), ProductType::Other);
    }

    #[test]
    fn test_classification_serializes_display_names() {
        let class = classify_product("Kitchen base unit");
        assert_eq!(class.view, ProductView::Front);

        let json = serde_json::to_value(class).unwrap();
        assert_eq!(json["product_type"], "Kitchen Cabinet");
        assert_eq!(json["view"], "Front View");
    }
}
