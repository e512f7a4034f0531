//! Product records.

use crate::catalog::Attribute;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product kind, in the backend's vocabulary. Only simple and variable
/// products are purchasable through this storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductKind {
    #[default]
    Simple,
    Variable,
    Grouped,
    External,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Simple => "simple",
            ProductKind::Variable => "variable",
            ProductKind::Grouped => "grouped",
            ProductKind::External => "external",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "simple" => Some(ProductKind::Simple),
            "variable" => Some(ProductKind::Variable),
            "grouped" => Some(ProductKind::Grouped),
            "external" => Some(ProductKind::External),
            _ => None,
        }
    }
}

/// Product publication status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductStatus {
    Draft,
    Pending,
    Private,
    #[default]
    Publish,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Pending => "pending",
            ProductStatus::Private => "private",
            ProductStatus::Publish => "publish",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(ProductStatus::Draft),
            "pending" => Some(ProductStatus::Pending),
            "private" => Some(ProductStatus::Private),
            "publish" => Some(ProductStatus::Publish),
            _ => None,
        }
    }
}

/// Stock availability reported by the backend. Inventory counts stay the
/// backend's concern; the storefront only reads the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
    OnBackorder,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "instock",
            StockStatus::OutOfStock => "outofstock",
            StockStatus::OnBackorder => "onbackorder",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "instock" => Some(StockStatus::InStock),
            "outofstock" => Some(StockStatus::OutOfStock),
            "onbackorder" => Some(StockStatus::OnBackorder),
            _ => None,
        }
    }
}

/// A product category reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// A product in the catalog, as loaded from the backend. Immutable once
/// loaded; the storefront never writes catalog data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Kind of product.
    pub kind: ProductKind,
    /// Publication status.
    pub status: ProductStatus,
    /// Current price (the sale price while a sale is running).
    pub price: Money,
    /// Regular price.
    pub regular_price: Money,
    /// Sale price, when one is set.
    pub sale_price: Option<Money>,
    /// Whether a sale is currently active.
    pub on_sale: bool,
    /// Stock availability.
    pub stock_status: StockStatus,
    /// Primary image URL.
    pub image: Option<String>,
    /// Attribute axes, ordered by position.
    pub attributes: Vec<Attribute>,
    /// Categories this product belongs to.
    pub categories: Vec<Category>,
}

impl Product {
    /// Create a simple, published, in-stock product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        slug: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            sku: String::new(),
            kind: ProductKind::Simple,
            status: ProductStatus::Publish,
            price,
            regular_price: price,
            sale_price: None,
            on_sale: false,
            stock_status: StockStatus::InStock,
            image: None,
            attributes: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Check if this is a variable product (sold as variations).
    pub fn is_variable(&self) -> bool {
        self.kind == ProductKind::Variable
    }

    /// Check if the product can be purchased through this storefront.
    pub fn is_purchasable(&self) -> bool {
        self.status == ProductStatus::Publish
            && matches!(self.kind, ProductKind::Simple | ProductKind::Variable)
            && self.stock_status != StockStatus::OutOfStock
    }

    /// The attribute axes that constrain variation matching.
    pub fn variation_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(|a| a.variation)
    }

    /// The price to charge right now.
    pub fn effective_price(&self) -> Money {
        match (self.on_sale, self.sale_price) {
            (true, Some(sale)) => sale,
            _ => self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product() -> Product {
        Product::new(10, "Test Product", "test-product", Money::from_minor(1999, Currency::USD))
    }

    #[test]
    fn test_product_creation() {
        let p = product();
        assert_eq!(p.id.value(), 10);
        assert!(p.is_purchasable());
        assert!(!p.is_variable());
    }

    #[test]
    fn test_out_of_stock_not_purchasable() {
        let mut p = product();
        p.stock_status = StockStatus::OutOfStock;
        assert!(!p.is_purchasable());
    }

    #[test]
    fn test_grouped_not_purchasable() {
        let mut p = product();
        p.kind = ProductKind::Grouped;
        assert!(!p.is_purchasable());
    }

    #[test]
    fn test_effective_price_uses_sale() {
        let mut p = product();
        p.sale_price = Some(Money::from_minor(1499, Currency::USD));
        p.on_sale = true;
        assert_eq!(p.effective_price().minor, 1499);

        p.on_sale = false;
        assert_eq!(p.effective_price().minor, 1999);
    }

    #[test]
    fn test_variation_attributes_filters_descriptive() {
        let mut p = product();
        p.attributes = vec![
            Attribute::for_variation(1, "Color", vec!["Red".into()]),
            Attribute::new(2, "Material", vec!["Cotton".into()]),
        ];
        let axes: Vec<_> = p.variation_attributes().collect();
        assert_eq!(axes.len(), 1);
        assert_eq!(axes[0].name, "Color");
    }

    #[test]
    fn test_kind_round_trip() {
        assert_eq!(ProductKind::from_str("variable"), Some(ProductKind::Variable));
        assert_eq!(ProductKind::Variable.as_str(), "variable");
        assert_eq!(ProductKind::from_str("bundle"), None);
    }

    #[test]
    fn test_stock_status_round_trip() {
        assert_eq!(StockStatus::from_str("onbackorder"), Some(StockStatus::OnBackorder));
        assert_eq!(StockStatus::OutOfStock.as_str(), "outofstock");
    }
}
