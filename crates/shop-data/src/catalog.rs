//! Catalog loading: products and their variations.

use crate::{FetchClient, FetchError, StoreConfig};
use serde::Deserialize;
use shop_commerce::catalog::{
    Attribute, AttributeChoice, Category, Product, ProductKind, ProductStatus, StockStatus,
    Variation,
};
use shop_commerce::ids::ProductId;
use shop_commerce::money::{Currency, Money};

/// Typed client for the backend's catalog endpoints.
pub struct CatalogClient {
    client: FetchClient,
    config: StoreConfig,
}

impl CatalogClient {
    /// Create a catalog client for the configured store.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: FetchClient::for_store(&config),
            config,
        }
    }

    /// Fetch a product by its slug.
    pub fn product(&self, slug: &str) -> Result<Product, FetchError> {
        let response = self
            .client
            .get(format!("/products?slug={}", slug))
            .send()?
            .error_for_status()?;
        let records: Vec<ProductRecord> = response.json()?;
        let record = records
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::InvalidRecord(format!("no product with slug {:?}", slug)))?;
        record.into_domain(self.config.currency)
    }

    /// Fetch a product by its ID.
    pub fn product_by_id(&self, id: ProductId) -> Result<Product, FetchError> {
        let response = self
            .client
            .get(format!("/products/{}", id))
            .send()?
            .error_for_status()?;
        let record: ProductRecord = response.json()?;
        record.into_domain(self.config.currency)
    }

    /// Fetch the full variation list for a product.
    ///
    /// Products that are not variable have no variations by definition;
    /// this returns an empty list for them without a backend call, and it
    /// is not an error.
    pub fn variations(&self, product: &Product) -> Result<Vec<Variation>, FetchError> {
        if !product.is_variable() {
            return Ok(Vec::new());
        }
        let response = self
            .client
            .get(format!("/products/{}/variations?per_page=100", product.id))
            .send()?
            .error_for_status()?;
        parse_variations(&response.body, product.id, self.config.currency)
    }
}

/// Parse a variation list response body. The variation records do not
/// carry their parent's ID, so the caller supplies it.
pub(crate) fn parse_variations(
    body: &[u8],
    product_id: ProductId,
    currency: Currency,
) -> Result<Vec<Variation>, FetchError> {
    let records: Vec<VariationRecord> =
        serde_json::from_slice(body).map_err(|e| FetchError::ParseError(e.to_string()))?;
    records
        .into_iter()
        .map(|r| r.into_domain(product_id, currency))
        .collect()
}

// ---------------------------------------------------------------------------
// Wire records. These mirror the backend's JSON (string prices, nested
// image objects) and convert into domain types with validation; malformed
// records are rejected here rather than propagated into comparisons.
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ImageRecord {
    src: String,
}

#[derive(Debug, Deserialize)]
struct AttributeRecord {
    #[serde(default)]
    id: i64,
    name: String,
    #[serde(default)]
    position: i32,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default)]
    variation: bool,
    #[serde(default)]
    options: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    id: i64,
    name: String,
    slug: String,
}

#[derive(Debug, Deserialize)]
struct ChoiceRecord {
    name: String,
    option: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductRecord {
    id: i64,
    name: String,
    slug: String,
    #[serde(default)]
    sku: String,
    #[serde(rename = "type")]
    kind: String,
    status: String,
    price: String,
    #[serde(default)]
    regular_price: String,
    #[serde(default)]
    sale_price: String,
    #[serde(default)]
    on_sale: bool,
    stock_status: String,
    #[serde(default)]
    images: Vec<ImageRecord>,
    #[serde(default)]
    attributes: Vec<AttributeRecord>,
    #[serde(default)]
    categories: Vec<CategoryRecord>,
}

impl ProductRecord {
    pub(crate) fn into_domain(self, currency: Currency) -> Result<Product, FetchError> {
        let kind = ProductKind::from_str(&self.kind)
            .ok_or_else(|| FetchError::InvalidRecord(format!("unknown product type {:?}", self.kind)))?;
        let status = ProductStatus::from_str(&self.status)
            .ok_or_else(|| FetchError::InvalidRecord(format!("unknown status {:?}", self.status)))?;
        let stock_status = StockStatus::from_str(&self.stock_status).ok_or_else(|| {
            FetchError::InvalidRecord(format!("unknown stock status {:?}", self.stock_status))
        })?;

        let price = Money::parse(&self.price, currency)?;
        let regular_price = parse_optional_price(&self.regular_price, currency)?.unwrap_or(price);
        let sale_price = parse_optional_price(&self.sale_price, currency)?;

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            slug: self.slug,
            sku: self.sku,
            kind,
            status,
            price,
            regular_price,
            sale_price,
            on_sale: self.on_sale,
            stock_status,
            image: self.images.into_iter().next().map(|i| i.src),
            attributes: self
                .attributes
                .into_iter()
                .map(|a| Attribute {
                    id: a.id,
                    name: a.name,
                    options: a.options,
                    variation: a.variation,
                    visible: a.visible,
                    position: a.position,
                })
                .collect(),
            categories: self
                .categories
                .into_iter()
                .map(|c| Category {
                    id: c.id,
                    name: c.name,
                    slug: c.slug,
                })
                .collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct VariationRecord {
    id: i64,
    #[serde(default)]
    sku: String,
    price: String,
    #[serde(default)]
    regular_price: String,
    #[serde(default)]
    sale_price: String,
    #[serde(default)]
    on_sale: bool,
    stock_status: String,
    #[serde(default)]
    image: Option<ImageRecord>,
    #[serde(default)]
    attributes: Vec<ChoiceRecord>,
}

impl VariationRecord {
    fn into_domain(
        self,
        product_id: ProductId,
        currency: Currency,
    ) -> Result<Variation, FetchError> {
        let stock_status = StockStatus::from_str(&self.stock_status).ok_or_else(|| {
            FetchError::InvalidRecord(format!("unknown stock status {:?}", self.stock_status))
        })?;
        let price = Money::parse(&self.price, currency)?;
        let regular_price = parse_optional_price(&self.regular_price, currency)?.unwrap_or(price);
        let sale_price = parse_optional_price(&self.sale_price, currency)?;

        Ok(Variation {
            id: self.id.into(),
            product_id,
            sku: self.sku,
            price,
            regular_price,
            sale_price,
            on_sale: self.on_sale,
            stock_status,
            image: self.image.map(|i| i.src),
            attributes: self
                .attributes
                .into_iter()
                .map(|c| AttributeChoice::new(c.name, c.option))
                .collect(),
        })
    }
}

/// The backend sends "" for unset price fields.
fn parse_optional_price(raw: &str, currency: Currency) -> Result<Option<Money>, FetchError> {
    if raw.is_empty() {
        return Ok(None);
    }
    Money::parse(raw, currency).map(Some).map_err(Into::into)
}

fn default_true() -> bool {
    true
}
