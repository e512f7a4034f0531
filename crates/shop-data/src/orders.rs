//! Order placement and history.

use crate::{FetchClient, FetchError, StoreConfig};
use serde::{Deserialize, Serialize};
use shop_commerce::checkout::{Address, OrderRequest, PlacedOrder};
use shop_commerce::ids::{CustomerId, OrderId};
use shop_commerce::money::{Currency, Money};

/// Typed client for the backend's order endpoints.
pub struct OrderClient {
    client: FetchClient,
    config: StoreConfig,
}

impl OrderClient {
    /// Create an order client for the configured store.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: FetchClient::for_store(&config),
            config,
        }
    }

    /// Submit an order to the backend.
    ///
    /// The backend owns everything downstream of this call (payment
    /// capture, inventory, fulfillment); a failure here leaves the local
    /// cart untouched so the user can retry. Callers clear the cart only
    /// after this returns `Ok`.
    pub fn create(&self, request: &OrderRequest) -> Result<PlacedOrder, FetchError> {
        let payload = OrderPayload::from_request(request);
        let response = self
            .client
            .post("/orders")
            .json(&payload)?
            .send()?
            .error_for_status()?;
        let record: OrderAckRecord = response.json()?;
        tracing::debug!(order = record.id, "order created");
        record.into_domain()
    }

    /// List a customer's orders, most recent first.
    pub fn customer_orders(&self, customer_id: CustomerId) -> Result<Vec<PlacedOrder>, FetchError> {
        let response = self
            .client
            .get(format!("/orders?customer={}", customer_id))
            .send()?
            .error_for_status()?;
        let records: Vec<OrderAckRecord> = response.json()?;
        records.into_iter().map(|r| r.into_domain()).collect()
    }

    /// The flat shipping rate orders are placed with.
    pub fn flat_shipping(&self) -> Money {
        self.config.flat_shipping
    }
}

// ---------------------------------------------------------------------------
// Wire payloads.
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct AddressPayload {
    first_name: String,
    last_name: String,
    address_1: String,
    city: String,
    state: String,
    postcode: String,
    country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

impl AddressPayload {
    /// Billing includes contact fields; shipping does not.
    fn billing(address: &Address) -> Self {
        let mut payload = Self::shipping(address);
        payload.email = Some(address.email.clone());
        payload.phone = Some(address.phone.clone());
        payload
    }

    fn shipping(address: &Address) -> Self {
        Self {
            first_name: address.first_name.clone(),
            last_name: address.last_name.clone(),
            address_1: address.address_1.clone(),
            city: String::new(),
            state: String::new(),
            postcode: address.postcode.clone(),
            country: address.country.clone(),
            email: None,
            phone: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct LineItemPayload {
    product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    variation_id: Option<i64>,
    quantity: i64,
}

#[derive(Debug, Serialize)]
struct ShippingLinePayload {
    method_id: &'static str,
    method_title: &'static str,
    total: String,
}

#[derive(Debug, Serialize)]
struct OrderPayload {
    payment_method: &'static str,
    payment_method_title: &'static str,
    set_paid: bool,
    billing: AddressPayload,
    shipping: AddressPayload,
    line_items: Vec<LineItemPayload>,
    shipping_lines: Vec<ShippingLinePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer_id: Option<i64>,
}

impl OrderPayload {
    fn from_request(request: &OrderRequest) -> Self {
        Self {
            payment_method: request.payment.code(),
            payment_method_title: request.payment.title(),
            set_paid: false,
            billing: AddressPayload::billing(&request.billing),
            shipping: AddressPayload::shipping(&request.shipping),
            line_items: request
                .items
                .iter()
                .map(|item| LineItemPayload {
                    product_id: item.product_id.value(),
                    variation_id: item.variation_id.map(|v| v.value()),
                    quantity: item.quantity,
                })
                .collect(),
            shipping_lines: vec![ShippingLinePayload {
                method_id: "flat_rate",
                method_title: "Flat Rate",
                total: request.totals.shipping.display_amount(),
            }],
            customer_id: request.customer_id.map(|c| c.value()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OrderAckRecord {
    id: i64,
    number: String,
    status: String,
    total: String,
    currency: String,
}

impl OrderAckRecord {
    fn into_domain(self) -> Result<PlacedOrder, FetchError> {
        let currency = Currency::from_code(&self.currency).ok_or_else(|| {
            FetchError::InvalidRecord(format!("unknown currency {:?}", self.currency))
        })?;
        let total = Money::parse(&self.total, currency)?;
        Ok(PlacedOrder {
            id: OrderId::new(self.id),
            number: self.number,
            status: self.status,
            total,
            currency,
        })
    }
}
