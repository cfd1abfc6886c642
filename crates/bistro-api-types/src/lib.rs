use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ReviewId(pub u64);

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One distinct product in the cart, as stored under the `cart` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLineItem {
    pub id: ItemId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
    pub quantity: u32,
}

impl CartLineItem {
    /// `price * quantity`, saturating at `Decimal::MAX`.
    pub fn line_total(&self) -> Decimal {
        saturating_line_total(self.price, self.quantity)
    }
}

fn saturating_line_total(price: Decimal, quantity: u32) -> Decimal {
    price.saturating_mul(Decimal::from(quantity))
}

/// Item data needed to put something in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
}

/// Menu row as the server injects it into the page (`MENU_ITEMS_FROM_DB`).
///
/// Prices arrive either as JSON numbers or as decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// 0–5 average rating.
    #[serde(default)]
    pub rating: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRequestLine {
    pub id: ItemId,
    pub quantity: u32,
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceOrderRequest {
    pub items: Vec<OrderRequestLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl OrderLine {
    pub fn line_total(&self) -> Decimal {
        saturating_line_total(self.price, self.quantity)
    }
}

fn default_order_status() -> String {
    "Completed".to_owned()
}

/// A past order as returned by `GET /api/orders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(default = "default_order_status")]
    pub status: String,
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

/// Error payload the backend sends with non-2xx responses.
///
/// Order routes use `error`, review routes use `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub need_login: bool,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|msg| !msg.trim().is_empty())
    }
}

/// Response of `POST /like_review/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikeResponse {
    pub status: String,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub new_likes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slide {
    pub url: String,
    #[serde(rename = "imgPath")]
    pub image_path: String,
}
