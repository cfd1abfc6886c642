use async_trait::async_trait;
use bistro_api_types::{ErrorBody, LikeResponse, OrderSummary, PlaceOrderRequest, ReviewId};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

pub const ORDERS_PATH: &str = "/api/orders";

pub fn like_review_path(review_id: ReviewId) -> String {
    format!("/like_review/{review_id}")
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Order endpoints consumed by the cart.
#[async_trait(?Send)]
pub trait OrderApi {
    async fn order_history(&self) -> Result<Vec<OrderSummary>, ClientError>;
    /// Submit an order. `Ok(None)` means the server accepted it without
    /// returning an order summary.
    async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<Option<OrderSummary>, ClientError>;
}

/// Review endpoints consumed by the like button.
#[async_trait(?Send)]
pub trait ReviewApi {
    async fn toggle_like(&self, review_id: ReviewId) -> Result<LikeResponse, ClientError>;
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn status_error(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message);
    ClientError::Status { status, message }
}

/// Interpret a raw HTTP response as JSON of type `T`.
pub fn decode_json<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ClientError> {
    if !is_success(status) {
        return Err(status_error(status, body));
    }
    serde_json::from_str(body).map_err(|err| ClientError::Decode(err.to_string()))
}

/// Interpret a `GET /api/orders` response.
///
/// A successful response whose body is not an array means "no history".
pub fn decode_history(status: u16, body: &str) -> Result<Vec<OrderSummary>, ClientError> {
    let value: serde_json::Value = decode_json(status, body)?;
    if !value.is_array() {
        debug!("order history response is not an array, treating as empty");
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|err| ClientError::Decode(err.to_string()))
}

/// Interpret a `POST /api/orders` response.
///
/// Any 2xx is an accepted order; the summary is attached only when the body
/// carries one.
pub fn decode_placed_order(status: u16, body: &str) -> Result<Option<OrderSummary>, ClientError> {
    if !is_success(status) {
        return Err(status_error(status, body));
    }
    match serde_json::from_str(body) {
        Ok(order) => Ok(Some(order)),
        Err(err) => {
            warn!(status, %err, "order accepted without an order summary");
            Ok(None)
        }
    }
}

/// Interpret a like toggle response; `{"status": "error"}` bodies are failures even on 2xx.
pub fn decode_like(status: u16, body: &str) -> Result<LikeResponse, ClientError> {
    if !is_success(status) {
        return Err(status_error(status, body));
    }
    let response: LikeResponse =
        serde_json::from_str(body).map_err(|err| ClientError::Decode(err.to_string()))?;
    if response.status == "error" {
        return Err(status_error(status, body));
    }
    Ok(response)
}
