use crate::locale::Messages;
use crate::notice::Notice;
use crate::store::CartStore;
use bistro_api_types::{CartLineItem, OrderRequestLine, OrderSummary, PlaceOrderRequest};
use bistro_client::{ClientError, OrderApi};
use bistro_storage::KeyValueStore;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl CheckoutError {
    /// Notice for a failed checkout: the server's message when it sent one.
    pub fn notice(&self, messages: &Messages) -> Notice {
        match self {
            Self::EmptyCart => Notice::new(messages.cart_empty),
            Self::Client(ClientError::Status { message, .. }) => Notice::new(
                message
                    .clone()
                    .unwrap_or_else(|| messages.order_failed.to_owned()),
            ),
            Self::Client(_) => Notice::new(messages.network_error),
        }
    }
}

pub fn checkout_request(items: &[CartLineItem]) -> Result<PlaceOrderRequest, CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    Ok(PlaceOrderRequest {
        items: items
            .iter()
            .map(|item| OrderRequestLine {
                id: item.id,
                quantity: item.quantity,
            })
            .collect(),
    })
}

/// Submit the cart as an order.
///
/// The cart is cleared once the server accepts the order with any 2xx
/// status, whether or not the reply carries an order summary. Any failure
/// leaves it as it was.
pub async fn checkout<S, A>(
    cart: &CartStore<S>,
    api: &A,
) -> Result<Option<OrderSummary>, CheckoutError>
where
    S: KeyValueStore,
    A: OrderApi + ?Sized,
{
    let request = checkout_request(&cart.get())?;
    let order = api.place_order(&request).await?;
    match &order {
        Some(order) => info!(order_id = %order.order_id, lines = request.items.len(), "order placed"),
        None => info!(lines = request.items.len(), "order placed without summary"),
    }

    if let Err(err) = cart.clear() {
        warn!(error = %err, "order placed but the cart could not be cleared");
    }
    Ok(order)
}
