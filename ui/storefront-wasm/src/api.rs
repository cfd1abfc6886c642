//! Backend client over `fetch`.
//!
//! Same-origin paths with the session cookie attached; response bodies go
//! through the shared decoders so the browser and native clients agree on
//! what counts as success.

use async_trait::async_trait;
use bistro_api_types::{LikeResponse, OrderSummary, PlaceOrderRequest, ReviewId};
use bistro_client::{
    ClientError, ORDERS_PATH, OrderApi, ReviewApi, decode_history, decode_like, decode_placed_order,
    like_review_path,
};
use gloo_net::http::{Request, RequestBuilder};
use web_sys::RequestCredentials;

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserApi;

fn network(err: gloo_net::Error) -> ClientError {
    gloo_console::warn!(format!("request failed: {err}"));
    ClientError::Network(err.to_string())
}

fn with_session(builder: RequestBuilder) -> RequestBuilder {
    builder
        .credentials(RequestCredentials::SameOrigin)
        .header("Accept", "application/json")
}

async fn send(request: Request) -> Result<(u16, String), ClientError> {
    let response = request.send().await.map_err(network)?;
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    Ok((status, body))
}

#[async_trait(?Send)]
impl OrderApi for BrowserApi {
    async fn order_history(&self) -> Result<Vec<OrderSummary>, ClientError> {
        let request = with_session(Request::get(ORDERS_PATH)).build().map_err(network)?;
        let (status, body) = send(request).await?;
        decode_history(status, &body)
    }

    async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<Option<OrderSummary>, ClientError> {
        let request = with_session(Request::post(ORDERS_PATH))
            .json(request)
            .map_err(network)?;
        let (status, body) = send(request).await?;
        decode_placed_order(status, &body)
    }
}

#[async_trait(?Send)]
impl ReviewApi for BrowserApi {
    async fn toggle_like(&self, review_id: ReviewId) -> Result<LikeResponse, ClientError> {
        let path = like_review_path(review_id);
        let request = with_session(Request::post(&path)).build().map_err(network)?;
        let (status, body) = send(request).await?;
        decode_like(status, &body)
    }
}
