use anyhow::Context;
use async_trait::async_trait;
use bistro_api_types::{LikeResponse, OrderSummary, PlaceOrderRequest, ReviewId};
use bistro_client::{
    ClientError, ORDERS_PATH, OrderApi, ReviewApi, decode_history, decode_like, decode_placed_order,
    like_review_path,
};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

/// Native HTTP client for the storefront backend.
///
/// Reads `BISTRO_API_URL` from the environment when no endpoint is given
/// (default: `http://localhost:5000`). Keeps the session cookie between
/// requests so order endpoints see the logged-in user.
pub struct BistroHttpClient {
    endpoint: String,
    http: reqwest::Client,
}

impl BistroHttpClient {
    pub fn new(endpoint: Option<String>) -> anyhow::Result<Self> {
        let endpoint = endpoint
            .or_else(|| std::env::var("BISTRO_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()
            .context("failed to build storefront http client")?;
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        operation: &str,
    ) -> Result<(u16, String), ClientError> {
        let response = request.send().await.map_err(|err| {
            warn!(operation, error = %err, "storefront request transport failure");
            ClientError::Network(err.to_string())
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;
        debug!(operation, status, "storefront response received");
        Ok((status, text))
    }
}

#[async_trait(?Send)]
impl OrderApi for BistroHttpClient {
    async fn order_history(&self) -> Result<Vec<OrderSummary>, ClientError> {
        let request = self.http.get(self.url(ORDERS_PATH));
        let (status, body) = self.send(request, "order_history").await?;
        decode_history(status, &body)
    }

    async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<Option<OrderSummary>, ClientError> {
        let builder = self.http.post(self.url(ORDERS_PATH)).json(request);
        let (status, body) = self.send(builder, "place_order").await?;
        decode_placed_order(status, &body)
    }
}

#[async_trait(?Send)]
impl ReviewApi for BistroHttpClient {
    async fn toggle_like(&self, review_id: ReviewId) -> Result<LikeResponse, ClientError> {
        let request = self
            .http
            .post(self.url(&like_review_path(review_id)))
            .json(&serde_json::json!({}));
        let (status, body) = self.send(request, "toggle_like").await?;
        decode_like(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Path,
        http::StatusCode,
        routing::{get, post},
    };
    use bistro_api_types::{ItemId, OrderRequestLine};
    use rust_decimal::Decimal;
    use serde_json::{Value, json};

    async fn serve(router: Router) -> anyhow::Result<String> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Ok(format!("http://{addr}"))
    }

    #[tokio::test]
    async fn history_unauthorized_maps_to_status_error() -> anyhow::Result<()> {
        let router = Router::new().route(
            ORDERS_PATH,
            get(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"error": "You must be logged in to view orders."})),
                )
            }),
        );
        let client = BistroHttpClient::new(Some(serve(router).await?))?;

        let err = client
            .order_history()
            .await
            .expect_err("401 must not yield history");
        assert!(err.is_unauthorized());
        assert_eq!(
            err.server_message(),
            Some("You must be logged in to view orders.")
        );
        Ok(())
    }

    #[tokio::test]
    async fn place_order_posts_items_and_decodes_created_order() -> anyhow::Result<()> {
        let router = Router::new().route(
            ORDERS_PATH,
            post(|Json(body): Json<Value>| async move {
                let quantity = body["items"][0]["quantity"].as_u64().unwrap_or(0);
                (
                    StatusCode::CREATED,
                    Json(json!({
                        "orderId": "ORD-007",
                        "date": "2024-03-01",
                        "total": 25.0 * quantity as f64,
                        "status": "Completed",
                        "items": [{"id": 1, "name": "Pizza", "quantity": quantity, "price": 25.0}]
                    })),
                )
            }),
        );
        let client = BistroHttpClient::new(Some(serve(router).await?))?;

        let order = client
            .place_order(&PlaceOrderRequest {
                items: vec![OrderRequestLine {
                    id: ItemId(1),
                    quantity: 2,
                }],
            })
            .await?
            .context("summary expected in created order body")?;
        assert_eq!(order.order_id, "ORD-007");
        assert_eq!(order.total, Decimal::new(50, 0));
        assert_eq!(order.items[0].quantity, 2);
        Ok(())
    }

    #[tokio::test]
    async fn created_order_with_bare_message_is_accepted() -> anyhow::Result<()> {
        let router = Router::new().route(
            ORDERS_PATH,
            post(|| async {
                (
                    StatusCode::CREATED,
                    Json(json!({"message": "Order created", "order_id": 12})),
                )
            }),
        );
        let client = BistroHttpClient::new(Some(serve(router).await?))?;

        let placed = client
            .place_order(&PlaceOrderRequest {
                items: vec![OrderRequestLine {
                    id: ItemId(1),
                    quantity: 1,
                }],
            })
            .await?;
        assert_eq!(placed, None);
        Ok(())
    }

    #[tokio::test]
    async fn toggle_like_hits_review_route() -> anyhow::Result<()> {
        let router = Router::new().route(
            "/like_review/{id}",
            post(|Path(id): Path<u64>| async move {
                Json(json!({"status": "success", "is_liked": true, "new_likes": id + 1}))
            }),
        );
        let client = BistroHttpClient::new(Some(serve(router).await?))?;

        let response = client.toggle_like(ReviewId(4)).await?;
        assert!(response.is_liked);
        assert_eq!(response.new_likes, 5);
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_backend_is_network_error() -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        let client = BistroHttpClient::new(Some(format!("http://{addr}/")))?;
        assert_eq!(client.endpoint(), format!("http://{addr}"));
        let err = client
            .order_history()
            .await
            .expect_err("closed port must fail");
        assert!(matches!(err, ClientError::Network(_)));
        Ok(())
    }
}
