//! HTTP client for the product service.

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body for `POST /products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// Body for `PUT /products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
}

/// Status and decoded body of a service response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    /// `None` for an empty body. Non-JSON bodies are kept as a JSON string.
    pub body: Option<Value>,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `message` field of a JSON body.
    pub fn message(&self) -> Option<&str> {
        self.body.as_ref()?.get("message")?.as_str()
    }

    async fn from_response(resp: Response) -> Result<Self, reqwest::Error> {
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        let body = if text.is_empty() {
            None
        } else {
            Some(serde_json::from_str(&text).unwrap_or(Value::String(text)))
        };
        Ok(Self { status, body })
    }
}

pub struct ProductClient {
    client: Client,
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, pooling).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<ApiReply, reqwest::Error> {
        let resp = self.client.get(self.url("/health")).send().await?;
        ApiReply::from_response(resp).await
    }

    /// `GET /products`
    pub async fn list(&self) -> Result<ApiReply, reqwest::Error> {
        let resp = self.client.get(self.url("/products")).send().await?;
        ApiReply::from_response(resp).await
    }

    /// `POST /products`
    pub async fn create(&self, product: &NewProduct) -> Result<ApiReply, reqwest::Error> {
        let resp = self
            .client
            .post(self.url("/products"))
            .json(product)
            .send()
            .await?;
        ApiReply::from_response(resp).await
    }

    /// `POST /products` with an arbitrary JSON body.
    pub async fn create_raw(&self, payload: &Value) -> Result<ApiReply, reqwest::Error> {
        let resp = self
            .client
            .post(self.url("/products"))
            .json(payload)
            .send()
            .await?;
        ApiReply::from_response(resp).await
    }

    /// `PUT /products/{id}`. The id is sent verbatim so malformed ids can be exercised.
    pub async fn update(&self, id: &str, update: &ProductUpdate) -> Result<ApiReply, reqwest::Error> {
        let resp = self
            .client
            .put(self.url(&format!("/products/{id}")))
            .json(update)
            .send()
            .await?;
        ApiReply::from_response(resp).await
    }

    /// `PUT /products/{id}` with an arbitrary JSON body.
    pub async fn update_raw(&self, id: &str, payload: &Value) -> Result<ApiReply, reqwest::Error> {
        let resp = self
            .client
            .put(self.url(&format!("/products/{id}")))
            .json(payload)
            .send()
            .await?;
        ApiReply::from_response(resp).await
    }

    /// `DELETE /products/{id}`
    pub async fn delete(&self, id: &str) -> Result<ApiReply, reqwest::Error> {
        let resp = self
            .client
            .delete(self.url(&format!("/products/{id}")))
            .send()
            .await?;
        ApiReply::from_response(resp).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
