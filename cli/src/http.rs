//! `ObjectsApi` over `reqwest` for the terminal front-end.

use std::time::Duration;

use async_trait::async_trait;
use catalog::api::{ApiError, ObjectsApi, check_status, collection_url, object_url, parse_product, parse_products};
use catalog::model::Product;

#[derive(Clone, Debug)]
pub struct ReqwestObjects {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestObjects {
    /// Build a transport for the collection service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url: base_url.into() })
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        check_status(status, &body)?;
        Ok(body)
    }
}

#[async_trait(?Send)]
impl ObjectsApi for ReqwestObjects {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let body = self.send(self.http.get(collection_url(&self.base_url))).await?;
        parse_products(&body)
    }

    async fn get(&self, id: &str) -> Result<Product, ApiError> {
        let body = self.send(self.http.get(object_url(&self.base_url, id)?)).await?;
        parse_product(&body)
    }

    async fn create(&self, product: &Product) -> Result<(), ApiError> {
        let request = self.http.post(collection_url(&self.base_url)).json(product);
        self.send(request).await.map(|_| ())
    }

    async fn update(&self, id: &str, product: &Product) -> Result<(), ApiError> {
        let request = self.http.put(object_url(&self.base_url, id)?).json(product);
        self.send(request).await.map(|_| ())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(object_url(&self.base_url, id)?)).await.map(|_| ())
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;
