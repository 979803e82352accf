//! Browser transport for the collection service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable` since the
//! catalog is only loaded once the page is running in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and malformed bodies all come back
//! as `ApiError` so `CatalogView` can log and alert uniformly. Writes only
//! check the status, so an empty 204 reply is a success.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use catalog::api::{ApiError, ObjectsApi};
use catalog::model::Product;

/// Base URL baked in at build time. Empty means same origin, where the
/// storefront server forwards `/objects` upstream.
pub const API_BASE: &str = match option_env!("CATALOG_API_BASE") {
    Some(base) => base,
    None => "",
};

/// `ObjectsApi` over `gloo-net`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlooObjects {
    base: String,
}

impl GlooObjects {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Transport for the build-time [`API_BASE`].
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(API_BASE)
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn collection(&self) -> String {
        catalog::api::collection_url(&self.base)
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn object(&self, id: &str) -> Result<String, ApiError> {
        catalog::api::object_url(&self.base, id)
    }
}

#[cfg(feature = "hydrate")]
async fn read_body(
    response: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<String, ApiError> {
    let response = response.map_err(|e| ApiError::Request(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
    catalog::api::check_status(status, &body)?;
    Ok(body)
}

#[cfg(feature = "hydrate")]
fn json_request(
    builder: gloo_net::http::RequestBuilder,
    product: &Product,
) -> Result<gloo_net::http::Request, ApiError> {
    builder.json(product).map_err(|e| ApiError::Request(e.to_string()))
}

#[async_trait(?Send)]
impl ObjectsApi for GlooObjects {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = gloo_net::http::Request::get(&self.collection()).send().await;
            catalog::api::parse_products(&read_body(response).await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn get(&self, id: &str) -> Result<Product, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = gloo_net::http::Request::get(&self.object(id)?).send().await;
            catalog::api::parse_product(&read_body(response).await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    async fn create(&self, product: &Product) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = json_request(gloo_net::http::Request::post(&self.collection()), product)?;
            read_body(request.send().await).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = product;
            Err(ApiError::Unavailable)
        }
    }

    async fn update(&self, id: &str, product: &Product) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = json_request(gloo_net::http::Request::put(&self.object(id)?), product)?;
            read_body(request.send().await).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, product);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = gloo_net::http::Request::delete(&self.object(id)?).send().await;
            read_body(response).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}
