//! Transport seam between catalog actions and the collection service.
//!
//! ENDPOINTS
//! =========
//! - `GET    {base}/objects`       list every product
//! - `GET    {base}/objects/{id}`  one product
//! - `POST   {base}/objects`       create, body ignored
//! - `PUT    {base}/objects/{id}`  replace, body ignored
//! - `DELETE {base}/objects/{id}`  remove, body ignored
//!
//! Writes only check the status: the service may answer 200 with the
//! stored product, 201, or 204 with no body at all.
//!
//! Implementations only move bytes. Status checks and JSON decoding go
//! through [`check_status`], [`parse_product`] and [`parse_products`] so
//! every transport classifies failures the same way. Identifiers always
//! travel as a single percent-encoded path segment ([`object_url`]).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::model::Product;

/// Path of the products collection on the collection service.
pub const COLLECTION_PATH: &str = "/objects";

/// Everything outside the RFC 3986 unreserved set.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Errors surfaced by an [`ObjectsApi`] transport.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The identifier cannot name a single product (blank, `.` or `..`).
    #[error("invalid product identifier {0:?}")]
    InvalidId(String),

    /// No transport exists in this build (e.g. during server rendering).
    #[error("collection service not available")]
    Unavailable,
}

/// CRUD access to the products collection.
///
/// Futures are not required to be `Send`: the browser transport runs on the
/// single-threaded wasm executor.
#[async_trait(?Send)]
pub trait ObjectsApi {
    /// Fetch every product.
    async fn list(&self) -> Result<Vec<Product>, ApiError>;

    /// Fetch one product by identifier.
    async fn get(&self, id: &str) -> Result<Product, ApiError>;

    /// Store a new product. The service assigns the identifier.
    async fn create(&self, product: &Product) -> Result<(), ApiError>;

    /// Replace the product stored under `id`.
    async fn update(&self, id: &str, product: &Product) -> Result<(), ApiError>;

    /// Remove the product stored under `id`.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// `{base}/objects`, tolerating a trailing slash on `base`.
#[must_use]
pub fn collection_url(base: &str) -> String {
    format!("{}{COLLECTION_PATH}", base.trim_end_matches('/'))
}

/// `{base}/objects/{id}` with `id` encoded as one path segment, so `/`,
/// `?` and `#` in an identifier never reach past the collection.
///
/// # Errors
///
/// Returns [`ApiError::InvalidId`] for a blank identifier or a dot segment,
/// which URL parsers would resolve to the collection or its parent.
pub fn object_url(base: &str, id: &str) -> Result<String, ApiError> {
    let id = id.trim();
    if id.is_empty() || id == "." || id == ".." {
        return Err(ApiError::InvalidId(id.to_owned()));
    }
    Ok(format!("{}/{}", collection_url(base), utf8_percent_encode(id, SEGMENT)))
}

/// Map a response status onto [`ApiError::Status`] when it is not 2xx.
///
/// # Errors
///
/// Returns [`ApiError::Status`] carrying `body` for any non-2xx status.
pub fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { status, body: body.to_owned() })
    }
}

/// Decode a single product body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is not a product object.
pub fn parse_product(body: &str) -> Result<Product, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a product array body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is not an array of products.
pub fn parse_products(body: &str) -> Result<Vec<Product>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
