//! Product wire model shared by every front-end.
//!
//! The JSON shape mirrors the collection service exactly:
//! `{ "id"?: string, "name": string, "data": { "photo", "description", "price" } }`.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// A catalog entry. `id` is assigned by the collection service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub data: Details,
}

/// Embedded product details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Details {
    pub photo: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    /// Build a product that has not been stored yet.
    #[must_use]
    pub fn draft(name: impl Into<String>, data: Details) -> Self {
        Self { id: None, name: name.into(), data }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Stable key for list rendering. Unsaved products key on their name.
    #[must_use]
    pub fn key(&self) -> String {
        self.id.clone().unwrap_or_else(|| format!("draft:{}", self.name))
    }
}

impl Details {
    #[must_use]
    pub fn new(photo: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self { photo: photo.into(), description: description.into(), price }
    }

    /// Price as shown on product cards, e.g. `12.50 €`.
    #[must_use]
    pub fn formatted_price(&self) -> String {
        format!("{:.2} €", self.price)
    }
}
