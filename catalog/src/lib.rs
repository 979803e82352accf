//! # catalog
//!
//! Shared core for the storefront product catalog. Holds the product wire
//! model, the free-text input parser, the `ObjectsApi` transport seam, and
//! `CatalogView`, the state and action logic behind every front-end.
//!
//! DESIGN
//! ======
//! Nothing here performs I/O directly. The browser client plugs in a
//! `gloo-net` transport and the CLI plugs in `reqwest`, so the same action
//! rules (validate, send one request, re-list on success) apply everywhere.

pub mod api;
pub mod input;
pub mod model;
pub mod view;

pub use api::{ApiError, ObjectsApi};
pub use input::{InputError, parse_product_input};
pub use model::{Details, Product};
pub use view::{ActionEffects, CatalogView, Notifier, Outcome};
