//! Networking for the catalog page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks REST to the collection service through the storefront
//! server, which forwards `/objects` to the configured upstream.

pub mod api;
