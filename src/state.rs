//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.

use crate::upstream::Upstream;

/// Clone is required by Axum; the inner `reqwest::Client` is Arc-backed.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Upstream,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Upstream) -> Self {
        Self { upstream }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
