#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use catalog::api::ObjectsApi;
use catalog::view::{ActionEffects, CatalogView, Notifier};

use crate::net::api::GlooObjects;

/// Page state provided via context as `RwSignal<CatalogState>`.
pub type CatalogState = CatalogView<GlooObjects, BrowserAlert>;

/// Fresh page state bound to the build-time collection service base.
#[must_use]
pub fn new_catalog_state() -> CatalogState {
    CatalogView::new(GlooObjects::from_build_env(), BrowserAlert)
}

/// Raises `window.alert` in the browser; logs on the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            match web_sys::window() {
                Some(window) => {
                    if let Err(e) = window.alert_with_message(message) {
                        log::warn!("alert failed ({e:?}): {message}");
                    }
                }
                None => log::warn!("no window for alert: {message}"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::warn!("alert: {message}");
        }
    }
}

/// A user action on the catalog page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogAction {
    Refresh,
    FetchById,
    Create,
    Update(String),
    Delete(String),
}

impl CatalogAction {
    /// Run this action against `view`, returning what it changed.
    pub async fn run<A: ObjectsApi, N: Notifier>(&self, view: &mut CatalogView<A, N>) -> ActionEffects {
        match self {
            Self::Refresh => view.refresh().await,
            Self::FetchById => view.fetch_by_id().await,
            Self::Create => view.create().await,
            Self::Update(id) => view.update(id).await,
            Self::Delete(id) => view.delete(id).await,
        }
    }
}
