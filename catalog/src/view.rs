//! Catalog View state and actions.
//!
//! DESIGN
//! ======
//! `CatalogView` owns the displayed product list and the two text inputs.
//! Each action issues one request through the injected [`ObjectsApi`] and,
//! after a successful mutation, re-lists the whole collection once. There
//! are no retries, no optimistic updates and no cancellation.
//!
//! Front-ends that run actions concurrently work on a snapshot and fold the
//! result back with [`CatalogView::absorb`]; whichever action finishes last
//! decides the displayed list.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged. Create, update and fetch-by-id failures are also
//! raised through the [`Notifier`]; list and delete failures are not.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::api::ObjectsApi;
use crate::input::{InputError, parse_product_input};
use crate::model::Product;

/// Blocking user-facing notification (browser `alert`, CLI stderr line).
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// How the requested operation itself ended, independent of the re-list
/// that follows a successful write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input or identifier; nothing was sent.
    #[default]
    Skipped,
    Succeeded,
    Failed,
}

/// What an action did and which parts of the view it changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionEffects {
    pub outcome: Outcome,
    pub list_replaced: bool,
    pub product_input_cleared: bool,
    pub id_input_cleared: bool,
}

impl ActionEffects {
    fn failed() -> Self {
        Self { outcome: Outcome::Failed, ..Self::default() }
    }
}

/// State behind the catalog page.
#[derive(Clone, Debug)]
pub struct CatalogView<A, N> {
    api: A,
    notifier: N,
    pub products: Vec<Product>,
    /// `name,photo,description,price` text for create and update.
    pub product_input: String,
    /// Identifier text for fetch-by-id.
    pub id_input: String,
    /// Message of the most recent failure, cleared by the next success.
    pub last_error: Option<String>,
}

impl<A: ObjectsApi, N: Notifier> CatalogView<A, N> {
    #[must_use]
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            products: Vec::new(),
            product_input: String::new(),
            id_input: String::new(),
            last_error: None,
        }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Replace the displayed list with the full collection.
    ///
    /// On failure the previous list stays on screen.
    pub async fn refresh(&mut self) -> ActionEffects {
        match self.api.list().await {
            Ok(products) => {
                log::debug!("listed {} products", products.len());
                self.products = products;
                self.last_error = None;
                ActionEffects { outcome: Outcome::Succeeded, list_replaced: true, ..ActionEffects::default() }
            }
            Err(e) => {
                log::error!("failed to list products: {e}");
                self.last_error = Some(format!("Error loading products. {e}"));
                ActionEffects::failed()
            }
        }
    }

    /// Show only the product named by `id_input`. The input is cleared
    /// whether or not the lookup succeeds.
    pub async fn fetch_by_id(&mut self) -> ActionEffects {
        let id = self.id_input.trim().to_owned();
        if id.is_empty() {
            return ActionEffects::default();
        }

        let mut effects = ActionEffects { id_input_cleared: true, ..ActionEffects::failed() };
        match self.api.get(&id).await {
            Ok(product) => {
                log::debug!("fetched product {id}");
                self.products = vec![product];
                self.last_error = None;
                effects.outcome = Outcome::Succeeded;
                effects.list_replaced = true;
            }
            Err(e) => {
                log::error!("failed to fetch product {id}: {e}");
                self.fail(format!("Error fetching product {id}. {e}"));
            }
        }
        self.id_input.clear();
        effects
    }

    /// Create a product from `product_input`.
    pub async fn create(&mut self) -> ActionEffects {
        let product = match self.parsed_input() {
            Ok(product) => product,
            Err(effects) => return effects,
        };

        match self.api.create(&product).await {
            Ok(()) => {
                log::debug!("created product {}", product.name);
                self.after_write().await
            }
            Err(e) => {
                log::error!("failed to create product: {e}");
                self.fail(format!("Error creating product. {e}"));
                ActionEffects::failed()
            }
        }
    }

    /// Replace the product stored under `id` with `product_input`.
    pub async fn update(&mut self, id: &str) -> ActionEffects {
        let id = id.trim();
        if id.is_empty() {
            return ActionEffects::default();
        }
        let product = match self.parsed_input() {
            Ok(product) => product,
            Err(effects) => return effects,
        };

        match self.api.update(id, &product.with_id(id)).await {
            Ok(()) => {
                log::debug!("updated product {id}");
                self.after_write().await
            }
            Err(e) => {
                log::error!("failed to update product {id}: {e}");
                self.fail(format!("Error updating product {id}. {e}"));
                ActionEffects::failed()
            }
        }
    }

    /// Remove the product stored under `id`. Failures are logged only.
    pub async fn delete(&mut self, id: &str) -> ActionEffects {
        let id = id.trim();
        if id.is_empty() {
            return ActionEffects::default();
        }

        match self.api.delete(id).await {
            Ok(()) => {
                log::debug!("deleted product {id}");
                ActionEffects { outcome: Outcome::Succeeded, ..self.refresh().await }
            }
            Err(e) => {
                log::error!("failed to delete product {id}: {e}");
                self.last_error = Some(format!("Error deleting product {id}. {e}"));
                ActionEffects::failed()
            }
        }
    }

    /// Fold an action that ran on a snapshot of this view back into it.
    ///
    /// Only the parts the action reported as changed are copied, so text
    /// typed while the request was in flight survives.
    pub fn absorb(&mut self, finished: Self, effects: ActionEffects) {
        if effects.list_replaced {
            self.products = finished.products;
        }
        if effects.product_input_cleared {
            self.product_input.clear();
        }
        if effects.id_input_cleared {
            self.id_input.clear();
        }
        self.last_error = finished.last_error;
    }

    /// Re-list after a write. A failed re-list leaves `last_error` set but
    /// does not turn the write into a failure.
    async fn after_write(&mut self) -> ActionEffects {
        let effects = self.refresh().await;
        self.product_input.clear();
        ActionEffects { outcome: Outcome::Succeeded, product_input_cleared: true, ..effects }
    }

    fn parsed_input(&mut self) -> Result<Product, ActionEffects> {
        match parse_product_input(&self.product_input) {
            Ok(product) => Ok(product),
            Err(InputError::Empty) => Err(ActionEffects::default()),
            Err(e) => {
                log::warn!("rejected product input: {e}");
                self.fail(e.alert_message());
                Err(ActionEffects::failed())
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.notifier.alert(&message);
        self.last_error = Some(message);
    }
}
