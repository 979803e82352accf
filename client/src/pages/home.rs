//! Catalog page: create, search by ID, refresh, and the product card list.

use catalog::model::Product;
use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::state::catalog::{CatalogAction, CatalogState};

/// Run `action` on a snapshot of the page state and fold the result back.
///
/// Actions are not coordinated: overlapping requests each write back when
/// they resolve, so the last one to finish decides the displayed list.
fn dispatch(catalog: RwSignal<CatalogState>, action: CatalogAction) {
    #[cfg(feature = "hydrate")]
    {
        let mut snapshot = catalog.get_untracked();
        leptos::task::spawn_local(async move {
            let effects = action.run(&mut snapshot).await;
            catalog.update(|current| current.absorb(snapshot, effects));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (catalog, action);
    }
}

/// Catalog page. Loads the full collection on mount.
#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    Effect::new(move || dispatch(catalog, CatalogAction::Refresh));

    let on_update = Callback::new(move |id: String| dispatch(catalog, CatalogAction::Update(id)));
    let on_delete = Callback::new(move |id: String| dispatch(catalog, CatalogAction::Delete(id)));

    view! {
        <div class="container">
            <h1>"Online Store"</h1>

            <div class="input-group">
                <input
                    type="text"
                    placeholder="Name, photo, description, price"
                    prop:value=move || catalog.with(|state| state.product_input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        catalog.update(|state| state.product_input = value);
                    }
                />
                <button on:click=move |_| dispatch(catalog, CatalogAction::Create)>
                    "Create product"
                </button>
            </div>

            <div class="input-group">
                <input
                    type="text"
                    placeholder="Product ID"
                    prop:value=move || catalog.with(|state| state.id_input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        catalog.update(|state| state.id_input = value);
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            dispatch(catalog, CatalogAction::FetchById);
                        }
                    }
                />
                <button on:click=move |_| dispatch(catalog, CatalogAction::FetchById)>
                    "Search by ID"
                </button>
            </div>

            <button class="refresh-btn" on:click=move |_| dispatch(catalog, CatalogAction::Refresh)>
                "Show all products"
            </button>

            <Show when=move || catalog.with(|state| state.last_error.is_some())>
                <p class="error-banner">
                    {move || catalog.with(|state| state.last_error.clone().unwrap_or_default())}
                </p>
            </Show>

            <div class="object-list">
                <For
                    each=move || catalog.with(|state| state.products.clone())
                    key=Product::key
                    children=move |product| {
                        view! { <ProductCard product=product on_update=on_update on_delete=on_delete/> }
                    }
                />
            </div>
        </div>
    }
}
