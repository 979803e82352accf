//! Card for a single product with update and delete actions.

use catalog::model::Product;
use leptos::prelude::*;

/// One product: photo, name, description, price, and action buttons.
///
/// Update applies the page's product input to this product's identifier.
#[component]
pub fn ProductCard(product: Product, on_update: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let id = product.id.clone().unwrap_or_default();
    let update_id = id.clone();
    let price = product.data.formatted_price();
    let Product { name, data, .. } = product;
    let alt = name.clone();

    view! {
        <div class="object-card">
            <img src=data.photo alt=alt class="object-photo"/>
            <div class="object-details">
                <h2>{name}</h2>
                <p>{data.description}</p>
                <p class="object-price">{price}</p>
                <button on:click=move |_| on_update.run(update_id.clone())>"Update"</button>
                <button class="delete-btn" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
