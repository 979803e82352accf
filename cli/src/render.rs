//! Terminal rendering of the displayed product list.

use catalog::model::Product;

/// One line per product: `id  name  price  description  photo`.
#[must_use]
pub fn render_table(products: &[Product]) -> String {
    if products.is_empty() {
        return "(no products)".to_owned();
    }

    let id_width = products
        .iter()
        .map(|p| p.id.as_deref().unwrap_or("-").len())
        .max()
        .unwrap_or(1);
    let name_width = products.iter().map(|p| p.name.chars().count()).max().unwrap_or(1);

    products
        .iter()
        .map(|p| {
            format!(
                "{:<id_width$}  {:<name_width$}  {:>10}  {}  {}",
                p.id.as_deref().unwrap_or("-"),
                p.name,
                p.data.formatted_price(),
                p.data.description,
                p.data.photo,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON in the collection service's own shape.
///
/// # Errors
///
/// Returns the serializer error, which only happens for non-finite prices.
pub fn render_json(products: &[Product]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(products)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
