//! Free-text product input: `"name,photo,description,price"`.
//!
//! Fields are split on commas and trimmed. Anything after the fourth field
//! is ignored, so descriptions cannot contain commas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;

use crate::model::{Details, Product};

/// Message shown to the user for any malformed input.
pub const INVALID_INPUT_MESSAGE: &str = "All fields are required: name, photo, description and price.";

/// The four positional fields of a product input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Photo,
    Description,
    Price,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::Photo => "photo",
            Self::Description => "description",
            Self::Price => "price",
        };
        f.write_str(label)
    }
}

/// Reasons a product input line is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Nothing was typed.
    #[error("product input is empty")]
    Empty,

    /// A positional field is absent or blank.
    #[error("missing {0}")]
    MissingField(Field),

    /// The price field does not hold a finite number.
    #[error("price is not a number: {0:?}")]
    InvalidPrice(String),
}

impl InputError {
    /// Text for the user-facing alert.
    #[must_use]
    pub fn alert_message(&self) -> String {
        format!("{INVALID_INPUT_MESSAGE} ({self})")
    }
}

/// Parse a `name,photo,description,price` line into an unsaved [`Product`].
///
/// # Errors
///
/// Returns [`InputError::Empty`] for blank input, [`InputError::MissingField`]
/// when one of the four fields is absent or blank, and
/// [`InputError::InvalidPrice`] when the price is not a finite number.
pub fn parse_product_input(raw: &str) -> Result<Product, InputError> {
    if raw.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let mut parts = raw.split(',').map(str::trim);
    let name = required(parts.next(), Field::Name)?;
    let photo = required(parts.next(), Field::Photo)?;
    let description = required(parts.next(), Field::Description)?;
    let price_text = required(parts.next(), Field::Price)?;

    let price = price_text
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| InputError::InvalidPrice(price_text.to_owned()))?;

    if parts.next().is_some() {
        log::debug!("ignoring trailing fields in product input");
    }

    Ok(Product::draft(name, Details::new(photo, description, price)))
}

fn required(part: Option<&str>, field: Field) -> Result<&str, InputError> {
    match part {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(InputError::MissingField(field)),
    }
}
