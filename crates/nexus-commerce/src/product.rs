//! Product data as extracted from a storefront page.

use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product offered for adding to the cart.
///
/// This is the shape a product card yields: an optional explicit id plus
/// the display fields. When the id is absent, the cart derives one from
/// the title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductInput {
    /// Explicit product id, if the page provides one.
    pub id: Option<String>,
    /// Display name.
    pub title: String,
    /// Secondary display field (may be empty).
    pub author: String,
    /// Unit price.
    pub price: Money,
}

impl ProductInput {
    /// Create a product with no explicit id.
    pub fn new(title: impl Into<String>, author: impl Into<String>, price: Money) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            price,
        }
    }

    /// Set an explicit product id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The cart key for this product: the explicit id, or a slug of the
    /// title when the id is absent or blank.
    pub fn item_id(&self) -> ItemId {
        match &self.id {
            Some(id) if !id.trim().is_empty() => ItemId::new(id.clone()),
            _ => ItemId::from_title(&self.title),
        }
    }
}

/// Parse a price out of the free-form text of a price element.
///
/// Strips everything but digits, dots, and commas, normalizes commas to
/// decimal points, then parses. Unparsable text yields zero.
///
/// ```
/// use nexus_commerce::{parse_price_text, Currency};
/// assert_eq!(parse_price_text("$12.50", Currency::USD).amount_cents, 1250);
/// assert_eq!(parse_price_text("12,50 \u{20ac}", Currency::EUR).amount_cents, 1250);
/// assert_eq!(parse_price_text("free", Currency::USD).amount_cents, 0);
/// ```
pub fn parse_price_text(text: &str, currency: Currency) -> Money {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let amount = cleaned.parse::<f64>().unwrap_or(0.0);
    Money::from_decimal(amount, currency)
}
