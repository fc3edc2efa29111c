//! Cart and line item types.

use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Money;
use crate::product::ProductInput;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A line item in the cart.
///
/// Every field deserializes leniently (missing fields take defaults) so a
/// single malformed persisted row can be dropped by [`Cart::sanitize`]
/// without discarding the rest of the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartItem {
    /// Unique key within the cart.
    #[serde(default)]
    pub id: ItemId,
    /// Display name.
    #[serde(default)]
    pub title: String,
    /// Secondary display field (may be empty).
    #[serde(default)]
    pub author: String,
    /// Unit price.
    #[serde(default)]
    pub price: Money,
    /// Quantity; always >= 1 once stored.
    #[serde(default)]
    pub qty: i64,
}

impl CartItem {
    /// Total price for this line (unit price times quantity).
    pub fn line_total(&self) -> Option<Money> {
        self.price.try_multiply(self.qty)
    }

    /// Whether this item satisfies the cart invariants.
    fn is_valid(&self) -> bool {
        self.qty >= 1
            && !self.id.as_str().is_empty()
            && !self.title.is_empty()
            && !self.price.is_negative()
    }
}

/// A shopping cart: an ordered list of line items, keyed by item id.
///
/// Serializes as a bare JSON array of items, which is also the persisted
/// representation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The items, in storage (and render) order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.qty).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Get an item by id.
    pub fn get_item(&self, id: &ItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Add a product to the cart.
    ///
    /// If an item with the same id already exists its quantity is
    /// incremented by one; otherwise a new item is appended with quantity
    /// one. Returns an error if the increment would exceed
    /// [`MAX_QUANTITY_PER_ITEM`] or overflow.
    pub fn add_item(&mut self, input: ProductInput) -> Result<ItemId, CommerceError> {
        let id = input.item_id();

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == id) {
            let new_qty = existing.qty.checked_add(1).ok_or(CommerceError::Overflow)?;
            if new_qty > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_qty,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.qty = new_qty;
            return Ok(id);
        }

        self.items.push(CartItem {
            id: id.clone(),
            title: input.title,
            author: input.author,
            price: input.price,
            qty: 1,
        });
        Ok(id)
    }

    /// Update an item's quantity.
    ///
    /// If the quantity is <= 0, removes the item. Unknown ids are a no-op
    /// (`Ok(false)`). Returns an error if the quantity exceeds
    /// [`MAX_QUANTITY_PER_ITEM`].
    pub fn update_quantity(&mut self, id: &ItemId, qty: i64) -> Result<bool, CommerceError> {
        if qty <= 0 {
            return Ok(self.remove_item(id));
        }

        if qty > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                qty,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
            item.qty = qty;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove an item from the cart. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Calculate the cart subtotal (sum of unit price times quantity).
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let currency = self
            .items
            .first()
            .map(|i| i.price.currency)
            .unwrap_or_default();

        let mut total = Money::zero(currency);
        for item in &self.items {
            let line = item.line_total().ok_or(CommerceError::Overflow)?;
            if line.currency != total.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: total.currency.code().to_string(),
                    got: line.currency.code().to_string(),
                });
            }
            total = total.try_add(&line).ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
    }

    /// Drop items that violate the cart invariants (non-positive quantity,
    /// blank id or title, negative price) and de-duplicate ids, keeping
    /// the first occurrence. Returns how many items were dropped.
    pub fn sanitize(&mut self) -> usize {
        let len_before = self.items.len();

        let mut seen: Vec<ItemId> = Vec::with_capacity(self.items.len());
        self.items.retain(|item| {
            if !item.is_valid() || seen.contains(&item.id) {
                return false;
            }
            seen.push(item.id.clone());
            true
        });

        len_before - self.items.len()
    }
}
