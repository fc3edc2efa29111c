//! Cart store: single source of truth plus persistence.

use crate::logging::ConsoleLogger;
use nexus_commerce::{Cart, Currency, ItemId, Money, ProductInput};
use nexus_storage::Store;

/// The cart's single source of truth.
///
/// Owns the in-memory item list and the persistent store handle. Every
/// mutation serializes the whole cart under the configured key before the
/// caller re-renders; persistence failures are logged and swallowed, never
/// surfaced.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    storage: Store,
    key: String,
    logger: ConsoleLogger,
}

impl CartStore {
    /// Load the cart from persistent storage.
    ///
    /// Missing or unreadable data yields an empty cart; data that parses
    /// but contains malformed items is sanitized item-by-item. Never
    /// errors.
    pub fn load(storage: Store, key: impl Into<String>) -> Self {
        let key = key.into();
        let logger = ConsoleLogger::new().with_widget("cart-store");

        let mut cart = match storage.get::<Cart>(&key) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(err) => {
                logger.warn(&format!("discarding unreadable cart data: {err}"));
                Cart::new()
            }
        };

        let dropped = cart.sanitize();
        if dropped > 0 {
            logger.warn(&format!("dropped {dropped} malformed cart item(s)"));
        }

        Self {
            cart,
            storage,
            key,
            logger,
        }
    }

    /// Serialize the current cart to persistent storage.
    pub fn save(&self) {
        if let Err(err) = self.storage.set(&self.key, &self.cart) {
            self.logger.warn(&format!("failed to persist cart: {err}"));
        }
    }

    /// Add a product: merge into the existing item or append a new one,
    /// then persist. Returns the item id, or `None` if the add was
    /// rejected (quantity cap).
    pub fn add_product(&mut self, input: ProductInput) -> Option<ItemId> {
        match self.cart.add_item(input) {
            Ok(id) => {
                self.save();
                Some(id)
            }
            Err(err) => {
                self.logger.warn(&format!("add to cart rejected: {err}"));
                None
            }
        }
    }

    /// Set an item's quantity (<= 0 removes it), then persist. Unknown
    /// ids are a no-op and nothing is written.
    pub fn update_qty(&mut self, id: &ItemId, qty: i64) -> bool {
        match self.cart.update_quantity(id, qty) {
            Ok(changed) => {
                if changed {
                    self.save();
                }
                changed
            }
            Err(err) => {
                self.logger.warn(&format!("quantity update rejected: {err}"));
                false
            }
        }
    }

    /// Remove an item, then persist. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let removed = self.cart.remove_item(id);
        if removed {
            self.save();
        }
        removed
    }

    /// The current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// The cart subtotal. An arithmetic failure (overflow, mixed
    /// currencies in persisted data) is logged and rendered as zero.
    pub fn subtotal(&self) -> Money {
        match self.cart.subtotal() {
            Ok(subtotal) => subtotal,
            Err(err) => {
                self.logger.error(&format!("subtotal unavailable: {err}"));
                Money::zero(Currency::USD)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_commerce::Currency;

    const KEY: &str = "test_cart";

    fn book_a() -> ProductInput {
        ProductInput::new("Book A", "A. Author", Money::new(1250, Currency::USD))
    }

    // === Load Tests ===

    #[test]
    fn test_load_empty_storage() {
        let store = CartStore::load(Store::open().unwrap(), KEY);
        assert!(store.cart().is_empty());
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn test_load_unreadable_data_resets() {
        let storage = Store::open().unwrap();
        storage.set(KEY, &42_i32).unwrap();

        let store = CartStore::load(storage, KEY);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_load_sanitizes_malformed_items() {
        let storage = Store::open().unwrap();
        let dirty = serde_json::json!([
            {"id": "book-a", "title": "Book A", "author": "",
             "price": {"amount_cents": 1250, "currency": "USD"}, "qty": 2},
            {"id": "book-b", "title": "Book B", "author": "",
             "price": {"amount_cents": 500, "currency": "USD"}}
        ]);
        storage.set(KEY, &dirty).unwrap();

        let store = CartStore::load(storage, KEY);
        assert_eq!(store.cart().unique_item_count(), 1);
        assert_eq!(store.item_count(), 2);
    }

    // === Mutation and Round-Trip Tests ===

    #[test]
    fn test_add_persists() {
        let storage = Store::open().unwrap();
        let mut store = CartStore::load(storage.clone(), KEY);
        store.add_product(book_a());

        let reloaded = CartStore::load(storage, KEY);
        assert_eq!(reloaded.cart(), store.cart());
        assert_eq!(reloaded.item_count(), 1);
    }

    #[test]
    fn test_save_load_round_trip_is_identity() {
        let storage = Store::open().unwrap();
        let mut store = CartStore::load(storage.clone(), KEY);
        store.add_product(book_a());
        store.add_product(book_a());
        store.add_product(ProductInput::new(
            "Book B",
            "",
            Money::new(500, Currency::USD),
        ));

        let reloaded = CartStore::load(storage, KEY);
        assert_eq!(reloaded.cart(), store.cart());
    }

    #[test]
    fn test_update_qty_zero_removes_and_persists() {
        let storage = Store::open().unwrap();
        let mut store = CartStore::load(storage.clone(), KEY);
        let id = store.add_product(book_a()).unwrap();

        assert!(store.update_qty(&id, 0));

        let reloaded = CartStore::load(storage, KEY);
        assert!(reloaded.cart().is_empty());
    }

    #[test]
    fn test_unknown_id_writes_nothing() {
        let storage = Store::open().unwrap();
        let mut store = CartStore::load(storage.clone(), KEY);

        assert!(!store.update_qty(&ItemId::new("missing"), 3));
        assert!(!store.remove(&ItemId::new("missing")));
        assert!(!storage.exists(KEY).unwrap());
    }

    #[test]
    fn test_subtotal() {
        let mut store = CartStore::load(Store::open().unwrap(), KEY);
        store.add_product(book_a());
        store.add_product(book_a());

        assert_eq!(store.subtotal().display(), "$25.00");
    }
}
