//! Cart controller: routes user intents through the store and view.

use std::cell::RefCell;

use crate::store::CartStore;
use crate::view::CartView;
use nexus_commerce::{CartItem, ItemId, ProductInput};

/// A user intent raised by a rendered cart control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Increase the item's quantity by one.
    Increment(ItemId),
    /// Decrease the item's quantity by one (removing at zero).
    Decrement(ItemId),
    /// Remove the item entirely.
    Remove(ItemId),
}

/// Owns the store and the view; every applied action mutates, persists,
/// and triggers a full re-render.
pub struct CartController<V: CartView> {
    store: RefCell<CartStore>,
    view: V,
}

impl<V: CartView> CartController<V> {
    pub fn new(store: CartStore, view: V) -> Self {
        Self {
            store: RefCell::new(store),
            view,
        }
    }

    /// The rendering surface.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// A snapshot of the current item list (render order).
    pub fn items(&self) -> Vec<CartItem> {
        self.store.borrow().cart().items().to_vec()
    }

    /// Re-render items, subtotal, and count from current state.
    pub fn refresh(&self) {
        let store = self.store.borrow();
        self.view.render_items(store.cart());
        self.view.render_subtotal(store.subtotal());
        self.view.render_count(store.item_count());
    }

    /// Apply a control action. Unknown ids mutate nothing; the re-render
    /// still runs and is a visual no-op.
    pub fn apply(&self, action: &CartAction) {
        {
            let mut store = self.store.borrow_mut();
            match action {
                CartAction::Increment(id) => {
                    if let Some(qty) = store.cart().get_item(id).map(|i| i.qty) {
                        store.update_qty(id, qty + 1);
                    }
                }
                CartAction::Decrement(id) => {
                    if let Some(qty) = store.cart().get_item(id).map(|i| i.qty) {
                        store.update_qty(id, qty - 1);
                    }
                }
                CartAction::Remove(id) => {
                    store.remove(id);
                }
            }
        }
        self.refresh();
    }

    /// Add a product from the page and update the count badge. The item
    /// list itself re-renders when the flyout opens.
    pub fn add_product(&self, input: ProductInput) {
        let count = {
            let mut store = self.store.borrow_mut();
            store.add_product(input);
            store.item_count()
        };
        self.view.render_count(count);
    }
}
