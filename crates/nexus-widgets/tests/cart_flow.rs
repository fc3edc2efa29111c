//! End-to-end cart flow: store, persistence, controller, and renderer
//! working together against an in-memory store and a recording view.

use std::cell::RefCell;

use nexus_commerce::{Cart, Currency, ItemId, Money, ProductInput};
use nexus_storage::Store;
use nexus_widgets::controller::{CartAction, CartController};
use nexus_widgets::render::render_items_html;
use nexus_widgets::store::CartStore;
use nexus_widgets::view::CartView;
use nexus_widgets::WidgetConfig;

/// View double that keeps the last value of each render channel.
#[derive(Default)]
struct RecordingView {
    items: RefCell<Option<Cart>>,
    subtotal: RefCell<Option<String>>,
    count: RefCell<Option<i64>>,
}

impl RecordingView {
    fn subtotal(&self) -> String {
        self.subtotal.borrow().clone().unwrap_or_default()
    }

    fn count(&self) -> i64 {
        self.count.borrow().unwrap_or_default()
    }
}

impl CartView for RecordingView {
    fn render_items(&self, cart: &Cart) {
        *self.items.borrow_mut() = Some(cart.clone());
    }

    fn render_subtotal(&self, subtotal: Money) {
        *self.subtotal.borrow_mut() = Some(subtotal.display());
    }

    fn render_count(&self, count: i64) {
        *self.count.borrow_mut() = Some(count);
    }
}

fn book_a() -> ProductInput {
    ProductInput::new("Book A", "A. Author", Money::new(1250, Currency::USD))
}

#[test]
fn test_add_update_remove_flow() {
    let config = WidgetConfig::default();
    let storage = Store::open().unwrap();
    let store = CartStore::load(storage, config.storage_key.clone());
    let controller = CartController::new(store, RecordingView::default());

    controller.refresh();
    assert_eq!(controller.view().subtotal(), "$0.00");
    assert_eq!(controller.view().count(), 0);

    // Adding the same product twice yields one item with quantity 2.
    controller.add_product(book_a());
    controller.add_product(book_a());

    let items = controller.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, ItemId::new("book-a"));
    assert_eq!(items[0].qty, 2);
    assert_eq!(controller.view().count(), 2);

    controller.refresh();
    assert_eq!(controller.view().subtotal(), "$25.00");

    // Driving the quantity to zero removes the item.
    controller.apply(&CartAction::Decrement(ItemId::new("book-a")));
    controller.apply(&CartAction::Decrement(ItemId::new("book-a")));

    assert!(controller.items().is_empty());
    assert_eq!(controller.view().subtotal(), "$0.00");
    assert_eq!(controller.view().count(), 0);
}

#[test]
fn test_cart_survives_reload() {
    let config = WidgetConfig::default().with_storage_key("flow_cart");
    let storage = Store::open().unwrap();

    {
        let mut store = CartStore::load(storage.clone(), config.storage_key.clone());
        store.add_product(book_a());
        store.add_product(ProductInput::new(
            "Book B",
            "",
            Money::new(500, Currency::USD),
        ));
    }

    // A fresh load from the same storage reproduces the item list.
    let reloaded = CartStore::load(storage, config.storage_key.clone());
    assert_eq!(reloaded.cart().unique_item_count(), 2);
    assert_eq!(reloaded.subtotal().display(), "$17.50");

    let ids: Vec<&str> = reloaded
        .cart()
        .items()
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(ids, vec!["book-a", "book-b"]);
}

#[test]
fn test_rendered_rows_follow_store_state() {
    let storage = Store::open().unwrap();
    let mut store = CartStore::load(storage, "render_cart");
    store.add_product(book_a());

    let html = render_items_html(store.cart());
    assert!(html.contains(r#"data-id="book-a""#));
    assert!(html.contains("$12.50"));

    store.update_qty(&ItemId::new("book-a"), 0);
    assert_eq!(render_items_html(store.cart()), "");
}

#[test]
fn test_remove_nonexistent_id_is_identity() {
    let storage = Store::open().unwrap();
    let mut store = CartStore::load(storage, "noop_cart");
    store.add_product(book_a());
    let before = store.cart().clone();

    assert!(!store.remove(&ItemId::new("not-there")));
    assert_eq!(store.cart(), &before);
}
