//! HTML fragments for the cart flyout.
//!
//! Pure string builders: the DOM view injects these, and the tests assert
//! on them directly. All user-supplied text is escaped here, at the point
//! where it enters markup.

use crate::config::WidgetConfig;
use nexus_commerce::{Cart, CartItem};

/// Render one cart row.
///
/// The quantity and remove controls carry the item id in a `data-id`
/// attribute; the DOM view reads it back when wiring click handlers.
pub fn render_item_row(item: &CartItem) -> String {
    let id = escape_html(item.id.as_str());
    format!(
        r#"<div class="cart-item">
    <div class="cart-item__meta">
        <div class="cart-item__title">{title}</div>
        <div class="cart-item__author">{author}</div>
    </div>
    <div class="cart-item__controls">
        <div class="cart-item__price">{price}</div>
        <div class="qty-controls">
            <button class="qty-decrease" data-id="{id}" aria-label="Decrease quantity">-</button>
            <span class="qty-number">{qty}</span>
            <button class="qty-increase" data-id="{id}" aria-label="Increase quantity">+</button>
        </div>
        <button class="remove-item" data-id="{id}" aria-label="Remove item">Remove</button>
    </div>
</div>"#,
        title = escape_html(&item.title),
        author = escape_html(&item.author),
        price = item.price.display(),
        qty = item.qty,
        id = id,
    )
}

/// Render every row of the cart, in storage order.
pub fn render_items_html(cart: &Cart) -> String {
    cart.items().iter().map(render_item_row).collect()
}

/// Render the inner markup of the flyout container: header with close
/// button, item list region, empty-state message, subtotal readout, and
/// the checkout placeholder.
pub fn render_flyout_inner(config: &WidgetConfig) -> String {
    format!(
        r#"<div class="cart-flyout__inner">
    <header class="cart-flyout__header">
        <h3>Your cart</h3>
        <button class="cart-flyout__close" aria-label="Close">&times;</button>
    </header>
    <div id="{items}" class="cart-flyout__items"></div>
    <div id="{empty}" class="cart-empty">Your cart is empty</div>
    <div class="cart-flyout__footer">
        <div class="cart-flyout__subtotal">Subtotal: <strong id="{subtotal}">$0.00</strong></div>
        <div class="cart-flyout__actions">
            <button class="btn-checkout">Checkout</button>
        </div>
    </div>
</div>"#,
        items = config.items_id,
        empty = config.empty_id,
        subtotal = config.subtotal_id,
    )
}

/// Escape text for safe insertion into markup.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
