//! The narrow rendering interface between cart state and the page.

use nexus_commerce::{Cart, Money};

/// What the cart logic needs from a rendering surface.
///
/// The store and controller are written against this trait so they can be
/// exercised without a DOM; the browser implementation lives in
/// [`crate::dom`].
pub trait CartView {
    /// Full re-render of the item rows (or the empty state).
    fn render_items(&self, cart: &Cart);

    /// Update the subtotal readout.
    fn render_subtotal(&self, subtotal: Money);

    /// Update the item-count indicator.
    fn render_count(&self, count: i64);
}
