//! Browser bindings for the widgets.
//!
//! Compiled only on `wasm32`. Every operation here degrades to a logged
//! no-op when an expected anchor is missing from the page; nothing throws
//! back to the caller.

mod binder;
mod flyout;
mod menu;
mod view;

pub use binder::wire_add_buttons;
pub use flyout::Flyout;
pub use menu::wire_menu;
pub use view::DomCartView;

use web_sys::{Document, Element};

/// The page document, if any.
fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Look up an element by id.
fn by_id(id: &str) -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(id))
}
