//! Cart domain types and logic for the Nexus storefront.
//!
//! This crate is the pure core of the cart widget:
//!
//! - **Money**: cents-based monetary values with checked arithmetic
//! - **Ids**: slug-derived item identifiers
//! - **Cart**: line items with add/update/remove and subtotal calculation
//! - **Product**: product data as extracted from a storefront page
//!
//! Nothing here touches the DOM or persistent storage, so the whole crate
//! runs under plain `cargo test` on any target.
//!
//! # Example
//!
//! ```
//! use nexus_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! let book = ProductInput::new("Book A", "A. Author", Money::new(1250, Currency::USD));
//! let id = cart.add_item(book.clone()).unwrap();
//! assert_eq!(id.as_str(), "book-a");
//!
//! cart.add_item(book).unwrap();
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.subtotal().unwrap().display(), "$25.00");
//! ```

pub mod cart;
pub mod error;
pub mod ids;
pub mod money;
pub mod product;

pub use cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};
pub use error::CommerceError;
pub use ids::{slugify, ItemId};
pub use money::{Currency, Money};
pub use product::{parse_price_text, ProductInput};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};
    pub use crate::error::CommerceError;
    pub use crate::ids::{slugify, ItemId};
    pub use crate::money::{Currency, Money};
    pub use crate::product::{parse_price_text, ProductInput};
}
