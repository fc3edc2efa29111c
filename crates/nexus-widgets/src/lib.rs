//! Cart flyout and menu toggle widgets for the Nexus storefront.
//!
//! The widget layer splits the page behavior into testable pieces:
//!
//! - [`store::CartStore`]: single source of truth for the item list,
//!   persisting every mutation under a fixed storage key
//! - [`view::CartView`]: the narrow rendering interface the store logic
//!   is written against
//! - [`render`]: pure HTML fragment builders shared by the DOM view and
//!   the tests
//! - [`controller::CartController`]: routes control actions through the
//!   store and back out to the view
//! - [`dom`] (`wasm32` only): the browser bindings for the flyout panel,
//!   product-card binder, and menu toggle
//!
//! Everything outside [`dom`] compiles and tests natively.

pub mod config;
pub mod controller;
pub mod logging;
pub mod render;
pub mod store;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::WidgetConfig;
pub use controller::{CartAction, CartController};
pub use logging::{ConsoleLogger, LogLevel};
pub use store::CartStore;
pub use view::CartView;
