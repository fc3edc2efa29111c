//! Key-value persistence layer for the Nexus storefront widgets.
//!
//! Provides a simple, ergonomic API for persisting data under string keys
//! with automatic JSON serialization. In the browser (`wasm32`) the store
//! is backed by `window.localStorage`; everywhere else it is an in-memory
//! map, so code built on it runs unchanged under `cargo test`.
//!
//! # Example
//!
//! ```
//! use nexus_storage::Store;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Settings {
//!     theme: String,
//! }
//!
//! let store = Store::open().unwrap();
//! let settings = Settings { theme: "dark".to_string() };
//!
//! store.set("settings", &settings).unwrap();
//! assert_eq!(store.get::<Settings>("settings").unwrap(), Some(settings));
//!
//! store.remove("settings").unwrap();
//! assert!(!store.exists("settings").unwrap());
//! ```

mod error;
mod kv;

pub use error::StorageError;
pub use kv::Store;
