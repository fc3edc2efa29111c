//! Storefront page bundle.
//!
//! Wires the cart flyout and menu toggle widgets into the page at module
//! load time. The page only ships product cards, the cart toggle badge,
//! and the menu markup; the flyout panel is inserted here if absent.

#[cfg(target_arch = "wasm32")]
mod page {
    use std::rc::Rc;

    use nexus_storage::Store;
    use nexus_widgets::dom::{wire_add_buttons, wire_menu, DomCartView, Flyout};
    use nexus_widgets::{CartAction, CartController, CartStore, ConsoleLogger, WidgetConfig};

    /// Bootstrap every widget on the page.
    pub(crate) fn init() {
        let logger = ConsoleLogger::new().with_widget("storefront");
        let config = WidgetConfig::default();

        Flyout::ensure_markup(&config);

        match Store::open() {
            Ok(storage) => {
                let store = CartStore::load(storage, config.storage_key.clone());
                let view = DomCartView::new(config.clone());
                let controller = Rc::new(CartController::new(store, view));

                // Rendered cart controls dispatch back into the controller.
                let weak = Rc::downgrade(&controller);
                controller
                    .view()
                    .set_on_action(Rc::new(move |action: CartAction| {
                        if let Some(controller) = weak.upgrade() {
                            controller.apply(&action);
                        }
                    }));

                let flyout = Rc::new(Flyout::new(config.clone(), Rc::clone(&controller)));
                flyout.wire();
                wire_add_buttons(&config, &controller, &flyout);

                // Initial render: count badge plus flyout contents.
                controller.refresh();
            }
            Err(err) => {
                logger.warn(&format!("cart disabled, storage unavailable: {err}"));
            }
        }

        wire_menu(&config);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    page::init();
}
