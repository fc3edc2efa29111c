//! Flyout panel visibility and bootstrap.

use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::config::WidgetConfig;
use crate::controller::CartController;
use crate::logging::ConsoleLogger;
use crate::render;

use super::{by_id, document, DomCartView};

/// The slide-in cart panel: open/close state reflected into the `open`
/// class and `aria-hidden`.
pub struct Flyout {
    config: WidgetConfig,
    controller: Rc<CartController<DomCartView>>,
    logger: ConsoleLogger,
}

impl Flyout {
    /// Insert the flyout container into the document if it is absent.
    ///
    /// Idempotent: a page that ships its own flyout markup keeps it.
    pub fn ensure_markup(config: &WidgetConfig) {
        let Some(doc) = document() else {
            return;
        };
        if doc.get_element_by_id(&config.flyout_id).is_some() {
            return;
        }
        let Ok(aside) = doc.create_element("aside") else {
            return;
        };
        aside.set_id(&config.flyout_id);
        aside.set_class_name("cart-flyout");
        let _ = aside.set_attribute("aria-hidden", "true");
        aside.set_inner_html(&render::render_flyout_inner(config));
        if let Some(body) = doc.body() {
            let _ = body.append_child(&aside);
        }
    }

    pub fn new(config: WidgetConfig, controller: Rc<CartController<DomCartView>>) -> Self {
        Self {
            config,
            controller,
            logger: ConsoleLogger::new().with_widget("cart-flyout"),
        }
    }

    fn element(&self) -> Option<Element> {
        let el = by_id(&self.config.flyout_id);
        if el.is_none() {
            self.logger
                .debug(&format!("missing anchor #{}", self.config.flyout_id));
        }
        el
    }

    /// Open the panel and re-render its contents.
    pub fn open(&self) {
        let Some(el) = self.element() else {
            return;
        };
        let _ = el.class_list().add_1("open");
        let _ = el.set_attribute("aria-hidden", "false");
        self.controller.refresh();
    }

    /// Close the panel.
    pub fn close(&self) {
        let Some(el) = self.element() else {
            return;
        };
        let _ = el.class_list().remove_1("open");
        let _ = el.set_attribute("aria-hidden", "true");
    }

    /// Open or close based on the current class state.
    pub fn toggle(&self) {
        let Some(el) = self.element() else {
            return;
        };
        if el.class_list().contains("open") {
            self.close();
        } else {
            self.open();
        }
    }

    /// Wire the toggle button, the close button, and the backdrop.
    pub fn wire(self: &Rc<Self>) {
        let Some(el) = self.element() else {
            return;
        };

        if let Some(toggle) = by_id(&self.config.toggle_id) {
            let flyout = Rc::clone(self);
            let closure = Closure::wrap(Box::new(move |event: Event| {
                event.prevent_default();
                flyout.toggle();
            }) as Box<dyn FnMut(Event)>);
            let _ =
                toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            self.logger
                .debug(&format!("missing anchor #{}", self.config.toggle_id));
        }

        if let Ok(Some(close_btn)) = el.query_selector(".cart-flyout__close") {
            let flyout = Rc::clone(self);
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                flyout.close();
            }) as Box<dyn FnMut(Event)>);
            let _ = close_btn
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Clicks on the backdrop (the container itself, not its inner
        // content) also close the panel.
        let flyout = Rc::clone(self);
        let flyout_id = self.config.flyout_id.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(target) = event.target() else {
                return;
            };
            let Ok(target) = target.dyn_into::<Element>() else {
                return;
            };
            if target.id() == flyout_id {
                flyout.close();
            }
        }) as Box<dyn FnMut(Event)>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
