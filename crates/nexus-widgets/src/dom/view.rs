//! DOM implementation of the cart view.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

use crate::config::WidgetConfig;
use crate::controller::CartAction;
use crate::logging::ConsoleLogger;
use crate::render;
use crate::view::CartView;
use nexus_commerce::{Cart, ItemId, Money};

use super::by_id;

/// Renders cart state into the fixed page anchors and wires the quantity
/// and remove controls after every item render pass.
pub struct DomCartView {
    config: WidgetConfig,
    logger: ConsoleLogger,
    /// Click closures for the current render pass. Replaced wholesale on
    /// the next pass, which drops the previous pass's handlers along with
    /// the rows they were attached to.
    handlers: RefCell<Vec<Closure<dyn FnMut(Event)>>>,
    on_action: RefCell<Option<Rc<dyn Fn(CartAction)>>>,
}

impl DomCartView {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            logger: ConsoleLogger::new().with_widget("cart-view"),
            handlers: RefCell::new(Vec::new()),
            on_action: RefCell::new(None),
        }
    }

    /// Set the callback invoked when a rendered control is clicked.
    pub fn set_on_action(&self, on_action: Rc<dyn Fn(CartAction)>) {
        *self.on_action.borrow_mut() = Some(on_action);
    }

    fn set_text(&self, id: &str, text: &str) {
        match by_id(id) {
            Some(el) => el.set_text_content(Some(text)),
            None => self.logger.debug(&format!("missing anchor #{id}")),
        }
    }

    fn set_empty_visible(&self, visible: bool) {
        let Some(el) = by_id(&self.config.empty_id) else {
            self.logger
                .debug(&format!("missing anchor #{}", self.config.empty_id));
            return;
        };
        if let Some(html_el) = el.dyn_ref::<HtmlElement>() {
            let display = if visible { "block" } else { "none" };
            let _ = html_el.style().set_property("display", display);
        }
    }

    /// Attach click handlers to every control rendered in this pass,
    /// reading the target item id from the control's `data-id`.
    fn wire_controls(&self, container: &Element) {
        let on_action = self.on_action.borrow().clone();
        let Some(on_action) = on_action else {
            return;
        };

        let mut handlers = self.handlers.borrow_mut();
        handlers.clear();

        let kinds: [(&str, fn(ItemId) -> CartAction); 3] = [
            (".qty-increase", CartAction::Increment),
            (".qty-decrease", CartAction::Decrement),
            (".remove-item", CartAction::Remove),
        ];

        for (selector, make_action) in kinds {
            let Ok(controls) = container.query_selector_all(selector) else {
                continue;
            };
            for index in 0..controls.length() {
                let Some(node) = controls.item(index) else {
                    continue;
                };
                let Ok(control) = node.dyn_into::<Element>() else {
                    continue;
                };

                let on_action = Rc::clone(&on_action);
                let closure = Closure::wrap(Box::new(move |event: Event| {
                    let Some(target) = event.current_target() else {
                        return;
                    };
                    let Ok(el) = target.dyn_into::<Element>() else {
                        return;
                    };
                    let Some(id) = el.get_attribute("data-id") else {
                        return;
                    };
                    on_action(make_action(ItemId::new(id)));
                }) as Box<dyn FnMut(Event)>);

                if control
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                    .is_ok()
                {
                    handlers.push(closure);
                }
            }
        }
    }
}

impl CartView for DomCartView {
    fn render_items(&self, cart: &Cart) {
        let Some(container) = by_id(&self.config.items_id) else {
            self.logger
                .debug(&format!("missing anchor #{}", self.config.items_id));
            return;
        };

        if cart.is_empty() {
            container.set_inner_html("");
            self.handlers.borrow_mut().clear();
            self.set_empty_visible(true);
            return;
        }

        self.set_empty_visible(false);
        container.set_inner_html(&render::render_items_html(cart));
        self.wire_controls(&container);
    }

    fn render_subtotal(&self, subtotal: Money) {
        self.set_text(&self.config.subtotal_id, &subtotal.display());
    }

    fn render_count(&self, count: i64) {
        self.set_text(&self.config.count_id, &count.to_string());
    }
}
