//! Product-card binder: turns add-button clicks into cart mutations.

use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::config::WidgetConfig;
use crate::controller::CartController;
use crate::logging::ConsoleLogger;
use nexus_commerce::{parse_price_text, Currency, Money, ProductInput};

use super::{document, DomCartView, Flyout};

/// Fallback title when a card has no heading.
const UNTITLED: &str = "Untitled";

/// Wire every add-to-cart button on the page: a click extracts the
/// product from the enclosing card, adds it to the cart, and opens the
/// flyout.
pub fn wire_add_buttons(
    config: &WidgetConfig,
    controller: &Rc<CartController<DomCartView>>,
    flyout: &Rc<Flyout>,
) {
    let logger = ConsoleLogger::new().with_widget("card-binder");
    let Some(doc) = document() else {
        return;
    };
    let Ok(buttons) = doc.query_selector_all(&config.add_button_selector) else {
        logger.debug(&format!(
            "bad add-button selector {}",
            config.add_button_selector
        ));
        return;
    };

    for index in 0..buttons.length() {
        let Some(node) = buttons.item(index) else {
            continue;
        };
        let Ok(button) = node.dyn_into::<Element>() else {
            continue;
        };

        let config = config.clone();
        let controller = Rc::clone(controller);
        let flyout = Rc::clone(flyout);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(input) = extract_product(&event, &config) else {
                return;
            };
            controller.add_product(input);
            flyout.open();
        }) as Box<dyn FnMut(Event)>);
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Read a product out of the card enclosing the clicked control.
fn extract_product(event: &Event, config: &WidgetConfig) -> Option<ProductInput> {
    let target = event.current_target()?.dyn_into::<Element>().ok()?;
    let card = target.closest(&config.card_selector).ok()??;

    let title = card
        .query_selector("h3")
        .ok()
        .flatten()
        .and_then(|h| h.text_content())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    // The first paragraph inside the card is the author line.
    let author = card
        .query_selector("p")
        .ok()
        .flatten()
        .and_then(|p| p.text_content())
        .map(|t| t.trim().to_string())
        .unwrap_or_default();

    let price = card
        .query_selector(&config.price_selector)
        .ok()
        .flatten()
        .and_then(|p| p.text_content())
        .map_or_else(
            || Money::zero(Currency::USD),
            |t| parse_price_text(&t, Currency::USD),
        );

    Some(ProductInput::new(title, author, price))
}
