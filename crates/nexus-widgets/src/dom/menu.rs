//! Navigation menu toggle.
//!
//! Independent of the cart: one boolean of state, reflected into the
//! `active` class on the toggle and the menu, and into `aria-expanded` /
//! `aria-label` on the toggle.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::config::WidgetConfig;
use crate::logging::ConsoleLogger;

use super::document;

/// Wire the menu toggle button and the collapse-on-navigate links.
/// Initial state is collapsed.
pub fn wire_menu(config: &WidgetConfig) {
    let logger = ConsoleLogger::new().with_widget("menu-toggle");
    let Some(doc) = document() else {
        return;
    };
    let Some(toggle) = doc.query_selector(&config.menu_toggle_selector).ok().flatten() else {
        logger.debug(&format!("missing {}", config.menu_toggle_selector));
        return;
    };
    let Some(menu) = doc.query_selector(&config.menu_selector).ok().flatten() else {
        logger.debug(&format!("missing {}", config.menu_selector));
        return;
    };

    set_expanded(&toggle, &menu, false);

    let handler_toggle = toggle.clone();
    let handler_menu = menu.clone();
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        let expanded = !handler_toggle.class_list().contains("active");
        set_expanded(&handler_toggle, &handler_menu, expanded);
    }) as Box<dyn FnMut(Event)>);
    let _ = toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();

    // Navigating from any menu link collapses the menu again.
    let Ok(links) = doc.query_selector_all(&config.nav_link_selector) else {
        return;
    };
    for index in 0..links.length() {
        let Some(node) = links.item(index) else {
            continue;
        };
        let Ok(link) = node.dyn_into::<Element>() else {
            continue;
        };
        let handler_toggle = toggle.clone();
        let handler_menu = menu.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            set_expanded(&handler_toggle, &handler_menu, false);
        }) as Box<dyn FnMut(Event)>);
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn set_expanded(toggle: &Element, menu: &Element, expanded: bool) {
    if expanded {
        let _ = toggle.class_list().add_1("active");
        let _ = menu.class_list().add_1("active");
    } else {
        let _ = toggle.class_list().remove_1("active");
        let _ = menu.class_list().remove_1("active");
    }
    let _ = toggle.set_attribute("aria-expanded", if expanded { "true" } else { "false" });
    let _ = toggle.set_attribute(
        "aria-label",
        if expanded { "Close menu" } else { "Open menu" },
    );
}
