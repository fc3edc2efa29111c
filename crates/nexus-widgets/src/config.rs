//! Widget configuration.

/// Configuration for the storefront widgets.
///
/// Carries the storage key and every DOM anchor the widgets consume. The
/// defaults match the storefront page markup; tests override individual
/// fields.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Storage key the cart persists under.
    pub storage_key: String,
    /// Id of the item-count badge.
    pub count_id: String,
    /// Id of the flyout panel container.
    pub flyout_id: String,
    /// Id of the item list inside the flyout.
    pub items_id: String,
    /// Id of the subtotal readout.
    pub subtotal_id: String,
    /// Id of the empty-cart message.
    pub empty_id: String,
    /// Id of the cart toggle button.
    pub toggle_id: String,
    /// Selector for a product card.
    pub card_selector: String,
    /// Selector for add-to-cart buttons.
    pub add_button_selector: String,
    /// Selector for the price element inside a card.
    pub price_selector: String,
    /// Selector for the menu toggle button.
    pub menu_toggle_selector: String,
    /// Selector for the menu container.
    pub menu_selector: String,
    /// Selector for navigation links that collapse the menu.
    pub nav_link_selector: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: "nexus_cart_v1".to_string(),
            count_id: "cart-count".to_string(),
            flyout_id: "cart-flyout".to_string(),
            items_id: "cart-items".to_string(),
            subtotal_id: "cart-subtotal".to_string(),
            empty_id: "cart-empty".to_string(),
            toggle_id: "cart-toggle".to_string(),
            card_selector: ".card__info".to_string(),
            add_button_selector: ".info__container-button".to_string(),
            price_selector: ".info__container p".to_string(),
            menu_toggle_selector: ".menu-toggle".to_string(),
            menu_selector: ".menu".to_string(),
            nav_link_selector: ".menu-nav a".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Create a configuration with the default anchors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage key the cart persists under.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_anchors() {
        let config = WidgetConfig::default();

        assert_eq!(config.storage_key, "nexus_cart_v1");
        assert_eq!(config.flyout_id, "cart-flyout");
        assert_eq!(config.count_id, "cart-count");
        assert_eq!(config.card_selector, ".card__info");
        assert_eq!(config.nav_link_selector, ".menu-nav a");
    }

    #[test]
    fn test_with_storage_key() {
        let config = WidgetConfig::new().with_storage_key("test_cart");
        assert_eq!(config.storage_key, "test_cart");
    }
}
