//! CartSettings - where the component talks to and where it sends the shopper

/// Endpoints shared by every card on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSettings {
    /// Path of the cart-add endpoint, relative to the page origin
    pub add_path: String,
    /// Cart page the shopper is sent to after a successful add
    pub cart_path: String,
    /// Quantity sent with every add
    pub quantity: u32,
}

impl CartSettings {
    pub const DEFAULT_ADD_PATH: &'static str = "/cart/add.js";
    pub const DEFAULT_CART_PATH: &'static str = "/cart";

    pub fn with_add_path(mut self, path: impl Into<String>) -> Self {
        self.add_path = path.into();
        self
    }

    pub fn with_cart_path(mut self, path: impl Into<String>) -> Self {
        self.cart_path = path.into();
        self
    }

    /// Absolute add endpoint for a page origin like `https://shop.example`
    pub fn add_url(&self, origin: &str) -> String {
        join(origin, &self.add_path)
    }
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            add_path: Self::DEFAULT_ADD_PATH.to_string(),
            cart_path: Self::DEFAULT_CART_PATH.to_string(),
            quantity: 1,
        }
    }
}

fn join(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
