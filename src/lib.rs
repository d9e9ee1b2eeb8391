//! `<product-card>` - an attribute-driven product card custom element
//!
//! Layers:
//! - `card`: attributes → `ComponentState` → shadow-root markup (pure)
//! - `cart`: add-to-cart request, HTTP transport and state machine
//! - `component`: one live card wiring the two together behind `CardHost`
//! - `web`: the browser side (custom element class, shadow root, Fetch)
//!
//! Host pages call `defineProductCard()` once, then use the tag:
//!
//! ```html
//! <product-card
//!     data-product-title="Mug"
//!     data-product-price="$12"
//!     data-cta-product-variant-id="999"></product-card>
//! ```

pub mod card;
pub mod cart;
pub mod component;
pub mod error;
pub mod registry;
pub mod settings;
pub mod web;

pub use card::{Attribute, AttributeSource, ComponentState, Orientation, TitleTag};
pub use cart::{CartAddRequest, CartController, CartOutcome, CartPhase, CartService, HttpCartService};
pub use component::{CardHost, ProductCard};
pub use error::{CartError, ElementError, RegistryError};
pub use settings::CartSettings;
pub use web::{define, init_logging};

/// Tag name the element is registered under
pub const TAG_NAME: &str = "product-card";
