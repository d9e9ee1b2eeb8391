//! Cart - add-to-cart request, transport and state machine

pub mod controller;
pub mod request;
pub mod service;

pub use controller::{CartController, CartOutcome, CartPhase};
pub use request::CartAddRequest;
pub use service::{CartService, HttpCartService};
