//! Card - state, attribute reader and renderer
//!
//! Everything here is pure: attributes in, markup out.

pub mod attributes;
pub mod render;
pub mod state;
pub mod style;

pub use attributes::{Attribute, AttributeSource};
pub use render::render;
pub use state::{ComponentState, Orientation, TitleTag};
