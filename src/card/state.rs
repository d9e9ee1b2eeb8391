//! ComponentState - everything the renderer needs, owned by one card

use std::fmt;

/// Built-in values used until an attribute says otherwise
pub mod defaults {
    pub const TITLE: &str = "Product title";
    pub const IMAGE_URL: &str = "https://placehold.co/600x600?text=Product";
    pub const IMAGE_ALT: &str = "Product image";
    pub const BADGE_TEXT_COLOR: &str = "#ffffff";
    pub const BADGE_BG_COLOR: &str = "#d72c0d";
    pub const CTA_TEXT: &str = "Order Now";
    pub const CTA_TEXT_COLOR: &str = "#ffffff";
    pub const CTA_BG_COLOR: &str = "#121212";
    pub const ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
}

/// Which side the image block sits on once the card is wide enough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    ImageLeft,
    ImageRight,
}

impl Orientation {
    /// `"image-right"` selects the right side, any other value the left
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("image-right") {
            Self::ImageRight
        } else {
            Self::ImageLeft
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImageLeft => "image-left",
            Self::ImageRight => "image-right",
        }
    }

    /// Flex direction for the wide layout; markup is always content then image
    pub fn flex_direction(&self) -> &'static str {
        match self {
            Self::ImageLeft => "row-reverse",
            Self::ImageRight => "row",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element used for the product title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleTag {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Div,
    Span,
}

impl TitleTag {
    pub fn parse(value: &str) -> Option<Self> {
        let tag = match value.trim().to_ascii_lowercase().as_str() {
            "h1" => Self::H1,
            "h2" => Self::H2,
            "h3" => Self::H3,
            "h4" => Self::H4,
            "h5" => Self::H5,
            "h6" => Self::H6,
            "p" => Self::P,
            "div" => Self::Div,
            "span" => Self::Span,
            _ => return None,
        };
        Some(tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::P => "p",
            Self::Div => "div",
            Self::Span => "span",
        }
    }
}

/// Attribute-derived configuration plus the transient add-to-cart flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentState {
    pub title: String,
    pub content: String,
    pub price: Option<String>,
    pub image_url: String,
    pub image_alt: String,
    pub image_srcset: Option<String>,
    pub image_sizes: Option<String>,
    pub title_tag: TitleTag,
    /// Product page the title and image link to; no links when unset
    pub product_url: Option<String>,

    pub badge_text: Option<String>,
    pub badge_text_color: String,
    pub badge_bg_color: String,

    pub cta_variant_id: String,
    /// Read but not used to gate the CTA
    pub cta_variant_in_stock: bool,
    pub cta_text: String,
    pub cta_text_color: String,
    pub cta_bg_color: String,

    pub orientation: Orientation,
    pub bordered: bool,

    pub is_adding_to_cart: bool,
    pub show_error: bool,
    pub error_message: String,
}

impl ComponentState {
    pub fn has_badge(&self) -> bool {
        self.badge_text.is_some()
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

impl Default for ComponentState {
    fn default() -> Self {
        Self {
            title: defaults::TITLE.to_string(),
            content: String::new(),
            price: None,
            image_url: defaults::IMAGE_URL.to_string(),
            image_alt: defaults::IMAGE_ALT.to_string(),
            image_srcset: None,
            image_sizes: None,
            title_tag: TitleTag::default(),
            product_url: None,
            badge_text: None,
            badge_text_color: defaults::BADGE_TEXT_COLOR.to_string(),
            badge_bg_color: defaults::BADGE_BG_COLOR.to_string(),
            cta_variant_id: String::new(),
            cta_variant_in_stock: true,
            cta_text: defaults::CTA_TEXT.to_string(),
            cta_text_color: defaults::CTA_TEXT_COLOR.to_string(),
            cta_bg_color: defaults::CTA_BG_COLOR.to_string(),
            orientation: Orientation::default(),
            bordered: false,
            is_adding_to_cart: false,
            show_error: false,
            error_message: defaults::ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_parse() {
        assert_eq!(Orientation::parse("image-right"), Orientation::ImageRight);
        assert_eq!(Orientation::parse(" Image-Right "), Orientation::ImageRight);
        assert_eq!(Orientation::parse("image-left"), Orientation::ImageLeft);
        assert_eq!(Orientation::parse("sideways"), Orientation::ImageLeft);
    }

    #[test]
    fn title_tag_parse() {
        assert_eq!(TitleTag::parse("H3"), Some(TitleTag::H3));
        assert_eq!(TitleTag::parse("span"), Some(TitleTag::Span));
        assert_eq!(TitleTag::parse("script"), None);
    }

    #[test]
    fn defaults_leave_only_optional_fields_empty() {
        let state = ComponentState::default();
        assert!(state.price.is_none());
        assert!(state.badge_text.is_none());
        assert!(state.image_srcset.is_none());
        assert!(state.image_sizes.is_none());
        assert!(state.product_url.is_none());
        assert_eq!(state.cta_text, "Order Now");
        assert!(!state.cta_text_color.is_empty());
        assert!(!state.badge_bg_color.is_empty());
        assert!(!state.is_adding_to_cart);
        assert!(!state.show_error);
    }
}
