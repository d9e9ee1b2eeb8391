//! Attribute reader - the fixed set of `data-*` attributes a card understands
//!
//! Attributes are sparse overrides: a present, non-empty value replaces the
//! field, anything else keeps whatever the state already holds.

use std::collections::{BTreeMap, HashMap};

use super::state::{ComponentState, Orientation, TitleTag};

/// Every attribute the card reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Title,
    Content,
    Price,
    ImageUrl,
    ImageAlt,
    ImageSrcset,
    ImageSizes,
    TitleTag,
    ProductUrl,
    CtaVariantId,
    CtaVariantInStock,
    CtaText,
    CtaTextColor,
    CtaBgColor,
    BadgeText,
    BadgeTextColor,
    BadgeBgColor,
    Orientation,
    Bordered,
    ErrorMessage,
}

impl Attribute {
    pub const ALL: &[Self] = &[
        Self::Title,
        Self::Content,
        Self::Price,
        Self::ImageUrl,
        Self::ImageAlt,
        Self::ImageSrcset,
        Self::ImageSizes,
        Self::TitleTag,
        Self::ProductUrl,
        Self::CtaVariantId,
        Self::CtaVariantInStock,
        Self::CtaText,
        Self::CtaTextColor,
        Self::CtaBgColor,
        Self::BadgeText,
        Self::BadgeTextColor,
        Self::BadgeBgColor,
        Self::Orientation,
        Self::Bordered,
        Self::ErrorMessage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "data-product-title",
            Self::Content => "data-product-content",
            Self::Price => "data-product-price",
            Self::ImageUrl => "data-default-image-url",
            Self::ImageAlt => "data-default-image-alt",
            Self::ImageSrcset => "data-image-srcset",
            Self::ImageSizes => "data-image-sizes",
            Self::TitleTag => "data-title-tag",
            Self::ProductUrl => "data-product-url",
            Self::CtaVariantId => "data-cta-product-variant-id",
            Self::CtaVariantInStock => "data-cta-product-variant-in-stock",
            Self::CtaText => "data-cta-text",
            Self::CtaTextColor => "data-cta-text-color",
            Self::CtaBgColor => "data-cta-bg-color",
            Self::BadgeText => "data-badge-text",
            Self::BadgeTextColor => "data-badge-text-color",
            Self::BadgeBgColor => "data-badge-bg-color",
            Self::Orientation => "data-orientation",
            Self::Bordered => "data-bordered",
            Self::ErrorMessage => "data-error-message",
        }
    }

    /// Names for `observedAttributes`
    pub fn observed() -> Vec<&'static str> {
        Self::ALL.iter().map(Attribute::name).collect()
    }
}

/// Anything that can answer "what is the value of attribute `name`"
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<String>;
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl AttributeSource for [(&str, &str)] {
    fn attribute(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}

impl<const N: usize> AttributeSource for [(&str, &str); N] {
    fn attribute(&self, name: &str) -> Option<String> {
        self.as_slice().attribute(name)
    }
}

impl AttributeSource for web_sys::Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

/// Present and non-blank, otherwise `None`
fn read(source: &(impl AttributeSource + ?Sized), attr: Attribute) -> Option<String> {
    source
        .attribute(attr.name())
        .filter(|value| !value.trim().is_empty())
}

impl ComponentState {
    /// Fresh state from built-in defaults overlaid with `source`
    pub fn from_attributes(source: &(impl AttributeSource + ?Sized)) -> Self {
        let mut state = Self::default();
        state.refresh(source);
        state
    }

    /// Overlay every recognised attribute present in `source`.
    ///
    /// Transient flags are left alone, so a refresh mid-request keeps the
    /// busy indicator up.
    pub fn refresh(&mut self, source: &(impl AttributeSource + ?Sized)) {
        for attr in Attribute::ALL.iter().copied() {
            if let Some(value) = read(source, attr) {
                self.apply(attr, value);
            }
        }
    }

    fn apply(&mut self, attr: Attribute, value: String) {
        match attr {
            Attribute::Title => self.title = value,
            Attribute::Content => self.content = value,
            Attribute::Price => self.price = Some(value),
            Attribute::ImageUrl => self.image_url = value,
            Attribute::ImageAlt => self.image_alt = value,
            Attribute::ImageSrcset => self.image_srcset = Some(value),
            Attribute::ImageSizes => self.image_sizes = Some(value),
            Attribute::TitleTag => {
                if let Some(tag) = TitleTag::parse(&value) {
                    self.title_tag = tag;
                } else {
                    log::debug!("ignoring unsupported title tag {value:?}");
                }
            }
            Attribute::ProductUrl => self.product_url = Some(value),
            Attribute::CtaVariantId => self.cta_variant_id = value,
            Attribute::CtaVariantInStock => {
                self.cta_variant_in_stock = !value.trim().eq_ignore_ascii_case("false")
            }
            Attribute::CtaText => self.cta_text = value,
            Attribute::CtaTextColor => self.cta_text_color = value,
            Attribute::CtaBgColor => self.cta_bg_color = value,
            Attribute::BadgeText => self.badge_text = Some(value),
            Attribute::BadgeTextColor => self.badge_text_color = value,
            Attribute::BadgeBgColor => self.badge_bg_color = value,
            Attribute::Orientation => self.orientation = Orientation::parse(&value),
            Attribute::Bordered => self.bordered = value.trim().eq_ignore_ascii_case("true"),
            Attribute::ErrorMessage => self.error_message = value,
        }
    }
}
