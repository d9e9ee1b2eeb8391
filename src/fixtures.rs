//! Sample products for the showcase - one per interesting attribute combination

/// Attribute values for one `<product-card>`; `None` leaves the attribute off
#[derive(Debug, Clone, PartialEq)]
pub struct SampleProduct {
    pub title: String,
    pub content: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub image_srcset: Option<String>,
    pub image_sizes: Option<String>,
    /// Slotted into the card as `slot="hover-image"`
    pub hover_image_url: Option<String>,
    pub product_url: Option<String>,
    pub variant_id: String,
    pub cta_text: Option<String>,
    pub cta_bg_color: Option<String>,
    pub badge_text: Option<String>,
    pub badge_bg_color: Option<String>,
    pub orientation: &'static str,
    pub bordered: bool,
}

impl SampleProduct {
    pub fn new(title: impl Into<String>, variant_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
            price: None,
            image_url: None,
            image_alt: None,
            image_srcset: None,
            image_sizes: None,
            hover_image_url: None,
            product_url: None,
            variant_id: variant_id.into(),
            cta_text: None,
            cta_bg_color: None,
            badge_text: None,
            badge_bg_color: None,
            orientation: "image-left",
            bordered: false,
        }
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self.image_alt = Some(alt.into());
        self
    }

    /// Square placeholder at 400/800/1200 widths
    pub fn with_responsive_image(mut self, label: &str) -> Self {
        let url = |w: u32| format!("https://placehold.co/{w}x{w}?text={label}");
        self.image_url = Some(url(800));
        self.image_srcset = Some(
            [400, 800, 1200]
                .iter()
                .map(|w| format!("{} {w}w", url(*w)))
                .collect::<Vec<_>>()
                .join(", "),
        );
        self.image_sizes = Some("(min-width: 750px) 55vw, 100vw".to_string());
        self
    }

    pub fn with_hover_image(mut self, label: &str) -> Self {
        self.hover_image_url = Some(format!("https://placehold.co/800x800/e5e7eb/111827?text={label}"));
        self
    }

    pub fn linked_to(mut self, url: impl Into<String>) -> Self {
        self.product_url = Some(url.into());
        self
    }

    pub fn with_badge(mut self, text: impl Into<String>, bg: Option<&str>) -> Self {
        self.badge_text = Some(text.into());
        self.badge_bg_color = bg.map(str::to_string);
        self
    }

    pub fn with_cta(mut self, text: impl Into<String>, bg: impl Into<String>) -> Self {
        self.cta_text = Some(text.into());
        self.cta_bg_color = Some(bg.into());
        self
    }

    pub fn image_right(mut self) -> Self {
        self.orientation = "image-right";
        self
    }

    pub fn bordered(mut self) -> Self {
        self.bordered = true;
        self
    }

    pub fn bordered_attr(&self) -> &'static str {
        if self.bordered { "true" } else { "false" }
    }
}

pub fn sample_products() -> Vec<SampleProduct> {
    vec![
        SampleProduct::new("Mug", "999").with_price("$12"),
        SampleProduct::new("Stoneware Teapot", "41001")
            .with_price("$48.00")
            .with_content("Hand-thrown, holds four cups.")
            .with_responsive_image("Teapot")
            .with_hover_image("Teapot+lid")
            .linked_to("/products/stoneware-teapot")
            .with_badge("New", None),
        SampleProduct::new("Linen Apron", "41002")
            .with_price("$36.00")
            .with_content("Washed linen with a cross-back strap.")
            .with_image("https://placehold.co/600x600?text=Apron", "Linen apron, natural")
            .with_badge("Sale", Some("#0b7a3b"))
            .image_right(),
        SampleProduct::new("Gift Card", "41003")
            .with_content("Delivered by email.")
            .with_cta("Buy a gift card", "#4f46e5")
            .bordered(),
        SampleProduct::new("Missing Variant", "")
            .with_price("$0.00")
            .with_content("No variant id: adding to cart fails and shows the error panel.")
            .bordered()
            .image_right(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responsive_image_lists_three_widths() {
        let product = SampleProduct::new("Mug", "1").with_responsive_image("Mug");
        let srcset = product.image_srcset.unwrap_or_default();
        assert_eq!(srcset.matches("w,").count(), 2);
        assert!(srcset.ends_with("1200w"));
    }

    #[test]
    fn samples_cover_both_orientations() {
        let samples = sample_products();
        assert!(samples.iter().any(|p| p.orientation == "image-left"));
        assert!(samples.iter().any(|p| p.orientation == "image-right"));
        assert!(samples.iter().any(|p| p.badge_text.is_none()));
        assert!(samples.iter().any(|p| p.price.is_none()));
    }

    #[test]
    fn samples_cover_linked_and_unlinked_cards() {
        let samples = sample_products();
        assert!(samples.iter().any(|p| p.product_url.is_some() && p.hover_image_url.is_some()));
        assert!(samples.iter().any(|p| p.product_url.is_none()));
    }
}
