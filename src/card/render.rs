//! Renderer - ComponentState → shadow-root markup
//!
//! Structure:
//!   <style> (see `style.rs`)
//!   div.product-card (+ orientation / bordered modifiers)
//!     div.product-card__content
//!       badge?  title  price?  description?  CTA | busy indicator  error?
//!     div.product-card__media
//!       (a.product-card__media-link)?
//!         slot[name=image] (fallback: img, lazy)  slot[name=hover-image]
//!
//! With a product URL the title text and the image area link to it.
//! The whole tree is regenerated on every state change.

use super::state::ComponentState;
use super::style::stylesheet;
use crate::settings::CartSettings;

/// Marks the element the click listener reacts to
pub const CTA_ACTION_SELECTOR: &str = r#"[data-action="add-to-cart"]"#;

/// Screen-reader text for the busy indicator
pub const BUSY_LABEL: &str = "Adding to cart";

/// Escape a value for use inside a double-quoted attribute
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render(state: &ComponentState, settings: &CartSettings) -> String {
    let mut classes = vec![
        "product-card".to_string(),
        format!("product-card--{}", state.orientation),
    ];
    if state.bordered {
        classes.push("product-card--bordered".to_string());
    }

    format!(
        r#"<style>{css}</style><div class="{classes}" part="card">{content}{media}</div>"#,
        css = stylesheet(state),
        classes = classes.join(" "),
        content = content_block(state, settings),
        media = media_block(state),
    )
}

fn content_block(state: &ComponentState, settings: &CartSettings) -> String {
    let mut parts = Vec::new();

    if let Some(badge) = &state.badge_text {
        parts.push(format!(r#"<span class="product-card__badge">{badge}</span>"#));
    }

    let tag = state.title_tag.as_str();
    let title = match &state.product_url {
        Some(url) => format!(
            r#"<a class="product-card__link" href="{href}">{title}</a>"#,
            href = escape_attr(url),
            title = state.title,
        ),
        None => state.title.clone(),
    };
    parts.push(format!(
        r#"<{tag} class="product-card__title" aria-label="Product title: {label}">{title}</{tag}>"#,
        label = escape_attr(&state.title),
    ));

    if let Some(price) = &state.price {
        parts.push(format!(r#"<p class="product-card__price">{price}</p>"#));
    }

    if state.has_content() {
        parts.push(format!(
            r#"<div class="product-card__description">{}</div>"#,
            state.content
        ));
    }

    parts.push(cta_slot(state, settings));

    if state.show_error {
        parts.push(format!(
            r#"<p class="product-card__error" role="alert">{}</p>"#,
            state.error_message
        ));
    }

    format!(
        r#"<div class="product-card__content">{}</div>"#,
        parts.concat()
    )
}

fn cta_slot(state: &ComponentState, settings: &CartSettings) -> String {
    if state.is_adding_to_cart {
        return format!(
            r#"<div class="product-card__cta product-card__cta--busy" role="status" aria-live="polite" aria-busy="true"><span class="product-card__spinner" aria-hidden="true"></span><span class="visually-hidden">{BUSY_LABEL}</span></div>"#
        );
    }

    format!(
        r#"<a class="product-card__cta" href="{href}" data-action="add-to-cart" data-variant-id="{variant}">{label}</a>"#,
        href = escape_attr(&settings.cart_path),
        variant = escape_attr(&state.cta_variant_id),
        label = state.cta_text,
    )
}

fn media_block(state: &ComponentState) -> String {
    let mut img = format!(
        r#"<img class="product-card__image" src="{src}" alt="{alt}""#,
        src = escape_attr(&state.image_url),
        alt = escape_attr(&state.image_alt),
    );
    if let Some(srcset) = &state.image_srcset {
        img.push_str(&format!(r#" srcset="{}""#, escape_attr(srcset)));
    }
    if let Some(sizes) = &state.image_sizes {
        img.push_str(&format!(r#" sizes="{}""#, escape_attr(sizes)));
    }
    img.push_str(r#" loading="lazy" decoding="async">"#);

    // Light-DOM children with slot="image" / "hover-image" replace the fallback
    let slots = format!(r#"<slot name="image">{img}</slot><slot name="hover-image"></slot>"#);
    let inner = match &state.product_url {
        // The title link is the accessible one; this only widens the click target
        Some(url) => format!(
            r#"<a class="product-card__media-link" href="{href}" tabindex="-1" aria-hidden="true">{slots}</a>"#,
            href = escape_attr(url),
        ),
        None => slots,
    };
    format!(r#"<div class="product-card__media">{inner}</div>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::state::{Orientation, TitleTag, defaults};
    use pretty_assertions::assert_eq;

    fn render_default(state: &ComponentState) -> String {
        render(state, &CartSettings::default())
    }

    #[test]
    fn mug_example() {
        let state = ComponentState::from_attributes(&[
            ("data-product-title", "Mug"),
            ("data-product-price", "$12"),
            ("data-cta-product-variant-id", "999"),
        ]);
        let html = render_default(&state);

        assert!(html.contains(
            r#"<h2 class="product-card__title" aria-label="Product title: Mug">Mug</h2>"#
        ));
        assert!(html.contains(r#"<p class="product-card__price">$12</p>"#));
        assert!(html.contains(r#"data-variant-id="999">Order Now</a>"#));
        assert!(!html.contains("product-card__badge\""));
        assert!(html.contains(&format!(r#"src="{}""#, escape_attr(defaults::IMAGE_URL))));
        assert!(html.contains(r#"alt="Product image""#));
    }

    #[test]
    fn optional_fragments_are_omitted() {
        let html = render_default(&ComponentState::default());
        assert!(!html.contains(r#"<span class="product-card__badge">"#));
        assert!(!html.contains(r#"<p class="product-card__price">"#));
        assert!(!html.contains("product-card__description\">"));
        assert!(!html.contains("srcset="));
        assert!(!html.contains("sizes="));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn badge_rendered_with_text() {
        let state = ComponentState::from_attributes(&[
            ("data-badge-text", "Sale"),
            ("data-badge-bg-color", "#00aa00"),
        ]);
        let html = render_default(&state);
        assert!(html.contains(r#"<span class="product-card__badge">Sale</span>"#));
        assert!(html.contains("background: #00aa00;"));
    }

    #[test]
    fn responsive_image_attributes() {
        let state = ComponentState::from_attributes(&[
            ("data-default-image-url", "/mug.jpg"),
            ("data-image-srcset", "/mug-400.jpg 400w, /mug-800.jpg 800w"),
            ("data-image-sizes", "(min-width: 750px) 55vw, 100vw"),
        ]);
        let html = render_default(&state);
        assert!(html.contains(
            r#"<slot name="image"><img class="product-card__image" src="/mug.jpg" alt="Product image" srcset="/mug-400.jpg 400w, /mug-800.jpg 800w" sizes="(min-width: 750px) 55vw, 100vw" loading="lazy" decoding="async"></slot>"#
        ));
    }

    #[test]
    fn busy_indicator_replaces_button() {
        let mut state = ComponentState::default();
        state.is_adding_to_cart = true;
        let html = render_default(&state);
        assert!(html.contains(r#"role="status""#));
        assert!(html.contains(BUSY_LABEL));
        assert!(!html.contains(r#"data-action="add-to-cart""#));
        assert!(!html.contains("Order Now"));
    }

    #[test]
    fn error_panel_below_cta() {
        let mut state = ComponentState::from_attributes(&[(
            "data-error-message",
            "Could not add to cart",
        )]);
        state.show_error = true;
        let html = render_default(&state);
        let cta = html.find(r#"data-action="add-to-cart""#).unwrap();
        let error = html
            .find(r#"<p class="product-card__error" role="alert">Could not add to cart</p>"#)
            .unwrap();
        assert!(cta < error);
        assert!(html.contains(".product-card__error {"));
    }

    #[test]
    fn orientation_only_moves_blocks() {
        let left = ComponentState::from_attributes(&[
            ("data-product-title", "Mug"),
            ("data-orientation", "image-left"),
        ]);
        let mut right = left.clone();
        right.refresh(&[("data-orientation", "image-right")]);

        let left_html = render_default(&left);
        let right_html = render_default(&right);
        assert_ne!(left_html, right_html);
        assert!(left_html.contains("product-card--image-left"));
        assert!(left_html.contains("flex-direction: row-reverse;"));
        assert!(right_html.contains("product-card--image-right"));
        assert!(right_html.contains("flex-direction: row;"));

        let normalized = left_html
            .replace("product-card--image-left", "product-card--image-right")
            .replace("row-reverse", "row");
        assert_eq!(normalized, right_html);
    }

    #[test]
    fn render_is_deterministic() {
        let attrs = [
            ("data-product-title", "Mug"),
            ("data-badge-text", "New"),
            ("data-bordered", "true"),
        ];
        let mut state = ComponentState::from_attributes(&attrs);
        let first = render_default(&state);
        state.refresh(&attrs);
        assert_eq!(first, render_default(&state));
    }

    #[test]
    fn bordered_modifier() {
        let state = ComponentState::from_attributes(&[("data-bordered", "true")]);
        assert!(render_default(&state).contains(r#"class="product-card product-card--image-left product-card--bordered""#));
    }

    #[test]
    fn title_tag_override() {
        let mut state = ComponentState::default();
        state.title_tag = TitleTag::P;
        assert!(render_default(&state).contains(
            r#"<p class="product-card__title" aria-label="Product title: Product title">Product title</p>"#
        ));
    }

    #[test]
    fn attribute_values_cannot_break_out() {
        let state = ComponentState::from_attributes(&[
            ("data-default-image-alt", r#"Mug" onerror="alert(1)"#),
            ("data-cta-product-variant-id", r#"1"><script>"#),
        ]);
        let html = render_default(&state);
        assert!(html.contains(r#"alt="Mug&quot; onerror=&quot;alert(1)""#));
        assert!(html.contains(r#"data-variant-id="1&quot;&gt;&lt;script&gt;""#));
    }

    #[test]
    fn cta_links_to_configured_cart() {
        let settings = CartSettings::default().with_cart_path("/checkout");
        let html = render(&ComponentState::default(), &settings);
        assert!(html.contains(r#"href="/checkout""#));
    }

    #[test]
    fn orientation_enum_default_matches_markup() {
        assert_eq!(ComponentState::default().orientation, Orientation::ImageLeft);
    }

    #[test]
    fn product_url_links_title_and_image() {
        let state = ComponentState::from_attributes(&[
            ("data-product-title", "Mug"),
            ("data-product-url", "/products/mug?variant=999&ref=card"),
        ]);
        let html = render_default(&state);
        assert!(html.contains(
            r#"<h2 class="product-card__title" aria-label="Product title: Mug"><a class="product-card__link" href="/products/mug?variant=999&amp;ref=card">Mug</a></h2>"#
        ));
        assert!(html.contains(
            r#"<a class="product-card__media-link" href="/products/mug?variant=999&amp;ref=card" tabindex="-1" aria-hidden="true"><slot name="image">"#
        ));
        // The CTA is not nested inside either link
        assert!(html.contains(r#"<a class="product-card__cta" href="/cart""#));
    }

    #[test]
    fn no_product_links_without_url() {
        let html = render_default(&ComponentState::default());
        assert!(!html.contains("product-card__link"));
        assert!(!html.contains("product-card__media-link"));
    }

    #[test]
    fn image_slots_wrap_fallback_image() {
        let html = render_default(&ComponentState::default());
        let image_slot = html.find(r#"<slot name="image"><img class="product-card__image""#).unwrap();
        let hover_slot = html.find(r#"<slot name="hover-image"></slot>"#).unwrap();
        assert!(image_slot < hover_slot);
    }

    #[test]
    fn title_label_is_escaped() {
        let state = ComponentState::from_attributes(&[("data-product-title", r#"12" Pan"#)]);
        assert!(render_default(&state).contains(r#"aria-label="Product title: 12&quot; Pan""#));
    }

    #[test]
    fn cta_is_a_plain_link() {
        let html = render_default(&ComponentState::default());
        assert!(!html.contains(r#"role="button""#));
        assert!(html.contains(r#"<a class="product-card__cta" href="/cart" data-action="add-to-cart""#));
    }

    #[test]
    fn escape_attr_handles_all_specials() {
        assert_eq!(escape_attr(r#"a&b<c>"d'"#), "a&amp;b&lt;c&gt;&quot;d&#39;");
    }
}
