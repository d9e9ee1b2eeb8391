use dioxus::prelude::*;

use crate::Route;
use crate::fixtures::{SampleProduct, sample_products};

/// `<product-card>` with a sample product's attributes
#[component]
pub fn ProductCardTag(product: SampleProduct) -> Element {
    let bordered = product.bordered_attr();
    let SampleProduct {
        title,
        content,
        price,
        image_url,
        image_alt,
        image_srcset,
        image_sizes,
        hover_image_url,
        product_url,
        variant_id,
        cta_text,
        cta_bg_color,
        badge_text,
        badge_bg_color,
        orientation,
        ..
    } = product;

    rsx! {
        // Custom element attributes have to be passed by name
        product-card {
            "data-product-title": title,
            "data-product-content": content,
            "data-product-price": price,
            "data-default-image-url": image_url,
            "data-default-image-alt": image_alt,
            "data-image-srcset": image_srcset,
            "data-image-sizes": image_sizes,
            "data-product-url": product_url,
            "data-cta-product-variant-id": variant_id,
            "data-cta-text": cta_text,
            "data-cta-bg-color": cta_bg_color,
            "data-badge-text": badge_text,
            "data-badge-bg-color": badge_bg_color,
            "data-orientation": orientation,
            "data-bordered": bordered,
            if let Some(src) = hover_image_url {
                img {
                    slot: "hover-image",
                    src: "{src}",
                    alt: "",
                    loading: "lazy",
                }
            }
        }
    }
}

#[component]
pub fn Gallery() -> Element {
    let products = sample_products();

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            div {
                style: "display: flex; align-items: baseline; justify-content: space-between; margin-bottom: 32px;",
                h1 {
                    style: "font-size: 32px; margin: 0; color: #111827;",
                    "Product cards"
                }
                Link {
                    to: Route::Playground {},
                    style: "color: #4f46e5; text-decoration: none; font-weight: 600;",
                    "Playground \u{2192}"
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 48px;",
                for product in products {
                    ProductCardTag { product }
                }
            }
        }
    }
}
