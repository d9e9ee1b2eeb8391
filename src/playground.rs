//! Playground - edit one card's attributes live
//!
//! Every input writes straight to an attribute, so each keystroke goes
//! through the element's attributeChangedCallback. Clearing a field leaves
//! the card on its last value.

use dioxus::prelude::*;

use crate::Route;

const LABEL_STYLE: &str = "display: flex; flex-direction: column; gap: 4px; font-size: 13px; color: #374151;";
const INPUT_STYLE: &str = "padding: 8px 10px; border: 1px solid #d1d5db; border-radius: 6px; font-size: 14px;";

#[component]
fn TextField(label: &'static str, value: Signal<String>) -> Element {
    let mut value = value;
    rsx! {
        label {
            style: LABEL_STYLE,
            "{label}"
            input {
                style: INPUT_STYLE,
                value: "{value}",
                oninput: move |e| value.set(e.value()),
            }
        }
    }
}

#[component]
pub fn Playground() -> Element {
    let title = use_signal(|| "Mug".to_string());
    let price = use_signal(|| "$12".to_string());
    let content = use_signal(|| "Holds 350 ml.".to_string());
    let variant = use_signal(|| "999".to_string());
    let badge = use_signal(String::new);
    let cta_text = use_signal(|| "Order Now".to_string());
    let cta_bg = use_signal(|| "#121212".to_string());
    let mut image_right = use_signal(|| false);
    let mut bordered = use_signal(|| true);

    let orientation = if image_right() { "image-right" } else { "image-left" };
    let bordered_attr = if bordered() { "true" } else { "false" };

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            div {
                style: "display: flex; align-items: baseline; justify-content: space-between; margin-bottom: 24px;",
                h1 {
                    style: "font-size: 32px; margin: 0; color: #111827;",
                    "Playground"
                }
                Link {
                    to: Route::Gallery {},
                    style: "color: #4f46e5; text-decoration: none; font-weight: 600;",
                    "\u{2190} Gallery"
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 16px; padding: 20px; background: #f9fafb; border-radius: 8px; margin-bottom: 32px;",
                TextField { label: "Title", value: title }
                TextField { label: "Price", value: price }
                TextField { label: "Description", value: content }
                TextField { label: "Variant id", value: variant }
                TextField { label: "Badge", value: badge }
                TextField { label: "Button label", value: cta_text }
                TextField { label: "Button color", value: cta_bg }
                label {
                    style: LABEL_STYLE,
                    "Image on the right"
                    input {
                        r#type: "checkbox",
                        checked: image_right(),
                        onchange: move |_| image_right.toggle(),
                    }
                }
                label {
                    style: LABEL_STYLE,
                    "Bordered"
                    input {
                        r#type: "checkbox",
                        checked: bordered(),
                        onchange: move |_| bordered.toggle(),
                    }
                }
            }

            product-card {
                "data-product-title": title(),
                "data-product-price": price(),
                "data-product-content": content(),
                "data-cta-product-variant-id": variant(),
                "data-badge-text": badge(),
                "data-cta-text": cta_text(),
                "data-cta-bg-color": cta_bg(),
                "data-orientation": orientation,
                "data-bordered": bordered_attr,
            }
        }
    }
}
