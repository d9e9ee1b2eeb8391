//! BrowserRegistry - `window.customElements` behind ElementRegistry
//!
//! Subclassing HTMLElement has to happen in JS; the class below only
//! forwards its lifecycle callbacks to the `CardHandle` built by `construct`.

use wasm_bindgen::prelude::*;
use web_sys::CustomElementRegistry;

use crate::card::Attribute;
use crate::error::RegistryError;
use crate::registry::ElementRegistry;

#[wasm_bindgen(inline_js = r#"
export function defineCardElement(tag, observed, construct) {
    customElements.define(tag, class extends HTMLElement {
        static get observedAttributes() {
            return observed;
        }

        constructor() {
            super();
            this.attachShadow({ mode: "open" });
            this.__card = construct(this);
        }

        connectedCallback() {
            this.__card?.connected();
        }

        disconnectedCallback() {
            this.__card?.disconnected();
        }

        attributeChangedCallback(_name, oldValue, newValue) {
            if (oldValue !== newValue) {
                this.__card?.attributeChanged();
            }
        }
    });
}
"#)]
extern "C" {
    #[wasm_bindgen(catch, js_name = defineCardElement)]
    fn define_card_element(
        tag: &str,
        observed: &js_sys::Array,
        construct: &js_sys::Function,
    ) -> Result<(), JsValue>;
}

pub struct BrowserRegistry {
    registry: CustomElementRegistry,
    construct: js_sys::Function,
}

impl BrowserRegistry {
    /// `construct` receives the new element and returns its `CardHandle`
    pub fn new(registry: CustomElementRegistry, construct: js_sys::Function) -> Self {
        Self {
            registry,
            construct,
        }
    }
}

impl ElementRegistry for BrowserRegistry {
    fn is_defined(&self, tag: &str) -> bool {
        !self.registry.get(tag).is_undefined()
    }

    fn define(&self, tag: &str) -> Result<(), RegistryError> {
        let observed: js_sys::Array = Attribute::observed()
            .into_iter()
            .map(JsValue::from_str)
            .collect();
        define_card_element(tag, &observed, &self.construct).map_err(|err| {
            RegistryError::Define {
                tag: tag.to_string(),
                reason: format!("{err:?}"),
            }
        })
    }
}
