//! Browser glue - registers `<product-card>` and wires each element to a
//! ProductCard
//!
//! Lifecycle:
//!   constructor           → attachShadow, CardHandle::new (reads attributes, renders)
//!   connectedCallback     → refresh, render, attach click listener
//!   attributeChanged      → refresh, render
//!   disconnectedCallback  → detach click listener

mod host;
mod registry;

pub use host::{ClickListener, ShadowHost};
pub use registry::BrowserRegistry;

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::TAG_NAME;
use crate::cart::HttpCartService;
use crate::component::ProductCard;
use crate::error::ElementError;
use crate::registry::{Registration, define_once};
use crate::settings::CartSettings;

thread_local! {
    static DEFINED: Cell<bool> = const { Cell::new(false) };
}

/// Route `log` output and panics to the browser console. Safe to call more
/// than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}

/// Register `<product-card>` with the page. Returns `true` when this call
/// performed the definition.
#[wasm_bindgen(js_name = defineProductCard)]
pub fn define() -> Result<bool, JsValue> {
    if DEFINED.with(Cell::get) {
        return Ok(false);
    }
    init_logging();

    let window = web_sys::window().ok_or_else(|| to_js(ElementError::NoWindow))?;
    let construct = Closure::<dyn Fn(HtmlElement) -> JsValue>::new(|element: HtmlElement| {
        match CardHandle::new(element) {
            Ok(handle) => JsValue::from(handle),
            Err(err) => {
                log::error!("could not set up <{TAG_NAME}>: {err}");
                JsValue::UNDEFINED
            }
        }
    });
    // The class outlives every call into it
    let construct: js_sys::Function = construct.into_js_value().unchecked_into();

    let registry = BrowserRegistry::new(window.custom_elements(), construct);
    let registration = define_once(&registry, TAG_NAME)
        .map_err(|err| to_js(ElementError::from(err)))?;
    DEFINED.with(|defined| defined.set(true));
    Ok(registration == Registration::Defined)
}

fn to_js(err: ElementError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Per-element state held by the JS class as `this.__card`
#[wasm_bindgen]
pub struct CardHandle {
    element: HtmlElement,
    card: Rc<ProductCard<ShadowHost, HttpCartService>>,
}

impl CardHandle {
    fn new(element: HtmlElement) -> Result<Self, ElementError> {
        let window = web_sys::window().ok_or(ElementError::NoWindow)?;
        let root = element.shadow_root().ok_or(ElementError::NoShadowRoot)?;
        let origin = window
            .location()
            .origin()
            .map_err(|err| ElementError::Origin(format!("{err:?}")))?;

        let settings = CartSettings::default();
        let service = HttpCartService::for_origin(&origin, &settings);
        let source: &Element = &element;
        let card = ProductCard::new(ShadowHost::new(window, root), service, settings, source);
        Ok(Self { element, card })
    }

    fn source(&self) -> &Element {
        &self.element
    }
}

#[wasm_bindgen]
impl CardHandle {
    pub fn connected(&self) {
        log::debug!("<{TAG_NAME}> connected");
        self.card.connected(self.source());
    }

    pub fn disconnected(&self) {
        log::debug!("<{TAG_NAME}> disconnected");
        self.card.disconnected();
    }

    #[wasm_bindgen(js_name = attributeChanged)]
    pub fn attribute_changed(&self) {
        self.card.attribute_changed(self.source());
    }
}
