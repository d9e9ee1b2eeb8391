//! ShadowHost - CardHost backed by the element's shadow root

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, Event, EventTarget, ShadowRoot, Window};

use crate::card::render::CTA_ACTION_SELECTOR;
use crate::component::CardHost;

pub struct ShadowHost {
    window: Window,
    root: ShadowRoot,
}

impl ShadowHost {
    pub fn new(window: Window, root: ShadowRoot) -> Self {
        Self { window, root }
    }
}

/// Click listener on the shadow root, removed on drop
pub struct ClickListener {
    target: EventTarget,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for ClickListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove click listener: {err:?}");
        }
    }
}

/// True when the click landed on (or inside) the CTA
fn hits_cta(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(CTA_ACTION_SELECTOR).ok().flatten())
        .is_some()
}

impl CardHost for ShadowHost {
    type Listener = ClickListener;

    fn replace_content(&self, markup: &str) {
        self.root.set_inner_html(markup);
    }

    fn listen_for_activation(&self, on_activate: Rc<dyn Fn()>) -> ClickListener {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if hits_cta(&event) {
                event.prevent_default();
                on_activate();
            }
        });
        let target: EventTarget = self.root.clone().into();
        if let Err(err) =
            target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::error!("failed to attach click listener: {err:?}");
        }
        ClickListener { target, closure }
    }

    fn navigate(&self, path: &str) {
        if let Err(err) = self.window.location().set_href(path) {
            log::error!("navigation to {path} failed: {err:?}");
        }
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
