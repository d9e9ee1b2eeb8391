//! ProductCard - one live card: state, lifecycle hooks and the add-to-cart flow
//!
//! The browser specifics (shadow root, click listener, location, executor)
//! sit behind [`CardHost`] so the flow can run off the page.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::card::{AttributeSource, ComponentState, render};
use crate::cart::{CartController, CartOutcome, CartPhase, CartService};
use crate::settings::CartSettings;

/// Page-side services a card needs
pub trait CardHost {
    /// Dropping it detaches the listener
    type Listener;

    /// Replace the encapsulated content with `markup`
    fn replace_content(&self, markup: &str);

    /// Call `on_activate` whenever the CTA is activated. Default link
    /// navigation is suppressed by the host before the call.
    fn listen_for_activation(&self, on_activate: Rc<dyn Fn()>) -> Self::Listener;

    /// Send the page to `path`
    fn navigate(&self, path: &str);

    /// Run `task` on the event loop without blocking the caller
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

pub struct ProductCard<H: CardHost, S: CartService> {
    host: H,
    service: S,
    settings: CartSettings,
    state: RefCell<ComponentState>,
    controller: RefCell<CartController>,
    listener: RefCell<Option<H::Listener>>,
}

impl<H, S> ProductCard<H, S>
where
    H: CardHost + 'static,
    S: CartService + 'static,
{
    /// Construct from defaults overlaid with `source` and render once
    pub fn new(
        host: H,
        service: S,
        settings: CartSettings,
        source: &(impl AttributeSource + ?Sized),
    ) -> Rc<Self> {
        let card = Rc::new(Self {
            host,
            service,
            controller: RefCell::new(CartController::new(settings.clone())),
            settings,
            state: RefCell::new(ComponentState::from_attributes(source)),
            listener: RefCell::new(None),
        });
        card.rerender();
        card
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn state(&self) -> ComponentState {
        self.state.borrow().clone()
    }

    pub fn phase(&self) -> CartPhase {
        self.controller.borrow().phase()
    }

    #[cfg(test)]
    fn is_connected(&self) -> bool {
        self.listener.borrow().is_some()
    }

    /// Element inserted into the page
    pub fn connected(self: &Rc<Self>, source: &(impl AttributeSource + ?Sized)) {
        self.attribute_changed(source);

        let card = Rc::downgrade(self);
        let listener = self.host.listen_for_activation(Rc::new(move || {
            if let Some(card) = card.upgrade() {
                card.activate();
            }
        }));
        // A connect without a matching disconnect must not leave two listeners
        if self.listener.replace(Some(listener)).is_some() {
            log::debug!("replaced a stale activation listener");
        }
    }

    /// Element removed from the page
    pub fn disconnected(&self) {
        if self.listener.take().is_some() {
            log::debug!("detached activation listener");
        }
    }

    /// Host changed an observed attribute
    pub fn attribute_changed(&self, source: &(impl AttributeSource + ?Sized)) {
        self.state.borrow_mut().refresh(source);
        self.rerender();
    }

    /// CTA activated: run the add-to-cart flow in the background
    pub fn activate(self: &Rc<Self>) {
        let card = Rc::clone(self);
        self.host.spawn(Box::pin(async move {
            card.add_to_cart().await;
        }));
    }

    /// The whole add-to-cart flow for one activation
    pub async fn add_to_cart(&self) -> CartOutcome {
        let request = {
            let mut state = self.state.borrow_mut();
            self.controller.borrow_mut().begin(&mut state)
        };
        let Some(request) = request else {
            return CartOutcome::Ignored(self.phase());
        };
        self.rerender();

        let result = self.service.add(&request).await;

        let outcome = {
            let mut state = self.state.borrow_mut();
            self.controller.borrow_mut().complete(&mut state, result)
        };
        if let CartOutcome::Added { cart_path } = &outcome {
            self.host.navigate(cart_path);
        }
        self.rerender();
        outcome
    }

    fn rerender(&self) {
        let markup = render(&self.state.borrow(), &self.settings);
        self.host.replace_content(&markup);
    }
}
