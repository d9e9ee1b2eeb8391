//! Cart action controller - the add-to-cart state machine
//!
//! ```text
//!   Idle ──activate──▶ Submitting ──ok──▶ Succeeded (navigate, CTA usable)
//!    ▲                     │
//!    │                     └──err──▶ Failed (show_error, CTA usable)
//!    └──────activate (from Succeeded or Failed)─┘
//! ```
//!
//! Both outcomes clear `is_adding_to_cart`. Only activations during
//! Submitting are ignored: the CTA is rendered as a busy indicator then,
//! and as a working button in every other phase.

use std::fmt;

use super::request::CartAddRequest;
use crate::card::ComponentState;
use crate::error::CartError;
use crate::settings::CartSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CartPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl CartPhase {
    pub fn accepts_activation(&self) -> bool {
        !matches!(self, Self::Submitting)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for CartPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// How one activation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOutcome {
    /// Added; the host should navigate to the contained cart path
    Added { cart_path: String },
    Failed(CartError),
    /// Activation arrived while the phase did not accept one
    Ignored(CartPhase),
}

#[derive(Debug, Clone, Default)]
pub struct CartController {
    phase: CartPhase,
    settings: CartSettings,
}

impl CartController {
    pub fn new(settings: CartSettings) -> Self {
        Self {
            phase: CartPhase::Idle,
            settings,
        }
    }

    pub fn phase(&self) -> CartPhase {
        self.phase
    }

    pub fn settings(&self) -> &CartSettings {
        &self.settings
    }

    /// Any phase but Submitting → Submitting. Returns the request to send, or `None`
    /// when the activation has to be ignored.
    pub fn begin(&mut self, state: &mut ComponentState) -> Option<CartAddRequest> {
        if !self.phase.accepts_activation() {
            log::debug!("ignoring CTA activation while {}", self.phase);
            return None;
        }
        self.phase = CartPhase::Submitting;
        state.is_adding_to_cart = true;
        state.show_error = false;
        Some(CartAddRequest::new(
            state.cta_variant_id.clone(),
            self.settings.quantity,
        ))
    }

    /// Submitting → Succeeded | Failed, always clearing the busy flag
    pub fn complete(
        &mut self,
        state: &mut ComponentState,
        result: Result<(), CartError>,
    ) -> CartOutcome {
        state.is_adding_to_cart = false;
        match result {
            Ok(()) => {
                self.phase = CartPhase::Succeeded;
                log::info!("added variant {:?} to cart", state.cta_variant_id);
                CartOutcome::Added {
                    cart_path: self.settings.cart_path.clone(),
                }
            }
            Err(err) => {
                self.phase = CartPhase::Failed;
                state.show_error = true;
                if err.is_rejection() {
                    log::warn!("add to cart rejected for variant {:?}: {err}", state.cta_variant_id);
                } else {
                    log::error!("add to cart failed for variant {:?}: {err}", state.cta_variant_id);
                }
                CartOutcome::Failed(err)
            }
        }
    }
}
