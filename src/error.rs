//! Error types for the add-to-cart flow and element registration

use thiserror::Error;

/// Why an add-to-cart request did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The cart service answered with a non-success status. `body` holds
    /// the response text (the storefront's reason, e.g. a sold-out message).
    #[error("cart service rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The request never produced a usable response (network, CORS, body)
    #[error("cart request failed: {0}")]
    Transport(String),
}

impl CartError {
    /// Rejections are expected in normal operation (sold out, bad variant);
    /// transport failures are not.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl From<reqwest::Error> for CartError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Custom element registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("failed to define <{tag}>: {reason}")]
    Define { tag: String, reason: String },
}

/// Browser glue could not set a card up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementError {
    #[error("no window available")]
    NoWindow,

    #[error("element has no shadow root")]
    NoShadowRoot,

    #[error("could not read page origin: {0}")]
    Origin(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_is_distinguished_from_transport() {
        assert!(
            CartError::Rejected {
                status: 422,
                body: String::new()
            }
            .is_rejection()
        );
        assert!(!CartError::Transport("offline".into()).is_rejection());
    }

    #[test]
    fn messages_carry_detail() {
        let rejected = CartError::Rejected {
            status: 422,
            body: r#"{"description":"All 1 Mug are in your cart."}"#.into(),
        };
        assert_eq!(
            rejected.to_string(),
            r#"cart service rejected the request with status 422: {"description":"All 1 Mug are in your cart."}"#
        );
        assert_eq!(
            CartError::Transport("connection refused".into()).to_string(),
            "cart request failed: connection refused"
        );
    }
}
