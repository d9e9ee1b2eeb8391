//! CartService - the seam between the card and the storefront's cart endpoint

use std::rc::Rc;

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use super::request::CartAddRequest;
use crate::error::CartError;
use crate::settings::CartSettings;

/// Adds one variant to the shopper's cart.
///
/// Futures are not `Send`: everything runs on the page's event loop.
#[async_trait(?Send)]
pub trait CartService {
    async fn add(&self, request: &CartAddRequest) -> Result<(), CartError>;
}

#[async_trait(?Send)]
impl<T: CartService + ?Sized> CartService for Rc<T> {
    async fn add(&self, request: &CartAddRequest) -> Result<(), CartError> {
        (**self).add(request).await
    }
}

/// POSTs JSON to the storefront. Uses Fetch on wasm32, hyper elsewhere.
#[derive(Debug, Clone)]
pub struct HttpCartService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCartService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint resolved against a page origin, e.g. `window.location.origin`
    pub fn for_origin(origin: &str, settings: &CartSettings) -> Self {
        Self::new(settings.add_url(origin))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl CartService for HttpCartService {
    async fn add(&self, request: &CartAddRequest) -> Result<(), CartError> {
        log::debug!("POST {} variant={:?}", self.endpoint, request.id);
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        // An unreadable body still reports the status
        let body = response.text().await.unwrap_or_default();
        Err(CartError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_from_origin() {
        let service = HttpCartService::for_origin("https://shop.example", &CartSettings::default());
        assert_eq!(service.endpoint(), "https://shop.example/cart/add.js");
    }
}
