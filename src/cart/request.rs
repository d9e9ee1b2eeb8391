//! Cart-add request body

use serde::Serialize;

/// `{"id": "<variant>", "quantity": 1}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartAddRequest {
    /// Variant id, passed through untouched
    pub id: String,
    pub quantity: u32,
}

impl CartAddRequest {
    pub fn new(id: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_cart_payload() {
        let body = serde_json::to_value(CartAddRequest::new("999", 1)).unwrap();
        assert_eq!(body, serde_json::json!({ "id": "999", "quantity": 1 }));
    }

    #[test]
    fn empty_variant_is_still_sent() {
        let body = serde_json::to_string(&CartAddRequest::new("", 1)).unwrap();
        assert_eq!(body, r#"{"id":"","quantity":1}"#);
    }
}
