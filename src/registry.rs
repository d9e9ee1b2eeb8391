//! Define-once registration against a custom element registry

use crate::error::RegistryError;

pub trait ElementRegistry {
    fn is_defined(&self, tag: &str) -> bool;
    fn define(&self, tag: &str) -> Result<(), RegistryError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Defined,
    AlreadyDefined,
}

/// Define `tag` unless something on the page got there first
pub fn define_once(
    registry: &impl ElementRegistry,
    tag: &str,
) -> Result<Registration, RegistryError> {
    if registry.is_defined(tag) {
        log::debug!("<{tag}> already defined, skipping");
        return Ok(Registration::AlreadyDefined);
    }
    registry.define(tag)?;
    log::info!("defined <{tag}>");
    Ok(Registration::Defined)
}
