//! # Factory Errors
//!
//! Unknown products, argument mismatches and malformed concrete declarations are all
//! compile errors. The only failure that can reach a running program is asking a
//! prototype product for an instance before its prototype slot was filled.

/// Errors that can occur when creating a product at run time.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FactoryError {
    #[error("Prototype not set for product {product}")]
    PrototypeUnset { product: &'static str },
}
