//! Demonstration product family, declared with the framework macros.

pub mod factory;
pub mod products;

pub use factory::*;
pub use products::*;
