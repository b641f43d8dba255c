//! Runtime environment for the demo binary.
//!
//! The framework itself performs no I/O and reads no configuration. The only runtime knob is
//! `RUST_LOG`, consumed by [`setup_tracing`].

pub mod tracing;

pub use tracing::*;
