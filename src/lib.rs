#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Factory Recipe
//!
//! > **A Recipe for Statically Verified Abstract Factories in Rust.**
//!
//! This crate demonstrates a pattern for building abstract factories over a *heterogeneous*
//! family of products. Every product has its own ownership discipline (boxed, reference
//! counted, raw, plain value, cloned from a prototype) and its own constructor arguments, yet
//! callers create all of them through one call:
//!
//! ```rust,ignore
//! let unique = factory.create::<Unique>(());
//! let raw = factory.create::<Raw>((true, 1));
//! let twelve = factory.create::<IntValue>((12,));
//! ```
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why Types Instead of Registries?
//!
//! A registry keyed by strings or `TypeId`s finds mistakes at run time. Here the product list,
//! the concrete list and every constructor signature are types:
//! - **Unknown products** do not compile.
//! - **Mismatched arguments** do not compile.
//! - **Mismatched product and concrete lists** do not compile.
//!
//! The only failure left for run time is creating a prototype product before its prototype
//! was registered, reported as [`FactoryError::PrototypeUnset`].
//!
//! ## 🚀 Core Concepts
//!
//! ### Descriptors: The Unit of Dispatch
//! A product is a zero-sized marker type implementing [`Product`]. It names the abstract type,
//! the returned handle, the argument tuple and the ownership kind. Two products with identical
//! shapes are still two different slots.
//!
//! ### Strategies: The Power of `Policy`
//! Each slot of a concrete factory holds a [`CreationStrategy`]. A [`Policy`] picks it at the
//! type level, so [`DefaultCreation`] allocates everything while [`ByShape`] passes values
//! through, clones prototypes and adapts existing types.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Build-time rejections carry `#[diagnostic::on_unimplemented]` messages ("unknown product",
//! "argument mismatch", ...). Run-time errors are a `thiserror` enum returned in the `Err` arm
//! of the prototype handle.
//!
//! ### 2. Concurrency Model
//! Creation takes `&self` and factories are `Send + Sync` whenever their products are. Prototype
//! replacement takes `&mut self`; wrap the factory in [`Synchronized`] to replace prototypes
//! while other threads create.
//!
//! ### 3. Observability
//! We use `tracing` with structured fields: factory assembly and prototype registration at
//! `debug`, premature prototype creation at `warn`. See [`runtime::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Type sequences, descriptors, creators, strategies and the concrete factory generator.
//! - **Key items**: [`abstract_product!`], [`abstract_factory!`], [`ConcreteFactory`], [`Factory`].
//!
//! ### 2. The Demonstration ([`domain`])
//! A product family covering every ownership kind, and the factory that creates it.
//! - **Key items**: [`ProductFactory`](domain::ProductFactory), [`DemoFactory`](domain::DemoFactory).
//!
//! ### 3. The Runtime ([`runtime`])
//! Logging setup for the demo binary.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with debug logs
//! RUST_LOG=debug cargo run
//! ```
//!
//! ```bash
//! cargo test
//! ```

pub mod domain;
pub mod framework;
pub mod runtime;

pub use framework::*;

#[doc(hidden)]
pub use paste;
