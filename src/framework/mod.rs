//! Statically verified heterogeneous abstract factories.
//!
//! This module provides the building blocks for declaring a family of abstract products,
//! an abstract factory that can create every one of them through a single call, and concrete
//! factories generated from a list of concrete types.
//!
//! # Main Components
//!
//! - [`typeseq`] - Ordered type sequences (constructor arguments, product and concrete lists)
//! - [`Product`] - Descriptor trait, declared with [`abstract_product!`](crate::abstract_product)
//! - [`Creator`] / [`Factory`] - Per-product creator interface and the uniform `create` call
//! - [`AbstractFactory`] - Declared with [`abstract_factory!`](crate::abstract_factory)
//! - [`CreationStrategy`] - `Allocate`, `Passthrough`, `Cloning`, `Adapt` and their [`Policy`]
//! - [`ConcreteFactory`] - The generated chain of creator layers
//! - [`Synchronized`] - Lock wrapper for replacing prototypes under concurrent creation
//! - [`FactoryError`] - The only run-time failure
//!
//! # Manifests
//!
//! See [`manifest`] for the serializable description of a declared factory.

pub mod abstract_factory;
pub mod concrete;
pub mod creator;
pub mod error;
pub mod manifest;
pub mod product;
pub mod strategy;
pub mod sync;
pub mod typeseq;

pub use abstract_factory::{AbstractFactory, ProductList};
pub use concrete::{ChainOf, ConcreteFactory, Generate, Here, Layer, PrototypeSlot, Root, Select, There};
pub use creator::{Creator, Factory, IntoArgs};
pub use error::FactoryError;
pub use manifest::{FactoryManifest, Signature};
pub use product::{kind, release_raw, Build, CreationContext, OwnershipKind, Product, Prototype, Wrap};
pub use strategy::{Adapt, Allocate, ByShape, Cloning, CreationStrategy, DefaultCreation, Passthrough, Policy};
pub use sync::Synchronized;
pub use typeseq::{Cons, Nil, SeqKey, TypeSeq};
