//! # Factory Manifests
//!
//! A [`FactoryManifest`] is the runtime description of an abstract factory: its name and the
//! resolved [`CreationContext`] of every declared product, in declaration order. It is built
//! from types alone, so it is available before any factory instance exists, and it is
//! `Serialize` for logs and tooling.

use crate::framework::product::{CreationContext, OwnershipKind, Product};
use crate::framework::typeseq::SeqKey;
use serde::Serialize;
use std::any::TypeId;
use std::collections::HashMap;

/// Ordered description of the products an abstract factory declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactoryManifest {
    pub factory: &'static str,
    pub contexts: Vec<CreationContext>,
}

/// The shape of a creation signature: returned handle type plus argument sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub output: TypeId,
    pub args: SeqKey,
}

impl FactoryManifest {
    pub fn new(factory: &'static str, contexts: Vec<CreationContext>) -> Self {
        Self { factory, contexts }
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Product names in declaration order.
    pub fn products(&self) -> Vec<&'static str> {
        self.contexts.iter().map(|ctx| ctx.product).collect()
    }

    /// The context of `P`, if the factory declares it.
    pub fn get<P: Product>(&self) -> Option<&CreationContext> {
        self.contexts.iter().find(|ctx| ctx.is::<P>())
    }

    pub fn contains<P: Product>(&self) -> bool {
        self.get::<P>().is_some()
    }

    /// Declared products of the given ownership kind.
    pub fn with_ownership(&self, ownership: OwnershipKind) -> Vec<&'static str> {
        self.contexts
            .iter()
            .filter(|ctx| ctx.ownership == ownership)
            .map(|ctx| ctx.product)
            .collect()
    }

    /// Groups products by signature.
    ///
    /// Products that share a signature still occupy separate creator slots; this map only
    /// makes the sharing visible.
    pub fn by_signature(&self) -> HashMap<Signature, Vec<&'static str>> {
        let mut groups: HashMap<Signature, Vec<&'static str>> = HashMap::new();
        for ctx in &self.contexts {
            let signature = Signature {
                output: ctx.output_id,
                args: ctx.args_key.clone(),
            };
            groups.entry(signature).or_default().push(ctx.product);
        }
        groups
    }
}
