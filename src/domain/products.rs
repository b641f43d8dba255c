//! Abstract product traits and their concrete implementations.
//!
//! One trait per ownership kind the demo factory exercises. The concrete types carry just
//! enough state for callers to observe how they were built.

use crate::framework::Build;

/// Exclusively owned product.
pub trait UniqueProduct: Send + Sync {
    fn describe(&self) -> &'static str;
}

/// Reference-counted product.
pub trait SharedProduct: Send + Sync {
    fn describe(&self) -> &'static str;
}

/// Caller-owned product, built from a flag and a value.
pub trait RawProduct: Send + Sync {
    fn flag(&self) -> bool;
    fn value(&self) -> i32;
}

/// Product family cloned from a registered prototype.
///
/// `N` only distinguishes otherwise identical families, so `PrototypeProduct<0>` and
/// `PrototypeProduct<1>` are unrelated abstract products.
pub trait PrototypeProduct<const N: usize>: Send + Sync {
    fn clone_box(&self) -> Box<dyn PrototypeProduct<N>>;
    fn label(&self) -> &str;
    fn relabel(&mut self, label: &str);

    fn variant(&self) -> usize {
        N
    }
}

/// Interface of a type that predates the factory.
pub trait ExistingSharedProduct: Send + Sync {
    fn describe(&self) -> &'static str;
    fn revision(&self) -> u32;
}

#[derive(Debug, Clone, Default)]
pub struct UniqueImpl;

impl UniqueProduct for UniqueImpl {
    fn describe(&self) -> &'static str {
        "unique"
    }
}

#[derive(Debug, Clone, Default)]
pub struct SharedImpl;

impl SharedProduct for SharedImpl {
    fn describe(&self) -> &'static str {
        "shared"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImpl {
    pub flag: bool,
    pub value: i32,
}

impl RawProduct for RawImpl {
    fn flag(&self) -> bool {
        self.flag
    }

    fn value(&self) -> i32 {
        self.value
    }
}

impl Build<(bool, i32)> for RawImpl {
    fn build((flag, value): (bool, i32)) -> Self {
        Self { flag, value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrototypeImpl<const N: usize> {
    label: String,
}

impl<const N: usize> PrototypeImpl<N> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl<const N: usize> Default for PrototypeImpl<N> {
    fn default() -> Self {
        Self::new(format!("prototype-{}", N))
    }
}

impl<const N: usize> PrototypeProduct<N> for PrototypeImpl<N> {
    fn clone_box(&self) -> Box<dyn PrototypeProduct<N>> {
        Box::new(self.clone())
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn relabel(&mut self, label: &str) {
        self.label = label.to_string();
    }
}

/// A legacy type. It is normally used by value and knows nothing about the factory.
#[derive(Debug, Clone)]
pub struct LegacyShared {
    pub revision: u32,
}

impl LegacyShared {
    pub const CURRENT_REVISION: u32 = 3;

    pub fn new() -> Self {
        Self {
            revision: Self::CURRENT_REVISION,
        }
    }
}

impl Default for LegacyShared {
    fn default() -> Self {
        Self::new()
    }
}

impl ExistingSharedProduct for LegacyShared {
    fn describe(&self) -> &'static str {
        "existing"
    }

    fn revision(&self) -> u32 {
        self.revision
    }
}
