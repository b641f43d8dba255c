//! The demo product family and its factory.
//!
//! | Product | Handle | Arguments | Strategy under [`ByShape`] |
//! |---------|--------|-----------|----------------------------|
//! | [`Unique`] | `Box<dyn UniqueProduct>` | `()` | allocate |
//! | [`Shared`] | `Arc<dyn SharedProduct>` | `()` | allocate |
//! | [`Raw`] | `NonNull<dyn RawProduct>` | `(bool, i32)` | allocate |
//! | [`IntValue`] | `i32` | `(i32,)` | passthrough |
//! | [`FloatValue`] | `f32` | `(f32,)` | passthrough |
//! | [`PrototypeA`] | `Result<Box<dyn PrototypeProduct<0>>, FactoryError>` | `()` | cloning |
//! | [`PrototypeB`] | `Result<Box<dyn PrototypeProduct<1>>, FactoryError>` | `()` | cloning |
//! | [`ExistingShared`] | `Arc<dyn ExistingSharedProduct>` | `()` | adapt |

use crate::domain::products::{
    ExistingSharedProduct, LegacyShared, PrototypeImpl, PrototypeProduct, RawImpl, RawProduct,
    SharedImpl, SharedProduct, UniqueImpl, UniqueProduct,
};
use crate::framework::ByShape;
use crate::{abstract_factory, abstract_product, tlist};

abstract_product! {
    pub struct Unique: dyn UniqueProduct;
    pub struct Shared: dyn SharedProduct => shared;
    pub struct Raw: dyn RawProduct => raw, (bool, i32);
    pub struct IntValue: value i32;
    pub struct FloatValue: value f32;
    pub struct PrototypeA: dyn PrototypeProduct<0> => prototype(clone_box);
    pub struct PrototypeB: dyn PrototypeProduct<1> => prototype(clone_box);
    /// [`LegacyShared`] exposed through shared ownership.
    pub struct ExistingShared: dyn ExistingSharedProduct => adapted;
}

abstract_factory! {
    /// Creates every product of the demo family.
    pub trait ProductFactory {
        Unique,
        Shared,
        Raw,
        IntValue,
        FloatValue,
        PrototypeA,
        PrototypeB,
        ExistingShared,
    }
}

/// Concrete types for [`ProductFactory`], positionally aligned with its products.
///
/// Value and prototype positions are ignored by their strategies; the value type and a
/// prototype implementation are listed to keep the alignment readable.
pub type DemoConcretes = tlist![
    UniqueImpl,
    SharedImpl,
    RawImpl,
    i32,
    f32,
    PrototypeImpl<0>,
    PrototypeImpl<1>,
    LegacyShared,
];

pub type DemoFactory = ProductFactoryConcrete<DemoConcretes, ByShape>;
